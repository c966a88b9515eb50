//! Future wrappers behind [`RailFutureExt`](super::RailFutureExt).
//!
//! Each wrapper polls its inner future and transforms the resolved
//! `Result` without touching the other branch, keeping the success and
//! failure rails separate across an `.await`.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

pin_project! {
    /// Future that applies a function to the `Ok` payload of its inner
    /// future's output.
    ///
    /// An `Err` resolution passes through unchanged and the function is
    /// never invoked.
    #[must_use = "futures do nothing unless polled"]
    pub struct MapValue<Fut, F> {
        #[pin]
        future: Fut,
        map: Option<F>,
    }
}

impl<Fut, F> MapValue<Fut, F> {
    #[inline]
    pub(crate) fn new(future: Fut, map: F) -> Self {
        Self { future, map: Some(map) }
    }
}

impl<Fut, F, T, U, E> Future for MapValue<Fut, F>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(T) -> U,
{
    type Output = Result<U, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|result| {
            result.map(|value| {
                let map = this
                    .map
                    .take()
                    .expect("MapValue polled after completion; this is a bug");
                map(value)
            })
        })
    }
}

impl<Fut, F, T, U, E> FusedFuture for MapValue<Fut, F>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    F: FnOnce(T) -> U,
{
    fn is_terminated(&self) -> bool {
        self.map.is_none() || self.future.is_terminated()
    }
}

pin_project! {
    /// Future that applies a function to the `Err` payload of its inner
    /// future's output.
    ///
    /// An `Ok` resolution passes through unchanged.
    #[must_use = "futures do nothing unless polled"]
    pub struct MapFault<Fut, F> {
        #[pin]
        future: Fut,
        map: Option<F>,
    }
}

impl<Fut, F> MapFault<Fut, F> {
    #[inline]
    pub(crate) fn new(future: Fut, map: F) -> Self {
        Self { future, map: Some(map) }
    }
}

impl<Fut, F, T, E, G> Future for MapFault<Fut, F>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(E) -> G,
{
    type Output = Result<T, G>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|result| {
            result.map_err(|error| {
                let map = this
                    .map
                    .take()
                    .expect("MapFault polled after completion; this is a bug");
                map(error)
            })
        })
    }
}

impl<Fut, F, T, E, G> FusedFuture for MapFault<Fut, F>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    F: FnOnce(E) -> G,
{
    fn is_terminated(&self) -> bool {
        self.map.is_none() || self.future.is_terminated()
    }
}

pin_project! {
    /// Future that chains a second `Result`-returning future off the `Ok`
    /// payload of the first.
    ///
    /// If the first future resolves to `Err`, that error is returned
    /// directly and the continuation is never constructed. Otherwise the
    /// second future's output becomes the overall output (flattened, not
    /// nested).
    #[must_use = "futures do nothing unless polled"]
    pub struct AndThenValue<Fut1, Fut2, F> {
        #[pin]
        first: Fut1,
        #[pin]
        second: Option<Fut2>,
        next: Option<F>,
    }
}

impl<Fut1, Fut2, F> AndThenValue<Fut1, Fut2, F> {
    #[inline]
    pub(crate) fn new(first: Fut1, next: F) -> Self {
        Self { first, second: None, next: Some(next) }
    }
}

impl<Fut1, Fut2, F, T, U, E> Future for AndThenValue<Fut1, Fut2, F>
where
    Fut1: Future<Output = Result<T, E>>,
    Fut2: Future<Output = Result<U, E>>,
    F: FnOnce(T) -> Fut2,
{
    type Output = Result<U, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        // `next` doubles as the stage marker: while present, the first
        // future has not yet completed successfully.
        if let Some(next) = this.next.take() {
            match this.first.poll(cx) {
                Poll::Pending => {
                    *this.next = Some(next);
                    return Poll::Pending;
                },
                Poll::Ready(Ok(value)) => this.second.set(Some(next(value))),
                Poll::Ready(Err(error)) => return Poll::Ready(Err(error)),
            }
        }

        let second = this
            .second
            .as_mut()
            .as_pin_mut()
            .expect("AndThenValue polled after completion; this is a bug");
        second.poll(cx)
    }
}

//! Concurrent settling of many task futures.

use core::future::{poll_fn, Future};
use core::pin::Pin;
use core::task::Poll;
use std::boxed::Box;

use crate::alloc_type::Vec;

/// Drives every future concurrently and waits for all of them to settle.
///
/// Returns each future's `Result` in input order. Unlike chaining, an early
/// failure does not stop the remaining work: every element runs to
/// completion and the caller inspects each outcome, typically by feeding
/// the vector to [`combine_results`](crate::combine_results) or
/// [`partition_results`](crate::partition_results).
///
/// Concurrency here means cooperatively interleaved waiting on the calling
/// task, not extra threads: the futures' suspension points overlap, their
/// compute does not.
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use fp_rail::task::{ready_err, ready_ok, settle_all};
///
/// let outcomes = settle_all([
///     ready_ok::<_, &str>(1),
///     ready_err("boom"),
///     ready_ok(3),
/// ])
/// .await;
///
/// assert_eq!(outcomes, vec![Ok(1), Err("boom"), Ok(3)]);
/// # }
/// ```
pub async fn settle_all<I, Fut, T, E>(futures: I) -> Vec<Result<T, E>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    let mut pending: Vec<Option<Pin<Box<Fut>>>> = futures
        .into_iter()
        .map(|future| Some(Box::pin(future)))
        .collect();
    let mut settled: Vec<Option<Result<T, E>>> = pending.iter().map(|_| None).collect();

    poll_fn(|cx| {
        let mut done = true;
        for (slot, outcome) in pending.iter_mut().zip(settled.iter_mut()) {
            if let Some(future) = slot {
                match future.as_mut().poll(cx) {
                    Poll::Ready(result) => {
                        *outcome = Some(result);
                        *slot = None;
                    },
                    Poll::Pending => done = false,
                }
            }
        }
        if done {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    })
    .await;

    settled.into_iter().flatten().collect()
}

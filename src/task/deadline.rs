//! Racing a task future against an injected timer.

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;

use pin_project_lite::pin_project;

use crate::maybe::Maybe;

/// Error representing an elapsed deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineError(pub Duration);

impl fmt::Display for DeadlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deadline elapsed after {:?}", self.0)
    }
}

impl std::error::Error for DeadlineError {}

/// Outcome of racing a task future against a deadline.
///
/// `Completed` carries the task's own `Result` (which may still be an
/// `Err` on the domain rail); `Elapsed` means the timer won the race.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineOutcome<T, E> {
    /// The task settled before the deadline.
    Completed(Result<T, E>),
    /// The deadline fired first.
    Elapsed(Duration),
}

impl<T, E> DeadlineOutcome<T, E> {
    /// Returns `true` if the task settled in time.
    #[must_use]
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Returns `true` if the deadline fired first.
    #[must_use]
    #[inline]
    pub fn is_elapsed(&self) -> bool {
        !self.is_completed()
    }

    /// Extracts the task's result, if it settled in time.
    #[inline]
    pub fn completed(self) -> Maybe<Result<T, E>> {
        match self {
            Self::Completed(result) => Maybe::Just(result),
            Self::Elapsed(_) => Maybe::Nothing,
        }
    }

    /// Folds the outcome back into a single `Result`, converting an elapsed
    /// deadline into the error type.
    #[inline]
    pub fn into_result(self) -> Result<T, E>
    where
        E: From<DeadlineError>,
    {
        match self {
            Self::Completed(result) => result,
            Self::Elapsed(duration) => Err(E::from(DeadlineError(duration))),
        }
    }
}

pin_project! {
    /// Future racing a task future against a timer future.
    ///
    /// Created by [`deadline`]. Whichever side resolves first decides the
    /// outcome; the loser is dropped when this future completes. There is
    /// no way to keep the losing task running, since cancellation in a
    /// cooperative model happens by dropping the future.
    #[must_use = "futures do nothing unless polled"]
    pub struct Deadline<Fut, Timer> {
        #[pin]
        future: Fut,
        #[pin]
        timer: Timer,
        duration: Duration,
    }
}

impl<Fut, Timer, T, E> Future for Deadline<Fut, Timer>
where
    Fut: Future<Output = Result<T, E>>,
    Timer: Future<Output = ()>,
{
    type Output = DeadlineOutcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        // The task is polled first so a result that is already available
        // wins over a simultaneously elapsed timer.
        if let Poll::Ready(result) = this.future.poll(cx) {
            return Poll::Ready(DeadlineOutcome::Completed(result));
        }

        match this.timer.poll(cx) {
            Poll::Ready(()) => Poll::Ready(DeadlineOutcome::Elapsed(*this.duration)),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Races `future` against `timer`, reporting `duration` on elapse.
///
/// The timer is an injected collaborator so tests and exotic runtimes can
/// supply their own clock; `duration` is only carried for reporting. For
/// the Tokio-backed convenience see
/// [`with_deadline`](crate::task::with_deadline).
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use core::future::pending;
/// use core::time::Duration;
/// use fp_rail::task::{deadline, ready_ok};
///
/// // An already-finished timer: the task only wins if it is also ready.
/// let outcome = deadline(
///     ready_ok::<_, &str>(5),
///     Duration::from_millis(10),
///     core::future::ready(()),
/// )
/// .await;
/// assert_eq!(outcome.completed().into_option(), Some(Ok(5)));
///
/// let stalled = deadline(
///     pending::<Result<i32, &str>>(),
///     Duration::from_millis(10),
///     core::future::ready(()),
/// )
/// .await;
/// assert!(stalled.is_elapsed());
/// # }
/// ```
#[inline]
pub fn deadline<Fut, Timer>(future: Fut, duration: Duration, timer: Timer) -> Deadline<Fut, Timer> {
    Deadline { future, timer, duration }
}

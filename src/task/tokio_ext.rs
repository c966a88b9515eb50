//! Tokio-backed conveniences for retry and deadlines.
//!
//! The core helpers in this module's siblings take the sleep/timer future
//! as a parameter to stay runtime-neutral. These wrappers fix that
//! parameter to Tokio's clock.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! fp-rail = { version = "0.1", features = ["async-tokio"] }
//! ```

use core::future::Future;
use core::time::Duration;

use crate::traits::Transient;

use super::deadline::{deadline, DeadlineOutcome};
use super::retry::{retry_with_policy, LinearBackoff, RetryPolicy};

/// Retries a task using `tokio::time::sleep` for the delays.
///
/// # Example
///
/// ```rust,ignore
/// use fp_rail::task::{retry_transient, LinearBackoff};
/// use core::time::Duration;
///
/// let result = retry_transient(
///     || fetch_data(),
///     LinearBackoff::new(Duration::from_millis(100), 3),
/// ).await;
/// ```
pub async fn retry_transient<F, Fut, T, E, P>(operation: F, policy: P) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Transient,
    P: RetryPolicy,
{
    retry_with_policy(operation, policy, tokio::time::sleep).await
}

/// Retries a task up to `max_attempts` times with linear backoff.
///
/// # Example
///
/// ```rust,ignore
/// use fp_rail::task::retry_transient_n;
/// use core::time::Duration;
///
/// let result = retry_transient_n(|| fetch_data(), 3, Duration::from_millis(50)).await;
/// ```
pub async fn retry_transient_n<F, Fut, T, E>(
    operation: F,
    max_attempts: u32,
    delay: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Transient,
{
    retry_transient(operation, LinearBackoff::new(delay, max_attempts)).await
}

/// Races `future` against Tokio's clock.
///
/// The future is dropped if the deadline fires first; see
/// [`Deadline`](super::Deadline) for the cancellation semantics.
///
/// # Example
///
/// ```rust,ignore
/// use fp_rail::task::{with_deadline, DeadlineOutcome};
/// use core::time::Duration;
///
/// match with_deadline(Duration::from_secs(5), fetch_data()).await {
///     DeadlineOutcome::Completed(result) => handle(result),
///     DeadlineOutcome::Elapsed(after) => eprintln!("timed out after {after:?}"),
/// }
/// ```
pub async fn with_deadline<Fut, T, E>(duration: Duration, future: Fut) -> DeadlineOutcome<T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    deadline(future, duration, tokio::time::sleep(duration)).await
}

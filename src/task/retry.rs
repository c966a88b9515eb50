//! Retry for transient faults, with runtime-neutral sleeping.
//!
//! A task (a zero-argument closure producing a `Result` future) can fail in
//! two ways: on the domain rail as an ordinary `Err`, or through a
//! transient fault that may clear on a fresh attempt. The retry helpers
//! here re-invoke the task only for the second kind, classified by the
//! [`Transient`](crate::traits::Transient) trait; `Ok` and permanent `Err`
//! resolutions return immediately.
//!
//! All functions are **runtime-neutral**: the actual sleeping is delegated
//! to a caller-supplied function, so any async runtime (or a mock clock in
//! tests) can drive the delays.

use core::future::Future;
use core::time::Duration;

use crate::traits::Transient;

/// Defines when and how long to wait between retry attempts.
pub trait RetryPolicy: Clone {
    /// Returns the delay before the next attempt, or `None` to stop.
    ///
    /// `attempts_made` is the number of invocations completed so far, so it
    /// is at least 1 when first consulted. Returning `None` once
    /// `attempts_made` reaches the policy's cap bounds the **total** number
    /// of invocations at that cap.
    fn next_delay(&mut self, attempts_made: u32) -> Option<Duration>;

    /// Resets the policy to its initial state.
    fn reset(&mut self);
}

/// Linearly growing delay: attempt `n` waits `delay × n`.
///
/// # Example
///
/// ```rust
/// use fp_rail::task::{LinearBackoff, RetryPolicy};
/// use core::time::Duration;
///
/// let mut policy = LinearBackoff::new(Duration::from_millis(100), 4);
///
/// assert_eq!(policy.next_delay(1), Some(Duration::from_millis(100)));
/// assert_eq!(policy.next_delay(2), Some(Duration::from_millis(200)));
/// assert_eq!(policy.next_delay(3), Some(Duration::from_millis(300)));
/// assert_eq!(policy.next_delay(4), None); // four invocations is the cap
/// ```
#[derive(Clone, Debug)]
pub struct LinearBackoff {
    /// Base delay, multiplied by the attempt number.
    pub delay: Duration,
    /// Maximum number of invocations, including the first.
    pub max_attempts: u32,
}

impl LinearBackoff {
    /// Creates a new linear backoff policy.
    #[inline]
    pub fn new(delay: Duration, max_attempts: u32) -> Self {
        Self { delay, max_attempts }
    }
}

impl RetryPolicy for LinearBackoff {
    fn next_delay(&mut self, attempts_made: u32) -> Option<Duration> {
        if attempts_made >= self.max_attempts {
            None
        } else {
            Some(self.delay * attempts_made)
        }
    }

    fn reset(&mut self) {}
}

/// Fixed delay between attempts.
#[derive(Clone, Debug)]
pub struct FixedDelay {
    /// Delay between attempts.
    pub delay: Duration,
    /// Maximum number of invocations, including the first.
    pub max_attempts: u32,
}

impl FixedDelay {
    /// Creates a new fixed delay policy.
    #[inline]
    pub fn new(delay: Duration, max_attempts: u32) -> Self {
        Self { delay, max_attempts }
    }
}

impl RetryPolicy for FixedDelay {
    fn next_delay(&mut self, attempts_made: u32) -> Option<Duration> {
        if attempts_made >= self.max_attempts {
            None
        } else {
            Some(self.delay)
        }
    }

    fn reset(&mut self) {}
}

/// Exponentially growing delay, capped at a maximum.
///
/// Attempt `n` waits `initial_delay × multiplier^(n-1)`, clamped to
/// `max_delay`.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    /// Delay before the second invocation.
    pub initial_delay: Duration,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
    /// Maximum number of invocations, including the first.
    pub max_attempts: u32,
    /// Growth factor applied per attempt.
    pub multiplier: f64,
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(30),
            max_attempts: 5,
            multiplier: 2.0,
        }
    }
}

impl ExponentialBackoff {
    /// Creates a policy with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial delay.
    #[inline]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the maximum delay.
    #[inline]
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Sets the invocation cap.
    #[inline]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the growth factor.
    #[inline]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

impl RetryPolicy for ExponentialBackoff {
    fn next_delay(&mut self, attempts_made: u32) -> Option<Duration> {
        if attempts_made >= self.max_attempts {
            return None;
        }
        let exponent = attempts_made.saturating_sub(1) as i32;
        let delay = Duration::from_secs_f64(
            self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent),
        );
        Some(delay.min(self.max_delay))
    }

    fn reset(&mut self) {}
}

/// Retries a task while it resolves to a transient error.
///
/// The task is invoked, awaited, and classified: an `Ok` or a permanent
/// `Err` is returned immediately; a transient `Err` triggers a policy
/// consultation and, if the policy grants a delay, a sleep and a fresh
/// invocation. When the policy declines, the last transient error is
/// surfaced unchanged.
///
/// # Arguments
///
/// * `operation` - A closure producing the future to (re-)run
/// * `policy` - The retry policy to consult after each failed invocation
/// * `sleep_fn` - A function returning a sleep future for a given duration
///
/// # Example
///
/// ```rust,ignore
/// use fp_rail::task::{retry_with_policy, LinearBackoff};
/// use core::time::Duration;
///
/// // With Tokio
/// let result = retry_with_policy(
///     || fetch_data(),
///     LinearBackoff::new(Duration::from_millis(100), 3),
///     tokio::time::sleep,
/// ).await;
/// ```
pub async fn retry_with_policy<F, Fut, T, E, P, S, SFut>(
    mut operation: F,
    mut policy: P,
    sleep_fn: S,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Transient,
    P: RetryPolicy,
    S: Fn(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_transient() => match policy.next_delay(attempts) {
                Some(delay) => sleep_fn(delay).await,
                None => return Err(error),
            },
            Err(error) => return Err(error),
        }
    }
}

/// Retries with a linear backoff, the common case.
///
/// Equivalent to [`retry_with_policy`] with
/// [`LinearBackoff::new(delay, max_attempts)`](LinearBackoff::new).
pub async fn retry_linear<F, Fut, T, E, S, SFut>(
    operation: F,
    max_attempts: u32,
    delay: Duration,
    sleep_fn: S,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Transient,
    S: Fn(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    retry_with_policy(operation, LinearBackoff::new(delay, max_attempts), sleep_fn).await
}

/// Result of a retry operation with metadata about the attempts made.
#[derive(Debug)]
pub struct RetryReport<T, E> {
    /// The final result.
    pub result: Result<T, E>,
    /// Total number of invocations.
    pub attempts: u32,
    /// Total time spent sleeping between invocations.
    pub total_wait: Duration,
}

/// Like [`retry_with_policy`], but reports attempt and wait totals.
pub async fn retry_with_report<F, Fut, T, E, P, S, SFut>(
    mut operation: F,
    mut policy: P,
    sleep_fn: S,
) -> RetryReport<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Transient,
    P: RetryPolicy,
    S: Fn(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    let mut attempts = 0u32;
    let mut total_wait = Duration::ZERO;

    loop {
        attempts += 1;
        match operation().await {
            Ok(value) => {
                return RetryReport { result: Ok(value), attempts, total_wait };
            },
            Err(error) if error.is_transient() => match policy.next_delay(attempts) {
                Some(delay) => {
                    total_wait += delay;
                    sleep_fn(delay).await;
                },
                None => {
                    return RetryReport { result: Err(error), attempts, total_wait };
                },
            },
            Err(error) => {
                return RetryReport { result: Err(error), attempts, total_wait };
            },
        }
    }
}

//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides rail combinators for futures, mirroring the sync surface of
//! `Result` across an `.await` point.

use core::future::{ready, Future, Ready};

use super::future::{AndThenValue, MapFault, MapValue};

/// A task future that resolves immediately to `Ok(value)`.
///
/// Together with a closure this forms the simplest re-runnable task:
/// `move || ready_ok::<_, Error>(value.clone())`.
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use fp_rail::task::ready_ok;
///
/// let value: Result<i32, &str> = ready_ok(42).await;
/// assert_eq!(value, Ok(42));
/// # }
/// ```
#[inline]
pub fn ready_ok<T, E>(value: T) -> Ready<Result<T, E>> {
    ready(Ok(value))
}

/// A task future that resolves immediately to `Err(error)`.
#[inline]
pub fn ready_err<T, E>(error: E) -> Ready<Result<T, E>> {
    ready(Err(error))
}

/// Rail combinators for futures that resolve to a `Result`.
///
/// These mirror `Result::map` / `Result::and_then` / `Result::map_err`
/// across an asynchronous boundary. Expected failures stay on the error
/// rail as `Err` values; the combinators never convert a panic or other
/// fault into a value.
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use fp_rail::task::{ready_ok, RailFutureExt};
///
/// let doubled = ready_ok::<_, &str>(21).map_value(|n| n * 2).await;
/// assert_eq!(doubled, Ok(42));
/// # }
/// ```
pub trait RailFutureExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Applies `map` to the `Ok` payload once the future resolves.
    ///
    /// An `Err` resolution passes through unchanged; `map` is not invoked.
    #[inline]
    fn map_value<U, F>(self, map: F) -> MapValue<Self, F>
    where
        F: FnOnce(T) -> U,
    {
        MapValue::new(self, map)
    }

    /// Applies `map` to the `Err` payload once the future resolves.
    ///
    /// An `Ok` resolution passes through unchanged.
    #[inline]
    fn map_fault<G, F>(self, map: F) -> MapFault<Self, F>
    where
        F: FnOnce(E) -> G,
    {
        MapFault::new(self, map)
    }

    /// Chains a `Result`-returning future off the `Ok` payload.
    ///
    /// If this future resolves to `Err`, the error is returned directly and
    /// `next` is never invoked. Otherwise `next(value)`'s future is awaited
    /// and its output returned as-is (flattened).
    ///
    /// # Examples
    ///
    /// ```
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// use fp_rail::task::{ready_err, ready_ok, RailFutureExt};
    ///
    /// let chained = ready_ok::<_, &str>(2)
    ///     .and_then_value(|n| ready_ok(n + 1))
    ///     .await;
    /// assert_eq!(chained, Ok(3));
    ///
    /// let failed = ready_err::<i32, _>("boom")
    ///     .and_then_value(|n| ready_ok(n + 1))
    ///     .await;
    /// assert_eq!(failed, Err("boom"));
    /// # }
    /// ```
    #[inline]
    fn and_then_value<U, Fut, F>(self, next: F) -> AndThenValue<Self, Fut, F>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        AndThenValue::new(self, next)
    }
}

impl<Fut, T, E> RailFutureExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}

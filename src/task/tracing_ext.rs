//! Tracing integration for the rails.
//!
//! Nothing in the core combinators logs implicitly; these helpers make the
//! error branch observable where the caller asks for it.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature (together with `async` for the future
//! wrapper):
//!
//! ```toml
//! [dependencies]
//! fp-rail = { version = "0.1", features = ["async", "tracing"] }
//! ```

use core::fmt::Display;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::validation::{Validation, ValidationError};

/// Extension trait for futures that logs error resolutions.
pub trait TraceFutureExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Emits a `tracing` warning when the future resolves to `Err`.
    ///
    /// The success path is untouched and emits nothing.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use fp_rail::task::TraceFutureExt;
    ///
    /// let user = fetch_user(id).trace_err("fetch_user").await?;
    /// ```
    fn trace_err(self, operation: &'static str) -> TraceErr<Self> {
        TraceErr { future: self, operation }
    }
}

impl<Fut, T, E> TraceFutureExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}

pin_project! {
    /// Future wrapper that logs the error branch.
    ///
    /// Created by [`TraceFutureExt::trace_err`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TraceErr<Fut> {
        #[pin]
        future: Fut,
        operation: &'static str,
    }
}

impl<Fut, T, E> Future for TraceErr<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.future.poll(cx) {
            Poll::Ready(Ok(value)) => Poll::Ready(Ok(value)),
            Poll::Ready(Err(error)) => {
                tracing::warn!(operation = *this.operation, error = %error, "rail resolved to error");
                Poll::Ready(Err(error))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Logs every accumulated field error of an invalid validation.
///
/// A valid value emits nothing. Useful right before a validation outcome is
/// discarded or folded into a response.
pub fn trace_invalid<A>(validation: &Validation<ValidationError, A>, operation: &'static str) {
    for error in validation.errors() {
        tracing::warn!(
            operation,
            field = %error.field,
            message = %error.message,
            "validation failed"
        );
    }
}

#[cfg(feature = "async-retry")]
pub use retry_traced::retry_traced;

#[cfg(feature = "async-retry")]
mod retry_traced {
    use core::future::Future;
    use core::time::Duration;

    use crate::task::retry::RetryPolicy;
    use crate::traits::Transient;

    /// Like [`retry_with_policy`](crate::task::retry_with_policy), but emits
    /// a `tracing` event per transient failure and on exhaustion.
    pub async fn retry_traced<F, Fut, T, E, P, S, SFut>(
        operation_name: &'static str,
        mut operation: F,
        mut policy: P,
        sleep_fn: S,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Transient + core::fmt::Display,
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
                    Some(delay) => {
                        tracing::debug!(
                            operation = operation_name,
                            attempts,
                            ?delay,
                            error = %error,
                            "transient failure, retrying"
                        );
                        sleep_fn(delay).await;
                    },
                    None => {
                        tracing::warn!(
                            operation = operation_name,
                            attempts,
                            error = %error,
                            "retry attempts exhausted"
                        );
                        return Err(error);
                    },
                },
                Err(error) => return Err(error),
            }
        }
    }
}

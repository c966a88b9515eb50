//! Async task rails.
//!
//! A *task* is a deferred computation: a zero-argument closure producing a
//! future that resolves to `Result<T, E>`. Invoking the closure twice
//! re-runs the work; nothing is memoized. Expected failures must arrive as
//! `Err` values inside the resolved `Result`: the boundary that wraps raw
//! I/O into a task is responsible for catching its library's failures and
//! converting them, so that the combinators here only ever see the two
//! rails.
//!
//! Single-shot combinators ([`RailFutureExt`]) attach to the future itself,
//! since Rust futures are already lazy. The task closure shape appears
//! where the work may run more than once ([`retry_with_policy`]) or where
//! many tasks run side by side ([`settle_all`]).
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! fp-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use fp_rail::task::{ready_ok, RailFutureExt};
//!
//! let shipped = ready_ok::<_, &str>(2)
//!     .map_value(|n| n * 10)
//!     .and_then_value(|n| ready_ok(n + 1))
//!     .await;
//! assert_eq!(shipped, Ok(21));
//! # }
//! ```

mod deadline;
mod future;
mod future_ext;
mod settle;

#[cfg(feature = "async-retry")]
mod retry;

#[cfg(feature = "async-validation")]
mod validation;

#[cfg(feature = "async-tokio")]
mod tokio_ext;

#[cfg(feature = "tracing")]
mod tracing_ext;

pub use deadline::{deadline, Deadline, DeadlineError, DeadlineOutcome};
pub use future::{AndThenValue, MapFault, MapValue};
pub use future_ext::{ready_err, ready_ok, RailFutureExt};
pub use settle::settle_all;

#[cfg(feature = "async-retry")]
pub use retry::{
    retry_linear, retry_with_policy, retry_with_report, ExponentialBackoff, FixedDelay,
    LinearBackoff, RetryPolicy, RetryReport,
};

#[cfg(feature = "async-validation")]
pub use validation::{validate_all_async, validate_chain_async};

#[cfg(feature = "async-tokio")]
pub use tokio_ext::{retry_transient, retry_transient_n, with_deadline};

#[cfg(feature = "tracing")]
pub use tracing_ext::{trace_invalid, TraceErr, TraceFutureExt};

#[cfg(all(feature = "tracing", feature = "async-retry"))]
pub use tracing_ext::retry_traced;

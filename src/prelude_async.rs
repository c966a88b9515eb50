//! Async prelude - the sync prelude plus the task rail, in one import.
//!
//! ```
//! use fp_rail::prelude_async::*;
//! ```

pub use crate::prelude::*;

pub use crate::task::{
    deadline, ready_err, ready_ok, settle_all, Deadline, DeadlineError, DeadlineOutcome,
    RailFutureExt,
};

#[cfg(feature = "async-retry")]
pub use crate::task::{
    retry_linear, retry_with_policy, retry_with_report, ExponentialBackoff, FixedDelay,
    LinearBackoff, RetryPolicy, RetryReport,
};

#[cfg(feature = "async-validation")]
pub use crate::task::{validate_all_async, validate_chain_async};

#[cfg(feature = "async-tokio")]
pub use crate::task::{retry_transient, retry_transient_n, with_deadline};

#[cfg(feature = "tracing")]
pub use crate::task::{trace_invalid, TraceErr, TraceFutureExt};

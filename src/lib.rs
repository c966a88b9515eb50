//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `fp_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining on the `Maybe` rail
//!
//! ```
//! use fp_rail::Maybe;
//!
//! fn parse_port(raw: &str) -> Maybe<u16> {
//!     Maybe::from_option(raw.parse().ok())
//! }
//!
//! let port = parse_port("8080").filter(|p| *p > 1024).unwrap_or(9000);
//! assert_eq!(port, 8080);
//!
//! let fallback = parse_port("not a port").unwrap_or(9000);
//! assert_eq!(fallback, 9000);
//! ```
//!
//! ## All-errors aggregation
//!
//! ```
//! use fp_rail::combine_results;
//!
//! let results = [Ok(1), Err("too small"), Ok(3), Err("not even")];
//! let combined = combine_results(results);
//!
//! let errors = combined.unwrap_err();
//! assert_eq!(errors.as_slice(), ["too small", "not even"]);
//! ```
//!
//! ## Validation Accumulation
//!
//! ```
//! use fp_rail::validation::Validation;
//!
//! let v1: Validation<&str, i32> = Validation::valid(10);
//! let v2: Validation<&str, i32> = Validation::invalid("error");
//! let combined: Validation<&str, Vec<i32>> = vec![v1, v2].into_iter().collect();
//!
//! assert!(combined.is_invalid());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod alloc_type;

/// Multi-result combination: all-errors and first-error policies
pub mod combine;
/// Conversions between `Maybe`, `Result`, and `Validation`
pub mod convert;
/// Macros for building validation failures
pub mod macros;
/// The `Maybe` presence/absence type and its combinators
pub mod maybe;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits bridging `Option` and `Result` onto the rails
pub mod traits;
/// Validation type and error accumulation
pub mod validation;

/// Async task rails (requires `async` feature)
#[cfg(feature = "async")]
pub mod task;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

// Re-export common items at the root, but encourage using the prelude
// modules for anything beyond quick experiments.
pub use combine::{combine_results, partition_results, sequence_results};
pub use convert::*;
pub use maybe::Maybe;
pub use traits::*;
pub use validation::{ErrorVec, Validation, ValidationError};

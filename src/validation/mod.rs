//! Error-accumulating validation.
//!
//! This module provides the [`Validation`] type, the accumulating counterpart
//! to `Result`. Where a `Result` chain stops at the first failure, a
//! `Validation` built from many independent checks reports every failure at
//! once, which is what form and record validation want.
//!
//! # Key Components
//!
//! - [`Validation`] - either a valid value or one-or-more accumulated errors
//! - [`ValidationError`] - a field/message pair for record validation
//! - `FromIterator` impls so `.collect()` performs all-errors aggregation
//!
//! # Examples
//!
//! ```
//! use fp_rail::validation::Validation;
//!
//! let checks = vec![
//!     Validation::<&str, i32>::valid(1),
//!     Validation::invalid("too short"),
//!     Validation::invalid("not a number"),
//! ];
//!
//! let combined: Validation<&str, Vec<i32>> = checks.into_iter().collect();
//! assert_eq!(combined.into_errors().unwrap().len(), 2);
//! ```

pub mod core;
mod collect;
mod error;

pub use self::core::Validation;
pub use self::error::ValidationError;

use smallvec::SmallVec;

/// SmallVec-backed collection used for accumulated errors.
///
/// Inline storage covers the common case of a handful of failing fields
/// without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

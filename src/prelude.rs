//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use fp_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Maybe`] (with its variants), [`Validation`],
//!   [`ValidationError`], [`ErrorVec`]
//! - **Functions**: [`combine_results`], [`sequence_results`],
//!   [`partition_results`]
//! - **Traits**: [`OptionRailExt`], [`ResultRailExt`], [`Transient`]
//! - **Macros**: [`invalid!`](crate::invalid)
//!
//! # Examples
//!
//! ```
//! use fp_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Maybe<&'static str> {
//!     match id {
//!         1 => Just("alice"),
//!         _ => Nothing,
//!     }
//! }
//!
//! assert_eq!(lookup(1).unwrap_or("unknown"), "alice");
//! assert_eq!(lookup(9).unwrap_or("unknown"), "unknown");
//! ```

// Macros
pub use crate::invalid;

// Core types
pub use crate::maybe::Maybe;
pub use crate::maybe::Maybe::{Just, Nothing};
pub use crate::validation::{ErrorVec, Validation, ValidationError};

// Combinators
pub use crate::combine::{combine_results, partition_results, sequence_results};

// Traits
pub use crate::traits::{OptionRailExt, ResultRailExt, Transient};

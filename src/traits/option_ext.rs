//! Extension trait moving `Option` values onto the rails.

use crate::alloc_type::String;
use crate::maybe::Maybe;
use crate::validation::{Validation, ValidationError};

/// Rail conversions for `std::option::Option`.
///
/// Lookups and parses in caller code usually start life as an `Option`;
/// these methods lift them onto the crate's carriers at the boundary.
///
/// # Examples
///
/// ```
/// use fp_rail::traits::OptionRailExt;
///
/// let age: Option<u8> = "x".parse().ok();
/// let checked = age.ok_or_invalid("age", "must be a number");
/// assert_eq!(checked.errors()[0].field, "age");
/// ```
pub trait OptionRailExt<T> {
    /// Converts to the crate's `Maybe` carrier.
    fn into_maybe(self) -> Maybe<T>;

    /// Converts to a `Validation`, reporting a named field error for `None`.
    fn ok_or_invalid(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Validation<ValidationError, T>;
}

impl<T> OptionRailExt<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from_option(self)
    }

    #[inline]
    fn ok_or_invalid(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Validation<ValidationError, T> {
        match self {
            Some(value) => Validation::Valid(value),
            None => Validation::invalid(ValidationError::new(field, message)),
        }
    }
}

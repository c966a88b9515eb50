//! Conversion helpers between `Maybe`, `Result`, and `Validation`.
//!
//! These adapters move values between the three carriers so each stage of a
//! pipeline can use the shape that fits it: `Maybe` for lookups, `Result`
//! for single-failure steps, `Validation` for accumulating checks.
//!
//! # Examples
//!
//! ```
//! use fp_rail::convert::*;
//! use fp_rail::Maybe;
//!
//! let result = maybe_to_result(Maybe::just(42), "missing");
//! assert_eq!(result, Ok(42));
//!
//! let validation = result_to_validation(Err::<i32, _>("failed"));
//! assert!(validation.is_invalid());
//! ```

use crate::maybe::Maybe;
use crate::validation::Validation;

/// Converts a `Maybe` to a `Result`, supplying `error` for absence.
///
/// # Examples
///
/// ```
/// use fp_rail::convert::maybe_to_result;
/// use fp_rail::Maybe;
///
/// assert_eq!(maybe_to_result(Maybe::just(1), "gone"), Ok(1));
/// assert_eq!(maybe_to_result(Maybe::<i32>::nothing(), "gone"), Err("gone"));
/// ```
#[inline]
pub fn maybe_to_result<T, E>(maybe: Maybe<T>, error: E) -> Result<T, E> {
    maybe.ok_or(error)
}

/// Converts a `Result` to a `Maybe`, discarding the error.
///
/// # Examples
///
/// ```
/// use fp_rail::convert::result_to_maybe;
/// use fp_rail::Maybe;
///
/// assert_eq!(result_to_maybe(Ok::<_, &str>(1)), Maybe::Just(1));
/// assert_eq!(result_to_maybe(Err::<i32, _>("oops")), Maybe::Nothing);
/// ```
#[inline]
pub fn result_to_maybe<T, E>(result: Result<T, E>) -> Maybe<T> {
    match result {
        Ok(value) => Maybe::Just(value),
        Err(_) => Maybe::Nothing,
    }
}

/// Converts a `Result` to a `Validation` with a singleton error list.
///
/// # Examples
///
/// ```
/// use fp_rail::convert::result_to_validation;
///
/// let validation = result_to_validation(Err::<i32, _>("failed"));
/// assert_eq!(validation.errors(), ["failed"]);
/// ```
#[inline]
pub fn result_to_validation<T, E>(result: Result<T, E>) -> Validation<E, T> {
    Validation::from_result(result)
}

/// Converts a `Validation` to a `Result`, keeping only the first error.
///
/// Accumulation is lost: callers that need every error should use
/// [`Validation::to_result`] instead, which keeps the whole list.
///
/// # Panics
///
/// Panics if the `Validation::Invalid` variant contains no errors, which no
/// constructor in this crate produces.
///
/// # Examples
///
/// ```
/// use fp_rail::convert::validation_to_result;
/// use fp_rail::validation::Validation;
///
/// let invalid = Validation::<&str, i32>::invalid_all(["first", "second"]);
/// assert_eq!(validation_to_result(invalid), Err("first"));
/// ```
#[inline]
pub fn validation_to_result<T, E>(validation: Validation<E, T>) -> Result<T, E> {
    match validation {
        Validation::Valid(value) => Ok(value),
        Validation::Invalid(errors) => {
            let error = errors
                .into_iter()
                .next()
                .expect("Validation::Invalid must contain at least one error");
            Err(error)
        },
    }
}

/// Converts a `Maybe` to a `Validation`, supplying `error` for absence.
#[inline]
pub fn maybe_to_validation<T, E>(maybe: Maybe<T>, error: E) -> Validation<E, T> {
    match maybe {
        Maybe::Just(value) => Validation::Valid(value),
        Maybe::Nothing => Validation::invalid(error),
    }
}

/// Converts a `Validation` to a `Maybe`, discarding any errors.
#[inline]
pub fn validation_to_maybe<T, E>(validation: Validation<E, T>) -> Maybe<T> {
    Maybe::from_option(validation.into_value())
}

//! Extension trait moving `Result` values onto the other rails.

use crate::maybe::Maybe;
use crate::validation::Validation;

/// Rail conversions for `std::result::Result`.
///
/// `Result` already carries the short-circuiting combinators (`map`,
/// `and_then`, `map_err`); this trait adds the hops onto the `Maybe` and
/// `Validation` carriers without going through a free function.
///
/// # Examples
///
/// ```
/// use fp_rail::traits::ResultRailExt;
/// use fp_rail::Maybe;
///
/// let looked_up: Result<i32, &str> = Ok(7);
/// assert_eq!(looked_up.into_maybe(), Maybe::Just(7));
///
/// let failed: Result<i32, &str> = Err("nope");
/// assert!(failed.into_validation().is_invalid());
/// ```
pub trait ResultRailExt<T, E> {
    /// Converts to a `Maybe` over the success value, discarding the error.
    fn into_maybe(self) -> Maybe<T>;

    /// Converts to a `Maybe` over the error value, discarding the success.
    fn err_into_maybe(self) -> Maybe<E>;

    /// Converts to a `Validation` with a singleton error list on failure.
    fn into_validation(self) -> Validation<E, T>;
}

impl<T, E> ResultRailExt<T, E> for Result<T, E> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Ok(value) => Maybe::Just(value),
            Err(_) => Maybe::Nothing,
        }
    }

    #[inline]
    fn err_into_maybe(self) -> Maybe<E> {
        match self {
            Ok(_) => Maybe::Nothing,
            Err(error) => Maybe::Just(error),
        }
    }

    #[inline]
    fn into_validation(self) -> Validation<E, T> {
        Validation::from_result(self)
    }
}

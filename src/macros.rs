//! Ergonomic macros for building validation failures.

/// Builds an invalid [`Validation`](crate::validation::Validation) carrying a
/// single formatted [`ValidationError`](crate::validation::ValidationError).
///
/// The first argument names the field; the rest are `format!` arguments for
/// the message.
///
/// # Examples
///
/// ```
/// use fp_rail::invalid;
/// use fp_rail::validation::{Validation, ValidationError};
///
/// fn check_len(name: &str, min: usize) -> Validation<ValidationError, ()> {
///     if name.len() >= min {
///         Validation::valid(())
///     } else {
///         invalid!("username", "must be at least {min} characters")
///     }
/// }
///
/// let failed = check_len("ab", 3);
/// assert_eq!(failed.errors()[0].field, "username");
/// ```
#[macro_export]
macro_rules! invalid {
    ($field:expr, $($arg:tt)*) => {
        $crate::validation::Validation::invalid($crate::validation::ValidationError::new(
            $field,
            format!($($arg)*),
        ))
    };
}

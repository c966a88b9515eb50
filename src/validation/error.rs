use crate::alloc_type::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single field-level validation failure.
///
/// Carried as the error type of record validation: each failing check
/// contributes one `ValidationError` naming the field it examined and what
/// was wrong with it.
///
/// # Examples
///
/// ```
/// use fp_rail::validation::ValidationError;
///
/// let error = ValidationError::new("email", "must contain '@'");
/// assert_eq!(error.to_string(), "email: must contain '@'");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct ValidationError {
    /// Name of the field that failed validation.
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error for `field`.
    #[inline]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

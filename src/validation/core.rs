use crate::validation::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Applicative-style validation that accumulates many errors instead of
/// failing fast.
///
/// `Validation<E, A>` represents a computation that either succeeded with a
/// value of type `A` or failed with one or more errors of type `E`. Combining
/// two validations (via [`zip`](Validation::zip) or by collecting an
/// iterator) keeps **every** error from both sides, making it the right shape
/// for form validation and other places where reporting only the first
/// problem would hide the rest.
///
/// Note that [`and_then`](Validation::and_then) is still fail-fast: a step
/// that depends on the previous value cannot run once that value is gone.
/// Accumulation happens across *independent* checks, not across dependent
/// ones.
///
/// # Type Parameters
///
/// * `E` - The error type
/// * `A` - The success value type
///
/// # Examples
///
/// ```
/// use fp_rail::validation::Validation;
///
/// let valid = Validation::<&str, i32>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<&str, i32>::invalid("error");
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Validation<E, A> {
    /// A successful value.
    Valid(A),
    /// One or more accumulated errors.
    Invalid(ErrorVec<E>),
}

impl<E, A> Validation<E, A> {
    /// Creates a valid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid("missing field");
    /// assert!(v.is_invalid());
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Creates an invalid value from an iterator of errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_all(["missing", "malformed"]);
    /// assert_eq!(v.errors().len(), 2);
    /// ```
    #[inline]
    pub fn invalid_all<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Invalid(errors.into_iter().collect())
    }

    /// Returns `true` if the validation holds a value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if the validation holds errors.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the success value, if any.
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Borrows the accumulated errors; empty for a valid value.
    #[inline]
    pub fn errors(&self) -> &[E] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Maps the valid value using the provided function.
    ///
    /// An invalid validation passes its errors through unchanged without
    /// invoking `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(21);
    /// assert_eq!(v.map(|x| x * 2).into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Chains a computation that may produce further validation errors.
    ///
    /// Behaves like [`Result::and_then`]: `f` runs only when the current
    /// validation is valid, and an invalid state propagates as-is. Use
    /// [`zip`](Validation::zip) when the two checks are independent and both
    /// sets of errors should be kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp_rail::validation::Validation;
    ///
    /// fn parse_even(input: i32) -> Validation<&'static str, i32> {
    ///     if input % 2 == 0 {
    ///         Validation::valid(input)
    ///     } else {
    ///         Validation::invalid("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Validation::valid(4).and_then(parse_even).into_value(), Some(4));
    /// assert!(Validation::valid(3).and_then(parse_even).is_invalid());
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Calls `op` on the errors if invalid, otherwise keeps the valid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// let recovered = v.or_else(|_errors| Validation::valid(0));
    /// assert_eq!(recovered.into_value(), Some(0));
    /// ```
    #[inline]
    pub fn or_else<F>(self, op: F) -> Validation<E, A>
    where
        F: FnOnce(ErrorVec<E>) -> Validation<E, A>,
    {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(errors) => op(errors),
        }
    }

    /// Combines two validations into a tuple, accumulating all errors.
    ///
    /// If both sides are valid, returns the pair of values. If either side
    /// is invalid, the result carries every error from both sides in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp_rail::validation::Validation;
    ///
    /// let both = Validation::<&str, _>::valid(1).zip(Validation::valid("a"));
    /// assert_eq!(both.into_value(), Some((1, "a")));
    ///
    /// let neither = Validation::<&str, i32>::invalid("left")
    ///     .zip(Validation::<&str, i32>::invalid("right"));
    /// assert_eq!(neither.errors().len(), 2);
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Self::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Self::Invalid(errors), Validation::Valid(_)) => Validation::Invalid(errors),
            (Self::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
            (Self::Invalid(mut left), Validation::Invalid(right)) => {
                left.extend(right);
                Validation::Invalid(left)
            },
        }
    }

    /// Combines two validations with a function, accumulating all errors.
    ///
    /// Like [`zip`](Validation::zip), but applies `f` instead of building a
    /// tuple when both sides are valid.
    #[inline]
    pub fn zip_with<B, C, F>(self, other: Validation<E, B>, f: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Maps each error while preserving the success branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp_rail::validation::Validation;
    ///
    /// let v: Validation<&str, i32> = Validation::invalid_all(["a", "b"]);
    /// let mapped = v.map_errors(|e| format!("field {e}"));
    /// assert_eq!(mapped.errors().len(), 2);
    /// ```
    #[inline]
    pub fn map_errors<F, G>(self, f: F) -> Validation<G, A>
    where
        F: FnMut(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.into_iter().map(f).collect()),
        }
    }

    /// Converts into a `Result` whose error side carries every error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.to_result(), Ok(42));
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<A, ErrorVec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Wraps a plain `Result`, turning the error side into a singleton list.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp_rail::validation::Validation;
    ///
    /// let v = Validation::from_result(Err::<i32, _>("boom"));
    /// assert_eq!(v.errors(), ["boom"]);
    /// ```
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// Extracts the value, if valid.
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Extracts the error list, if any.
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }
}

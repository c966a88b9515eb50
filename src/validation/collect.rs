//! Collection impls: `.collect()` as all-errors aggregation.

use crate::validation::{ErrorVec, Validation};

/// Collecting an iterator of `Result`s evaluates every element, gathering
/// all errors; the values are kept only when no element failed.
///
/// ```
/// use fp_rail::validation::Validation;
///
/// let inputs = vec![Ok(1), Err("err1"), Err("err2")];
/// let collected: Validation<&str, Vec<i32>> = inputs.into_iter().collect();
///
/// assert!(collected.is_invalid());
/// assert_eq!(collected.errors().len(), 2);
/// ```
impl<A, E, C> FromIterator<Result<A, E>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        let mut errors = ErrorVec::new();
        let values: C = iter
            .into_iter()
            .filter_map(|result| match result {
                Ok(value) => Some(value),
                Err(error) => {
                    errors.push(error);
                    None
                },
            })
            .collect();

        if errors.is_empty() {
            Validation::Valid(values)
        } else {
            Validation::Invalid(errors)
        }
    }
}

/// Collecting an iterator of `Validation`s keeps every error from every
/// invalid element.
///
/// ```
/// use fp_rail::validation::Validation;
///
/// let items = vec![
///     Validation::valid(10),
///     Validation::invalid("bad"),
///     Validation::invalid_all(["worse", "worst"]),
/// ];
///
/// let collected: Validation<&str, Vec<i32>> = items.into_iter().collect();
/// assert_eq!(collected.errors().len(), 3);
/// ```
impl<A, E, C> FromIterator<Validation<E, A>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Validation<E, A>>>(iter: I) -> Self {
        let mut errors = ErrorVec::new();
        let values: C = iter
            .into_iter()
            .filter_map(|validation| match validation {
                Validation::Valid(value) => Some(value),
                Validation::Invalid(errs) => {
                    errors.extend(errs);
                    None
                },
            })
            .collect();

        if errors.is_empty() {
            Validation::Valid(values)
        } else {
            Validation::Invalid(errors)
        }
    }
}

impl<E, A> IntoIterator for Validation<E, A> {
    type Item = A;
    type IntoIter = core::option::IntoIter<A>;

    /// Iterates over the success value (zero or one items).
    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, E, A> IntoIterator for &'a Validation<E, A> {
    type Item = &'a A;
    type IntoIter = core::option::IntoIter<&'a A>;

    fn into_iter(self) -> Self::IntoIter {
        self.value().into_iter()
    }
}

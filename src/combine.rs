//! Multi-result combination over `std::result::Result`.
//!
//! The standard `Result` already covers the single-value rail: `map`,
//! `and_then`, and `map_err` give short-circuiting transformation with the
//! error value passed through untouched. What it does not offer is a policy
//! for combining *many* results, and there are two useful, genuinely
//! different policies:
//!
//! - [`combine_results`] evaluates every input and reports **all** errors.
//! - [`sequence_results`] stops at the **first** error and returns it.
//!
//! The two are not interchangeable: feeding the same inputs to each can
//! produce different error payloads. Pick by intent: form-style validation
//! wants `combine_results`, a dependent pipeline wants `sequence_results`.
//!
//! # Examples
//!
//! ```
//! use fp_rail::{combine_results, sequence_results};
//!
//! let inputs = [Ok(1), Err("a"), Ok(2), Err("b")];
//!
//! let all = combine_results(inputs.clone());
//! assert_eq!(all.unwrap_err().as_slice(), ["a", "b"]);
//!
//! let first = sequence_results(inputs);
//! assert_eq!(first, Err("a"));
//! ```

use crate::alloc_type::Vec;
use crate::validation::ErrorVec;

/// Evaluates every input result and collects all errors.
///
/// Partitions the inputs into successes and failures. If any input failed,
/// returns `Err` with every error in input order; otherwise returns `Ok`
/// with every value in input order. Unlike chaining with
/// [`Result::and_then`], nothing is skipped: an error early in the sequence
/// does not hide errors later in it.
///
/// # Arguments
///
/// * `results` - Any iterable of `Result<T, E>`
///
/// # Examples
///
/// ```
/// use fp_rail::combine_results;
///
/// let ok = combine_results([Ok::<_, &str>(1), Ok(2), Ok(3)]);
/// assert_eq!(ok.unwrap(), vec![1, 2, 3]);
///
/// let err = combine_results([Ok(1), Err("a"), Ok(2), Err("b")]);
/// assert_eq!(err.unwrap_err().as_slice(), ["a", "b"]);
/// ```
pub fn combine_results<T, E, I>(results: I) -> Result<Vec<T>, ErrorVec<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let iter = results.into_iter();
    let (lower, upper) = iter.size_hint();

    let mut values = Vec::with_capacity(upper.unwrap_or(lower));
    let mut errors = ErrorVec::new();

    for result in iter {
        match result {
            // Values collected before the first error are dropped with it.
            Ok(value) => {
                if errors.is_empty() {
                    values.push(value);
                }
            },
            Err(error) => errors.push(error),
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Collects values until the first error, which is returned unchanged.
///
/// This is the fail-fast counterpart to [`combine_results`]: inputs after
/// the first `Err` are not consumed, so a lazy iterator is never driven past
/// the failure point.
///
/// # Examples
///
/// ```
/// use fp_rail::sequence_results;
///
/// let values = sequence_results([Ok::<_, &str>(1), Ok(2)]);
/// assert_eq!(values, Ok(vec![1, 2]));
///
/// let failed = sequence_results([Ok(1), Err("first"), Err("second")]);
/// assert_eq!(failed, Err("first"));
/// ```
pub fn sequence_results<T, E, I>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let iter = results.into_iter();
    let (lower, upper) = iter.size_hint();

    let mut values = Vec::with_capacity(upper.unwrap_or(lower));
    for result in iter {
        values.push(result?);
    }
    Ok(values)
}

/// Splits results into their success and failure payloads.
///
/// Both output vectors preserve input order. Useful after settle-style
/// operations where every element must be inspected regardless of outcome.
///
/// # Examples
///
/// ```
/// use fp_rail::partition_results;
///
/// let (values, errors) = partition_results([Ok(1), Err("a"), Ok(2)]);
/// assert_eq!(values, vec![1, 2]);
/// assert_eq!(errors, vec!["a"]);
/// ```
pub fn partition_results<T, E, I>(results: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }

    (values, errors)
}

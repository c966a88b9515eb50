//! Async validation utilities.
//!
//! Mirrors the sync [`Validation`](crate::validation::Validation) collection
//! behavior for checks that have to await something (uniqueness lookups,
//! remote policy checks) before they can pass judgement.

use core::future::Future;

use crate::alloc_type::Vec;
use crate::validation::Validation;

/// Runs every async validation and collects all errors.
///
/// The futures are awaited **sequentially** to stay runtime-neutral; the
/// point is the all-errors outcome, not overlap. When the checks are
/// independent and overlap matters, run them through
/// [`settle_all`](super::settle_all) and collect the results instead.
///
/// # Example
///
/// ```rust,ignore
/// use fp_rail::prelude_async::*;
///
/// async fn validate_signup(form: &SignupForm) -> Validation<ValidationError, Vec<()>> {
///     validate_all_async([
///         check_username_free(&form.username),
///         check_email_deliverable(&form.email),
///     ])
///     .await
/// }
/// ```
pub async fn validate_all_async<T, E, Fut, I>(validations: I) -> Validation<E, Vec<T>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Validation<E, T>>,
{
    let iter = validations.into_iter();
    let (lower, upper) = iter.size_hint();

    let mut values = Vec::with_capacity(upper.unwrap_or(lower));
    let mut errors: Vec<E> = Vec::new();

    for future in iter {
        match future.await {
            Validation::Valid(value) => {
                if errors.is_empty() {
                    values.push(value);
                }
            },
            Validation::Invalid(errs) => errors.extend(errs),
        }
    }

    if errors.is_empty() {
        Validation::Valid(values)
    } else {
        Validation::invalid_all(errors)
    }
}

/// Threads a value through dependent async validators, stopping at the
/// first invalid step.
///
/// Each validator receives the previous step's output, so accumulation is
/// not possible here; this is the async counterpart of chaining with
/// [`Validation::and_then`].
pub async fn validate_chain_async<T, E, F, Fut>(
    initial: T,
    validators: impl IntoIterator<Item = F>,
) -> Validation<E, T>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Validation<E, T>>,
{
    let mut current = initial;

    for validator in validators {
        match validator(current).await {
            Validation::Valid(value) => current = value,
            invalid => return invalid,
        }
    }

    Validation::Valid(current)
}

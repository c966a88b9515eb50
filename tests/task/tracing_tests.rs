//! Tests for the tracing integration.
//!
//! These only assert rail behavior; event emission is observable with a
//! subscriber installed but the combinators must be transparent either way.

use fp_rail::task::{ready_err, ready_ok, trace_invalid, TraceFutureExt};
use fp_rail::validation::{Validation, ValidationError};

#[tokio::test]
async fn trace_err_passes_the_success_branch_through() {
    let result = ready_ok::<_, &str>(5).trace_err("lookup").await;
    assert_eq!(result, Ok(5));
}

#[tokio::test]
async fn trace_err_passes_the_error_branch_through() {
    let result = ready_err::<i32, &str>("boom").trace_err("lookup").await;
    assert_eq!(result, Err("boom"));
}

#[test]
fn trace_invalid_accepts_both_variants() {
    let valid = Validation::<ValidationError, i32>::valid(1);
    trace_invalid(&valid, "signup");

    let invalid = Validation::<ValidationError, i32>::invalid(ValidationError::new(
        "email",
        "must contain '@'",
    ));
    trace_invalid(&invalid, "signup");
}

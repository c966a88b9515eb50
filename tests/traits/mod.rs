use fp_rail::traits::{OptionRailExt, ResultRailExt, Transient};
use fp_rail::Maybe;

#[derive(Debug)]
enum ProbeError {
    Flaky,
    BadRequest,
}

impl Transient for ProbeError {
    fn is_transient(&self) -> bool {
        matches!(self, ProbeError::Flaky)
    }
}

#[test]
fn result_rail_ext_hops_between_carriers() {
    let ok: Result<i32, &str> = Ok(7);
    assert_eq!(ok.into_maybe(), Maybe::Just(7));

    let err: Result<i32, &str> = Err("nope");
    assert_eq!(err.into_maybe(), Maybe::Nothing);
    assert_eq!(Err::<i32, &str>("nope").err_into_maybe(), Maybe::Just("nope"));

    let validation = Err::<i32, &str>("nope").into_validation();
    assert_eq!(validation.errors(), ["nope"]);
}

#[test]
fn option_rail_ext_lifts_lookups() {
    let found: Option<i32> = Some(3);
    assert_eq!(found.into_maybe(), Maybe::Just(3));

    let missing: Option<i32> = None;
    let validation = missing.ok_or_invalid("age", "must be a number");
    assert_eq!(validation.errors()[0].field, "age");
    assert_eq!(validation.errors()[0].message, "must be a number");
}

#[test]
fn transient_classification_defaults() {
    assert!(ProbeError::Flaky.is_transient());
    assert!(!ProbeError::Flaky.is_permanent());
    assert!(ProbeError::BadRequest.is_permanent());
}

#[cfg(feature = "std")]
#[test]
fn io_errors_are_transient_when_connection_shaped() {
    use std::io::{Error, ErrorKind};

    assert!(Error::from(ErrorKind::TimedOut).is_transient());
    assert!(Error::from(ErrorKind::ConnectionReset).is_transient());
    assert!(Error::from(ErrorKind::NotFound).is_permanent());
}

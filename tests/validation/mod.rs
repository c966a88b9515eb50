mod signup;

use core::cell::Cell;

use fp_rail::validation::{Validation, ValidationError};

#[test]
fn valid_and_invalid_helpers_behave_as_expected() {
    let valid = Validation::<&str, i32>::valid(5);
    assert!(valid.is_valid());
    assert_eq!(valid.into_value(), Some(5));

    let invalid = Validation::<&str, i32>::invalid("missing");
    assert!(invalid.is_invalid());
    assert_eq!(invalid.errors(), ["missing"]);
}

#[test]
fn map_and_and_then_chain_success_values() {
    let result = Validation::<&str, i32>::valid(4).map(|x| x * 2).and_then(|x| {
        if x == 8 {
            Validation::valid(x + 1)
        } else {
            Validation::invalid("unexpected")
        }
    });

    assert_eq!(result.into_value(), Some(9));
}

#[test]
fn map_on_invalid_never_invokes_the_function() {
    let calls = Cell::new(0);

    let mapped = Validation::<&str, i32>::invalid("error").map(|x| {
        calls.set(calls.get() + 1);
        x * 2
    });

    assert!(mapped.is_invalid());
    assert_eq!(calls.get(), 0);
}

#[test]
fn zip_accumulates_errors_from_both_sides() {
    let left = Validation::<&str, i32>::invalid("left");
    let right = Validation::<&str, i32>::invalid("right");

    let zipped = left.zip(right);
    assert_eq!(zipped.errors(), ["left", "right"]);
}

#[test]
fn zip_with_combines_two_valid_values() {
    let result = Validation::<&str, _>::valid(6).zip_with(Validation::valid(7), |a, b| a * b);
    assert_eq!(result.into_value(), Some(42));
}

#[test]
fn or_else_recovers_only_invalid_states() {
    let valid = Validation::<&str, i32>::valid(42);
    assert_eq!(valid.or_else(|_| Validation::valid(0)).into_value(), Some(42));

    let invalid = Validation::<&str, i32>::invalid("error");
    assert_eq!(invalid.or_else(|_| Validation::valid(0)).into_value(), Some(0));
}

#[test]
fn map_errors_transforms_every_error() {
    let validation: Validation<&str, i32> = Validation::invalid_all(["a", "b"]);
    let mapped = validation.map_errors(|e| format!("ERR:{e}"));

    let errors: Vec<_> = mapped.into_errors().unwrap().into_iter().collect();
    assert_eq!(errors, vec!["ERR:a".to_string(), "ERR:b".to_string()]);
}

#[test]
fn to_result_preserves_all_errors() {
    let validation: Validation<&str, i32> = Validation::invalid_all(["first", "second"]);
    assert_eq!(validation.to_result().unwrap_err().len(), 2);
}

#[test]
fn from_result_wraps_a_single_error() {
    let ok = Validation::from_result(Ok::<_, &str>(42));
    assert!(ok.is_valid());

    let err = Validation::from_result(Err::<i32, &str>("boom"));
    assert_eq!(err.errors(), ["boom"]);
}

#[test]
fn collecting_results_accumulates_errors() {
    let inputs = vec![Ok(1), Err("err1"), Err("err2")];
    let collected: Validation<&str, Vec<i32>> = inputs.into_iter().collect();

    assert!(collected.is_invalid());
    assert_eq!(collected.errors().len(), 2);
}

#[test]
fn collecting_validations_preserves_all_errors() {
    let items = vec![
        Validation::valid(10),
        Validation::invalid("bad"),
        Validation::invalid_all(["worse", "worst"]),
    ];

    let collected: Validation<&str, Vec<i32>> = items.into_iter().collect();
    assert_eq!(collected.errors(), ["bad", "worse", "worst"]);
}

#[test]
fn collecting_all_valid_preserves_value_order() {
    let items = vec![Validation::<&str, _>::valid(1), Validation::valid(2)];
    let collected: Validation<&str, Vec<i32>> = items.into_iter().collect();
    assert_eq!(collected.into_value(), Some(vec![1, 2]));
}

#[test]
fn collecting_into_a_custom_collection_type() {
    use smallvec::SmallVec;

    let inputs = vec![Ok(1), Err("err1"), Ok(2)];
    let collected: Validation<&str, SmallVec<[i32; 4]>> = inputs.into_iter().collect();

    assert!(collected.is_invalid());
    assert_eq!(collected.errors().len(), 1);
}

#[test]
fn validation_error_displays_field_and_message() {
    let error = ValidationError::new("email", "must contain '@'");
    assert_eq!(error.to_string(), "email: must contain '@'");
}

#[test]
fn iteration_yields_the_success_value_only() {
    let valid = Validation::<&str, i32>::valid(3);
    assert_eq!((&valid).into_iter().count(), 1);
    assert_eq!(valid.into_iter().collect::<Vec<_>>(), vec![3]);

    let invalid = Validation::<&str, i32>::invalid("nope");
    assert_eq!(invalid.into_iter().count(), 0);
}

#[cfg(feature = "serde")]
mod serde_roundtrip {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Payload {
        id: i32,
    }

    #[test]
    fn validation_serializes_both_variants() {
        let valid = Validation::<String, Payload>::valid(Payload { id: 1 });
        let serialized = serde_json::to_string(&valid).unwrap();
        let deserialized: Validation<String, Payload> =
            serde_json::from_str(&serialized).unwrap();
        assert_eq!(valid, deserialized);

        let invalid = Validation::<String, Payload>::invalid("error".to_string());
        let serialized = serde_json::to_string(&invalid).unwrap();
        let deserialized: Validation<String, Payload> =
            serde_json::from_str(&serialized).unwrap();
        assert_eq!(invalid, deserialized);
    }
}

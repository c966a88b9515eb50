//! End-to-end record validation: every failing field is reported at once.

use fp_rail::invalid;
use fp_rail::traits::OptionRailExt;
use fp_rail::validation::{Validation, ValidationError};

#[derive(Debug, PartialEq)]
struct Signup {
    username: String,
    password: String,
    email: String,
    age: u8,
}

struct RawSignup<'a> {
    username: &'a str,
    password: &'a str,
    confirm_password: &'a str,
    email: &'a str,
    age: &'a str,
}

fn validate_username(username: &str) -> Validation<ValidationError, String> {
    if username.len() >= 3 {
        Validation::valid(username.to_string())
    } else {
        invalid!("username", "must be at least 3 characters")
    }
}

fn validate_password(password: &str) -> Validation<ValidationError, String> {
    if password.len() >= 8 {
        Validation::valid(password.to_string())
    } else {
        invalid!("password", "must be at least 8 characters")
    }
}

fn validate_confirmation(password: &str, confirmation: &str) -> Validation<ValidationError, ()> {
    if password == confirmation {
        Validation::valid(())
    } else {
        invalid!("confirm_password", "does not match password")
    }
}

fn validate_email(email: &str) -> Validation<ValidationError, String> {
    if email.contains('@') {
        Validation::valid(email.to_string())
    } else {
        invalid!("email", "must contain '@'")
    }
}

fn validate_age(raw: &str) -> Validation<ValidationError, u8> {
    raw.parse::<u8>().ok().ok_or_invalid("age", "must be a number")
}

fn validate_signup(input: &RawSignup<'_>) -> Validation<ValidationError, Signup> {
    validate_username(input.username)
        .zip(validate_password(input.password))
        .zip(validate_confirmation(input.password, input.confirm_password))
        .zip(validate_email(input.email))
        .zip(validate_age(input.age))
        .map(|((((username, password), ()), email), age)| Signup {
            username,
            password,
            email,
            age,
        })
}

#[test]
fn every_failing_field_is_reported() {
    let input = RawSignup {
        username: "ab",
        password: "short",
        confirm_password: "mismatch",
        email: "bad",
        age: "x",
    };

    let outcome = validate_signup(&input);
    assert!(outcome.is_invalid());

    let fields: Vec<&str> = outcome.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["username", "password", "confirm_password", "email", "age"]
    );
}

#[test]
fn a_fully_valid_record_is_assembled_from_the_unwrapped_values() {
    let input = RawSignup {
        username: "alice",
        password: "correct horse",
        confirm_password: "correct horse",
        email: "alice@example.com",
        age: "30",
    };

    let outcome = validate_signup(&input);
    assert_eq!(
        outcome.into_value(),
        Some(Signup {
            username: "alice".to_string(),
            password: "correct horse".to_string(),
            email: "alice@example.com".to_string(),
            age: 30,
        })
    );
}

#[test]
fn a_single_failing_field_reports_exactly_one_error() {
    let input = RawSignup {
        username: "alice",
        password: "correct horse",
        confirm_password: "correct horse",
        email: "not-an-email",
        age: "30",
    };

    let outcome = validate_signup(&input);
    let errors = outcome.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0], ValidationError::new("email", "must contain '@'"));
}

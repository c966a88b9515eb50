use fp_rail::invalid;
use fp_rail::traits::OptionRailExt;
use fp_rail::validation::{Validation, ValidationError};

#[derive(Debug)]
struct Signup {
    username: String,
    email: String,
    age: u8,
}

fn validate_username(username: &str) -> Validation<ValidationError, String> {
    if username.len() >= 3 {
        Validation::valid(username.to_string())
    } else {
        invalid!("username", "must be at least 3 characters")
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

fn validate_signup(username: &str, email: &str, age: &str) -> Validation<ValidationError, Signup> {
    validate_username(username)
        .zip(validate_email(email))
        .zip(validate_age(age))
        .map(|((username, email), age)| Signup { username, email, age })
}

fn main() {
    let submissions = [
        ("alice", "alice@example.com", "30"),
        ("ab", "not-an-email", "x"),
    ];

    for (username, email, age) in submissions {
        match validate_signup(username, email, age) {
            Validation::Valid(signup) => println!("accepted: {signup:?}"),
            Validation::Invalid(errors) => {
                println!("rejected {username:?}:");
                for error in errors {
                    println!("  {error}");
                }
            },
        }
    }
}

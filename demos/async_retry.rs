use core::time::Duration;
use std::cell::Cell;

use fp_rail::task::{retry_transient_n, with_deadline, DeadlineOutcome};
use fp_rail::traits::Transient;

#[derive(Debug)]
enum FetchError {
    Unreachable,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Unreachable => write!(f, "service unreachable"),
        }
    }
}

impl Transient for FetchError {
    fn is_transient(&self) -> bool {
        true
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A flaky endpoint that needs two attempts before it answers.
    let attempts = Cell::new(0u32);
    let fetch = || {
        let attempt = attempts.get() + 1;
        attempts.set(attempt);
        async move {
            if attempt < 2 {
                Err(FetchError::Unreachable)
            } else {
                Ok("payload")
            }
        }
    };

    match retry_transient_n(fetch, 3, Duration::from_millis(50)).await {
        Ok(payload) => println!("fetched after {} attempts: {payload}", attempts.get()),
        Err(error) => println!("gave up: {error}"),
    }

    // A slow task bounded by a deadline.
    let slow = async {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok::<_, FetchError>("too late")
    };

    match with_deadline(Duration::from_millis(100), slow).await {
        DeadlineOutcome::Completed(result) => println!("completed: {result:?}"),
        DeadlineOutcome::Elapsed(after) => println!("deadline elapsed after {after:?}"),
    }
}

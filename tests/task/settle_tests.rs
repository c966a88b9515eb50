//! Tests for concurrent settling.

use std::future::{poll_fn, Future};
use std::task::Poll;

use fp_rail::task::{ready_err, ready_ok, settle_all};
use fp_rail::{combine_results, partition_results};

/// A future that suspends once before resolving, so completion order
/// differs from input order.
fn yield_then<T>(value: T) -> impl Future<Output = T> {
    let mut yielded = false;
    let mut value = Some(value);
    poll_fn(move |cx| {
        if yielded {
            Poll::Ready(value.take().expect("polled after completion"))
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
}

#[tokio::test]
async fn settle_all_preserves_input_order() {
    let outcomes = settle_all([
        ready_ok::<_, &str>(1),
        ready_err("boom"),
        ready_ok(3),
    ])
    .await;

    assert_eq!(outcomes, vec![Ok(1), Err("boom"), Ok(3)]);
}

#[tokio::test]
async fn settle_all_does_not_short_circuit_on_failure() {
    let outcomes = settle_all([
        yield_then(Err::<i32, &str>("first")),
        yield_then(Ok(2)),
        yield_then(Err("last")),
    ])
    .await;

    assert_eq!(outcomes.len(), 3);
    let (values, errors) = partition_results(outcomes);
    assert_eq!(values, vec![2]);
    assert_eq!(errors, vec!["first", "last"]);
}

#[tokio::test]
async fn settle_all_of_nothing_is_empty() {
    let outcomes: Vec<Result<i32, &str>> = settle_all(core::iter::empty::<
        core::future::Ready<Result<i32, &str>>,
    >())
    .await;
    assert!(outcomes.is_empty());
}

#[tokio::test]
async fn settled_outcomes_feed_the_sync_combinators() {
    let outcomes = settle_all([yield_then(Ok::<_, &str>(1)), yield_then(Ok(2))]).await;
    let combined = combine_results(outcomes);
    assert_eq!(combined.unwrap(), vec![1, 2]);
}

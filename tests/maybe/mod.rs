use core::cell::Cell;

use fp_rail::Maybe;

#[test]
fn constructors_and_predicates_are_mutually_exclusive() {
    let present = Maybe::just(5);
    assert!(present.is_just());
    assert!(!present.is_nothing());

    let absent: Maybe<i32> = Maybe::nothing();
    assert!(absent.is_nothing());
    assert!(!absent.is_just());
}

#[test]
fn map_identity_preserves_value() {
    let m = Maybe::just(42);
    assert_eq!(m.map(|x| x), Maybe::Just(42));
}

#[test]
fn map_on_nothing_never_invokes_the_function() {
    let calls = Cell::new(0);

    let mapped = Maybe::<i32>::nothing().map(|x| {
        calls.set(calls.get() + 1);
        x * 2
    });

    assert_eq!(mapped, Maybe::Nothing);
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_associativity() {
    fn half(n: i32) -> Maybe<i32> {
        if n % 2 == 0 {
            Maybe::just(n / 2)
        } else {
            Maybe::nothing()
        }
    }

    fn decrement(n: i32) -> Maybe<i32> {
        if n > 0 {
            Maybe::just(n - 1)
        } else {
            Maybe::nothing()
        }
    }

    for start in [-3, 0, 7, 8, 64] {
        let left = Maybe::just(start).and_then(half).and_then(decrement);
        let right = Maybe::just(start).and_then(|x| half(x).and_then(decrement));
        assert_eq!(left, right);
    }
}

#[test]
fn and_then_just_is_identity() {
    assert_eq!(Maybe::just(9).and_then(Maybe::just), Maybe::Just(9));
    assert_eq!(Maybe::<i32>::nothing().and_then(Maybe::just), Maybe::Nothing);
}

#[test]
fn and_then_short_circuits_on_nothing() {
    let calls = Cell::new(0);

    let chained = Maybe::<i32>::nothing().and_then(|x| {
        calls.set(calls.get() + 1);
        Maybe::just(x + 1)
    });

    assert_eq!(chained, Maybe::Nothing);
    assert_eq!(calls.get(), 0);
}

#[test]
fn or_else_recovers_only_absence() {
    assert_eq!(Maybe::just(1).or_else(|| Maybe::just(2)), Maybe::Just(1));
    assert_eq!(Maybe::nothing().or_else(|| Maybe::just(2)), Maybe::Just(2));
}

#[test]
fn unwrap_or_family() {
    assert_eq!(Maybe::just(3).unwrap_or(0), 3);
    assert_eq!(Maybe::<i32>::nothing().unwrap_or(0), 0);
    assert_eq!(Maybe::<i32>::nothing().unwrap_or_else(|| 7), 7);
    assert_eq!(Maybe::<i32>::nothing().unwrap_or_default(), 0);
}

#[test]
fn filter_and_zip() {
    assert_eq!(Maybe::just(4).filter(|n| n % 2 == 0), Maybe::Just(4));
    assert_eq!(Maybe::just(5).filter(|n| n % 2 == 0), Maybe::Nothing);

    assert_eq!(Maybe::just(1).zip(Maybe::just("a")), Maybe::Just((1, "a")));
    assert_eq!(
        Maybe::<i32>::nothing().zip(Maybe::just("a")),
        Maybe::Nothing
    );
}

#[test]
fn conversions_with_std_option() {
    assert_eq!(Maybe::from_option(Some(1)), Maybe::Just(1));
    assert_eq!(Maybe::<i32>::from_option(None), Maybe::Nothing);
    assert_eq!(Maybe::just(1).into_option(), Some(1));
    assert_eq!(Option::from(Maybe::just(2)), Some(2));
    assert_eq!(Maybe::from(Some(3)), Maybe::Just(3));
}

#[test]
fn ok_or_moves_onto_the_result_rail() {
    assert_eq!(Maybe::just(5).ok_or("missing"), Ok(5));
    assert_eq!(Maybe::<i32>::nothing().ok_or("missing"), Err("missing"));
    assert_eq!(
        Maybe::<i32>::nothing().ok_or_else(|| "lazy".to_string()),
        Err("lazy".to_string())
    );
}

#[test]
fn iteration_yields_zero_or_one_items() {
    let present = Maybe::just(7);
    assert_eq!(present.iter().count(), 1);
    assert_eq!(present.into_iter().collect::<Vec<_>>(), vec![7]);

    let absent: Maybe<i32> = Maybe::nothing();
    assert_eq!(absent.into_iter().count(), 0);
}

#[test]
fn default_is_nothing() {
    assert_eq!(Maybe::<i32>::default(), Maybe::Nothing);
}

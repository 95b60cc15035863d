use outcome::testing::{assert_err_eq, assert_ok_eq};
use outcome::{combine_map, map2, Outcome};
use std::cell::Cell;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_constructors_and_predicates() {
    let ok = Outcome::<&str, &str>::ok("fine");
    assert!(ok.is_ok());
    assert!(!ok.is_err());

    let failed = Outcome::<&str, &str>::error("oops");
    assert!(failed.is_err());
    assert!(!failed.is_ok());
}

#[test]
fn test_map_over_ok() {
    assert_ok_eq(Outcome::<i32, String>::ok(1).map(|one| one * 2), 2);
}

#[test]
fn test_map_over_error() {
    assert_err_eq(Outcome::<i32, i32>::error(1).map(|one| one * 2), 1);
}

#[test]
fn test_map_never_runs_on_error() {
    let calls = Cell::new(0);

    let mapped = Outcome::<i32, i32>::error(7).map(|n| {
        calls.set(calls.get() + 1);
        n
    });

    assert_err_eq(mapped, 7);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_map_obeys_identity() {
    assert_eq!(Outcome::<i32, String>::ok(4).map(|n| n), Outcome::ok(4));
}

#[test]
fn test_map_obeys_composition() {
    let double = |n: i32| n * 2;
    let succ = |n: i32| n + 1;

    assert_eq!(
        Outcome::<i32, String>::ok(3).map(double).map(succ),
        Outcome::<i32, String>::ok(3).map(|n| succ(double(n))),
    );
}

#[test]
fn test_bind_left_identity() {
    let double = |n: i32| Outcome::<i32, String>::ok(n * 2);

    assert_eq!(Outcome::ok(1).bind(double), double(1));
}

#[test]
fn test_bind_can_fail() {
    let bound: Outcome<i32, &str> = Outcome::<i32, &str>::ok(1).bind(|_one| Outcome::error("some error"));

    assert_err_eq(bound, "some error");
}

#[test]
fn test_bind_over_error_skips_the_handler() {
    let calls = Cell::new(0);

    let bound = Outcome::<i32, &str>::error("some error").bind(|n| {
        calls.set(calls.get() + 1);
        Outcome::ok(n * 2)
    });

    assert_err_eq(bound, "some error");
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_map_err_over_error() {
    let mapped =
        Outcome::<i32, &str>::error("An error :O").map_err(|error| format!("Oops: {error}"));

    assert_err_eq(mapped, String::from("Oops: An error :O"));
}

#[test]
fn test_map_err_over_ok() {
    let mapped = Outcome::<i32, &str>::ok(1).map_err(|error| format!("Oops: {error}"));

    assert_ok_eq(mapped, 1);
}

#[test]
fn test_case_runs_only_the_ok_handler() {
    let ok_calls = Cell::new(0);
    let err_calls = Cell::new(0);

    let value = Outcome::<&str, &str>::ok("cool")
        .when_ok(|value| {
            ok_calls.set(ok_calls.get() + 1);
            value
        })
        .when_error(|_error| {
            err_calls.set(err_calls.get() + 1);
            "error"
        });

    assert_eq!(value, "cool");
    assert_eq!(ok_calls.get(), 1);
    assert_eq!(err_calls.get(), 0);
}

#[test]
fn test_case_runs_only_the_error_handler() {
    let ok_calls = Cell::new(0);
    let err_calls = Cell::new(0);

    let value = Outcome::<&str, &str>::error("not cool")
        .when_ok(|_value| {
            ok_calls.set(ok_calls.get() + 1);
            "cool"
        })
        .when_error(|error| {
            err_calls.set(err_calls.get() + 1);
            error
        });

    assert_eq!(value, "not cool");
    assert_eq!(ok_calls.get(), 0);
    assert_eq!(err_calls.get(), 1);
}

#[test]
fn test_map2_combines_two_successes() {
    init();

    let combined = map2(Outcome::<i32, i32>::ok(2), Outcome::ok(3), |two, three| {
        two + three
    });

    assert_ok_eq(combined, 5);
}

#[test]
fn test_map2_surfaces_the_second_failure() {
    let combined = map2(
        Outcome::<i32, i32>::ok(2),
        Outcome::<i32, i32>::error(3),
        |two, three| two + three,
    );

    assert_err_eq(combined, 3);
}

#[test]
fn test_map2_short_circuits_on_the_first_failure() {
    let calls = Cell::new(0);

    let combined = map2(
        Outcome::<i32, i32>::error(2),
        Outcome::ok(3),
        |two, three| {
            calls.set(calls.get() + 1);
            two + three
        },
    );

    assert_err_eq(combined, 2);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_combine_map_collects_in_order() {
    init();

    let combined = combine_map(vec![1, 3, 5], |n| {
        if n % 2 == 1 {
            Outcome::ok(n)
        } else {
            Outcome::error(n)
        }
    });

    assert_ok_eq(combined, vec![1, 3, 5]);
}

#[test]
fn test_combine_map_returns_the_first_failure() {
    let combined = combine_map(vec![2, 3, 5], |n| {
        if n % 2 == 1 {
            Outcome::ok(n)
        } else {
            Outcome::error(n)
        }
    });

    assert_err_eq(combined, 2);
}

#[test]
fn test_combine_map_stops_evaluating_after_a_failure() {
    let calls = Cell::new(0);

    let combined = combine_map(vec![1, 2, 5], |n| {
        calls.set(calls.get() + 1);
        if n % 2 == 1 {
            Outcome::ok(n)
        } else {
            Outcome::error(n)
        }
    });

    assert_err_eq(combined, 2);
    // 1 and 2 were checked; 5 never was.
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_combine_map_over_nothing() {
    let combined = combine_map(Vec::<i32>::new(), Outcome::<i32, i32>::ok);

    assert_ok_eq(combined, vec![]);
}

use crate::outcome::Outcome;
use std::fmt::Debug;

/// Asserts that `outcome` is a success holding exactly `expected`.
///
/// Extraction goes through the public case-analysis path, so these helpers
/// exercise the same surface downstream code uses.
#[track_caller]
pub fn assert_ok_eq<T, E>(outcome: Outcome<T, E>, expected: T)
where
    T: PartialEq + Debug,
    E: Debug,
{
    assert!(outcome.is_ok(), "expected an ok outcome, got: {outcome:?}");

    let value = outcome
        .when_ok(|value| value)
        .when_error(|error| panic!("expected an ok outcome, got failure: {error:?}"));
    assert_eq!(value, expected);
}

/// Asserts that `outcome` is a failure holding exactly `expected`.
#[track_caller]
pub fn assert_err_eq<T, E>(outcome: Outcome<T, E>, expected: E)
where
    T: Debug,
    E: PartialEq + Debug,
{
    assert!(outcome.is_err(), "expected a failed outcome, got: {outcome:?}");

    let error = outcome
        .when_ok(|value| panic!("expected a failed outcome, got ok: {value:?}"))
        .when_error(|error| error);
    assert_eq!(error, expected);
}

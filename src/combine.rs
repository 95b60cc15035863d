use crate::outcome::Outcome;
use log::debug;

/// Combines two outcomes with `f`, short-circuiting left to right.
///
/// If `first` is a failure it surfaces immediately and `second`'s binding is
/// never entered; if only `second` is a failure, that failure surfaces. `f`
/// runs when both are successes.
pub fn map2<A, B, C, E, F>(first: Outcome<A, E>, second: Outcome<B, E>, f: F) -> Outcome<C, E>
where
    F: FnOnce(A, B) -> C,
{
    first.bind(move |a| second.map(move |b| f(a, b)))
}

/// Applies the fallible `f` to each item in order, collecting the successes.
///
/// A left fold with early exit: the first failure is returned as-is and `f`
/// is never called on the items after it. An empty input yields an empty
/// success.
pub fn combine_map<It, I, O, E, F>(items: It, mut f: F) -> Outcome<Vec<O>, E>
where
    It: IntoIterator<Item = I>,
    F: FnMut(I) -> Outcome<O, E>,
{
    let mut combined = Outcome::ok(Vec::new());

    for (index, item) in items.into_iter().enumerate() {
        combined = map2(combined, f(item), |mut values, value| {
            values.push(value);
            values
        });

        if combined.is_err() {
            debug!("combine_map: stopping at first failure, item {index}");
            break;
        }
    }
    combined
}

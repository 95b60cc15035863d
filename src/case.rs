use crate::outcome::{Branch, Outcome};

/// Intermediate state of case analysis on an [`Outcome`]: holds the outcome
/// together with its registered success handler.
///
/// Nothing runs until [`when_error`](Case::when_error) arms the failure
/// handler, at which point exactly one of the two handlers is invoked on the
/// live branch's payload. A `Case` that is dropped without `when_error`
/// simply never resolves.
pub struct Case<T, E, F> {
    outcome: Outcome<T, E>,
    on_ok: F,
}

impl<T, E, F> Case<T, E, F> {
    pub(crate) fn new(outcome: Outcome<T, E>, on_ok: F) -> Self {
        Self { outcome, on_ok }
    }

    /// Terminal call: resolves the case analysis.
    ///
    /// Both handlers must produce the same result type; the non-matching
    /// handler is never invoked.
    pub fn when_error<G, R>(self, on_error: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self.outcome.0 {
            Branch::Ok(value) => (self.on_ok)(value),
            Branch::Err(error) => on_error(error),
        }
    }
}

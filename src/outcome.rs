use crate::case::Case;

/// A value that is either a success carrying `T` or a failure carrying `E`.
///
/// Exactly one branch is ever populated and the branch is fixed at
/// construction. The branch itself is private: downstream code cannot match
/// on it directly and instead extracts payloads through
/// [`when_ok`](Outcome::when_ok) followed by [`Case::when_error`], which
/// forces both branches to be handled.
///
/// ```
/// use outcome::Outcome;
///
/// fn parse(input: &str) -> Outcome<i32, String> {
///     match input.parse() {
///         Ok(n) => Outcome::ok(n),
///         Err(_) => Outcome::error(format!("not a number: {input}")),
///     }
/// }
///
/// let doubled = parse("21").map(|n| n * 2);
/// let display = doubled
///     .when_ok(|n: i32| n.to_string())
///     .when_error(|reason| reason);
///
/// assert_eq!(display, "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T, E>(pub(crate) Branch<T, E>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Branch<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a success payload.
    pub fn ok(value: T) -> Self {
        Self(Branch::Ok(value))
    }

    /// Wraps a failure payload.
    pub fn error(error: E) -> Self {
        Self(Branch::Err(error))
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.0, Branch::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self.0, Branch::Err(_))
    }

    /// Transforms the success payload, leaving a failure untouched.
    ///
    /// `f` must not itself fail; a fallible step belongs in
    /// [`bind`](Outcome::bind) instead.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.0 {
            Branch::Ok(value) => Outcome::ok(f(value)),
            Branch::Err(error) => Outcome::error(error),
        }
    }

    /// Chains a fallible step onto a success, flattening one level of
    /// nesting. A failure passes through with `f` never invoked.
    ///
    /// The handler must return an [`Outcome`]; a handler producing a bare
    /// value is rejected at compile time rather than surfacing as a domain
    /// failure:
    ///
    /// ```compile_fail
    /// use outcome::Outcome;
    ///
    /// let doubled = Outcome::<i32, String>::ok(1).bind(|one| one * 2);
    /// ```
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self.0 {
            Branch::Ok(value) => f(value),
            Branch::Err(error) => Outcome::error(error),
        }
    }

    /// Transforms the failure payload, leaving a success untouched.
    pub fn map_err<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self.0 {
            Branch::Ok(value) => Outcome::ok(value),
            Branch::Err(error) => Outcome::error(f(error)),
        }
    }

    /// Begins case analysis by registering the success handler.
    ///
    /// Returns an intermediate [`Case`]; no handler runs until
    /// [`Case::when_error`] supplies the failure handler. This two-call
    /// protocol is the only way to pull a payload out of an `Outcome`.
    pub fn when_ok<F>(self, on_ok: F) -> Case<T, E, F> {
        Case::new(self, on_ok)
    }
}

use crate::case::Case;
use crate::outcome::{Branch, Outcome};
use log::{debug, trace};

/// Groups independent zero-argument fallible blocks and runs them as one
/// batch.
///
/// Blocks are registered with [`With::new`] and chained [`and`] calls, then
/// resolved by `then`, `map`, or `when_ok`. Resolution runs the blocks left
/// to right; the first failure short-circuits the group (later blocks never
/// run) and propagates unchanged. When every block succeeds, the payloads
/// are spread as positional arguments into the continuation.
///
/// Groups of one to five blocks are supported, each arity typed explicitly.
///
/// ```
/// use outcome::{Outcome, With};
///
/// let total = With::new(|| Outcome::<_, String>::ok(2))
///     .and(|| Outcome::ok(3))
///     .map(|two, three| two + three);
///
/// assert!(total.is_ok());
/// ```
///
/// [`and`]: With::and
pub struct With<B> {
    blocks: B,
}

impl<F1> With<(F1,)> {
    /// Starts a group with its first block.
    pub fn new(block: F1) -> Self {
        Self { blocks: (block,) }
    }
}

macro_rules! implement_and {
    ([$($F:ident, $b:ident),+], $next:ident) => {
        impl<$($F),+> With<($($F,)+)> {
            /// Registers one more block on the group.
            pub fn and<$next>(self, block: $next) -> With<($($F,)+ $next)> {
                let ($($b,)+) = self.blocks;
                With {
                    blocks: ($($b,)+ block),
                }
            }
        }
    };
}

implement_and!([F1, b1], F2);
implement_and!([F1, b1, F2, b2], F3);
implement_and!([F1, b1, F2, b2, F3, b3], F4);
implement_and!([F1, b1, F2, b2, F3, b3, F4, b4], F5);

macro_rules! implement_with {
    ([$($F:ident, $T:ident, $b:ident),+]) => {
        impl<$($F),+> With<($($F,)+)> {
            /// Calls every block in registration order, short-circuiting on
            /// the first failure.
            fn run<$($T,)+ E>(self) -> Outcome<($($T,)+), E>
            where
                $($F: FnOnce() -> Outcome<$T, E>,)+
            {
                trace!(
                    "with: running a group of {} block(s)",
                    [$(stringify!($b)),+].len()
                );

                let ($($b,)+) = self.blocks;
                $(
                    let $b = match $b().0 {
                        Branch::Ok(value) => value,
                        Branch::Err(error) => {
                            debug!("with: block failed, short-circuiting the group");
                            return Outcome::error(error);
                        }
                    };
                )+
                Outcome::ok(($($b,)+))
            }

            /// Resolves the group, spreading the payloads into a fallible
            /// continuation.
            pub fn then<$($T,)+ E, C, U>(self, continuation: C) -> Outcome<U, E>
            where
                $($F: FnOnce() -> Outcome<$T, E>,)+
                C: FnOnce($($T),+) -> Outcome<U, E>,
            {
                self.run().bind(move |($($b,)+)| continuation($($b),+))
            }

            /// Resolves the group, spreading the payloads into an infallible
            /// continuation.
            pub fn map<$($T,)+ E, C, U>(self, continuation: C) -> Outcome<U, E>
            where
                $($F: FnOnce() -> Outcome<$T, E>,)+
                C: FnOnce($($T),+) -> U,
            {
                self.run().map(move |($($b,)+)| continuation($($b),+))
            }

            /// Resolves the group into case analysis; the continuation
            /// receives the spread payloads when every block succeeded.
            pub fn when_ok<$($T,)+ E, C, R>(
                self,
                continuation: C,
            ) -> Case<($($T,)+), E, impl FnOnce(($($T,)+)) -> R>
            where
                $($F: FnOnce() -> Outcome<$T, E>,)+
                C: FnOnce($($T),+) -> R,
            {
                self.run().when_ok(move |($($b,)+)| continuation($($b),+))
            }
        }
    };
}

implement_with!([F1, T1, b1]);
implement_with!([F1, T1, b1, F2, T2, b2]);
implement_with!([F1, T1, b1, F2, T2, b2, F3, T3, b3]);
implement_with!([F1, T1, b1, F2, T2, b2, F3, T3, b3, F4, T4, b4]);
implement_with!([F1, T1, b1, F2, T2, b2, F3, T3, b3, F4, T4, b4, F5, T5, b5]);

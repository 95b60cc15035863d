//! Explicit success-or-failure values with a small combinator surface.
//!
//! [`Outcome`] holds either a success payload or a failure payload. Fallible
//! steps compose through [`Outcome::map`], [`Outcome::bind`] and
//! [`Outcome::map_err`] without exceptions or early unwrapping; the only way
//! to extract a payload is the paired `when_ok(..).when_error(..)` case
//! analysis, so both branches are always handled. [`map2`] and
//! [`combine_map`] aggregate several outcomes into one, and [`With`] batches
//! independent fallible blocks behind a single continuation.
//!
//! ```
//! use outcome::{combine_map, Outcome};
//!
//! fn check(n: i32) -> Outcome<i32, i32> {
//!     if n % 2 == 1 {
//!         Outcome::ok(n)
//!     } else {
//!         Outcome::error(n)
//!     }
//! }
//!
//! let all_odd = combine_map(vec![1, 3, 5], check);
//! assert!(all_odd.is_ok());
//! ```

pub mod case;
pub mod combine;
pub mod outcome;
pub mod testing;
pub mod with;

pub use case::Case;
pub use combine::{combine_map, map2};
pub use outcome::Outcome;
pub use with::With;

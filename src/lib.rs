//! A library providing a primitive three-valued logical type.
//!
//! trilean is a library for working with logical values which are certainly true, certainly false, or --- for the moment --- maybe, without giving up the boolean value such a maybe rests on.
//!
//! Two structures make up the library:
//! - A [trilean](structures::trilean), carrying a value flag and an uncertain flag, observable as one of three states: certain true, certain false, and maybe.
//! - A [pure uncertainty](structures::uncertainty), carrying only a certainty flag, used to raise or clear the uncertainty of a trilean without touching its value flag.
//!
//! The distinction between the two flags of a trilean is the point of the library.
//! A trilean marked uncertain *keeps* the boolean value it held, and clearing the uncertainty reveals that value again.
//! So, a trilean is not an optional boolean: an option models the absence of a value, while a trilean models doubt about a value which is still there.
//!
//! # Orientation
//!
//! The library is designed around a small, closed contract:
//! - Construction, from nothing (certain false), a boolean, another trilean, or a pure uncertainty.
//! - Assignment, through the [Assign](structures::trilean::Assign) trait, with a distinct rule for each right-hand type.
//! - Comparison, with every permitted pairing listed in [the comparison table](structures::trilean::cmp) and every other pairing absent, so misuse fails when a program is checked rather than when it runs.
//! - Decision coercion, through [is_true](structures::trilean::Trilean::is_true) --- the one total reduction of a trilean to a definite boolean --- and its fallible counterpart `bool::try_from`.
//! - Display, on a fixed alphabet: `0`, `1`, and `2` for trileans, `Certain` and `Uncertain` for pure uncertainty.
//!
//! # Examples
//!
//! + Mark a value uncertain, and later revert to what it was.
//!
//! ```rust
//! use trilean::{Assign, Trilean, MAYBE, Uncertainty};
//!
//! let mut reachable = Trilean::from(true);
//! assert!(reachable.is_true());
//!
//! // A link flaps, and whether the peer is reachable is open.
//! reachable.assign(MAYBE);
//!
//! assert!(reachable.is_maybe());
//! assert!(reachable != true);
//! assert!(reachable != false);
//!
//! // The last certain value is kept under the uncertainty.
//! assert!(reachable.certain());
//!
//! // Clearing the uncertainty reveals the kept value.
//! reachable.assign(Uncertainty::new(false));
//! assert!(reachable.is_true());
//! ```
//!
//! + Take a definite decision, or refuse to.
//!
//! ```rust
//! use trilean::{Assign, Trilean, MAYBE};
//!
//! let mut admit = Trilean::default();
//! assert!(admit == false);
//!
//! admit.assign(true);
//! if admit.is_true() {
//!     // Certain true is the only state which takes this branch.
//! }
//!
//! admit.assign(MAYBE);
//! assert!(!admit.is_true());
//! assert!(!admit.is_false());
//! assert!(bool::try_from(admit).is_err());
//! ```
//!
//! # Guiding principles
//!
//! - The contract is closed.
//!   Every comparison, conversion, and coercion is enumerated, and anything outside the enumeration --- ordering, arithmetic, implicit narrowing to a boolean --- is left unimplemented so the type checker rejects it.
//! - Every operation is total over the two flags, with the fallible surface (`TryFrom`, `FromStr`) kept apart from the core and returning [errors](types::err) rather than panicking.
//! - The textual renderings are exact, as external code may compare against them.
//!
//! # Logs
//!
//! Calls to [log!](log) are made on assignment and on refused conversions, under the targets listed in [misc::log].
//! No log implementation is provided.
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/), logs of assignments alone can be filtered with `RUST_LOG=assignment …`.

pub mod misc;
pub mod structures;
pub mod types;

pub use structures::trilean::{Assign, Trilean};
pub use structures::uncertainty::{Uncertainty, MAYBE};

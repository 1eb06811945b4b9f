//! The value structures of the library, and how they relate.
//!
//! - A [trilean](trilean) pairs a value flag with an uncertain flag, and is the structure of interest.
//! - A [pure uncertainty](uncertainty) carries a certainty flag alone, and exists to act on (and be compared against) trileans.
//!
//! A trilean accepts a pure uncertainty during construction, assignment, and comparison.
//! A pure uncertainty knows nothing of trileans beyond the comparisons supplied for symmetry.
//!
//! # Observable states
//!
//! Three states of a trilean are observable: certain true, certain false, and maybe.
//! The fourth combination of the two flags (value raised, uncertain raised) is deliberately *not* a fourth state: while the uncertain flag is raised the value flag is hidden from every comparison and decision, and surfaces only through [certain](trilean::Trilean::certain) or by clearing the uncertainty.

pub mod trilean;
pub mod uncertainty;

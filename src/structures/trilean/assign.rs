//! Implementation details of [Assign] for the canonical trilean.

use crate::{
    misc::log::targets,
    structures::{
        trilean::{Assign, Trilean},
        uncertainty::Uncertainty,
    },
};

impl Assign<bool> for Trilean {
    /// Settles the trilean: the value flag is set to `rhs` and the uncertain flag cleared.
    fn assign(&mut self, rhs: bool) {
        log::trace!(target: targets::ASSIGNMENT, "Boolean {rhs} assigned, uncertainty cleared");
        self.value = rhs;
        self.uncertain = false;
    }
}

impl Assign<Trilean> for Trilean {
    /// Copies both flags of `rhs`.
    fn assign(&mut self, rhs: Trilean) {
        log::trace!(target: targets::ASSIGNMENT, "Trilean {rhs} assigned");
        self.value = rhs.value;
        self.uncertain = rhs.uncertain;
    }
}

impl Assign<Uncertainty> for Trilean {
    /// Moves the certainty flag of `rhs` onto the uncertain flag, keeping the value flag.
    ///
    /// This is the mechanism for marking a trilean uncertain without losing its last value, and for reverting to that value by assigning a certain uncertainty.
    fn assign(&mut self, rhs: Uncertainty) {
        log::trace!(target: targets::ASSIGNMENT, "Uncertainty {rhs} assigned, value flag kept");
        self.uncertain = rhs.is_maybe();
    }
}

//! Conversions to and from the canonical trilean.

use crate::{
    misc::log::targets,
    structures::{trilean::Trilean, uncertainty::Uncertainty},
    types::err,
};

impl From<bool> for Trilean {
    /// A certain trilean with the given value.
    fn from(value: bool) -> Self {
        Trilean {
            value,
            uncertain: false,
        }
    }
}

impl From<Uncertainty> for Trilean {
    /// A trilean with the uncertain flag of `uncertainty` and a false value flag.
    ///
    /// A trilean made from pure uncertainty has no prior value to keep, so the value flag rests at false, the same resting value a default trilean holds.
    fn from(uncertainty: Uncertainty) -> Self {
        Trilean {
            value: false,
            uncertain: uncertainty.is_maybe(),
        }
    }
}

impl TryFrom<Trilean> for bool {
    type Error = err::ErrorKind;

    /// The value of a certain trilean, and an [Indeterminate](err::DecisionError::Indeterminate) error on a maybe.
    ///
    /// The fallible counterpart to [is_true](Trilean::is_true), for callers which must distinguish maybe from certain false.
    fn try_from(trilean: Trilean) -> Result<Self, Self::Error> {
        match trilean.uncertain {
            true => {
                log::trace!(target: targets::DECISION, "Read of a maybe as a definite boolean refused");
                Err(err::ErrorKind::Decision(err::DecisionError::Indeterminate))
            }
            false => Ok(trilean.value),
        }
    }
}

impl std::str::FromStr for Trilean {
    type Err = err::ErrorKind;

    /// Accepts exactly the three rendered forms: `0`, `1`, and `2`.
    ///
    /// As the rendering of a maybe does not carry the value flag, `2` parses with a false value flag, the same convention as `From<Uncertainty>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Trilean::new(false, false)),
            "1" => Ok(Trilean::new(true, false)),
            "2" => Ok(Trilean::new(false, true)),
            _ => {
                log::trace!(target: targets::PARSE, "Unrecognised trilean rendering: {s}");
                Err(err::ErrorKind::Parse(err::ParseError::UnrecognisedRendering))
            }
        }
    }
}

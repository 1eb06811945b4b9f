/*!
Pure uncertainty --- a certainty flag with no boolean underneath.

A pure uncertainty is immutable, and is used to act on a [trilean](crate::structures::trilean) without touching the trilean's value flag:
assigning one raises or clears the trilean's uncertain flag, and comparing against one inspects the trilean's uncertain flag alone.

The canonical instance is [MAYBE], offered to sit alongside the literals `true` and `false`.

```rust
use trilean::structures::uncertainty::{Uncertainty, MAYBE};

assert!(MAYBE.is_maybe());
assert_eq!(MAYBE, Uncertainty::new(true));
assert_ne!(MAYBE, Uncertainty::new(false));

assert_eq!(MAYBE.to_string(), "Uncertain");
assert_eq!(Uncertainty::new(false).to_string(), "Certain");
```

# Comparison against booleans

A pure uncertainty is never equal to a raw boolean, in either direction.
As there is no boolean underneath, not even the raised certainty flag of [MAYBE] counts as a match for `true`:

```rust
use trilean::structures::uncertainty::{Uncertainty, MAYBE};

assert!(MAYBE != true);
assert!(MAYBE != false);
assert!(false != Uncertainty::new(false));
```
*/

use crate::{misc::log::targets, types::err};

/// A certainty flag, carried as a value in its own right.
#[derive(Clone, Copy, Debug)]
pub struct Uncertainty {
    /// Whether the flag marks a pure maybe.
    uncertain: bool,
}

/// The canonical pure maybe, to be used alongside `true` and `false`.
pub const MAYBE: Uncertainty = Uncertainty { uncertain: true };

impl Uncertainty {
    /// A fresh uncertainty with the given flag, true marking a pure maybe.
    pub fn new(uncertain: bool) -> Self {
        Uncertainty { uncertain }
    }

    /// Whether the flag marks a pure maybe.
    pub fn is_maybe(&self) -> bool {
        self.uncertain
    }
}

impl Default for Uncertainty {
    /// A fresh uncertainty is a pure maybe.
    fn default() -> Self {
        Uncertainty { uncertain: true }
    }
}

impl PartialEq for Uncertainty {
    fn eq(&self, other: &Self) -> bool {
        self.uncertain == other.uncertain
    }
}

impl Eq for Uncertainty {}

impl std::hash::Hash for Uncertainty {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uncertain.hash(state);
    }
}

/// Never equal, whatever the flag.
impl PartialEq<bool> for Uncertainty {
    fn eq(&self, _: &bool) -> bool {
        false
    }
}

/// Never equal, whatever the flag.
impl PartialEq<Uncertainty> for bool {
    fn eq(&self, _: &Uncertainty) -> bool {
        false
    }
}

impl std::fmt::Display for Uncertainty {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.uncertain {
            true => write!(f, "Uncertain"),
            false => write!(f, "Certain"),
        }
    }
}

impl std::str::FromStr for Uncertainty {
    type Err = err::ErrorKind;

    /// Accepts exactly the two rendered forms, `Uncertain` and `Certain`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Uncertain" => Ok(Uncertainty { uncertain: true }),
            "Certain" => Ok(Uncertainty { uncertain: false }),
            _ => {
                log::trace!(target: targets::PARSE, "Unrecognised uncertainty rendering: {s}");
                Err(err::ErrorKind::Parse(err::ParseError::UnrecognisedRendering))
            }
        }
    }
}

/*!
Trileans --- logical values which are certainly true, certainly false, or maybe.

The canonical representation of a trilean is a pair of independent flags:
- A *value* flag, holding the current --- or, while uncertain, the last --- boolean value.
- An *uncertain* flag, raised while the trilean is maybe.

While the uncertain flag is raised the value flag is hidden: no comparison reads it and no decision is taken from it.
It is kept rather than cleared, so that clearing the uncertainty reveals the value the trilean held before.

```rust
use trilean::structures::trilean::{Assign, Trilean};
use trilean::structures::uncertainty::{Uncertainty, MAYBE};

let mut settled = Trilean::from(true);

settled.assign(MAYBE);
assert!(settled.is_maybe());
assert!(settled == MAYBE);

// Hidden, though kept.
assert!(settled != true);
assert!(settled.certain());

settled.assign(Uncertainty::new(false));
assert!(settled.is_true());
```

# Queries

Four queries read the state of a trilean, none of which mutate it:

| Query | Reads | True on |
|---|---|---|
| [certain](Trilean::certain) | the value flag alone | the kept boolean, even while maybe |
| [is_maybe](Trilean::is_maybe) | the uncertain flag alone | maybe |
| [is_false](Trilean::is_false) | both flags | certain false only |
| [is_true](Trilean::is_true) | both flags | certain true only |

[is_true](Trilean::is_true) doubles as the *decision coercion*: wherever a single definite answer is required, certain true is the only state which yields `true`, with maybe and certain false both yielding `false`.
For callers which must instead distinguish maybe from certain false, `bool::try_from` returns an [error](crate::types::err) on a maybe rather than collapsing it.

# What is absent

A trilean supports no ordering, no arithmetic, and no implicit narrowing to a boolean.
None of the corresponding traits are implemented, so a program treating a maybe as greater or less than true, or summing trileans, is rejected by the type checker rather than misbehaving at runtime.
*/

mod assign;
pub mod cmp;
#[doc(hidden)]
mod from;

/// Something a trilean may be assigned from, with a rule per right-hand type.
///
/// Assignment mutates the left-hand trilean in place, and the rules differ by what is assigned:
/// - A `bool` settles the trilean: the value flag is set and the uncertain flag cleared.
/// - A `Trilean` is copied whole, both flags.
/// - An [Uncertainty](crate::structures::uncertainty::Uncertainty) moves only the uncertain flag, keeping the value flag for a later revert.
pub trait Assign<Rhs> {
    /// Assign `rhs` to self, under the rule for the type of `rhs`.
    fn assign(&mut self, rhs: Rhs);
}

/// The canonical trilean, as a pair of independent flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trilean {
    /// The current, or last certain, boolean value.
    value: bool,

    /// Whether the trilean is maybe.
    uncertain: bool,
}

impl Trilean {
    /// A fresh trilean with the given flags.
    pub fn new(value: bool, uncertain: bool) -> Self {
        Trilean { value, uncertain }
    }

    /// The value flag, regardless of the uncertain flag.
    ///
    /// While the trilean is maybe this is the *last* certain value, and the value revealed if the uncertainty is cleared.
    pub fn certain(&self) -> bool {
        self.value
    }

    /// Whether the trilean is maybe.
    pub fn is_maybe(&self) -> bool {
        self.uncertain
    }

    /// Whether the trilean is certain false.
    ///
    /// A maybe is never certain false, whatever its value flag.
    pub fn is_false(&self) -> bool {
        match self.uncertain {
            true => false,
            false => !self.value,
        }
    }

    /// Whether the trilean is certain true --- the decision coercion.
    ///
    /// Maybe and certain false both fail the decision, so a raised value flag alone is not enough.
    pub fn is_true(&self) -> bool {
        match self.uncertain {
            true => false,
            false => self.value,
        }
    }
}

impl std::fmt::Display for Trilean {
    /// `2` while maybe, and otherwise `1` for true and `0` for false, as a boolean renders.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.uncertain {
            true => write!(f, "2"),
            false => write!(f, "{}", self.value as u8),
        }
    }
}

/*!
The comparison table for trileans.

Every permitted comparison pairing a trilean with another type is implemented here, and every other pairing is deliberately absent.
In particular there is no [PartialOrd], so `<` and `>` over trileans fail to type check --- a maybe is neither greater nor less than true.

The table, with `!=` throughout the negation of the corresponding `==`:

| Left | Right | Equal when |
|---|---|---|
| `Trilean` | `bool` | left is certain and the value flags match |
| `bool` | `Trilean` | symmetric |
| `Trilean` | `Trilean` | both maybe, or both certain with matching value flags |
| `Trilean` | `Uncertainty` | the uncertain flag matches the certainty flag, value flag ignored |
| `Uncertainty` | `Trilean` | symmetric |

```rust
use trilean::structures::trilean::Trilean;
use trilean::structures::uncertainty::MAYBE;

// A maybe equals no boolean, and every maybe.
let maybe_true = Trilean::new(true, true);
let maybe_false = Trilean::new(false, true);

assert!(maybe_true != true);
assert!(maybe_true != false);
assert_eq!(maybe_true, maybe_false);
assert_eq!(maybe_true, MAYBE);

// Certain trileans compare by value.
assert!(Trilean::from(true) == true);
assert!(Trilean::from(true) != Trilean::from(false));

// A certainty mismatch alone makes trileans unequal.
assert!(Trilean::new(true, true) != Trilean::new(true, false));
```
*/

use crate::structures::{trilean::Trilean, uncertainty::Uncertainty};

impl PartialEq for Trilean {
    fn eq(&self, other: &Self) -> bool {
        (self.uncertain && other.uncertain)
            || (!self.uncertain && !other.uncertain && self.value == other.value)
    }
}

impl Eq for Trilean {}

impl std::hash::Hash for Trilean {
    /// The value flag of a maybe is hidden from equality, and so also from the hash.
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uncertain.hash(state);
        if !self.uncertain {
            self.value.hash(state);
        }
    }
}

impl PartialEq<bool> for Trilean {
    fn eq(&self, other: &bool) -> bool {
        match self.uncertain {
            true => false,
            false => self.value == *other,
        }
    }
}

impl PartialEq<Trilean> for bool {
    fn eq(&self, other: &Trilean) -> bool {
        other == self
    }
}

impl PartialEq<Uncertainty> for Trilean {
    fn eq(&self, other: &Uncertainty) -> bool {
        self.uncertain == other.is_maybe()
    }
}

impl PartialEq<Trilean> for Uncertainty {
    fn eq(&self, other: &Trilean) -> bool {
        other == self
    }
}

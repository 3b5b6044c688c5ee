//! Tile: the atomic playable unit.
//!
//! A tile is an immutable pair of pip values. Pip order is preserved for
//! display (`[2|5]` and `[5|2]` render differently) but is irrelevant to
//! equality and hashing: two tiles are equal iff their pips match as an
//! unordered pair.
//!
//! ```
//! use tilechain::Tile;
//!
//! assert_eq!(Tile::new(2, 5), Tile::new(5, 2));
//! assert_eq!(format!("{}", Tile::new(2, 5)), "[2|5]");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::rng::GameRng;

/// An immutable pair of pip values, each in `1..=Tile::MAX_PIP`.
///
/// Equality and hashing are pip-set based, so `hand.contains(&tile)` and
/// first-match removal treat `[2|5]` and `[5|2]` as the same tile.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tile {
    num1: u8,
    num2: u8,
}

impl Tile {
    /// Largest pip value a tile can carry.
    pub const MAX_PIP: u8 = 6;

    /// Create a tile with explicit pips, stored as given.
    ///
    /// Panics if either pip is outside `1..=MAX_PIP`.
    #[must_use]
    pub fn new(num1: u8, num2: u8) -> Self {
        assert!(
            num1 >= 1 && num1 <= Self::MAX_PIP,
            "pip out of range: {}",
            num1
        );
        assert!(
            num2 >= 1 && num2 <= Self::MAX_PIP,
            "pip out of range: {}",
            num2
        );
        Self { num1, num2 }
    }

    /// Create a tile with both pips drawn independently and uniformly
    /// from `1..=MAX_PIP`.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        Self {
            num1: rng.pip(),
            num2: rng.pip(),
        }
    }

    /// First pip, in stored order.
    #[must_use]
    pub const fn num1(self) -> u8 {
        self.num1
    }

    /// Second pip, in stored order. For the newest board tile this is the
    /// open end.
    #[must_use]
    pub const fn num2(self) -> u8 {
        self.num2
    }

    /// The same tile with its pips swapped.
    ///
    /// Pip-set-equal to the original; only the stored orientation changes.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            num1: self.num2,
            num2: self.num1,
        }
    }

    /// Whether both pips are the same value.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.num1 == self.num2
    }

    /// Pips as a (low, high) pair. Canonical form for equality and hashing.
    const fn unordered(self) -> (u8, u8) {
        if self.num1 <= self.num2 {
            (self.num1, self.num2)
        } else {
            (self.num2, self.num1)
        }
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.unordered() == other.unordered()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unordered().hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.num1, self.num2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(tile: Tile) -> u64 {
        let mut hasher = DefaultHasher::new();
        tile.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        #[test]
        fn pip_swapped_tiles_are_equal(a in 1u8..=Tile::MAX_PIP, b in 1u8..=Tile::MAX_PIP) {
            prop_assert_eq!(Tile::new(a, b), Tile::new(b, a));
        }

        #[test]
        fn pip_swapped_tiles_hash_identically(a in 1u8..=Tile::MAX_PIP, b in 1u8..=Tile::MAX_PIP) {
            prop_assert_eq!(hash_of(Tile::new(a, b)), hash_of(Tile::new(b, a)));
        }

        #[test]
        fn random_tiles_are_in_range(seed in any::<u64>()) {
            let mut rng = GameRng::new(seed);
            let tile = Tile::random(&mut rng);
            prop_assert!((1..=Tile::MAX_PIP).contains(&tile.num1()));
            prop_assert!((1..=Tile::MAX_PIP).contains(&tile.num2()));
        }
    }

    #[test]
    fn test_stored_order_preserved() {
        let tile = Tile::new(2, 5);
        assert_eq!(tile.num1(), 2);
        assert_eq!(tile.num2(), 5);
    }

    #[test]
    fn test_distinct_pip_sets_are_unequal() {
        assert_ne!(Tile::new(1, 2), Tile::new(1, 3));
        assert_ne!(Tile::new(2, 2), Tile::new(3, 3));
    }

    #[test]
    fn test_flipped() {
        let tile = Tile::new(2, 5);
        let flipped = tile.flipped();

        assert_eq!(flipped.num1(), 5);
        assert_eq!(flipped.num2(), 2);
        assert_eq!(tile, flipped);
    }

    #[test]
    fn test_is_double() {
        assert!(Tile::new(4, 4).is_double());
        assert!(!Tile::new(4, 5).is_double());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Tile::new(1, 6)), "[1|6]");
        assert_eq!(format!("{}", Tile::new(6, 1)), "[6|1]");
    }

    #[test]
    fn test_serde_round_trip() {
        let tile = Tile::new(3, 6);
        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();

        assert_eq!(tile, deserialized);
        assert_eq!(deserialized.num1(), 3);
    }

    #[test]
    #[should_panic(expected = "pip out of range")]
    fn test_zero_pip_rejected() {
        let _ = Tile::new(0, 3);
    }

    #[test]
    #[should_panic(expected = "pip out of range")]
    fn test_oversized_pip_rejected() {
        let _ = Tile::new(2, Tile::MAX_PIP + 1);
    }
}

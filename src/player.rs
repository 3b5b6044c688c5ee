//! Players and their private hands.
//!
//! A player owns a name and a hand of tiles. Membership is pip-set based
//! and order-insensitive, but duplicate tiles are tracked as distinct
//! removable items. Only the game mutates a hand, one tile per accepted
//! play.

use smallvec::SmallVec;

use crate::rng::GameRng;
use crate::tile::Tile;

/// A named player with a private hand of tiles.
///
/// Hands are bounded in practice (seven tiles at deal), so they live in an
/// inline small vector.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    hand: SmallVec<[Tile; 7]>,
}

impl Player {
    /// Number of tiles dealt to a new player by default.
    pub const STARTING_TILE_COUNT: usize = 7;

    /// Create a player with the default starting hand of random tiles.
    #[must_use]
    pub fn new(name: impl Into<String>, rng: &mut GameRng) -> Self {
        Self::with_tile_count(name, Self::STARTING_TILE_COUNT, rng)
    }

    /// Create a player dealt exactly `tile_count` random tiles.
    #[must_use]
    pub fn with_tile_count(name: impl Into<String>, tile_count: usize, rng: &mut GameRng) -> Self {
        let hand = (0..tile_count).map(|_| Tile::random(rng)).collect();
        Self {
            name: name.into(),
            hand,
        }
    }

    /// Create a player holding exactly the given tiles.
    ///
    /// Used by tests and scripted scenarios that need a known hand.
    #[must_use]
    pub fn with_hand(name: impl Into<String>, tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            name: name.into(),
            hand: tiles.into_iter().collect(),
        }
    }

    /// The player's name. Names are not required to be unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unplayed tiles, in deal order.
    #[must_use]
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    /// Number of unplayed tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.hand.len()
    }

    /// Pip-set containment: holding `[2|5]` counts as holding `[5|2]`.
    #[must_use]
    pub fn has_tile(&self, tile: Tile) -> bool {
        self.hand.contains(&tile)
    }

    /// Whether any hand tile can be laid against `other`'s open end.
    ///
    /// Only `other.num2()` is consulted, never `other.num1()`. The board
    /// keeps its newest tile with the open end stored second, so for board
    /// queries this one-sided check is the whole question; callers passing
    /// an arbitrary tile get the same one-sided behavior.
    #[must_use]
    pub fn has_match_for(&self, other: Tile) -> bool {
        self.hand
            .iter()
            .any(|t| t.num1() == other.num2() || t.num2() == other.num2())
    }

    /// Remove the first tile pip-set-equal to `tile`.
    ///
    /// Returns true if a tile was found and removed. Duplicates lose one
    /// copy per call.
    pub(crate) fn remove_tile(&mut self, tile: Tile) -> bool {
        if let Some(pos) = self.hand.iter().position(|&t| t == tile) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }
}

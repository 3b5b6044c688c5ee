//! High-score records and pluggable persistence backends.
//!
//! The engine never stores scores itself. A collaborator builds a
//! [`HighScore`] from a finished game and hands it to a
//! [`ScoreRepository`], a capability trait with one implementation per
//! backend. Game logic never depends on which backend is chosen.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ScoreError;
use crate::game::{Game, PlayerId};
use crate::player::Player;

/// One completed game's result, as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    /// Winner's name.
    pub name: String,
    /// Loser's remaining tile count at game over.
    pub score: u32,
    /// Completion time, unix seconds.
    pub timestamp: u64,
    /// Free-form victory quote.
    pub quote: String,
}

impl HighScore {
    /// Build a record from a finished game, stamped with the current time.
    ///
    /// Returns `None` while the game is still in progress.
    #[must_use]
    pub fn from_game(game: &Game, quote: impl Into<String>) -> Option<Self> {
        let winner = game.winner()?;
        let score = [PlayerId::new(0), PlayerId::new(1)]
            .into_iter()
            .filter_map(|id| game.player(id))
            .map(Player::tile_count)
            .max()
            .unwrap_or(0) as u32;

        Some(Self {
            name: winner.name().to_string(),
            score,
            timestamp: unix_now(),
            quote: quote.into(),
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Capability interface for score persistence.
pub trait ScoreRepository {
    /// All stored records, oldest first.
    fn list(&self) -> Result<Vec<HighScore>, ScoreError>;

    /// Append one record to the store.
    fn append(&mut self, score: HighScore) -> Result<(), ScoreError>;
}

/// Flat-file backend: one JSON array, read whole and rewritten on append.
///
/// A missing file lists as empty.
#[derive(Clone, Debug)]
pub struct JsonScoreRepository {
    path: PathBuf,
}

impl JsonScoreRepository {
    /// Create a repository backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreRepository for JsonScoreRepository {
    fn list(&self) -> Result<Vec<HighScore>, ScoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn append(&mut self, score: HighScore) -> Result<(), ScoreError> {
        let mut scores = self.list()?;
        scores.push(score);
        let json = serde_json::to_string(&scores)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Embedded binary backend: one bincode-encoded file.
#[derive(Clone, Debug)]
pub struct BinScoreRepository {
    path: PathBuf,
}

impl BinScoreRepository {
    /// Create a repository backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreRepository for BinScoreRepository {
    fn list(&self) -> Result<Vec<HighScore>, ScoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path)?;
        Ok(bincode::deserialize(&bytes)?)
    }

    fn append(&mut self, score: HighScore) -> Result<(), ScoreError> {
        let mut scores = self.list()?;
        scores.push(score);
        let bytes = bincode::serialize(&scores)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    #[test]
    fn test_no_record_while_in_progress() {
        let mut game = Game::new(42);
        game.join(Player::with_hand("Dallan", [Tile::new(1, 2)]))
            .unwrap();
        game.join(Player::with_hand("Jonathan", [Tile::new(1, 3)]))
            .unwrap();

        assert!(HighScore::from_game(&game, "gg").is_none());
    }

    #[test]
    fn test_record_from_finished_game() {
        let mut game = Game::new(42);
        let p1 = game
            .join(Player::with_hand("Dallan", [Tile::new(1, 2)]))
            .unwrap();
        game.join_name("Jonathan").unwrap();
        game.play_tile(p1, Tile::new(1, 2)).unwrap();
        assert!(game.is_game_over());

        let record = HighScore::from_game(&game, "run out").unwrap();
        assert_eq!(record.name, "Dallan");
        assert_eq!(record.score, Player::STARTING_TILE_COUNT as u32);
        assert_eq!(record.quote, "run out");
        assert!(record.timestamp > 0);
    }

    #[test]
    fn test_high_score_serde_round_trip() {
        let record = HighScore {
            name: "Dallan".to_string(),
            score: 5,
            timestamp: 1_700_000_000,
            quote: "blocked!".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: HighScore = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);

        let bytes = bincode::serialize(&record).unwrap();
        let back: HighScore = bincode::deserialize(&bytes).unwrap();
        assert_eq!(record, back);
    }
}

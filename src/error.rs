//! Error types for the engine and its score backends.

use crate::host::GameId;

/// Errors raised by game and host operations.
///
/// Every failure is synchronous and leaves the game unchanged; there is no
/// partial mutation to roll back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// `join` was called with both seats already occupied. Not retryable
    /// against the same game until it is reset.
    #[error("game already has two players")]
    GameFull,

    /// The tile is not in the acting player's hand, neither of its pips
    /// matches the open end, or the seat is vacant. Recoverable: pick a
    /// different tile or player.
    #[error("tile cannot be played")]
    InvalidMove,

    /// A host call named a game that is not in the registry.
    #[error("no game registered as {0}")]
    UnknownGame(GameId),
}

/// Errors raised by score persistence backends.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Bin(#[from] bincode::Error),
}

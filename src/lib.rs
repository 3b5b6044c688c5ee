//! # tilechain
//!
//! A minimal two-player tile-matching game engine.
//!
//! The core is the game-state machine: pip-set tile equivalence, move
//! legality against the board's open end, board mutation, and derived
//! game-over/winner status. Around it sit the thin contracts its
//! collaborators consume: synchronous notification hooks, a score-record
//! with pluggable persistence backends, and a caller-owned hosting
//! registry for multiple game instances.
//!
//! ## Design Principles
//!
//! 1. **Derived, never cached**: playable/game-over/winner are computed
//!    live from the entity state on every query.
//! 2. **No ambient globals**: games, hosts, and RNGs are constructed and
//!    passed explicitly; determinism comes from seeds, not thread-locals.
//! 3. **Hooks fire after mutation**: observers are notified synchronously,
//!    in registration order, only when an operation succeeds.
//!
//! ## Modules
//!
//! - `tile`: pip pairs with order-independent equality and hashing
//! - `player`: names and private hands
//! - `game`: the state machine: join, play, reset, derived status
//! - `hooks`: synchronous observer registries
//! - `rng`: deterministic, forkable randomness for dealing
//! - `error`: engine and persistence error types
//! - `score`: high-score records and the persistence capability trait
//! - `host`: caller-owned registry of game instances
//!
//! ## Example
//!
//! ```
//! use tilechain::{Game, GamePhase, Player, Tile};
//!
//! let mut game = Game::new(42);
//! let p1 = game
//!     .join(Player::with_hand("Dallan", [Tile::new(1, 2), Tile::new(2, 3)]))
//!     .unwrap();
//! game.join(Player::with_hand("Jonathan", [Tile::new(1, 6), Tile::new(3, 5)]))
//!     .unwrap();
//! assert_eq!(game.phase(), GamePhase::Playable);
//!
//! // Board starts [1|1]; open end 1 takes [1|2], then open end 2 takes [2|3].
//! game.play_tile(p1, Tile::new(1, 2)).unwrap();
//! game.play_tile(p1, Tile::new(2, 3)).unwrap();
//!
//! assert_eq!(game.board().len(), 3);
//! assert_eq!(game.phase(), GamePhase::GameOver);
//! assert_eq!(game.winner().unwrap().name(), "Dallan");
//! ```

pub mod error;
pub mod game;
pub mod hooks;
pub mod host;
pub mod player;
pub mod rng;
pub mod score;
pub mod tile;

// Re-export commonly used types
pub use crate::error::{GameError, ScoreError};
pub use crate::game::{Game, GamePhase, PlayerId};
pub use crate::hooks::{HookId, HookRegistry};
pub use crate::host::{GameHost, GameId};
pub use crate::player::Player;
pub use crate::rng::{GameRng, RngState};
pub use crate::score::{BinScoreRepository, HighScore, JsonScoreRepository, ScoreRepository};
pub use crate::tile::Tile;

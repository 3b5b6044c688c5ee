//! The game state machine.
//!
//! A [`Game`] owns up to two players and the shared board: an ordered,
//! append-only sequence of tiles that is never empty (seeded with `[1|1]`
//! at construction and on reset). Callers join players, then submit plays;
//! the game validates each move against the open end, mutates board and
//! hand together, and derives status live from the entity state.
//!
//! ## Invariants
//!
//! - At most two players ever occupy a game; a third join fails.
//! - The board is never empty.
//! - Every tile accepted by [`Game::play_tile`] appears exactly once as the
//!   newest board entry, possibly flipped, with its first pip equal to the
//!   prior open end.
//!
//! ```
//! use tilechain::{Game, Player, Tile};
//!
//! let mut game = Game::new(42);
//! let p1 = game.join(Player::with_hand("Dallan", [Tile::new(2, 1)])).unwrap();
//! game.join_name("Jonathan").unwrap();
//!
//! // Open end is 1; [2|1] goes down flipped as [1|2].
//! game.play_tile(p1, Tile::new(2, 1)).unwrap();
//! assert_eq!(game.open_end(), 2);
//! assert!(game.is_game_over()); // Dallan's hand is empty
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;
use crate::hooks::{HookId, HookRegistry};
use crate::player::Player;
use crate::rng::GameRng;
use crate::tile::Tile;

/// Seat identifier within a single game.
///
/// Only seats 0 and 1 exist; `join` hands them out in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Game phase, derived live from the entity state and never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// No players have joined.
    Empty,
    /// One seat is filled.
    WaitingForSecondPlayer,
    /// Both seats filled and the game is not over.
    Playable,
    /// A hand is empty, or neither player can match the open end.
    GameOver,
}

/// A single two-player tile-matching game.
pub struct Game {
    players: [Option<Player>; 2],
    board: Vec<Tile>,
    rng: GameRng,
    state_changed: HookRegistry,
    board_reset: HookRegistry,
}

impl Game {
    /// Create a game in the reset state: no players, board `[ [1|1] ]`.
    ///
    /// The seed drives every hand dealt through [`Game::join_name`].
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a game dealing from an existing RNG branch.
    ///
    /// A host forks its RNG once per game so instances stay independent
    /// and deterministic.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            players: [None, None],
            board: vec![Self::seed_tile()],
            rng,
            state_changed: HookRegistry::new(),
            board_reset: HookRegistry::new(),
        }
    }

    fn seed_tile() -> Tile {
        Tile::new(1, 1)
    }

    // === Joining ===

    /// Seat a player in the first vacant slot.
    ///
    /// Returns the assigned seat. Fails with [`GameError::GameFull`] when
    /// both seats are occupied, leaving them unchanged. Fires the
    /// state-changed hook on success.
    pub fn join(&mut self, player: Player) -> Result<PlayerId, GameError> {
        let seat = self
            .players
            .iter()
            .position(Option::is_none)
            .ok_or(GameError::GameFull)?;
        self.players[seat] = Some(player);
        self.state_changed.emit();
        Ok(PlayerId::new(seat as u8))
    }

    /// Seat a new player by name, dealt the default starting hand from
    /// this game's RNG.
    pub fn join_name(&mut self, name: impl Into<String>) -> Result<PlayerId, GameError> {
        if self.players.iter().all(Option::is_some) {
            return Err(GameError::GameFull);
        }
        let player = Player::new(name, &mut self.rng);
        self.join(player)
    }

    // === Mutation ===

    /// Clear both seats and reinitialize the board to `[ [1|1] ]`.
    ///
    /// Fires the board-reset hook (not the state-changed hook) so
    /// observers can tell "board reinitialized" from "player joined /
    /// tile played". Registered hooks survive the reset.
    pub fn reset(&mut self) {
        self.players = [None, None];
        self.board = vec![Self::seed_tile()];
        self.board_reset.emit();
    }

    /// Play a tile from the given seat against the open end.
    ///
    /// The tile must be in that player's hand (pip-set equality) and one
    /// of its pips must match the open end. A tile matching with its
    /// second pip is appended flipped, so the newest board tile always
    /// carries the open end second. Fails with [`GameError::InvalidMove`]
    /// otherwise (including when the seat is vacant) with no partial
    /// mutation. Fires the state-changed hook on success.
    pub fn play_tile(&mut self, player: PlayerId, tile: Tile) -> Result<(), GameError> {
        let open_end = self.open_end();
        let hand = self
            .players
            .get_mut(player.index())
            .and_then(Option::as_mut)
            .ok_or(GameError::InvalidMove)?;

        if !hand.has_tile(tile) {
            return Err(GameError::InvalidMove);
        }

        let oriented = if tile.num1() == open_end {
            tile
        } else if tile.num2() == open_end {
            tile.flipped()
        } else {
            return Err(GameError::InvalidMove);
        };

        let removed = hand.remove_tile(tile);
        debug_assert!(removed, "containment was checked above");
        self.board.push(oriented);
        self.state_changed.emit();
        Ok(())
    }

    // === Derived status ===

    /// Both seats occupied and the game is not over.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.players.iter().all(Option::is_some) && !self.is_game_over()
    }

    /// A joined player's hand is empty, or nobody can match the open end.
    ///
    /// Vacant seats contribute false, so the query is safe before both
    /// players join.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        let empty_hand = self
            .players
            .iter()
            .flatten()
            .any(|p| p.tile_count() == 0);
        empty_hand || self.no_one_can_play()
    }

    /// Neither player holds a tile matching the open end.
    ///
    /// False whenever either seat is vacant, regardless of hand contents.
    #[must_use]
    pub fn no_one_can_play(&self) -> bool {
        match (&self.players[0], &self.players[1]) {
            (Some(p1), Some(p2)) => {
                let last = self.last_tile();
                !p1.has_match_for(last) && !p2.has_match_for(last)
            }
            _ => false,
        }
    }

    /// The winning player, present only once the game is over.
    ///
    /// The player with strictly fewer tiles wins; equal counts (a mutual
    /// block) go to the second seat. A lone joined player who emptied
    /// their hand wins by default.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        if !self.is_game_over() {
            return None;
        }
        match (&self.players[0], &self.players[1]) {
            (Some(p1), Some(p2)) => Some(if p1.tile_count() < p2.tile_count() {
                p1
            } else {
                p2
            }),
            (Some(p), None) | (None, Some(p)) => Some(p),
            (None, None) => None,
        }
    }

    /// Current phase, derived from seat occupancy and game-over status.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match self.players.iter().flatten().count() {
            0 => GamePhase::Empty,
            1 => GamePhase::WaitingForSecondPlayer,
            _ if self.is_game_over() => GamePhase::GameOver,
            _ => GamePhase::Playable,
        }
    }

    // === Accessors ===

    /// The played tiles, oldest first. Never empty.
    #[must_use]
    pub fn board(&self) -> &[Tile] {
        &self.board
    }

    /// The pip the next tile must match: the second pip of the newest
    /// board tile.
    #[must_use]
    pub fn open_end(&self) -> u8 {
        self.last_tile().num2()
    }

    /// The player in the given seat, if joined.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index()).and_then(Option::as_ref)
    }

    fn last_tile(&self) -> Tile {
        match self.board.last() {
            Some(&tile) => tile,
            // Seeded at construction and reset; appends only thereafter.
            None => unreachable!("board is never empty"),
        }
    }

    // === Hooks ===

    /// Observe successful joins and plays.
    pub fn on_state_changed(&mut self, handler: impl FnMut() + 'static) -> HookId {
        self.state_changed.register(handler)
    }

    /// Drop a state-changed handler. Returns true if it was registered.
    pub fn remove_state_changed_hook(&mut self, id: HookId) -> bool {
        self.state_changed.remove(id)
    }

    /// Observe board reinitialization.
    pub fn on_board_reset(&mut self, handler: impl FnMut() + 'static) -> HookId {
        self.board_reset.register(handler)
    }

    /// Drop a board-reset handler. Returns true if it was registered.
    pub fn remove_board_reset_hook(&mut self, id: HookId) -> bool {
        self.board_reset.remove(id)
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("board", &self.board)
            .field("phase", &self.phase())
            .finish()
    }
}

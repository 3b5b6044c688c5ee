//! Hosting registry for multiple concurrent game instances.
//!
//! A [`GameHost`] is an explicitly constructed, caller-owned collection of
//! games, never a process-wide singleton. Every delegated call is an atomic,
//! serialized operation against one instance; the `&mut self` receivers
//! make that exclusivity structural. A transport layer (not part of this
//! crate) is expected to deliver calls one at a time per host.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;
use crate::game::{Game, PlayerId};
use crate::hooks::{HookId, HookRegistry};
use crate::player::Player;
use crate::rng::GameRng;
use crate::tile::Tile;

/// Identifier for a game within a host's registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u32);

impl GameId {
    /// Create a new game ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Registry of independently dealt game instances.
#[derive(Debug)]
pub struct GameHost {
    games: FxHashMap<GameId, Game>,
    rng: GameRng,
    next_id: u32,
    host_changed: HookRegistry,
}

impl GameHost {
    /// Create an empty host. The seed drives every game it deals.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            games: FxHashMap::default(),
            rng: GameRng::new(seed),
            next_id: 0,
            host_changed: HookRegistry::new(),
        }
    }

    // === Registry ===

    /// Create a new game, dealt from its own RNG branch.
    ///
    /// Fires the host-changed hook.
    pub fn create_game(&mut self) -> GameId {
        let id = GameId::new(self.next_id);
        self.next_id += 1;
        let game = Game::from_rng(self.rng.fork());
        self.games.insert(id, game);
        self.host_changed.emit();
        id
    }

    /// Drop a game from the registry.
    ///
    /// Returns true (and fires the host-changed hook) if it existed.
    pub fn remove_game(&mut self, id: GameId) -> bool {
        let removed = self.games.remove(&id).is_some();
        if removed {
            self.host_changed.emit();
        }
        removed
    }

    /// Look up a game.
    #[must_use]
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    /// Look up a game for mutation.
    pub fn game_mut(&mut self, id: GameId) -> Option<&mut Game> {
        self.games.get_mut(&id)
    }

    /// IDs of all registered games, in no particular order.
    pub fn game_ids(&self) -> impl Iterator<Item = GameId> + '_ {
        self.games.keys().copied()
    }

    /// Number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether no games are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    // === Delegated operations ===

    fn entry(&mut self, id: GameId) -> Result<&mut Game, GameError> {
        self.games.get_mut(&id).ok_or(GameError::UnknownGame(id))
    }

    /// Seat a player in the named game.
    pub fn join(&mut self, id: GameId, player: Player) -> Result<PlayerId, GameError> {
        self.entry(id)?.join(player)
    }

    /// Seat a new player by name in the named game.
    pub fn join_name(&mut self, id: GameId, name: impl Into<String>) -> Result<PlayerId, GameError> {
        self.entry(id)?.join_name(name)
    }

    /// Play a tile in the named game.
    pub fn play_tile(&mut self, id: GameId, player: PlayerId, tile: Tile) -> Result<(), GameError> {
        self.entry(id)?.play_tile(player, tile)
    }

    /// Reset the named game.
    pub fn reset(&mut self, id: GameId) -> Result<(), GameError> {
        self.entry(id)?.reset();
        Ok(())
    }

    // === Hooks ===

    /// Observe games being created and removed.
    pub fn on_host_changed(&mut self, handler: impl FnMut() + 'static) -> HookId {
        self.host_changed.register(handler)
    }

    /// Drop a host-changed handler. Returns true if it was registered.
    pub fn remove_host_changed_hook(&mut self, id: HookId) -> bool {
        self.host_changed.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_lookup() {
        let mut host = GameHost::new(42);
        assert!(host.is_empty());

        let a = host.create_game();
        let b = host.create_game();

        assert_ne!(a, b);
        assert_eq!(host.len(), 2);
        assert!(host.game(a).is_some());
        assert!(host.game(b).is_some());
    }

    #[test]
    fn test_games_deal_independent_hands() {
        let mut host = GameHost::new(42);
        let a = host.create_game();
        let b = host.create_game();

        host.join_name(a, "Dallan").unwrap();
        host.join_name(b, "Dallan").unwrap();

        let hand_a = host.game(a).unwrap().player(PlayerId::new(0)).unwrap().hand().to_vec();
        let hand_b = host.game(b).unwrap().player(PlayerId::new(0)).unwrap().hand().to_vec();

        // Forked branches: same host seed, different games, different deals.
        assert_ne!(hand_a, hand_b);
    }

    #[test]
    fn test_host_is_deterministic() {
        let deal = |seed| {
            let mut host = GameHost::new(seed);
            let id = host.create_game();
            host.join_name(id, "Dallan").unwrap();
            host.game(id).unwrap().player(PlayerId::new(0)).unwrap().hand().to_vec()
        };

        assert_eq!(deal(42), deal(42));
        assert_ne!(deal(42), deal(43));
    }

    #[test]
    fn test_unknown_game_errors() {
        let mut host = GameHost::new(42);
        let missing = GameId::new(99);

        assert_eq!(
            host.join_name(missing, "Dallan"),
            Err(GameError::UnknownGame(missing))
        );
        assert_eq!(
            host.play_tile(missing, PlayerId::new(0), Tile::new(1, 1)),
            Err(GameError::UnknownGame(missing))
        );
        assert_eq!(host.reset(missing), Err(GameError::UnknownGame(missing)));
    }

    #[test]
    fn test_remove_game() {
        let mut host = GameHost::new(42);
        let id = host.create_game();

        assert!(host.remove_game(id));
        assert!(!host.remove_game(id));
        assert!(host.game(id).is_none());
    }

    #[test]
    fn test_host_changed_hook() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut host = GameHost::new(42);
        let fired = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&fired);
        host.on_host_changed(move || *counter.borrow_mut() += 1);

        let id = host.create_game();
        host.remove_game(id);
        host.remove_game(id); // no-op, no event

        assert_eq!(*fired.borrow(), 2);
    }
}

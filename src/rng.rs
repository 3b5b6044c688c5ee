//! Deterministic random number generation for dealing tiles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical deal sequence
//! - **Forkable**: A host can give each game its own independent branch
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use tilechain::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for a new game instance
//! let mut game_rng = rng.fork();
//!
//! // Original and fork produce different sequences
//! assert_ne!(
//!     (0..8).map(|_| rng.pip()).collect::<Vec<_>>(),
//!     (0..8).map(|_| game_rng.pip()).collect::<Vec<_>>(),
//! );
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::tile::Tile;

/// Deterministic RNG with forking for independent game instances.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// A host uses this to deal every game from its own branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Draw a single pip value, uniform in `1..=Tile::MAX_PIP`.
    pub fn pip(&mut self) -> u8 {
        self.inner.gen_range(1..=Tile::MAX_PIP)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> RngState {
        RngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &RngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.pip(), rng2.pip());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.pip()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.pip()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pip_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let pip = rng.pip();
            assert!((1..=Tile::MAX_PIP).contains(&pip));
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..20).map(|_| rng.pip()).collect();
        let seq2: Vec<_> = (0..20).map(|_| forked.pip()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.pip();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.pip()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.pip()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = RngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: RngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}

//! Seeded ChaCha8 stream behind the dice and the AI's coin flips.
//!
//! A stream is fully described by its seed, its word position and how many
//! times it has been forked, so snapshots store those three numbers and
//! resume mid-game with the same upcoming rolls.
//!
//! ```
//! use tavla::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let die = rng.roll_die();
//! assert!((1..=6).contains(&die));
//!
//! // Same seed, same sequence
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Dice stream owned by a [`Game`](crate::game::Game) or an AI strategy.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Seed a new dice stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let inner = ChaCha8Rng::seed_from_u64(seed);
        Self { inner, seed, forks: 0 }
    }

    /// Derive an independent stream, e.g. for an AI player.
    ///
    /// Forking never advances this stream's dice; the n-th fork of a given
    /// seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed ^ self.forks.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Roll one fair six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// `true` with the given probability, clamped to [0, 1].
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Uniform pick from a slice; `None` when it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            position: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Resume a stream captured with [`GameRng::state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.position);
        rng.forks = state.forks;
        rng
    }
}

/// Checkpoint of a [`GameRng`], stored in game snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha word position.
    pub position: u128,
    pub forks: u64,
}

//! AI configuration parameters.

use serde::{Deserialize, Serialize};

use crate::eval::EvalWeights;

/// Strength tiers offered to players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Mostly random, sometimes greedy.
    Easy,
    /// Greedy rubric.
    #[default]
    Medium,
    /// Minimax, depth 2.
    Hard,
    /// Minimax, depth 3.
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Display name for menus and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy AI",
            Difficulty::Medium => "Medium AI",
            Difficulty::Hard => "Hard AI",
            Difficulty::Expert => "Expert AI",
        }
    }
}

/// Parameters of the single move-choosing algorithm.
///
/// `depth > 0` selects minimax; otherwise the move is greedy, replaced by
/// a uniformly random legal move with probability `random_ratio`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimax depth (0 = no lookahead).
    /// Each level averages over the opponent's 21 distinct rolls.
    pub depth: u32,

    /// Probability of playing a random move instead of the greedy one.
    /// Ignored when `depth > 0`.
    pub random_ratio: f64,

    /// Seed for the AI's own RNG.
    pub seed: u64,

    /// Weights for the static evaluator at search leaves.
    pub weights: EvalWeights,

    /// Cache expectation nodes keyed on (board, side to roll, depth).
    pub memoize: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 0,
            random_ratio: 0.0,
            seed: 42,
            weights: EvalWeights::default(),
            memoize: true,
        }
    }
}

impl SearchConfig {
    /// Create a greedy config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for a difficulty tier.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let config = Self::default();
        match difficulty {
            Difficulty::Easy => config.with_random_ratio(0.7),
            Difficulty::Medium => config,
            Difficulty::Hard => config.with_depth(2),
            Difficulty::Expert => config.with_depth(3),
        }
    }

    /// Set the minimax depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the random-move probability.
    pub fn with_random_ratio(mut self, ratio: f64) -> Self {
        self.random_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the evaluator weights.
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Enable or disable memoization.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}

//! Move-choosing strategies.

use super::config::{Difficulty, SearchConfig};
use super::greedy::best_greedy_move;
use super::search::MinimaxSearch;
use crate::core::{GameRng, Move};
use crate::game::Game;

/// The closed set of AI strategies.
///
/// All variants are configurations of one algorithm family; build them
/// from a [`SearchConfig`] or a [`Difficulty`].
#[derive(Clone, Debug)]
pub enum Strategy {
    /// Uniform choice among legal moves.
    Random { rng: GameRng },

    /// Highest greedy rubric score.
    Greedy,

    /// Random with probability `random_ratio`, greedy otherwise.
    Mixed { random_ratio: f64, rng: GameRng },

    /// Depth-limited minimax with dice averaging.
    Minimax(MinimaxSearch),
}

impl Strategy {
    /// Uniform random play.
    pub fn random(seed: u64) -> Self {
        Strategy::Random {
            rng: GameRng::new(seed),
        }
    }

    pub fn greedy() -> Self {
        Strategy::Greedy
    }

    /// Random with probability `random_ratio`, greedy otherwise.
    pub fn mixed(random_ratio: f64, seed: u64) -> Self {
        Strategy::Mixed {
            random_ratio: random_ratio.clamp(0.0, 1.0),
            rng: GameRng::new(seed),
        }
    }

    /// Minimax at the given depth with default weights.
    pub fn minimax(depth: u32) -> Self {
        Strategy::Minimax(MinimaxSearch::new(SearchConfig::new().with_depth(depth)))
    }

    /// Build the strategy a configuration describes.
    pub fn from_config(config: SearchConfig) -> Self {
        if config.depth > 0 {
            return Strategy::Minimax(MinimaxSearch::new(config));
        }
        if config.random_ratio >= 1.0 {
            Strategy::random(config.seed)
        } else if config.random_ratio > 0.0 {
            Strategy::mixed(config.random_ratio, config.seed)
        } else {
            Strategy::Greedy
        }
    }

    /// Strategy for a difficulty tier, seeded with `seed`.
    pub fn for_difficulty(difficulty: Difficulty, seed: u64) -> Self {
        Self::from_config(SearchConfig::for_difficulty(difficulty).with_seed(seed))
    }

    /// Choose a move for the side to move in `game`.
    ///
    /// Returns `None` only when there is no legal move (including before
    /// the roll and after the game ends).
    pub fn choose_move(&mut self, game: &Game) -> Option<Move> {
        match self {
            Strategy::Random { rng } => {
                let moves = game.legal_moves(None);
                rng.choose(&moves).copied()
            }
            Strategy::Greedy => greedy(game),
            Strategy::Mixed { random_ratio, rng } => {
                if rng.gen_bool(*random_ratio) {
                    let moves = game.legal_moves(None);
                    rng.choose(&moves).copied()
                } else {
                    greedy(game)
                }
            }
            Strategy::Minimax(search) => search.choose_move(game),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Strategy::Random { .. } => "Random AI".to_string(),
            Strategy::Greedy => "Greedy AI".to_string(),
            Strategy::Mixed { random_ratio, .. } => {
                format!("Mixed AI ({:.0}% random)", random_ratio * 100.0)
            }
            Strategy::Minimax(search) => format!("Minimax AI (depth {})", search.depth()),
        }
    }
}

fn greedy(game: &Game) -> Option<Move> {
    let moves = game.legal_moves(None);
    best_greedy_move(game.board(), game.current_player(), &moves)
}

//! AI opponents.
//!
//! ## Strategies
//!
//! - **Random**: uniform over legal moves
//! - **Greedy**: fixed one-ply rubric ([`greedy_score`])
//! - **Mixed**: random with a probability, greedy otherwise
//! - **Minimax**: depth-limited search averaging over dice rolls
//!
//! [`Difficulty`] maps the four tiers onto these through [`SearchConfig`].

pub mod config;
pub mod greedy;
pub mod player;
pub mod search;
pub mod stats;
pub mod strategy;

pub use config::{Difficulty, SearchConfig};
pub use greedy::{best_greedy_move, greedy_score};
pub use player::AiPlayer;
pub use search::{MinimaxSearch, WIN_SCORE};
pub use stats::SearchStats;
pub use strategy::Strategy;

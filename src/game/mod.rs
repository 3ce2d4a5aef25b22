//! The turn state machine and session bookkeeping.
//!
//! [`Game`] is the single source of truth for one session: it owns the
//! board, dice, phase and history, and validates every command against
//! fresh state.

pub mod phase;
pub mod self_play;
pub mod snapshot;
pub mod stats;
pub mod turn;

pub use phase::Phase;
pub use self_play::{play_game, play_match, MatchConfig, MatchResult};
pub use snapshot::{GameSnapshot, GameSummary};
pub use stats::GameStats;
pub use turn::Game;

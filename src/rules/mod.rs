//! Move legality and game-end rules.
//!
//! - [`legal_moves`] enumerates every playable single move for a player
//!   given the unconsumed dice, honouring bar priority, hits and bear-off.
//! - [`outcome`] reports a finished game.
//!
//! Both are pure queries over a [`crate::board::Board`]; an empty move list
//! is a normal result, not an error.

pub mod engine;
pub mod legality;

pub use engine::{outcome, Outcome};
pub use legality::{can_move, legal_moves};

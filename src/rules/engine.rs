//! Game-end detection.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Player, PIECES_PER_PLAYER};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player who bore off all fifteen pieces.
    Winner(Player),
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            Outcome::Winner(p) => *p == player,
        }
    }

    /// The winning player.
    #[must_use]
    pub fn winner(&self) -> Player {
        match self {
            Outcome::Winner(p) => *p,
        }
    }
}

/// Check if the game is over.
///
/// Returns `Some(outcome)` once either player has borne off fifteen pieces.
/// White is checked first; both finishing at once cannot happen in play.
#[must_use]
pub fn outcome(board: &Board) -> Option<Outcome> {
    Player::ALL
        .into_iter()
        .find(|&player| board.home_count(player) >= PIECES_PER_PLAYER)
        .map(Outcome::Winner)
}

//! Piece accounting and the fifteen-piece invariant.

use serde::{Deserialize, Serialize};

use super::model::{Board, SLOT_COUNT};
use crate::core::{Player, PIECES_PER_PLAYER, POINT_COUNT};
use crate::error::BoardError;

/// Where a player's pieces currently are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceTally {
    /// Pieces on playable points.
    pub board: u32,
    /// Pieces on the bar.
    pub bar: u32,
    /// Pieces borne off.
    pub home: u32,
}

impl PieceTally {
    /// Sum over all locations. Fifteen on any reachable board.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.board + self.bar + self.home
    }
}

impl Board {
    /// Count `player`'s pieces by location.
    #[must_use]
    pub fn tally(&self, player: Player) -> PieceTally {
        PieceTally {
            board: self
                .occupied_points(player)
                .map(|(_, count)| u32::from(count))
                .sum(),
            bar: u32::from(self.bar_count(player)),
            home: u32::from(self.home_count(player)),
        }
    }

    /// Check every structural invariant.
    ///
    /// - each slot's owner is set exactly when its count is non-zero
    /// - bars and trays only hold their own player's pieces
    /// - each player has exactly fifteen pieces
    pub fn validate(&self) -> Result<(), BoardError> {
        for (index, slot) in self.slots().iter().enumerate() {
            if !slot.is_consistent() {
                return Err(BoardError::OwnerMismatch {
                    slot: index,
                    count: slot.count(),
                    owner: slot.owner(),
                });
            }
        }

        for index in usize::from(POINT_COUNT)..SLOT_COUNT {
            let reserved_for = if index == Player::White.bar_slot() || index == Player::White.home_slot() {
                Player::White
            } else {
                Player::Black
            };
            if let Some(owner) = self.slot(index).owner() {
                if owner != reserved_for {
                    return Err(BoardError::ForeignPieces {
                        slot: index,
                        expected: reserved_for,
                        found: owner,
                    });
                }
            }
        }

        for player in Player::ALL {
            let total = self.tally(player).total();
            if total != u32::from(PIECES_PER_PLAYER) {
                return Err(BoardError::PieceCount {
                    player,
                    found: total,
                });
            }
        }

        Ok(())
    }
}

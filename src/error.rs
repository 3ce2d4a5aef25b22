//! Error types for the fallible boundaries of the engine.
//!
//! Rule queries and commands never fail with an error: illegal moves and
//! out-of-phase commands are reported as `false`/`None`. Errors are only
//! produced when restoring state from outside (snapshots, slot lists) or
//! when the piece-count validator finds a logic defect.

use crate::core::{Player, Source};
use crate::game::Phase;

/// A board that breaks a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A serialized board did not have one entry per slot.
    #[display("Expected {} slots, found {}", expected, found)]
    SlotCount {
        /// Required slot count.
        expected: usize,
        /// Slot count supplied.
        found: usize,
    },

    /// A slot with pieces has no owner, or an empty slot has one.
    #[display("Slot {} has count {} but owner {:?}", slot, count, owner)]
    OwnerMismatch {
        /// Slot index.
        slot: usize,
        /// Piece count in the slot.
        count: u8,
        /// Recorded owner.
        owner: Option<Player>,
    },

    /// A bar or borne-off slot holds the other player's pieces.
    #[display("Slot {} belongs to {} but holds {} pieces", slot, expected, found)]
    ForeignPieces {
        /// Slot index.
        slot: usize,
        /// Player the slot is reserved for.
        expected: Player,
        /// Player whose pieces were found.
        found: Player,
    },

    /// A player does not have exactly fifteen pieces.
    #[display("{} has {} pieces, expected 15", player, found)]
    PieceCount {
        /// Offending player.
        player: Player,
        /// Pieces counted across all slots.
        found: u32,
    },
}

impl std::error::Error for BoardError {}

/// Failure to encode or restore a game snapshot.
#[derive(Debug, derive_more::Display)]
pub enum SnapshotError {
    /// Binary encoding failed.
    #[display("Snapshot encoding failed: {}", _0)]
    Encode(bincode::Error),

    /// Binary decoding failed.
    #[display("Snapshot decoding failed: {}", _0)]
    Decode(bincode::Error),

    /// The decoded board is not a reachable position.
    #[display("Invalid board in snapshot: {}", _0)]
    Board(BoardError),

    /// Remaining move credits do not fit the recorded dice.
    #[display("Remaining dice {:?} do not match roll {:?}", remaining, dice)]
    Credits {
        /// Recorded roll.
        dice: Option<[u8; 2]>,
        /// Recorded remaining credits.
        remaining: Vec<u8>,
    },

    /// Phase, winner and selection do not describe one game state.
    #[display("Phase {:?} conflicts with winner {:?} and selection {:?}", phase, winner, selected)]
    Phase {
        /// Recorded phase.
        phase: Phase,
        /// Recorded winner.
        winner: Option<Player>,
        /// Recorded selected origin.
        selected: Option<Source>,
    },
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Encode(e) | SnapshotError::Decode(e) => Some(&**e),
            SnapshotError::Board(e) => Some(e),
            SnapshotError::Credits { .. } | SnapshotError::Phase { .. } => None,
        }
    }
}

impl From<BoardError> for SnapshotError {
    fn from(err: BoardError) -> Self {
        SnapshotError::Board(err)
    }
}

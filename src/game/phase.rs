//! Turn phases.

use serde::{Deserialize, Serialize};

/// Discrete phase of the turn state machine.
///
/// ```text
/// AwaitingRoll -> SelectingOrigin <-> SelectingDestination
///       ^               |
///       +-- end_turn ---+            any -> Finished (win)
/// ```
///
/// Serializes as `"awaiting_roll"`, `"selecting_origin"`,
/// `"selecting_destination"` and `"finished"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the active player to roll.
    #[default]
    AwaitingRoll,
    /// Dice rolled; the active player picks a piece.
    SelectingOrigin,
    /// A piece is picked; the active player picks where it goes.
    SelectingDestination,
    /// Someone has borne off all fifteen pieces.
    Finished,
}

impl Phase {
    /// Whether moves may be applied in this phase.
    #[must_use]
    pub fn accepts_moves(self) -> bool {
        matches!(self, Phase::SelectingOrigin | Phase::SelectingDestination)
    }

    /// Stable token used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::AwaitingRoll => "awaiting_roll",
            Phase::SelectingOrigin => "selecting_origin",
            Phase::SelectingDestination => "selecting_destination",
            Phase::Finished => "finished",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

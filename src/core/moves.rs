//! Move representation: origin, destination, and the die consumed.
//!
//! Origins and destinations are either playable points or one of two
//! off-board locations. The bar can only be an origin and the borne-off
//! tray can only be a destination, so each side gets its own enum:
//! - "Enter from the bar" = `Source::Bar` → `Target::Point(p)`
//! - "Advance" = `Source::Point(a)` → `Target::Point(b)`
//! - "Bear off" = `Source::Point(a)` → `Target::BorneOff`

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Where a moving piece comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// The mover's bar.
    Bar,
    /// A playable point (0-23).
    Point(u8),
}

impl Source {
    /// The point index, if this is a playable point.
    #[must_use]
    pub fn point(self) -> Option<u8> {
        match self {
            Source::Point(p) => Some(p),
            Source::Bar => None,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Bar => write!(f, "Bar"),
            Source::Point(p) => write!(f, "P{}", p + 1),
        }
    }
}

/// Where a moving piece ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// A playable point (0-23).
    Point(u8),
    /// The mover's borne-off tray.
    BorneOff,
}

impl Target {
    /// The point index, if this is a playable point.
    #[must_use]
    pub fn point(self) -> Option<u8> {
        match self {
            Target::Point(p) => Some(p),
            Target::BorneOff => None,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Point(p) => write!(f, "P{}", p + 1),
            Target::BorneOff => write!(f, "Off"),
        }
    }
}

/// A single checker move.
///
/// Moves are value-equal when origin, destination and die all match.
///
/// ```
/// use tavla::core::{Move, Source, Target};
///
/// let enter = Move::new(Source::Bar, Target::Point(2), 3);
/// assert_eq!(enter.to_string(), "Bar -> P3 (3)");
///
/// let off = Move::new(Source::Point(18), Target::BorneOff, 6);
/// assert_eq!(off.to_string(), "P19 -> Off (6)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Origin of the moving piece.
    pub from: Source,
    /// Destination of the moving piece.
    pub to: Target,
    /// Pip value consumed (1-6).
    pub die: u8,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(from: Source, to: Target, die: u8) -> Self {
        Self { from, to, die }
    }

    /// Whether this move enters a piece from the bar.
    #[must_use]
    pub fn is_bar_entry(&self) -> bool {
        self.from == Source::Bar
    }

    /// Whether this move bears a piece off.
    #[must_use]
    pub fn is_bear_off(&self) -> bool {
        self.to == Target::BorneOff
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.die)
    }
}

/// A played move with metadata for history tracking.
///
/// Used for replay, debugging and the host's move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The move played.
    pub mv: Move,

    /// Whether the move hit an opposing blot.
    pub hit: bool,

    /// Turn number when the move was played.
    pub turn: u32,

    /// Sequence number within the game (for ordering).
    pub sequence: u32,
}

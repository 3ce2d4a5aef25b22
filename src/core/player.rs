//! Sides, their directions of travel, and two-entry per-side storage.
//!
//! The two sides of a Tavla game. Direction of travel is the only asymmetry:
//! White advances from point 0 towards point 23 and bears off past 23,
//! Black advances from point 23 towards point 0 and bears off below 0.
//!
//! [`PlayerMap`] holds one value per side and is indexed by [`Player`].

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};

/// Number of playable points on the board.
pub const POINT_COUNT: u8 = 24;

/// Pieces each player owns for the whole game.
pub const PIECES_PER_PLAYER: u8 = 15;

/// One of the two sides.
///
/// Serializes as the stable tokens `"white"` and `"black"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// First mover, travels 0 → 23.
    White,
    /// Second mover, travels 23 → 0.
    Black,
}

impl Player {
    /// Both players, first mover first.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Storage index (White = 0, Black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// Step direction along the point indices.
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Slot index of this player's bar.
    #[must_use]
    pub const fn bar_slot(self) -> usize {
        match self {
            Player::White => 24,
            Player::Black => 25,
        }
    }

    /// Slot index of this player's borne-off tray.
    #[must_use]
    pub const fn home_slot(self) -> usize {
        match self {
            Player::White => 26,
            Player::Black => 27,
        }
    }

    /// The six points nearest this player's bear-off edge.
    #[must_use]
    pub const fn home_range(self) -> RangeInclusive<u8> {
        match self {
            Player::White => 18..=23,
            Player::Black => 0..=5,
        }
    }

    /// Whether `point` lies inside this player's home region.
    #[must_use]
    pub fn is_home_point(self, point: u8) -> bool {
        self.home_range().contains(&point)
    }

    /// Point a piece enters on from the bar with the given die.
    #[must_use]
    pub const fn entry_point(self, die: u8) -> u8 {
        match self {
            Player::White => die - 1,
            Player::Black => POINT_COUNT - die,
        }
    }

    /// Raw forward target from `point` with the given die.
    ///
    /// May fall outside `0..24`; the caller decides whether that is a
    /// bear-off or an illegal move.
    #[must_use]
    pub const fn advance(self, point: u8, die: u8) -> i8 {
        point as i8 + self.direction() * die as i8
    }

    /// The off-board index reached by an exact bear-off.
    #[must_use]
    pub const fn bear_off_edge(self) -> i8 {
        match self {
            Player::White => POINT_COUNT as i8,
            Player::Black => -1,
        }
    }

    /// How far `point` has advanced from this player's starting edge (0-23).
    #[must_use]
    pub const fn progress(self, point: u8) -> u8 {
        match self {
            Player::White => point,
            Player::Black => POINT_COUNT - 1 - point,
        }
    }

    /// Stable token used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Player::White => "white",
            Player::Black => "black",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// One value per side, indexed by [`Player`].
///
/// ```
/// use tavla::core::{Player, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
/// wins[Player::Black] += 1;
///
/// assert_eq!(wins[Player::White], 0);
/// assert_eq!(wins[Player::Black], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Build both entries by calling `factory` once per side, White first.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::White), factory(Player::Black)],
        }
    }

    /// Both sides start from a clone of `value`.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Entries paired with their side, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

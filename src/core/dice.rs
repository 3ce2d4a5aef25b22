//! Dice rolls and move credits.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;

/// Unconsumed move credits for a turn: two values, or four for a double.
pub type Credits = SmallVec<[u8; 4]>;

/// A roll of two six-sided dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    /// First die (1-6).
    pub first: u8,
    /// Second die (1-6).
    pub second: u8,
}

impl Dice {
    /// Create a roll from two die values.
    ///
    /// Panics if either value is outside 1-6.
    #[must_use]
    pub fn new(first: u8, second: u8) -> Self {
        assert!((1..=6).contains(&first), "Die value must be 1-6, got {first}");
        assert!((1..=6).contains(&second), "Die value must be 1-6, got {second}");
        Self { first, second }
    }

    /// Create a roll from values relayed from outside.
    ///
    /// Returns `None` if either value is outside 1-6.
    #[must_use]
    pub fn try_new(first: u8, second: u8) -> Option<Self> {
        let face = 1..=6;
        (face.contains(&first) && face.contains(&second)).then_some(Self { first, second })
    }

    /// Draw two independent uniform dice.
    pub fn roll(rng: &mut GameRng) -> Self {
        Self {
            first: rng.roll_die(),
            second: rng.roll_die(),
        }
    }

    /// Whether both dice show the same value.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.first == self.second
    }

    /// Move credits granted by this roll.
    #[must_use]
    pub fn credits(&self) -> Credits {
        if self.is_double() {
            smallvec::smallvec![self.first; 4]
        } else {
            smallvec::smallvec![self.first, self.second]
        }
    }

    /// The 21 distinct rolls with their weight out of 36.
    ///
    /// Doubles occur once in 36, every other unordered pair twice.
    pub fn outcomes() -> impl Iterator<Item = (Dice, u32)> {
        (1..=6u8).flat_map(|first| {
            (first..=6u8).map(move |second| {
                let weight = if first == second { 1 } else { 2 };
                (Dice { first, second }, weight)
            })
        })
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

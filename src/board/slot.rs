//! A single board location: piece count plus owner.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// One addressable board location.
///
/// The owner is `None` exactly when the count is zero. Fields are private so
/// every mutation goes through methods that keep the pair consistent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    count: u8,
    owner: Option<Player>,
}

impl Slot {
    /// An empty slot.
    pub const EMPTY: Slot = Slot {
        count: 0,
        owner: None,
    };

    /// A slot holding `count` pieces of `player` (empty if `count` is 0).
    #[must_use]
    pub fn with_pieces(player: Player, count: u8) -> Self {
        if count == 0 {
            Self::EMPTY
        } else {
            Self {
                count,
                owner: Some(player),
            }
        }
    }

    /// Number of pieces in the slot.
    #[must_use]
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Owner of the pieces, `None` when empty.
    #[must_use]
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    /// Pieces held by `player` (0 if owned by the other side).
    #[must_use]
    pub fn count_for(&self, player: Player) -> u8 {
        if self.owner == Some(player) {
            self.count
        } else {
            0
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Two or more pieces: cannot be hit.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.count >= 2
    }

    /// Exactly one piece: can be hit.
    #[must_use]
    pub fn is_blot(&self) -> bool {
        self.count == 1
    }

    /// Whether `player` may land here: empty, own, or an opposing blot.
    #[must_use]
    pub fn can_land(&self, player: Player) -> bool {
        self.is_empty() || self.owner == Some(player) || self.is_blot()
    }

    /// Whether count and owner agree.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        (self.count == 0) == self.owner.is_none()
    }

    /// Add one piece of `player`. Fails if the slot holds opposing pieces.
    pub(crate) fn add(&mut self, player: Player) -> bool {
        match self.owner {
            None => {
                self.count = 1;
                self.owner = Some(player);
                true
            }
            Some(owner) if owner == player => {
                self.count += 1;
                true
            }
            Some(_) => false,
        }
    }

    /// Remove one piece. Fails on an empty slot.
    pub(crate) fn remove(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.count -= 1;
        if self.count == 0 {
            self.owner = None;
        }
        true
    }

    /// Empty the slot, returning how many pieces it held.
    pub(crate) fn clear(&mut self) -> u8 {
        let count = self.count;
        *self = Self::EMPTY;
        count
    }
}

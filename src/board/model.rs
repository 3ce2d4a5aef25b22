//! The 28-slot board: 24 points, two bars, two borne-off trays.
//!
//! ## Slot layout
//!
//! | Index  | Meaning              |
//! |--------|----------------------|
//! | 0-23   | playable points      |
//! | 24     | White bar            |
//! | 25     | Black bar            |
//! | 26     | White borne off      |
//! | 27     | Black borne off      |
//!
//! The board is a plain value: `clone()` is a full positional copy, which
//! is what the search relies on for speculative moves.

use serde::{Deserialize, Serialize};

use super::slot::Slot;
use crate::core::{Player, Source, Target, POINT_COUNT};
use crate::error::BoardError;

/// Total number of slots.
pub const SLOT_COUNT: usize = 28;

/// Opening distribution as (progress from the player's back edge, count).
///
/// White's progress equals the point index; Black's is mirrored.
const OPENING: [(u8, u8); 4] = [(0, 2), (11, 5), (16, 3), (18, 5)];

/// Board state for both players.
///
/// Serializes as an ordered list of 28 `{ count, owner }` pairs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Slot>", try_from = "Vec<Slot>")]
pub struct Board {
    slots: [Slot; SLOT_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board in the standard opening position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize_standard_layout();
        board
    }

    /// A board with no pieces at all.
    ///
    /// Use with [`Board::place`] to build custom positions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slots: [Slot::EMPTY; SLOT_COUNT],
        }
    }

    /// Reset every slot and place the standard opening distribution.
    pub fn initialize_standard_layout(&mut self) {
        self.slots = [Slot::EMPTY; SLOT_COUNT];

        for player in Player::ALL {
            for (progress, count) in OPENING {
                let point = match player {
                    Player::White => progress,
                    Player::Black => POINT_COUNT - 1 - progress,
                };
                self.slots[point as usize] = Slot::with_pieces(player, count);
            }
        }
    }

    /// Overwrite a slot with `count` pieces of `player` (0 empties it).
    ///
    /// Bypasses the piece-count invariant; callers building positions are
    /// expected to run [`Board::validate`] when done.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`SLOT_COUNT`].
    pub fn place(&mut self, slot: usize, player: Player, count: u8) -> &mut Self {
        self.slots[slot] = Slot::with_pieces(player, count);
        self
    }

    // === Queries ===

    /// Borrow a slot by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`SLOT_COUNT`].
    #[must_use]
    pub fn slot(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    /// All slots in index order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Pieces `player` has in `slot` (0 if owned by the opponent).
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`SLOT_COUNT`].
    #[must_use]
    pub fn piece_count(&self, slot: usize, player: Player) -> u8 {
        self.slots[slot].count_for(player)
    }

    /// Whether `player` has at least one piece in `slot`.
    #[must_use]
    pub fn has_pieces(&self, slot: usize, player: Player) -> bool {
        self.piece_count(slot, player) > 0
    }

    /// Pieces waiting on `player`'s bar.
    #[must_use]
    pub fn bar_count(&self, player: Player) -> u8 {
        self.piece_count(player.bar_slot(), player)
    }

    /// Pieces `player` has borne off.
    #[must_use]
    pub fn home_count(&self, player: Player) -> u8 {
        self.piece_count(player.home_slot(), player)
    }

    /// Whether `player` may land on `point`.
    ///
    /// True for an empty point, an own point, or an opposing blot.
    /// Always false for indices off the playable board.
    #[must_use]
    pub fn can_enter(&self, point: u8, player: Player) -> bool {
        point < POINT_COUNT && self.slots[point as usize].can_land(player)
    }

    /// Whether `point` holds exactly one piece of `owner`.
    #[must_use]
    pub fn is_blot(&self, point: u8, owner: Player) -> bool {
        point < POINT_COUNT && self.piece_count(point as usize, owner) == 1
    }

    /// Playable points occupied by `player`, as (point, count).
    pub fn occupied_points(&self, player: Player) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..POINT_COUNT).filter_map(move |point| {
            let count = self.piece_count(point as usize, player);
            (count > 0).then_some((point, count))
        })
    }

    /// Whether `player` may bear off.
    ///
    /// Requires an empty bar and every on-board piece inside the home region.
    #[must_use]
    pub fn can_bear_off(&self, player: Player) -> bool {
        if self.bar_count(player) > 0 {
            return false;
        }

        self.occupied_points(player)
            .all(|(point, _)| player.is_home_point(point))
    }

    /// The occupied home point farthest from `player`'s bear-off edge.
    ///
    /// Overshoot bear-offs are only legal from this point.
    #[must_use]
    pub fn highest_piece_in_home(&self, player: Player) -> Option<u8> {
        let mut home = player.home_range();
        match player {
            Player::White => home.find(|&p| self.has_pieces(p as usize, player)),
            Player::Black => home.rev().find(|&p| self.has_pieces(p as usize, player)),
        }
    }

    /// Pips `player` still has to travel to bear everything off.
    ///
    /// A piece on the bar counts as 25 pips.
    #[must_use]
    pub fn pip_count(&self, player: Player) -> u32 {
        let on_board: u32 = self
            .occupied_points(player)
            .map(|(point, count)| {
                (u32::from(POINT_COUNT) - u32::from(player.progress(point))) * u32::from(count)
            })
            .sum();
        on_board + 25 * u32::from(self.bar_count(player))
    }

    // === Mutation ===

    /// Move one of `player`'s pieces from `from` to `to`.
    ///
    /// Hits an opposing blot on the destination, sending it to the
    /// opponent's bar. Returns `false` without touching the board when the
    /// origin has none of `player`'s pieces or the destination is blocked.
    /// This does not check dice or the bar-first rule; see
    /// [`crate::rules::legal_moves`].
    pub fn apply_move(&mut self, from: Source, to: Target, player: Player) -> bool {
        let origin = match from {
            Source::Bar => player.bar_slot(),
            Source::Point(p) if p < POINT_COUNT => p as usize,
            Source::Point(_) => return false,
        };

        if !self.has_pieces(origin, player) {
            return false;
        }
        if let Target::Point(p) = to {
            if !self.can_enter(p, player) {
                return false;
            }
        }

        self.slots[origin].remove();

        let placed = match to {
            Target::BorneOff => self.slots[player.home_slot()].add(player),
            Target::Point(p) => {
                let dest = p as usize;
                let opponent = player.opponent();
                if self.slots[dest].owner() == Some(opponent) {
                    let hit = self.slots[dest].clear();
                    for _ in 0..hit {
                        self.slots[opponent.bar_slot()].add(opponent);
                    }
                }
                self.slots[dest].add(player)
            }
        };
        debug_assert!(placed, "destination was checked before removal");

        true
    }
}

impl From<Board> for Vec<Slot> {
    fn from(board: Board) -> Self {
        board.slots.to_vec()
    }
}

impl TryFrom<Vec<Slot>> for Board {
    type Error = BoardError;

    fn try_from(slots: Vec<Slot>) -> Result<Self, Self::Error> {
        let slots: [Slot; SLOT_COUNT] =
            slots
                .try_into()
                .map_err(|rejected: Vec<Slot>| BoardError::SlotCount {
                    expected: SLOT_COUNT,
                    found: rejected.len(),
                })?;

        let board = Self { slots };
        board.validate()?;
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let board = Board::new();

        assert_eq!(board.piece_count(0, Player::White), 2);
        assert_eq!(board.piece_count(11, Player::White), 5);
        assert_eq!(board.piece_count(16, Player::White), 3);
        assert_eq!(board.piece_count(18, Player::White), 5);

        assert_eq!(board.piece_count(23, Player::Black), 2);
        assert_eq!(board.piece_count(12, Player::Black), 5);
        assert_eq!(board.piece_count(7, Player::Black), 3);
        assert_eq!(board.piece_count(5, Player::Black), 5);

        for player in Player::ALL {
            assert_eq!(board.bar_count(player), 0);
            assert_eq!(board.home_count(player), 0);
        }
    }

    #[test]
    #[should_panic]
    fn test_slot_index_past_end_panics() {
        let board = Board::new();
        let _ = board.piece_count(SLOT_COUNT, Player::White);
    }

    #[test]
    fn test_piece_count_respects_owner() {
        let board = Board::new();
        assert_eq!(board.piece_count(0, Player::Black), 0);
        assert!(!board.has_pieces(23, Player::White));
        assert!(board.has_pieces(23, Player::Black));
    }

    #[test]
    fn test_reinitialize_clears_position() {
        let mut board = Board::new();
        board.place(3, Player::White, 4);
        board.initialize_standard_layout();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_can_enter() {
        let board = Board::new();
        // Empty
        assert!(board.can_enter(1, Player::White));
        // Own
        assert!(board.can_enter(11, Player::White));
        // Opposing stack
        assert!(!board.can_enter(12, Player::White));
        // Off board
        assert!(!board.can_enter(24, Player::White));
    }

    #[test]
    fn test_apply_simple_move() {
        let mut board = Board::new();
        assert!(board.apply_move(Source::Point(0), Target::Point(3), Player::White));

        assert_eq!(board.piece_count(0, Player::White), 1);
        assert_eq!(board.piece_count(3, Player::White), 1);
    }

    #[test]
    fn test_apply_move_hits_blot() {
        let mut board = Board::empty();
        board
            .place(4, Player::White, 1)
            .place(7, Player::Black, 1);

        assert!(board.apply_move(Source::Point(4), Target::Point(7), Player::White));

        assert_eq!(board.piece_count(7, Player::White), 1);
        assert_eq!(board.bar_count(Player::Black), 1);
        assert!(board.slot(4).is_empty());
        assert_eq!(board.slot(4).owner(), None);
    }

    #[test]
    fn test_apply_move_blocked_leaves_board_untouched() {
        let mut board = Board::new();
        let before = board.clone();

        // Point 12 holds five Black pieces
        assert!(!board.apply_move(Source::Point(11), Target::Point(12), Player::White));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_without_piece_fails() {
        let mut board = Board::new();
        let before = board.clone();

        assert!(!board.apply_move(Source::Point(1), Target::Point(2), Player::White));
        assert!(!board.apply_move(Source::Bar, Target::Point(2), Player::White));
        assert!(!board.apply_move(Source::Point(0), Target::Point(2), Player::Black));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_bar_entry_and_bear_off() {
        let mut board = Board::empty();
        board
            .place(Player::Black.bar_slot(), Player::Black, 1)
            .place(2, Player::Black, 1);

        assert!(board.apply_move(Source::Bar, Target::Point(20), Player::Black));
        assert_eq!(board.bar_count(Player::Black), 0);
        assert_eq!(board.piece_count(20, Player::Black), 1);

        assert!(board.apply_move(Source::Point(2), Target::BorneOff, Player::Black));
        assert_eq!(board.home_count(Player::Black), 1);
    }

    #[test]
    fn test_can_bear_off() {
        let mut board = Board::empty();
        board.place(18, Player::White, 10).place(23, Player::White, 5);
        assert!(board.can_bear_off(Player::White));

        board.place(17, Player::White, 1).place(18, Player::White, 9);
        assert!(!board.can_bear_off(Player::White));

        board
            .place(17, Player::White, 0)
            .place(Player::White.bar_slot(), Player::White, 1);
        assert!(!board.can_bear_off(Player::White));
    }

    #[test]
    fn test_opening_cannot_bear_off() {
        let board = Board::new();
        assert!(!board.can_bear_off(Player::White));
        assert!(!board.can_bear_off(Player::Black));
    }

    #[test]
    fn test_highest_piece_in_home() {
        let mut board = Board::empty();
        board.place(20, Player::White, 2).place(22, Player::White, 1);
        assert_eq!(board.highest_piece_in_home(Player::White), Some(20));

        board.place(1, Player::Black, 3).place(4, Player::Black, 1);
        assert_eq!(board.highest_piece_in_home(Player::Black), Some(4));

        assert_eq!(Board::empty().highest_piece_in_home(Player::White), None);
    }

    #[test]
    fn test_pip_count_opening() {
        let board = Board::new();
        // 2*24 + 5*13 + 3*8 + 5*6
        assert_eq!(board.pip_count(Player::White), 167);
        assert_eq!(board.pip_count(Player::Black), 167);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new();
        let mut copy = board.clone();
        assert!(copy.apply_move(Source::Point(0), Target::Point(1), Player::White));
        assert_ne!(board, copy);
        assert_eq!(board.piece_count(0, Player::White), 2);
    }

    #[test]
    fn test_serializes_as_slot_list() {
        let board = Board::new();
        let json = serde_json::to_value(&board).unwrap();

        let list = json.as_array().unwrap();
        assert_eq!(list.len(), SLOT_COUNT);
        assert_eq!(list[0]["count"], 2);
        assert_eq!(list[0]["owner"], "white");
        assert!(list[1]["owner"].is_null());

        let restored: Board = serde_json::from_value(json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_deserialize_rejects_short_list() {
        let json = "[{\"count\":0,\"owner\":null}]";
        assert!(serde_json::from_str::<Board>(json).is_err());
    }
}

//! Legal move generation.
//!
//! ## Rules
//!
//! 1. A player with pieces on the bar may only enter from the bar.
//! 2. Otherwise each owned point may advance by each distinct remaining
//!    die onto an empty point, an own point, or an opposing blot.
//! 3. A move running past the board edge is a bear-off, legal only when
//!    every piece is home and either the die is exact or the origin is the
//!    rearmost occupied home point.
//!
//! Enumeration order: by origin point ascending, then die descending.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Move, Player, Source, Target, POINT_COUNT};

/// Distinct die values, largest first. Values outside 1-6 are dropped.
fn distinct_dice(dice: &[u8]) -> SmallVec<[u8; 4]> {
    let mut distinct: SmallVec<[u8; 4]> = dice.iter().copied().filter(|d| (1..=6).contains(d)).collect();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();
    distinct
}

/// Enumerate every legal single move for `player`.
///
/// `dice` is the multiset of unconsumed credits. When `origin` is given
/// only moves starting from that point are produced; it is ignored while
/// the player has pieces on the bar. Returns an empty vector when nothing
/// is playable.
#[must_use]
pub fn legal_moves(board: &Board, player: Player, dice: &[u8], origin: Option<u8>) -> Vec<Move> {
    let distinct = distinct_dice(dice);

    if board.bar_count(player) > 0 {
        return bar_entries(board, player, &distinct);
    }

    let mut moves = Vec::new();
    match origin {
        Some(point) => moves_from_point(board, player, point, &distinct, &mut moves),
        None => {
            for point in 0..POINT_COUNT {
                moves_from_point(board, player, point, &distinct, &mut moves);
            }
        }
    }
    moves
}

/// Whether `player` has any legal move with `dice`.
#[must_use]
pub fn can_move(board: &Board, player: Player, dice: &[u8]) -> bool {
    !dice.is_empty() && !legal_moves(board, player, dice, None).is_empty()
}

fn bar_entries(board: &Board, player: Player, distinct: &[u8]) -> Vec<Move> {
    distinct
        .iter()
        .filter_map(|&die| {
            let entry = player.entry_point(die);
            board
                .can_enter(entry, player)
                .then_some(Move::new(Source::Bar, Target::Point(entry), die))
        })
        .collect()
}

fn moves_from_point(board: &Board, player: Player, point: u8, distinct: &[u8], out: &mut Vec<Move>) {
    if point >= POINT_COUNT || !board.has_pieces(point as usize, player) {
        return;
    }

    // Computed lazily: most points never reach the edge.
    let mut bear_off: Option<bool> = None;

    for &die in distinct {
        let target = player.advance(point, die);

        if (0..POINT_COUNT as i8).contains(&target) {
            let target = target as u8;
            if board.can_enter(target, player) {
                out.push(Move::new(Source::Point(point), Target::Point(target), die));
            }
            continue;
        }

        if !*bear_off.get_or_insert_with(|| board.can_bear_off(player)) {
            continue;
        }

        let exact = target == player.bear_off_edge();
        if exact || board.highest_piece_in_home(player) == Some(point) {
            out.push(Move::new(Source::Point(point), Target::BorneOff, die));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PIECES_PER_PLAYER;

    #[test]
    fn test_distinct_dice_descending() {
        assert_eq!(distinct_dice(&[3, 5]).as_slice(), &[5, 3]);
        assert_eq!(distinct_dice(&[4, 4, 4, 4]).as_slice(), &[4]);
        assert!(distinct_dice(&[]).is_empty());
        assert_eq!(distinct_dice(&[0, 7, 2, 255]).as_slice(), &[2]);
    }

    #[test]
    fn test_out_of_range_dice_yield_nothing() {
        let mut board = Board::new();
        board.place(0, Player::White, 1).place(Player::White.bar_slot(), Player::White, 1);

        // Zero would underflow the entry point; seven would land off the board
        assert!(legal_moves(&board, Player::White, &[0, 7], None).is_empty());
        assert!(legal_moves(&Board::new(), Player::Black, &[0, 9], None).is_empty());
        assert!(!can_move(&board, Player::White, &[0]));

        let entries = legal_moves(&board, Player::White, &[0, 3], None);
        assert_eq!(entries, vec![Move::new(Source::Bar, Target::Point(2), 3)]);
    }

    #[test]
    fn test_opening_moves_white() {
        let board = Board::new();
        let moves = legal_moves(&board, Player::White, &[3, 1], None);

        // 0 -> 3 and 0 -> 1 open; 11 -> 12 blocked; 16 -> 19, 16 -> 17,
        // 18 -> 21, 18 -> 19
        assert!(moves.contains(&Move::new(Source::Point(0), Target::Point(3), 3)));
        assert!(moves.contains(&Move::new(Source::Point(0), Target::Point(1), 1)));
        assert!(!moves.contains(&Move::new(Source::Point(11), Target::Point(12), 1)));
        assert!(moves.contains(&Move::new(Source::Point(11), Target::Point(14), 3)));
        assert!(moves.iter().all(|m| !m.is_bear_off()));
    }

    #[test]
    fn test_enumeration_order() {
        let board = Board::new();
        let moves = legal_moves(&board, Player::White, &[2, 6], None);

        let origins: Vec<u8> = moves.iter().filter_map(|m| m.from.point()).collect();
        let mut sorted = origins.clone();
        sorted.sort_unstable();
        assert_eq!(origins, sorted);

        assert_eq!(moves[0].die, 6);
    }

    #[test]
    fn test_origin_filter() {
        let board = Board::new();
        let moves = legal_moves(&board, Player::Black, &[3, 5], Some(12));

        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.from == Source::Point(12)));

        let none = legal_moves(&board, Player::Black, &[3, 5], Some(0));
        assert!(none.is_empty());
    }

    #[test]
    fn test_bar_priority() {
        let mut board = Board::new();
        board
            .place(18, Player::White, 4)
            .place(Player::White.bar_slot(), Player::White, 1);

        let moves = legal_moves(&board, Player::White, &[6, 3], None);

        assert!(!moves.is_empty());
        assert!(moves.iter().all(Move::is_bar_entry));
        // Die 6 enters on point 5, held by five Black pieces
        assert_eq!(moves, vec![Move::new(Source::Bar, Target::Point(2), 3)]);
    }

    #[test]
    fn test_bar_priority_ignores_origin_filter() {
        let mut board = Board::new();
        board
            .place(23, Player::Black, 1)
            .place(Player::Black.bar_slot(), Player::Black, 1);

        let moves = legal_moves(&board, Player::Black, &[2], Some(12));
        assert_eq!(moves, vec![Move::new(Source::Bar, Target::Point(22), 2)]);
    }

    #[test]
    fn test_fully_blocked_bar() {
        let mut board = Board::empty();
        for point in 0..6 {
            board.place(point, Player::Black, 2);
        }
        board
            .place(Player::Black.home_slot(), Player::Black, 3)
            .place(Player::White.bar_slot(), Player::White, 1)
            .place(12, Player::White, PIECES_PER_PLAYER - 1);
        assert!(board.validate().is_ok());

        for first in 1..=6 {
            for second in 1..=6 {
                assert!(legal_moves(&board, Player::White, &[first, second], None).is_empty());
            }
        }
        assert!(!can_move(&board, Player::White, &[6, 5]));
    }

    #[test]
    fn test_exact_bear_off() {
        let mut board = Board::empty();
        board.place(20, Player::White, 15);

        let moves = legal_moves(&board, Player::White, &[4], None);
        assert_eq!(moves, vec![Move::new(Source::Point(20), Target::BorneOff, 4)]);
    }

    #[test]
    fn test_overshoot_only_from_rearmost() {
        let mut board = Board::empty();
        board.place(20, Player::White, 5).place(22, Player::White, 10);

        let moves = legal_moves(&board, Player::White, &[6], None);

        // 20 is the rearmost home point: overshoot allowed there only
        assert_eq!(moves, vec![Move::new(Source::Point(20), Target::BorneOff, 6)]);
    }

    #[test]
    fn test_overshoot_black() {
        let mut board = Board::empty();
        board.place(1, Player::Black, 14).place(3, Player::Black, 1);

        let moves = legal_moves(&board, Player::Black, &[5, 2], None);

        assert!(moves.contains(&Move::new(Source::Point(3), Target::BorneOff, 5)));
        assert!(moves.contains(&Move::new(Source::Point(1), Target::BorneOff, 2)));
        assert!(moves.contains(&Move::new(Source::Point(3), Target::Point(1), 2)));
        assert!(!moves.contains(&Move::new(Source::Point(1), Target::BorneOff, 5)));
    }

    #[test]
    fn test_no_bear_off_with_straggler() {
        let mut board = Board::empty();
        board.place(23, Player::White, 14).place(10, Player::White, 1);

        let moves = legal_moves(&board, Player::White, &[1, 6], None);

        assert!(moves.iter().all(|m| !m.is_bear_off()));
        assert!(moves.contains(&Move::new(Source::Point(10), Target::Point(16), 6)));
    }

    #[test]
    fn test_hit_is_legal_block_is_not() {
        let mut board = Board::empty();
        board
            .place(0, Player::White, 15)
            .place(2, Player::Black, 1)
            .place(3, Player::Black, 14);

        let moves = legal_moves(&board, Player::White, &[2, 3], None);

        assert!(moves.contains(&Move::new(Source::Point(0), Target::Point(2), 2)));
        assert!(!moves.iter().any(|m| m.to == Target::Point(3)));
    }

    #[test]
    fn test_empty_dice_yields_nothing() {
        let board = Board::new();
        assert!(legal_moves(&board, Player::White, &[], None).is_empty());
        assert!(!can_move(&board, Player::White, &[]));
    }
}

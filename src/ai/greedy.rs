//! One-ply heuristic move scoring.

use crate::board::Board;
use crate::core::{Move, Player, Source, Target};

const BAR_EXIT: i32 = 100;
const BEAR_OFF: i32 = 80;
const HIT: i32 = 50;
const HOME_ENTRY: i32 = 30;
const PIP_PER_DIE: i32 = 2;
const STACKING: i32 = 10;

/// Score a single move for `player` by a fixed rubric.
///
/// | feature                          | score     |
/// |----------------------------------|-----------|
/// | leaves the bar                   | +100      |
/// | bears off                        | +80       |
/// | hits an opposing blot            | +50       |
/// | lands in the mover's home region | +30       |
/// | pips advanced                    | +2 x die  |
/// | lands on the mover's own point   | +10       |
#[must_use]
pub fn greedy_score(board: &Board, player: Player, mv: &Move) -> i32 {
    let mut score = PIP_PER_DIE * i32::from(mv.die);

    if mv.from == Source::Bar {
        score += BAR_EXIT;
    }

    match mv.to {
        Target::BorneOff => score += BEAR_OFF,
        Target::Point(point) => {
            if board.is_blot(point, player.opponent()) {
                score += HIT;
            }
            if player.is_home_point(point) {
                score += HOME_ENTRY;
            }
            if board.has_pieces(usize::from(point), player) {
                score += STACKING;
            }
        }
    }

    score
}

/// Highest-scoring move; ties go to the earliest in `moves`.
#[must_use]
pub fn best_greedy_move(board: &Board, player: Player, moves: &[Move]) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for mv in moves {
        let score = greedy_score(board, player, mv);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((*mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

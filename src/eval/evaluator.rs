//! Static position evaluation.

use super::weights::EvalWeights;
use crate::board::Board;
use crate::core::Player;

/// Score `board` for `perspective` with the default weights.
///
/// Higher is better for `perspective`. Used directly by the search at its
/// leaves.
#[must_use]
pub fn evaluate(board: &Board, perspective: Player) -> f64 {
    evaluate_with(board, perspective, &EvalWeights::default())
}

/// Score `board` for `perspective` with a custom weight table.
#[must_use]
pub fn evaluate_with(board: &Board, perspective: Player, weights: &EvalWeights) -> f64 {
    let opponent = perspective.opponent();
    let mut score = 0.0;

    score += weights.borne_off * f64::from(board.home_count(perspective));
    score -= weights.borne_off * f64::from(board.home_count(opponent));

    score -= weights.bar * f64::from(board.bar_count(perspective));
    score += weights.bar * f64::from(board.bar_count(opponent));

    for (point, count) in board.occupied_points(perspective) {
        if count >= 2 {
            score += weights.safe_point;
        } else {
            score -= weights.blot;
        }
        score += weights.progress * f64::from(perspective.progress(point));
    }

    let opponent_blots = board
        .occupied_points(opponent)
        .filter(|&(_, count)| count == 1)
        .count();
    score += weights.opponent_blot * opponent_blots as f64;

    if board.can_bear_off(perspective) {
        score += weights.bear_off_ready;
    }
    if board.can_bear_off(opponent) {
        score -= weights.bear_off_ready;
    }

    score
}

//! Depth-limited minimax over dice outcomes.
//!
//! ## Structure
//!
//! Every ply is one checker move followed by the other side's roll:
//!
//! ```text
//! score_move(d)   apply the move on a copy of the board
//!                 game over  -> +/-WIN_SCORE
//!                 d == 0     -> static evaluation
//!                 otherwise  -> expectation(d - 1) for the other side
//! expectation(d)  weighted mean over the 21 distinct rolls of
//!                 best_reply(d) (weights 1 for doubles, 2 otherwise)
//! best_reply(d)   no legal move -> static evaluation
//!                 root side -> max of score_move(d), opponent -> min
//! ```
//!
//! All scores are from the root player's perspective. Branches work on
//! board clones; the game being searched is never touched.

use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::{debug, instrument, warn};

use super::config::SearchConfig;
use super::stats::SearchStats;
use crate::board::Board;
use crate::core::{Dice, Move, Player};
use crate::eval::evaluate_with;
use crate::game::Game;
use crate::rules;

/// Score of a decided game, dominating any static evaluation.
pub const WIN_SCORE: f64 = 1000.0;

/// Sum of roll weights in [`Dice::outcomes`].
const ROLL_WEIGHT_TOTAL: f64 = 36.0;

/// Minimax search context.
///
/// Owns the configuration, the per-search memo and statistics.
#[derive(Clone, Debug)]
pub struct MinimaxSearch {
    config: SearchConfig,
    memo: FxHashMap<(Board, Player, u32), f64>,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            memo: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.config.depth
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best move for the side to move in `game`.
    ///
    /// Returns `None` only when there is no legal move. Ties keep the first
    /// candidate in generation order.
    #[instrument(level = "debug", skip_all, fields(player = %game.current_player(), depth = self.config.depth))]
    pub fn choose_move(&mut self, game: &Game) -> Option<Move> {
        let moves = game.legal_moves(None);
        if moves.len() <= 1 {
            return moves.first().copied();
        }

        let root = game.current_player();
        let scored = self.score_moves(game.board(), root, &moves);

        let mut best: Option<(Move, f64)> = None;
        for (mv, score) in scored {
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((mv, score));
            }
        }

        if let Some((mv, score)) = best {
            debug!(
                mv = %mv,
                score,
                nodes = self.stats.nodes,
                leaves = self.stats.leaf_evaluations,
                cache_hits = self.stats.cache_hits,
                time_us = self.stats.time_us,
                "Search complete"
            );
        }
        best.map(|(mv, _)| mv)
    }

    /// Score every candidate move for `player` on `board`.
    ///
    /// Resets the memo and statistics.
    pub fn score_moves(&mut self, board: &Board, player: Player, moves: &[Move]) -> Vec<(Move, f64)> {
        let start = Instant::now();
        self.stats.reset();
        self.memo.clear();

        let depth = self.config.depth;
        let scored = moves
            .iter()
            .map(|&mv| {
                self.stats.root_moves += 1;
                (mv, self.score_move(board, player, player, mv, depth))
            })
            .collect();

        self.stats.time_us = start.elapsed().as_micros() as u64;
        scored
    }

    /// Score one candidate move for `root` at the configured depth.
    pub fn evaluate_move(&mut self, board: &Board, root: Player, mv: Move) -> f64 {
        self.stats.reset();
        self.memo.clear();
        let depth = self.config.depth;
        self.score_move(board, root, root, mv, depth)
    }

    fn score_move(&mut self, board: &Board, root: Player, mover: Player, mv: Move, depth: u32) -> f64 {
        self.stats.nodes += 1;

        let mut next = board.clone();
        if !next.apply_move(mv.from, mv.to, mover) {
            warn!(mv = %mv, player = %mover, "Speculative move rejected by the board");
            return if mover == root { -WIN_SCORE } else { WIN_SCORE };
        }

        if let Some(outcome) = rules::outcome(&next) {
            return if outcome.is_winner(root) { WIN_SCORE } else { -WIN_SCORE };
        }

        if depth == 0 {
            return self.leaf(&next, root);
        }

        self.expectation(&next, root, mover.opponent(), depth - 1)
    }

    fn expectation(&mut self, board: &Board, root: Player, to_roll: Player, depth: u32) -> f64 {
        if self.config.memoize {
            if let Some(&cached) = self.memo.get(&(board.clone(), to_roll, depth)) {
                self.stats.cache_hits += 1;
                return cached;
            }
        }

        let mut total = 0.0;
        for (dice, weight) in Dice::outcomes() {
            total += f64::from(weight) * self.best_reply(board, root, to_roll, &dice.credits(), depth);
        }
        let value = total / ROLL_WEIGHT_TOTAL;

        if self.config.memoize {
            self.memo.insert((board.clone(), to_roll, depth), value);
        }
        value
    }

    fn best_reply(&mut self, board: &Board, root: Player, mover: Player, dice: &[u8], depth: u32) -> f64 {
        let moves = rules::legal_moves(board, mover, dice, None);
        if moves.is_empty() {
            return self.leaf(board, root);
        }

        let maximizing = mover == root;
        let mut best = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        for mv in moves {
            let score = self.score_move(board, root, mover, mv, depth);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }

    fn leaf(&mut self, board: &Board, root: Player) -> f64 {
        self.stats.leaf_evaluations += 1;
        evaluate_with(board, root, &self.config.weights)
    }
}

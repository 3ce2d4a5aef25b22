//! The turn state machine.
//!
//! A `Game` owns the board, the dice and the phase. Hosts drive it:
//!
//! 1. `roll()` in `AwaitingRoll`
//! 2. poll `should_end_turn()`: a roll can be unplayable
//! 3. `apply_move()` (optionally after `select_origin()`), polling
//!    `should_end_turn()` after each move
//! 4. `end_turn()`
//!
//! Every command validates against fresh state and reports failure as
//! `false`/`None`, leaving the game untouched.

use im::Vector;
use tracing::{debug, info, warn};

use super::phase::Phase;
use super::stats::GameStats;
use crate::ai::Strategy;
use crate::board::Board;
use crate::core::{Credits, Dice, GameConfig, GameRng, GameRngState, Move, MoveRecord, Player, Source};
use crate::rules::{self, Outcome};

/// A Tavla game session.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) board: Board,
    pub(super) active: Player,
    pub(super) phase: Phase,
    pub(super) dice: Option<Dice>,
    pub(super) remaining: Credits,
    pub(super) selected: Option<Source>,
    pub(super) winner: Option<Player>,
    pub(super) move_count: u32,
    pub(super) turn_number: u32,
    pub(super) history: Vector<MoveRecord>,
    pub(super) stats: GameStats,
    pub(super) rng: GameRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Create a game in the opening position, awaiting the first roll.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            board: Board::new(),
            active: config.first_mover,
            phase: Phase::AwaitingRoll,
            dice: None,
            remaining: Credits::new(),
            selected: None,
            winner: None,
            move_count: 0,
            turn_number: 1,
            history: Vector::new(),
            stats: GameStats::new(),
            rng,
            config,
        }
    }

    /// Start from a custom position instead of the opening layout.
    ///
    /// The board is not validated; run [`Game::validate_board_state`] when
    /// it comes from outside. [`Game::reset`] restores the opening layout.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    // === Queries ===

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The roll of the current turn, if any.
    #[must_use]
    pub fn dice(&self) -> Option<Dice> {
        self.dice
    }

    /// Unconsumed move credits.
    #[must_use]
    pub fn remaining_dice(&self) -> &[u8] {
        &self.remaining
    }

    /// Origin picked with [`Game::select_origin`].
    #[must_use]
    pub fn selected(&self) -> Option<Source> {
        self.selected
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.winner.map(Outcome::Winner)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Moves applied since the last reset.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Moves applied since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Session statistics.
    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Dice RNG state, for checkpointing a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Fork an independent RNG stream from the dice RNG.
    ///
    /// Hosts use this to seed AI players reproducibly from the session seed.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    /// Legal moves for the side to move with the remaining dice.
    ///
    /// Empty outside the selecting phases.
    #[must_use]
    pub fn legal_moves(&self, origin: Option<u8>) -> Vec<Move> {
        if !self.phase.accepts_moves() {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.active, &self.remaining, origin)
    }

    /// Whether the side to move has any legal move.
    #[must_use]
    pub fn can_move(&self) -> bool {
        !self.legal_moves(None).is_empty()
    }

    // === Commands ===

    /// Roll the dice for the active player.
    ///
    /// Only acts in `AwaitingRoll`; elsewhere returns the previous roll
    /// unchanged.
    pub fn roll(&mut self) -> Option<Dice> {
        if self.phase != Phase::AwaitingRoll {
            return self.dice;
        }
        let dice = Dice::roll(&mut self.rng);
        self.start_turn(dice);
        Some(dice)
    }

    /// Apply a roll produced elsewhere (a relay, a replay, a test).
    ///
    /// Same phase rules as [`Game::roll`]; values outside 1-6 are ignored.
    pub fn roll_fixed(&mut self, first: u8, second: u8) -> Option<Dice> {
        if self.phase != Phase::AwaitingRoll {
            return self.dice;
        }
        let Some(dice) = Dice::try_new(first, second) else {
            warn!(first, second, "Ignoring out-of-range dice");
            return self.dice;
        };
        self.start_turn(dice);
        Some(dice)
    }

    fn start_turn(&mut self, dice: Dice) {
        self.dice = Some(dice);
        self.remaining = dice.credits();
        self.selected = None;
        self.phase = Phase::SelectingOrigin;
        debug!(
            player = %self.active,
            dice = %dice,
            turn = self.turn_number,
            "Dice rolled"
        );
    }

    /// Pick the piece to move.
    ///
    /// Returns the legal moves from `origin`. When there are any the game
    /// enters `SelectingDestination`; otherwise nothing changes.
    pub fn select_origin(&mut self, origin: Source) -> Vec<Move> {
        if !self.phase.accepts_moves() {
            return Vec::new();
        }

        let moves: Vec<Move> = self
            .legal_moves(origin.point())
            .into_iter()
            .filter(|m| m.from == origin)
            .collect();

        if !moves.is_empty() {
            self.selected = Some(origin);
            self.phase = Phase::SelectingDestination;
        }
        moves
    }

    /// Drop the current origin selection.
    pub fn clear_selection(&mut self) {
        if self.phase == Phase::SelectingDestination {
            self.phase = Phase::SelectingOrigin;
        }
        self.selected = None;
    }

    /// Play one move for the active player.
    ///
    /// The move must use a remaining die and be legal against the current
    /// board. Returns `false` and changes nothing otherwise.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if !self.phase.accepts_moves() {
            return false;
        }

        let Some(die_index) = self.remaining.iter().position(|&d| d == mv.die) else {
            debug!(mv = %mv, "Rejected move: die not available");
            return false;
        };

        let legal = rules::legal_moves(&self.board, self.active, &self.remaining, mv.from.point());
        if !legal.contains(&mv) {
            debug!(mv = %mv, player = %self.active, "Rejected illegal move");
            return false;
        }

        let opponent = self.active.opponent();
        let hit = mv.to.point().is_some_and(|p| self.board.is_blot(p, opponent));

        if !self.board.apply_move(mv.from, mv.to, self.active) {
            warn!(mv = %mv, "Board refused a move that passed legality checks");
            return false;
        }

        self.remaining.remove(die_index);
        self.move_count += 1;
        if hit {
            self.stats.record_hit();
        }
        self.history.push_back(MoveRecord {
            player: self.active,
            mv,
            hit,
            turn: self.turn_number,
            sequence: self.move_count,
        });
        self.selected = None;
        self.phase = Phase::SelectingOrigin;

        debug!(
            player = %self.active,
            mv = %mv,
            hit,
            remaining = ?self.remaining.as_slice(),
            "Move applied"
        );

        self.check_winner();
        true
    }

    fn check_winner(&mut self) {
        if let Some(outcome) = rules::outcome(&self.board) {
            let winner = outcome.winner();
            self.winner = Some(winner);
            self.phase = Phase::Finished;
            self.stats.record_game(winner, self.move_count);
            info!(
                winner = %winner,
                moves = self.move_count,
                turns = self.turn_number,
                "Game over"
            );
        }
    }

    /// Whether the active player's turn is over.
    ///
    /// True when all dice are used or none of them can be played. Poll after
    /// every roll and every move.
    #[must_use]
    pub fn should_end_turn(&self) -> bool {
        self.remaining.is_empty() || !self.can_move()
    }

    /// Pass the dice to the other player.
    ///
    /// No-op once the game is finished.
    pub fn end_turn(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }

        debug!(
            player = %self.active,
            unused = ?self.remaining.as_slice(),
            turn = self.turn_number,
            "Turn ended"
        );

        self.active = self.active.opponent();
        self.dice = None;
        self.remaining.clear();
        self.selected = None;
        self.phase = Phase::AwaitingRoll;
        self.turn_number += 1;
    }

    /// Start a new game in the same session.
    ///
    /// Statistics and the dice RNG carry over.
    pub fn reset(&mut self) {
        self.board.initialize_standard_layout();
        self.active = self.config.first_mover;
        self.phase = Phase::AwaitingRoll;
        self.dice = None;
        self.remaining.clear();
        self.selected = None;
        self.winner = None;
        self.move_count = 0;
        self.turn_number = 1;
        self.history = Vector::new();

        if self.config.validate_on_reset {
            self.validate_board_state();
        }
        info!(first_mover = %self.active, "Game reset");
    }

    /// Run the piece-count validator, logging a warning on failure.
    pub fn validate_board_state(&self) -> bool {
        match self.board.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    error = %err,
                    white = self.board.tally(Player::White).total(),
                    black = self.board.tally(Player::Black).total(),
                    "Board invariant violated"
                );
                false
            }
        }
    }

    /// Let `strategy` play the active player's whole turn.
    ///
    /// Rolls if needed, applies the strategy's choices until the turn is
    /// over, then ends the turn. Returns the moves played.
    pub fn play_turn(&mut self, strategy: &mut Strategy) -> Vec<Move> {
        let mut played = Vec::new();

        if self.phase == Phase::AwaitingRoll {
            self.roll();
        }

        while !self.should_end_turn() {
            let Some(mv) = strategy.choose_move(self) else {
                break;
            };
            if !self.apply_move(mv) {
                warn!(mv = %mv, strategy = %strategy.name(), "Strategy chose an illegal move");
                break;
            }
            played.push(mv);
        }

        self.end_turn();
        played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Target;

    fn rolled(first: u8, second: u8) -> Game {
        let mut game = Game::default();
        game.roll_fixed(first, second);
        game
    }

    #[test]
    fn test_new_game() {
        let game = Game::default();
        assert_eq!(game.phase(), Phase::AwaitingRoll);
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.dice(), None);
        assert!(game.remaining_dice().is_empty());
        assert_eq!(game.winner(), None);
        assert!(game.legal_moves(None).is_empty());
    }

    #[test]
    fn test_roll_transitions() {
        let mut game = Game::default();
        let dice = game.roll().unwrap();

        assert_eq!(game.phase(), Phase::SelectingOrigin);
        assert_eq!(game.remaining_dice(), dice.credits().as_slice());

        // A second roll is a no-op returning the same dice
        assert_eq!(game.roll(), Some(dice));
        assert_eq!(game.roll_fixed(1, 1), Some(dice));
    }

    #[test]
    fn test_roll_fixed_double() {
        let game = rolled(4, 4);
        assert_eq!(game.remaining_dice(), &[4, 4, 4, 4]);
    }

    #[test]
    fn test_roll_fixed_rejects_bad_values() {
        let mut game = Game::default();
        assert_eq!(game.roll_fixed(0, 7), None);
        assert_eq!(game.phase(), Phase::AwaitingRoll);
    }

    #[test]
    fn test_apply_move_consumes_die() {
        let mut game = rolled(3, 5);
        let mv = Move::new(Source::Point(0), Target::Point(3), 3);

        assert!(game.apply_move(mv));
        assert_eq!(game.remaining_dice(), &[5]);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.board().piece_count(3, Player::White), 1);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].mv, mv);
    }

    #[test]
    fn test_apply_move_rejects_unrolled_die() {
        let mut game = rolled(3, 5);
        let before = game.board().clone();

        assert!(!game.apply_move(Move::new(Source::Point(0), Target::Point(2), 2)));
        assert_eq!(game.board(), &before);
        assert_eq!(game.remaining_dice(), &[3, 5]);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_apply_move_rejects_illegal_target() {
        let mut game = rolled(1, 5);
        // 11 -> 12 lands on five Black pieces
        assert!(!game.apply_move(Move::new(Source::Point(11), Target::Point(12), 1)));
        // Wrong destination for the die
        assert!(!game.apply_move(Move::new(Source::Point(0), Target::Point(4), 5)));
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_apply_move_before_roll_fails() {
        let mut game = Game::default();
        assert!(!game.apply_move(Move::new(Source::Point(0), Target::Point(3), 3)));
    }

    #[test]
    fn test_select_origin() {
        let mut game = rolled(3, 5);

        let moves = game.select_origin(Source::Point(0));
        assert!(!moves.is_empty());
        assert_eq!(game.phase(), Phase::SelectingDestination);
        assert_eq!(game.selected(), Some(Source::Point(0)));

        game.clear_selection();
        assert_eq!(game.phase(), Phase::SelectingOrigin);
        assert_eq!(game.selected(), None);

        // Empty point: no selection
        assert!(game.select_origin(Source::Point(1)).is_empty());
        assert_eq!(game.phase(), Phase::SelectingOrigin);
    }

    #[test]
    fn test_move_after_selection_returns_to_origin_phase() {
        let mut game = rolled(3, 5);
        let moves = game.select_origin(Source::Point(16));
        assert!(game.apply_move(moves[0]));
        assert_eq!(game.phase(), Phase::SelectingOrigin);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn test_should_end_turn_after_all_dice() {
        let mut game = rolled(3, 5);
        assert!(!game.should_end_turn());

        assert!(game.apply_move(Move::new(Source::Point(0), Target::Point(3), 3)));
        assert!(game.apply_move(Move::new(Source::Point(11), Target::Point(16), 5)));
        assert!(game.should_end_turn());
    }

    #[test]
    fn test_end_turn_switches_player() {
        let mut game = rolled(2, 6);
        game.end_turn();

        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.phase(), Phase::AwaitingRoll);
        assert_eq!(game.dice(), None);
        assert!(game.remaining_dice().is_empty());
        assert_eq!(game.turn_number(), 2);
    }

    #[test]
    fn test_hit_is_counted() {
        let mut game = Game::default();
        game.board = Board::empty();
        game.board
            .place(0, Player::White, 1)
            .place(2, Player::White, 1)
            .place(23, Player::Black, 1)
            .place(3, Player::Black, 1);
        game.roll_fixed(1, 2);

        assert!(game.apply_move(Move::new(Source::Point(2), Target::Point(3), 1)));
        assert_eq!(game.board().bar_count(Player::Black), 1);
        assert!(game.history()[0].hit);
        assert_eq!(game.stats().hits, 1);
    }

    #[test]
    fn test_winning_move_finishes_game() {
        let mut game = Game::default();
        game.board = Board::empty();
        game.board
            .place(23, Player::White, 1)
            .place(Player::White.home_slot(), Player::White, 14)
            .place(12, Player::Black, 15);
        game.roll_fixed(1, 2);

        assert!(game.apply_move(Move::new(Source::Point(23), Target::BorneOff, 2)));

        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.winner(), Some(Player::White));
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::White)));
        assert_eq!(game.stats().games_played, 1);
        assert!(game.should_end_turn());

        // Finished games ignore further commands
        game.end_turn();
        assert_eq!(game.current_player(), Player::White);
        assert!(!game.apply_move(Move::new(Source::Point(12), Target::Point(11), 1)));
    }

    #[test]
    fn test_reset() {
        let mut game = rolled(3, 5);
        assert!(game.apply_move(Move::new(Source::Point(0), Target::Point(3), 3)));
        game.end_turn();

        game.reset();

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.phase(), Phase::AwaitingRoll);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.turn_number(), 1);
        assert!(game.history().is_empty());
        assert!(game.validate_board_state());
    }

    #[test]
    fn test_validate_board_state_flags_defect() {
        let mut game = Game::default();
        game.board.place(0, Player::White, 1);
        assert!(!game.validate_board_state());
    }

    #[test]
    fn test_fork_rng_keeps_dice_stream() {
        let mut forked = Game::new(GameConfig::new().with_seed(5));
        let mut plain = Game::new(GameConfig::new().with_seed(5));

        let mut ai_rng = forked.fork_rng();
        assert!((1..=6).contains(&ai_rng.roll_die()));

        assert_eq!(forked.roll(), plain.roll());
    }

    #[test]
    fn test_same_seed_same_dice() {
        let mut a = Game::new(GameConfig::new().with_seed(5));
        let mut b = Game::new(GameConfig::new().with_seed(5));

        for _ in 0..10 {
            assert_eq!(a.roll(), b.roll());
            a.end_turn();
            b.end_turn();
        }
    }
}

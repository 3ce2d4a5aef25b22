//! A seated AI opponent with its own record.

use std::time::{Duration, Instant};

use tracing::debug;

use super::config::Difficulty;
use super::strategy::Strategy;
use crate::core::{Move, Player};
use crate::game::Game;

/// An AI bound to one color.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    strategy: Strategy,
    color: Player,
    games_played: u32,
    games_won: u32,
    thinking_time: Duration,
}

impl AiPlayer {
    pub fn new(strategy: Strategy, color: Player) -> Self {
        Self {
            strategy,
            color,
            games_played: 0,
            games_won: 0,
            thinking_time: Duration::ZERO,
        }
    }

    /// An AI of the given tier, seeded with `seed`.
    pub fn for_difficulty(difficulty: Difficulty, color: Player, seed: u64) -> Self {
        Self::new(Strategy::for_difficulty(difficulty, seed), color)
    }

    #[must_use]
    pub fn color(&self) -> Player {
        self.color
    }

    #[must_use]
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut Strategy {
        &mut self.strategy
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub fn games_won(&self) -> u32 {
        self.games_won
    }

    /// Total time spent in `choose_move`.
    #[must_use]
    pub fn thinking_time(&self) -> Duration {
        self.thinking_time
    }

    /// Choose a move, or `None` when it is not this player's turn or
    /// nothing is playable.
    pub fn choose_move(&mut self, game: &Game) -> Option<Move> {
        if game.current_player() != self.color {
            return None;
        }

        let start = Instant::now();
        let mv = self.strategy.choose_move(game);
        let elapsed = start.elapsed();
        self.thinking_time += elapsed;

        debug!(
            ai = %self.strategy.name(),
            color = %self.color,
            elapsed_us = elapsed.as_micros() as u64,
            "AI chose move"
        );
        mv
    }

    /// Record the end of a game.
    pub fn record_result(&mut self, won: bool) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
        }
    }

    /// Percentage of games won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }

    /// Thinking time per game played.
    #[must_use]
    pub fn average_thinking_time(&self) -> Duration {
        if self.games_played == 0 {
            Duration::ZERO
        } else {
            self.thinking_time / self.games_played
        }
    }
}

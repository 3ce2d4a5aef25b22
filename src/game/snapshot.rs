//! Read-only views and checkpoints of a game.
//!
//! [`GameSummary`] is the compact view a host renders or ships to a
//! client. [`GameSnapshot`] is the full session state, including the dice
//! RNG, so a restored game continues with the same rolls.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::stats::GameStats;
use super::turn::Game;
use crate::board::{Board, PieceTally};
use crate::core::{Credits, Dice, GameConfig, GameRng, GameRngState, MoveRecord, Player, PlayerMap, Source};
use crate::error::SnapshotError;
use crate::rules;

/// Compact state view for hosts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub board: Board,
    pub current_player: Player,
    pub phase: Phase,
    pub dice: Option<Dice>,
    pub remaining: Vec<u8>,
    pub selected: Option<Source>,
    pub winner: Option<Player>,
    pub move_count: u32,
    pub turn_number: u32,
    pub tallies: PlayerMap<PieceTally>,
    pub can_bear_off: PlayerMap<bool>,
    pub pip_counts: PlayerMap<u32>,
}

/// Complete, restorable session state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub board: Board,
    pub active: Player,
    pub phase: Phase,
    pub dice: Option<Dice>,
    pub remaining: Vec<u8>,
    pub selected: Option<Source>,
    pub winner: Option<Player>,
    pub move_count: u32,
    pub turn_number: u32,
    pub history: Vector<MoveRecord>,
    pub stats: GameStats,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode bytes produced by [`GameSnapshot::to_bytes`].
    ///
    /// Only decodes; [`Game::from_snapshot`] checks consistency.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }

    /// Check that dice, credits and phase agree.
    fn check_credits(&self) -> Result<(), SnapshotError> {
        let mismatch = || SnapshotError::Credits {
            dice: self.dice.map(|d| [d.first, d.second]),
            remaining: self.remaining.clone(),
        };

        let Some(dice) = self.dice else {
            if self.remaining.is_empty() && !self.phase.accepts_moves() {
                return Ok(());
            }
            return Err(mismatch());
        };

        if !(1..=6).contains(&dice.first) || !(1..=6).contains(&dice.second) {
            return Err(mismatch());
        }
        if self.phase == Phase::AwaitingRoll {
            return Err(mismatch());
        }

        // Remaining credits must be a sub-multiset of the roll's credits
        let mut pool = dice.credits();
        for die in &self.remaining {
            match pool.iter().position(|d| d == die) {
                Some(index) => {
                    pool.remove(index);
                }
                None => return Err(mismatch()),
            }
        }
        Ok(())
    }

    /// Check that phase, winner, selection and the board's borne-off
    /// counts describe the same game.
    fn check_phase(&self) -> Result<(), SnapshotError> {
        let decided = rules::outcome(&self.board).map(|o| o.winner());
        let consistent = self.winner == decided
            && (self.phase == Phase::Finished) == self.winner.is_some()
            && (self.phase == Phase::SelectingDestination) == self.selected.is_some();

        if consistent {
            Ok(())
        } else {
            Err(SnapshotError::Phase {
                phase: self.phase,
                winner: self.winner,
                selected: self.selected,
            })
        }
    }
}

impl Game {
    /// Compact view of the current state.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            board: self.board.clone(),
            current_player: self.active,
            phase: self.phase,
            dice: self.dice,
            remaining: self.remaining.to_vec(),
            selected: self.selected,
            winner: self.winner,
            move_count: self.move_count,
            turn_number: self.turn_number,
            tallies: PlayerMap::new(|p| self.board.tally(p)),
            can_bear_off: PlayerMap::new(|p| self.board.can_bear_off(p)),
            pip_counts: PlayerMap::new(|p| self.board.pip_count(p)),
        }
    }

    /// Capture the full session state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            board: self.board.clone(),
            active: self.active,
            phase: self.phase,
            dice: self.dice,
            remaining: self.remaining.to_vec(),
            selected: self.selected,
            winner: self.winner,
            move_count: self.move_count,
            turn_number: self.turn_number,
            history: self.history.clone(),
            stats: self.stats.clone(),
            rng: self.rng.state(),
        }
    }

    /// Restore a session from a snapshot.
    ///
    /// Fails if the board breaks the piece-count invariant, the dice,
    /// credits and phase disagree, or the recorded winner does not match
    /// the phase and the borne-off counts.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        snapshot.board.validate()?;
        snapshot.check_credits()?;
        snapshot.check_phase()?;

        Ok(Self {
            rng: GameRng::from_state(&snapshot.rng),
            remaining: Credits::from_vec(snapshot.remaining),
            config: snapshot.config,
            board: snapshot.board,
            active: snapshot.active,
            phase: snapshot.phase,
            dice: snapshot.dice,
            selected: snapshot.selected,
            winner: snapshot.winner,
            move_count: snapshot.move_count,
            turn_number: snapshot.turn_number,
            history: snapshot.history,
            stats: snapshot.stats,
        })
    }
}

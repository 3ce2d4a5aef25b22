//! Session statistics across games.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerMap};

/// Running counters for a session.
///
/// Survives [`crate::game::Game::reset`]; updated once per finished game
/// (and once per hit).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    /// Games finished.
    pub games_played: u32,

    /// Games won per player.
    pub wins: PlayerMap<u32>,

    /// Moves played across all finished games.
    pub total_moves: u64,

    /// Opposing blots hit, across all games.
    pub hits: u32,
}

impl GameStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game.
    pub fn record_game(&mut self, winner: Player, moves: u32) {
        self.games_played += 1;
        self.wins[winner] += 1;
        self.total_moves += u64::from(moves);
    }

    /// Record a hit.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Average moves per finished game.
    #[must_use]
    pub fn average_game_length(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_moves as f64 / f64::from(self.games_played)
        }
    }

    /// Percentage of finished games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins[player]) / f64::from(self.games_played) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = GameStats::new();
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.average_game_length(), 0.0);
        assert_eq!(stats.win_rate(Player::White), 0.0);
    }

    #[test]
    fn test_record_games() {
        let mut stats = GameStats::new();
        stats.record_game(Player::White, 100);
        stats.record_game(Player::White, 80);
        stats.record_game(Player::Black, 120);

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.wins[Player::White], 2);
        assert_eq!(stats.total_moves, 300);
        assert_eq!(stats.average_game_length(), 100.0);
        assert!((stats.win_rate(Player::White) - 66.666).abs() < 0.01);
        assert!((stats.win_rate(Player::Black) - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = GameStats::new();
        stats.record_hit();
        stats.record_game(Player::Black, 42);

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: GameStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}

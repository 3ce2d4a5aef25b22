//! Strategy-versus-strategy matches.
//!
//! Plays whole games with no host in the loop, for tuning weights and
//! comparing difficulty tiers.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::stats::GameStats;
use super::turn::Game;
use crate::ai::Strategy;
use crate::core::{GameConfig, Player, PlayerMap};

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play.
    pub games: u32,

    /// Turns after which an unfinished game is abandoned.
    pub max_turns: u32,

    /// Dice seed for the session.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 1,
            max_turns: 1000,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the per-game turn cap.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome of a match.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchResult {
    /// Winner of each game in order; `None` when the turn cap was hit.
    pub winners: Vec<Option<Player>>,

    /// Games abandoned at the turn cap.
    pub unfinished: u32,

    /// Session statistics over the finished games.
    pub stats: GameStats,
}

impl MatchResult {
    /// Games won per color.
    #[must_use]
    pub fn wins(&self) -> PlayerMap<u32> {
        let mut wins = PlayerMap::with_value(0);
        for winner in self.winners.iter().flatten() {
            wins[*winner] += 1;
        }
        wins
    }
}

/// Play one game to the end or to `max_turns`.
///
/// Returns the winner, if any.
pub fn play_game(game: &mut Game, players: &mut PlayerMap<Strategy>, max_turns: u32) -> Option<Player> {
    while !game.is_finished() && game.turn_number() <= max_turns {
        let active = game.current_player();
        let played = game.play_turn(&mut players[active]);
        debug!(player = %active, moves = played.len(), "Turn played");
    }
    game.winner()
}

/// Play `config.games` games between two strategies.
///
/// White always moves first; the dice stream continues across games.
pub fn play_match(white: Strategy, black: Strategy, config: &MatchConfig) -> MatchResult {
    let mut game = Game::new(
        GameConfig::new()
            .with_seed(config.seed)
            .with_first_mover(Player::White),
    );
    let mut players = PlayerMap::new(|p| match p {
        Player::White => white.clone(),
        Player::Black => black.clone(),
    });

    let mut result = MatchResult::default();
    for index in 0..config.games {
        if index > 0 {
            game.reset();
        }

        let winner = play_game(&mut game, &mut players, config.max_turns);
        if winner.is_none() {
            result.unfinished += 1;
        }
        result.winners.push(winner);
    }
    result.stats = game.stats().clone();

    info!(
        white = %players[Player::White].name(),
        black = %players[Player::Black].name(),
        games = config.games,
        white_wins = result.stats.wins[Player::White],
        black_wins = result.stats.wins[Player::Black],
        unfinished = result.unfinished,
        "Match complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_config_builders() {
        let config = MatchConfig::new().with_games(3).with_max_turns(50).with_seed(9);
        assert_eq!(config.games, 3);
        assert_eq!(config.max_turns, 50);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_random_match_completes() {
        let config = MatchConfig::new().with_games(2).with_max_turns(2000).with_seed(3);
        let result = play_match(Strategy::random(1), Strategy::random(2), &config);

        assert_eq!(result.winners.len(), 2);
        let finished = result.winners.iter().filter(|w| w.is_some()).count() as u32;
        assert_eq!(finished + result.unfinished, 2);
        assert_eq!(result.stats.games_played, finished);

        let wins = result.wins();
        assert_eq!(wins[Player::White] + wins[Player::Black], finished);
    }

    #[test]
    fn test_turn_cap() {
        let config = MatchConfig::new().with_max_turns(3);
        let result = play_match(Strategy::greedy(), Strategy::greedy(), &config);

        assert_eq!(result.winners, vec![None]);
        assert_eq!(result.unfinished, 1);
        assert_eq!(result.stats.games_played, 0);
    }

    #[test]
    fn test_match_is_reproducible() {
        let config = MatchConfig::new().with_games(2).with_seed(11);
        let a = play_match(Strategy::random(5), Strategy::greedy(), &config);
        let b = play_match(Strategy::random(5), Strategy::greedy(), &config);

        assert_eq!(a.winners, b.winners);
        assert_eq!(a.stats, b.stats);
    }
}

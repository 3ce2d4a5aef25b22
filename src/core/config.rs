//! Game configuration.
//!
//! Hosts configure a session at startup by providing a `GameConfig`:
//! - `seed`: dice RNG seed, so a session can be replayed exactly
//! - `first_mover`: who rolls first after every reset
//! - `validate_on_reset`: run the piece-count validator after each reset

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the dice RNG.
    pub seed: u64,

    /// Player to move after every reset.
    pub first_mover: Player,

    /// Run the piece-count validator after every reset.
    pub validate_on_reset: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            first_mover: Player::White,
            validate_on_reset: true,
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the first mover.
    #[must_use]
    pub fn with_first_mover(mut self, player: Player) -> Self {
        self.first_mover = player;
        self
    }

    /// Enable or disable validation after reset.
    #[must_use]
    pub fn with_validate_on_reset(mut self, validate: bool) -> Self {
        self.validate_on_reset = validate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.first_mover, Player::White);
        assert!(config.validate_on_reset);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_seed(7)
            .with_first_mover(Player::Black)
            .with_validate_on_reset(false);

        assert_eq!(config.seed, 7);
        assert_eq!(config.first_mover, Player::Black);
        assert!(!config.validate_on_reset);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

//! Game setup configuration.
//!
//! The presentation layer collects the player count and names, builds a
//! `GameConfig`, and the game loop validates it before any player exists.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Fewest players a race accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a race accepts.
pub const MAX_PLAYERS: usize = 4;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// One name per player, in turn order. Uniqueness is not required.
    pub player_names: Vec<String>,

    /// Fixed die seed. `None` draws a fresh seed per process.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration from player names.
    pub fn new<I, S>(player_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            player_names: player_names.into_iter().map(Into::into).collect(),
            seed: None,
        }
    }

    /// Use a fixed die seed for a reproducible game.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Append another player.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.player_names.push(name.into());
        self
    }

    /// Number of configured players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check a player count on its own, before names are collected.
    pub fn validate_player_count(count: usize) -> Result<(), ConfigError> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            Ok(())
        } else {
            Err(ConfigError::PlayerCount { count })
        }
    }

    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_player_count(self.player_count())?;

        if let Some(index) = self
            .player_names
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(ConfigError::EmptyName { index });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new(["Ada", "Brian"])
            .with_player("Cleo")
            .with_seed(7);

        assert_eq!(config.player_count(), 3);
        assert_eq!(config.player_names[2], "Cleo");
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_player_count_bounds() {
        for count in 0..=6 {
            let result = GameConfig::validate_player_count(count);
            if (2..=4).contains(&count) {
                assert!(result.is_ok(), "{count} players should be accepted");
            } else {
                assert_eq!(result, Err(ConfigError::PlayerCount { count }));
            }
        }
    }

    #[test]
    fn test_single_player_rejected() {
        let config = GameConfig::new(["Solo"]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::PlayerCount { count: 1 })
        );
    }

    #[test]
    fn test_five_players_rejected() {
        let config = GameConfig::new(["A", "B", "C", "D", "E"]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::PlayerCount { count: 5 })
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = GameConfig::new(["Ada", "  "]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyName { index: 1 }));
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let config = GameConfig::new(["Sam", "Sam"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(["Ada", "Brian"]).with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

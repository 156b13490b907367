//! Error taxonomy.
//!
//! Only setup can fail. Once a game is running every operation is total;
//! broken internal invariants are assertion failures, not errors.

use super::config::{MAX_PLAYERS, MIN_PLAYERS};

/// Errors raised while validating a `GameConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid number of players: {count} (expected {min}-{max})", min = MIN_PLAYERS, max = MAX_PLAYERS)]
    PlayerCount { count: usize },

    #[error("player {} has an empty name", .index + 1)]
    EmptyName { index: usize },
}

/// Errors raised by the game loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("game is already finished")]
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_count_display() {
        let err = ConfigError::PlayerCount { count: 5 };
        assert_eq!(err.to_string(), "invalid number of players: 5 (expected 2-4)");
    }

    #[test]
    fn test_empty_name_display() {
        let err = ConfigError::EmptyName { index: 1 };
        assert_eq!(err.to_string(), "player 2 has an empty name");
    }

    #[test]
    fn test_game_error_from_config() {
        let err: GameError = ConfigError::PlayerCount { count: 1 }.into();
        assert_eq!(
            err.to_string(),
            "configuration error: invalid number of players: 1 (expected 2-4)"
        );
    }
}

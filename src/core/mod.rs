//! Core engine types: players, turn queue, state, RNG, configuration, errors.
//!
//! These are the building blocks the board, the turn engine and the game
//! loop share.

pub mod player;
pub mod queue;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use player::{Player, PlayerId, Roster};
pub use queue::TurnQueue;
pub use rng::GameRng;
pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, GameError};
pub use state::{GameState, StandingEntry, Standings};

//! # dice-race
//!
//! A 2-4 player race to square 100 with boosts and setbacks.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: `TurnEngine` is a function of position, roll and board.
//!    No I/O, no randomness, no player state.
//!
//! 2. **Injected randomness**: the game loop rolls through the `Die` trait,
//!    so tests script exact rolls and real games use a seedable ChaCha8 die.
//!
//! 3. **Presentation at the edge**: prompting, printing and pacing happen in
//!    a `TurnObserver`. The library never blocks and never prints.
//!
//! ## Modules
//!
//! - `core`: Players, turn queue, state, RNG, configuration, errors
//! - `board`: The fixed 100-square board and its special squares
//! - `dice`: `Die` trait, random and scripted dice
//! - `rules`: Single-turn resolution
//! - `observer`: Turn reporting seam and stock observers
//! - `game`: The `Setup -> Playing -> Finished` game loop

pub mod core;
pub mod board;
pub mod dice;
pub mod rules;
pub mod observer;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, Roster, TurnQueue,
    GameRng, GameConfig, MIN_PLAYERS, MAX_PLAYERS,
    ConfigError, GameError,
    GameState, StandingEntry, Standings,
};

pub use crate::board::{Board, SpecialSquare, FINAL_SQUARE};

pub use crate::dice::{Die, RandomDie, ScriptedDie};

pub use crate::rules::{TurnEngine, TurnOutcome, TurnResult};

pub use crate::observer::{
    TurnObserver, TurnReport,
    NullObserver, LogObserver, RecordingObserver, ObservedEvent,
};

pub use crate::game::{GameLoop, GamePhase, GameSummary};

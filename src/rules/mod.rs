//! Turn rules.
//!
//! `TurnEngine` is a pure function of position, roll and board. It never
//! touches players or the queue; the game loop applies its result.

pub mod engine;

pub use engine::{TurnEngine, TurnOutcome, TurnResult};

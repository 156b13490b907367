//! The race itself.
//!
//! `GameLoop` owns a `GameState` and moves it through
//! `Setup -> Playing -> Finished`:
//! - Setup validates the config and puts every player on square 0
//! - Each turn pops the front player, rolls, resolves and re-queues them
//! - The first exact landing on square 100 ends the race
//!
//! ```
//! use dice_race::core::GameConfig;
//! use dice_race::dice::ScriptedDie;
//! use dice_race::game::{GameLoop, GamePhase};
//! use dice_race::observer::NullObserver;
//! use dice_race::rules::TurnOutcome;
//!
//! let config = GameConfig::new(["A", "B"]);
//! let mut game = GameLoop::new(&config, ScriptedDie::new([4, 5]), NullObserver).unwrap();
//!
//! let a = game.play_turn().unwrap();
//! assert_eq!(a.outcome, TurnOutcome::BoostApplied { from: 4, to: 14 });
//! let b = game.play_turn().unwrap();
//! assert_eq!(b.outcome, TurnOutcome::Moved(5));
//! assert_eq!(game.phase(), GamePhase::Playing);
//! ```

mod race;

pub use race::{GameLoop, GamePhase, GameSummary};

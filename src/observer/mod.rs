//! Turn observers.
//!
//! The game loop reports progress through `TurnObserver` instead of doing
//! any I/O itself. A console front end prompts and paces inside these
//! callbacks; a headless run passes `NullObserver`.
//!
//! ## Call order per turn
//!
//! 1. `before_roll` with the active player and their square
//! 2. `on_turn` with the full `TurnReport`
//! 3. `on_game_over`, once, if the turn won the race

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Standings};
use crate::rules::TurnResult;

/// Everything the presentation layer needs to render one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// 1-based turn counter.
    pub turn_number: u32,
    pub player: PlayerId,
    pub player_name: String,
    /// Roll, pre-roll square, outcome and final square.
    pub result: TurnResult,
    /// All players after this turn, creation order.
    pub standings: Standings,
}

/// Receives game progress.
///
/// Every method has a no-op default so observers only implement what they
/// render.
pub trait TurnObserver {
    /// The active player is about to roll.
    fn before_roll(&mut self, _player: PlayerId, _name: &str, _position: u8) {}

    /// A turn has been applied.
    fn on_turn(&mut self, _report: &TurnReport) {}

    /// The race is over.
    fn on_game_over(&mut self, _winner: PlayerId, _name: &str) {}
}

impl<O: TurnObserver + ?Sized> TurnObserver for &mut O {
    fn before_roll(&mut self, player: PlayerId, name: &str, position: u8) {
        (**self).before_roll(player, name, position);
    }

    fn on_turn(&mut self, report: &TurnReport) {
        (**self).on_turn(report);
    }

    fn on_game_over(&mut self, winner: PlayerId, name: &str) {
        (**self).on_game_over(winner, name);
    }
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl TurnObserver for NullObserver {}

/// Forwards progress to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl TurnObserver for LogObserver {
    fn on_turn(&mut self, report: &TurnReport) {
        debug!(
            "turn {}: {} rolled {} at {} -> {} ({})",
            report.turn_number,
            report.player_name,
            report.result.roll,
            report.result.from,
            report.result.position,
            report.result.outcome,
        );
    }

    fn on_game_over(&mut self, winner: PlayerId, name: &str) {
        info!("{} ({}) wins", name, winner);
    }
}

/// One recorded callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObservedEvent {
    BeforeRoll { player: PlayerId, position: u8 },
    Turn(TurnReport),
    GameOver { winner: PlayerId, name: String },
}

/// Keeps every callback in order. Handy for headless harnesses and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<ObservedEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the turn reports.
    pub fn reports(&self) -> impl Iterator<Item = &TurnReport> {
        self.events.iter().filter_map(|e| match e {
            ObservedEvent::Turn(report) => Some(report),
            _ => None,
        })
    }

    /// How many times `on_game_over` fired.
    #[must_use]
    pub fn game_over_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ObservedEvent::GameOver { .. }))
            .count()
    }
}

impl TurnObserver for RecordingObserver {
    fn before_roll(&mut self, player: PlayerId, _name: &str, position: u8) {
        self.events.push(ObservedEvent::BeforeRoll { player, position });
    }

    fn on_turn(&mut self, report: &TurnReport) {
        self.events.push(ObservedEvent::Turn(report.clone()));
    }

    fn on_game_over(&mut self, winner: PlayerId, name: &str) {
        self.events.push(ObservedEvent::GameOver {
            winner,
            name: name.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::rules::TurnOutcome;

    fn sample_report() -> TurnReport {
        TurnReport {
            turn_number: 1,
            player: PlayerId::new(0),
            player_name: "Ada".to_string(),
            result: TurnResult {
                from: 0,
                roll: 4,
                outcome: TurnOutcome::BoostApplied { from: 4, to: 14 },
                position: 14,
            },
            standings: GameState::new(["Ada", "Brian"]).standings(),
        }
    }

    #[test]
    fn test_recording_observer_order() {
        let mut observer = RecordingObserver::new();
        observer.before_roll(PlayerId::new(0), "Ada", 0);
        observer.on_turn(&sample_report());
        observer.on_game_over(PlayerId::new(0), "Ada");

        assert_eq!(observer.events.len(), 3);
        assert!(matches!(observer.events[0], ObservedEvent::BeforeRoll { .. }));
        assert_eq!(observer.reports().count(), 1);
        assert_eq!(observer.game_over_count(), 1);
    }

    #[test]
    fn test_observer_through_reference() {
        let mut observer = RecordingObserver::new();
        {
            let mut borrowed = &mut observer;
            TurnObserver::on_game_over(&mut borrowed, PlayerId::new(1), "Brian");
        }
        assert_eq!(
            observer.events,
            vec![ObservedEvent::GameOver {
                winner: PlayerId::new(1),
                name: "Brian".to_string(),
            }]
        );
    }

    #[test]
    fn test_report_serde() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: TurnReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}

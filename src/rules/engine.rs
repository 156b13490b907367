//! Single-turn resolution.
//!
//! Given a position, a roll and the board, `TurnEngine` computes where the
//! player ends up:
//! - Past the final square: the turn is void
//! - Exactly on the final square: the player wins
//! - Otherwise: move, then apply at most one boost or setback

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::dice::{MAX_FACE, MIN_FACE};

/// What happened on a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Roll would pass the final square. Position unchanged.
    Overshoot,
    /// Landed exactly on the final square.
    Win,
    /// Plain move onto a non-special square.
    Moved(u8),
    /// Landed on `from`, carried forward to `to`.
    BoostApplied { from: u8, to: u8 },
    /// Landed on `from`, sent back to `to`.
    SetbackApplied { from: u8, to: u8 },
}

impl TurnOutcome {
    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, TurnOutcome::Win)
    }
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnOutcome::Overshoot => write!(f, "Overshoot"),
            TurnOutcome::Win => write!(f, "Win"),
            TurnOutcome::Moved(to) => write!(f, "Moved({to})"),
            TurnOutcome::BoostApplied { from, to } => write!(f, "BoostApplied({from},{to})"),
            TurnOutcome::SetbackApplied { from, to } => write!(f, "SetbackApplied({from},{to})"),
        }
    }
}

/// Result of resolving one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Position before the roll.
    pub from: u8,
    /// Value rolled.
    pub roll: u8,
    /// Outcome tag.
    pub outcome: TurnOutcome,
    /// Position after the turn.
    pub position: u8,
}

/// Resolves turns against a board.
#[derive(Clone, Copy, Debug)]
pub struct TurnEngine<'a> {
    board: &'a Board,
}

impl<'a> TurnEngine<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Resolve one turn for a player standing on `position` who rolled `roll`.
    ///
    /// `position` must be below the final square and `roll` a die face;
    /// anything else is a caller bug.
    #[must_use]
    pub fn resolve(&self, position: u8, roll: u8) -> TurnResult {
        let final_square = self.board.final_square();
        debug_assert!(position < final_square, "Player already finished at {position}");
        debug_assert!(
            (MIN_FACE..=MAX_FACE).contains(&roll),
            "Roll {roll} is not a die face"
        );

        let candidate = position + roll;

        let (outcome, landed) = if candidate > final_square {
            (TurnOutcome::Overshoot, position)
        } else if candidate == final_square {
            (TurnOutcome::Win, candidate)
        } else {
            // Single lookup: a destination is never resolved again
            let target = self.board.resolve(candidate);
            if target > candidate {
                (TurnOutcome::BoostApplied { from: candidate, to: target }, target)
            } else if target < candidate {
                (TurnOutcome::SetbackApplied { from: candidate, to: target }, target)
            } else {
                (TurnOutcome::Moved(candidate), candidate)
            }
        };

        TurnResult {
            from: position,
            roll,
            outcome,
            position: landed,
        }
    }
}

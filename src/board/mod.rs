//! The race board.
//!
//! A 100-square track with a fixed table of special squares. Landing on a
//! boost square carries the player forward; landing on a setback square
//! sends them back. The board is built once and lent to the turn engine by
//! reference.
//!
//! ```
//! use dice_race::board::{Board, SpecialSquare};
//!
//! let board = Board::standard();
//! assert_eq!(board.final_square(), 100);
//! assert_eq!(board.resolve(4), 14);
//! assert_eq!(board.resolve(5), 5);
//! assert_eq!(board.special(64), Some(SpecialSquare::Setback { from: 64, to: 60 }));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The winning square.
pub const FINAL_SQUARE: u8 = 100;

/// Boost squares: trigger -> higher destination.
const BOOSTS: [(u8, u8); 8] = [
    (4, 14),
    (9, 31),
    (20, 38),
    (28, 84),
    (40, 59),
    (51, 67),
    (63, 81),
    (71, 91),
];

/// Setback squares: trigger -> lower destination.
const SETBACKS: [(u8, u8); 8] = [
    (17, 7),
    (54, 34),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 79),
];

/// A classified special square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialSquare {
    /// Carries the player forward.
    Boost { from: u8, to: u8 },
    /// Sends the player back.
    Setback { from: u8, to: u8 },
}

impl SpecialSquare {
    fn classify(from: u8, to: u8) -> Self {
        if to > from {
            SpecialSquare::Boost { from, to }
        } else {
            SpecialSquare::Setback { from, to }
        }
    }

    /// Trigger square.
    #[must_use]
    pub fn trigger(self) -> u8 {
        match self {
            SpecialSquare::Boost { from, .. } | SpecialSquare::Setback { from, .. } => from,
        }
    }

    /// Destination square.
    #[must_use]
    pub fn destination(self) -> u8 {
        match self {
            SpecialSquare::Boost { to, .. } | SpecialSquare::Setback { to, .. } => to,
        }
    }
}

/// Immutable lookup table of special squares.
#[derive(Clone, Debug)]
pub struct Board {
    special_squares: FxHashMap<u8, u8>,
    final_square: u8,
}

impl Board {
    /// The fixed 100-square board.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_pairs(BOOSTS.iter().chain(SETBACKS.iter()).copied())
    }

    /// Build a board from arbitrary trigger/destination pairs.
    ///
    /// Only used to exercise resolution rules against layouts the standard
    /// table does not contain.
    pub(crate) fn from_pairs(pairs: impl IntoIterator<Item = (u8, u8)>) -> Self {
        let mut special_squares = FxHashMap::default();

        for (from, to) in pairs {
            assert!(
                (1..FINAL_SQUARE).contains(&from),
                "Special square {from} must be in 1..{FINAL_SQUARE}"
            );
            assert!(to <= FINAL_SQUARE, "Destination {to} is off the board");
            assert_ne!(from, to, "Special square {from} maps to itself");

            let previous = special_squares.insert(from, to);
            assert!(previous.is_none(), "Duplicate special square {from}");
        }

        Self {
            special_squares,
            final_square: FINAL_SQUARE,
        }
    }

    /// The square that wins the race.
    #[must_use]
    pub fn final_square(&self) -> u8 {
        self.final_square
    }

    /// Destination of `position` if it is special, otherwise `position`.
    ///
    /// A single lookup: the destination is never itself resolved.
    #[must_use]
    pub fn resolve(&self, position: u8) -> u8 {
        self.special_squares
            .get(&position)
            .copied()
            .unwrap_or(position)
    }

    /// Classify `position` if it triggers a boost or setback.
    #[must_use]
    pub fn special(&self, position: u8) -> Option<SpecialSquare> {
        self.special_squares
            .get(&position)
            .map(|&to| SpecialSquare::classify(position, to))
    }

    /// All boosts, ascending by trigger square.
    #[must_use]
    pub fn boosts(&self) -> Vec<SpecialSquare> {
        self.sorted_specials()
            .into_iter()
            .filter(|s| matches!(s, SpecialSquare::Boost { .. }))
            .collect()
    }

    /// All setbacks, ascending by trigger square.
    #[must_use]
    pub fn setbacks(&self) -> Vec<SpecialSquare> {
        self.sorted_specials()
            .into_iter()
            .filter(|s| matches!(s, SpecialSquare::Setback { .. }))
            .collect()
    }

    fn sorted_specials(&self) -> Vec<SpecialSquare> {
        let mut specials: Vec<_> = self
            .special_squares
            .iter()
            .map(|(&from, &to)| SpecialSquare::classify(from, to))
            .collect();
        specials.sort_by_key(|s| s.trigger());
        specials
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_square() {
        assert_eq!(Board::standard().final_square(), 100);
    }

    #[test]
    fn test_standard_table() {
        let board = Board::standard();

        for (from, to) in BOOSTS {
            assert_eq!(board.resolve(from), to);
            assert!(to > from);
        }
        for (from, to) in SETBACKS {
            assert_eq!(board.resolve(from), to);
            assert!(to < from);
        }
    }

    #[test]
    fn test_plain_squares_resolve_to_themselves() {
        let board = Board::standard();
        let specials: Vec<u8> = BOOSTS.iter().chain(SETBACKS.iter()).map(|&(f, _)| f).collect();

        for square in 0..=100u8 {
            if !specials.contains(&square) {
                assert_eq!(board.resolve(square), square);
                assert_eq!(board.special(square), None);
            }
        }
    }

    #[test]
    fn test_start_and_final_never_special() {
        let board = Board::standard();
        assert_eq!(board.special(0), None);
        assert_eq!(board.special(100), None);
    }

    #[test]
    fn test_boosts_and_setbacks_listing() {
        let board = Board::standard();

        let boosts = board.boosts();
        assert_eq!(boosts.len(), 8);
        assert_eq!(boosts[0], SpecialSquare::Boost { from: 4, to: 14 });
        assert_eq!(boosts[7], SpecialSquare::Boost { from: 71, to: 91 });

        let setbacks = board.setbacks();
        assert_eq!(setbacks.len(), 8);
        assert_eq!(setbacks[0], SpecialSquare::Setback { from: 17, to: 7 });
        assert_eq!(setbacks[7], SpecialSquare::Setback { from: 98, to: 79 });
    }

    #[test]
    fn test_special_square_accessors() {
        let square = SpecialSquare::Boost { from: 28, to: 84 };
        assert_eq!(square.trigger(), 28);
        assert_eq!(square.destination(), 84);
    }

    #[test]
    fn test_standard_table_has_no_chains() {
        let board = Board::standard();
        for square in board.boosts().into_iter().chain(board.setbacks()) {
            assert_eq!(board.special(square.destination()), None);
        }
    }

    #[test]
    #[should_panic(expected = "maps to itself")]
    fn test_self_mapping_rejected() {
        Board::from_pairs([(10, 10)]);
    }

    #[test]
    #[should_panic(expected = "Duplicate special square")]
    fn test_duplicate_rejected() {
        Board::from_pairs([(10, 20), (10, 30)]);
    }
}

//! Dice.
//!
//! The game loop only sees the `Die` trait, so a headless harness can swap
//! the random die for a scripted one without touching the rules.
//!
//! - `RandomDie`: uniform rolls from a seedable `GameRng`
//! - `ScriptedDie`: replays a fixed sequence of rolls

use std::collections::VecDeque;

use crate::core::GameRng;

/// Lowest face.
pub const MIN_FACE: u8 = 1;

/// Highest face.
pub const MAX_FACE: u8 = 6;

/// Source of die rolls.
pub trait Die {
    /// Roll once. Implementations must return a value in `1..=6`.
    fn roll(&mut self) -> u8;
}

impl<D: Die + ?Sized> Die for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

impl<D: Die + ?Sized> Die for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// A fair six-sided die.
#[derive(Clone, Debug)]
pub struct RandomDie {
    rng: GameRng,
}

impl RandomDie {
    /// Die seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Die with a fixed seed, for reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Seed of the underlying generator.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Die for RandomDie {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range_inclusive(MIN_FACE, MAX_FACE)
    }
}

/// Replays a fixed list of rolls, front to back.
///
/// ```
/// use dice_race::dice::{Die, ScriptedDie};
///
/// let mut die = ScriptedDie::new([4, 5]);
/// assert_eq!(die.roll(), 4);
/// assert_eq!(die.roll(), 5);
/// assert!(die.is_exhausted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDie {
    rolls: VecDeque<u8>,
}

impl ScriptedDie {
    /// Panics if any scripted value is not a die face.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let rolls: VecDeque<u8> = rolls.into_iter().collect();
        assert!(
            rolls.iter().all(|r| (MIN_FACE..=MAX_FACE).contains(r)),
            "Scripted rolls must be in {MIN_FACE}..={MAX_FACE}"
        );
        Self { rolls }
    }

    /// Rolls left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.rolls.is_empty()
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> u8 {
        self.rolls.pop_front().expect("Scripted die ran out of rolls")
    }
}

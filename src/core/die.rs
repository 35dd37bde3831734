//! Dice: a single die and a hand of dice rolled together.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GameError;
use super::rng::RollSource;

/// Default number of die faces.
pub const DEFAULT_SIDES: u8 = 6;

/// A single die with a configurable number of sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    sides: u8,
}

impl Die {
    /// Create a die with the given number of sides (at least 2).
    pub fn new(sides: u8) -> Result<Self, GameError> {
        if sides < 2 {
            return Err(GameError::InvalidConfiguration(format!(
                "a die must have at least 2 sides, got {sides}"
            )));
        }
        Ok(Self { sides })
    }

    /// Get the number of sides.
    #[must_use]
    pub fn sides(self) -> u8 {
        self.sides
    }

    /// Roll the die, consuming one draw from the source.
    pub fn roll(self, source: &mut dyn RollSource) -> u8 {
        source.draw(1, self.sides)
    }
}

impl Default for Die {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
        }
    }
}

/// One or more dice rolled together.
///
/// Remembers the results of the most recent roll so `total` can be read
/// back without re-rolling.
#[derive(Clone, Debug)]
pub struct DiceHand {
    dice: Vec<Die>,
    last: SmallVec<[u8; 2]>,
}

impl DiceHand {
    /// Create a hand from a non-empty set of dice.
    pub fn new(dice: Vec<Die>) -> Result<Self, GameError> {
        if dice.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "a dice hand must contain at least one die".into(),
            ));
        }
        Ok(Self {
            dice,
            last: SmallVec::new(),
        })
    }

    /// Create the standard Pig hand: one die with the given sides.
    pub fn single(sides: u8) -> Result<Self, GameError> {
        Ok(Self {
            dice: vec![Die::new(sides)?],
            last: SmallVec::new(),
        })
    }

    /// The dice in this hand.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Roll every die once, in order, recording the results.
    pub fn roll_all(&mut self, source: &mut dyn RollSource) -> &[u8] {
        self.last = self.dice.iter().map(|die| die.roll(source)).collect();
        &self.last
    }

    /// Results of the most recent roll, if any.
    #[must_use]
    pub fn last_roll(&self) -> Option<&[u8]> {
        if self.last.is_empty() {
            None
        } else {
            Some(&self.last)
        }
    }

    /// Sum of the most recent roll.
    ///
    /// Fails with `NoRollYet` if `roll_all` has never been called.
    pub fn total(&self) -> Result<u32, GameError> {
        if self.last.is_empty() {
            return Err(GameError::NoRollYet);
        }
        Ok(self.last.iter().map(|&v| u32::from(v)).sum())
    }
}

//! Player identity and score bookkeeping.
//!
//! ## PlayerId
//!
//! Opaque unique token for a participant. The computer opponent has the
//! reserved id [`PlayerId::COMPUTER`]; human ids are assigned per seat at
//! registration and survive save/load.
//!
//! ## Scoreboard
//!
//! A name plus a non-negative score. The score only moves through the
//! explicit mutators here, so the monotonic-until-reset invariant has a
//! single enforcement point.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Opaque participant identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Reserved id for the computer opponent.
    pub const COMPUTER: PlayerId = PlayerId(0);

    /// Check whether this is the computer's id.
    #[must_use]
    pub const fn is_computer(self) -> bool {
        self.0 == Self::COMPUTER.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_computer() {
            write!(f, "computer")
        } else {
            write!(f, "player-{}", self.0)
        }
    }
}

/// A participant's name and banked score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    id: PlayerId,
    name: String,
    score: u32,
}

impl Scoreboard {
    /// Create a scoreboard with a zero score.
    ///
    /// The name is trimmed; an empty or whitespace-only name fails with
    /// `InvalidConfiguration`.
    pub fn new(id: PlayerId, name: &str) -> Result<Self, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "player name cannot be empty".into(),
            ));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            score: 0,
        })
    }

    /// Get the participant id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Get the participant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the banked score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add points to the score.
    pub fn add_to_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Overwrite the score (load/restore and forced-win paths).
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Reset the score to zero (new game).
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} points)", self.name, self.score)
    }
}

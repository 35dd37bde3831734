//! AI difficulty tiers.
//!
//! Each tier fixes two knobs: how many times the computer will roll per
//! turn before holding (the roll cap), and how many candidate face
//! ranges its per-roll distribution picks from (the range ladder, see
//! [`crate::engine::strategy`]). Higher tiers roll more often and skew
//! toward higher faces, but every tier can still draw the bust face.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// A named AI configuration controlling roll cap and risk profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Noob,
    Casual,
    Challenger,
    Veteran,
    Elite,
    Legendary,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub const ALL: [Difficulty; 6] = [
        Difficulty::Noob,
        Difficulty::Casual,
        Difficulty::Challenger,
        Difficulty::Veteran,
        Difficulty::Elite,
        Difficulty::Legendary,
    ];

    /// Maximum rolls the computer attempts per turn.
    #[must_use]
    pub const fn roll_cap(self) -> u8 {
        match self {
            Difficulty::Noob => 2,
            Difficulty::Casual => 4,
            Difficulty::Challenger => 6,
            Difficulty::Veteran => 8,
            Difficulty::Elite => 10,
            Difficulty::Legendary => 12,
        }
    }

    /// Number of rungs in the per-roll range ladder.
    ///
    /// Rung `k` spans faces `k+1..=sides`; rung 0 is always the full
    /// range, which keeps a bust possible at every tier.
    #[must_use]
    pub const fn range_count(self) -> u8 {
        match self {
            Difficulty::Noob => 1,
            Difficulty::Casual => 2,
            Difficulty::Challenger => 3,
            Difficulty::Veteran => 4,
            Difficulty::Elite => 5,
            Difficulty::Legendary => 6,
        }
    }

    /// Canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Noob => "noob",
            Difficulty::Casual => "casual",
            Difficulty::Challenger => "challenger",
            Difficulty::Veteran => "veteran",
            Difficulty::Elite => "elite",
            Difficulty::Legendary => "legendary",
        }
    }

    /// Player-facing one-line description of the tier.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Difficulty::Noob => "Low skill, rolls only twice per turn.",
            Difficulty::Casual => "Slightly smarter, rolls four times.",
            Difficulty::Challenger => "Moderate AI, takes a few risks.",
            Difficulty::Veteran => "Experienced AI, rolls carefully.",
            Difficulty::Elite => "Tough AI, rolls aggressively but rarely busts.",
            Difficulty::Legendary => "Almost perfect AI, very risky but rewards high.",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Casual
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noob" => Ok(Difficulty::Noob),
            "casual" => Ok(Difficulty::Casual),
            "challenger" => Ok(Difficulty::Challenger),
            "veteran" => Ok(Difficulty::Veteran),
            "elite" => Ok(Difficulty::Elite),
            "legendary" => Ok(Difficulty::Legendary),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_caps() {
        let caps: Vec<u8> = Difficulty::ALL.iter().map(|d| d.roll_cap()).collect();
        assert_eq!(caps, vec![2, 4, 6, 8, 10, 12]);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("  Veteran ".parse::<Difficulty>().unwrap(), Difficulty::Veteran);
        assert_eq!("LEGENDARY".parse::<Difficulty>().unwrap(), Difficulty::Legendary);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "extreme".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty("extreme".into()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Elite).unwrap();
        assert_eq!(json, "\"elite\"");
        let back: Difficulty = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Difficulty::Elite);
    }

    #[test]
    fn test_range_ladder_grows_with_tier() {
        let mut prev = 0;
        for d in Difficulty::ALL {
            assert!(d.range_count() > prev);
            prev = d.range_count();
        }
    }
}

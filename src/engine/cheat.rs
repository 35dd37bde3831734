//! Cheat codes: administrative/testing escape hatches.
//!
//! Codes parse into a closed enum and dispatch to explicit, named
//! mutations on the game (`add_turn_score`, `add_bonus`, `force_win`),
//! so even the backdoor goes through the same invariant-checked paths
//! as regular play.

use crate::core::GameError;

use super::state::Seat;

/// Recognized cheat codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheatCode {
    /// Instant win: score jumps straight to the winning score.
    Win,
    /// Add 10 to the current turn total.
    Score10,
    /// Add 25 to the current turn total.
    Score25,
    /// Add 5 directly to the banked score.
    Bonus5,
    /// Add 15 directly to the banked score.
    Bonus15,
}

impl CheatCode {
    /// All recognized codes.
    pub const ALL: [CheatCode; 5] = [
        CheatCode::Win,
        CheatCode::Score10,
        CheatCode::Score25,
        CheatCode::Bonus5,
        CheatCode::Bonus15,
    ];

    /// Parse a code, case-insensitively.
    ///
    /// Unrecognized codes fail with `UnknownCheat` and must not mutate
    /// anything.
    pub fn parse(code: &str) -> Result<Self, GameError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "WIN" => Ok(CheatCode::Win),
            "SCORE10" => Ok(CheatCode::Score10),
            "SCORE25" => Ok(CheatCode::Score25),
            "BONUS5" => Ok(CheatCode::Bonus5),
            "BONUS15" => Ok(CheatCode::Bonus15),
            _ => Err(GameError::UnknownCheat(code.trim().to_string())),
        }
    }

    /// Canonical code string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CheatCode::Win => "WIN",
            CheatCode::Score10 => "SCORE10",
            CheatCode::Score25 => "SCORE25",
            CheatCode::Bonus5 => "BONUS5",
            CheatCode::Bonus15 => "BONUS15",
        }
    }

    /// Shell-facing description of the code.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            CheatCode::Win => "Instant win - jumps the player to the winning score",
            CheatCode::Score10 => "Add 10 points to current turn score",
            CheatCode::Score25 => "Add 25 points to current turn score",
            CheatCode::Bonus5 => "Add 5 points to total score",
            CheatCode::Bonus15 => "Add 15 points to total score",
        }
    }
}

/// What a successfully applied cheat did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheatOutcome {
    /// The turn total was raised; the new turn total.
    TurnTotalRaised(u32),
    /// The banked score was raised without ending the game; the new score.
    ScoreRaised(u32),
    /// The cheat pushed the seat to the winning score.
    Won(Seat),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(CheatCode::parse("win").unwrap(), CheatCode::Win);
        assert_eq!(CheatCode::parse(" Score10 ").unwrap(), CheatCode::Score10);
        assert_eq!(CheatCode::parse("BONUS15").unwrap(), CheatCode::Bonus15);
    }

    #[test]
    fn test_parse_unknown_code() {
        assert_eq!(
            CheatCode::parse("xyzzy"),
            Err(GameError::UnknownCheat("xyzzy".into()))
        );
    }

    #[test]
    fn test_round_trip_all_codes() {
        for code in CheatCode::ALL {
            assert_eq!(CheatCode::parse(code.as_str()).unwrap(), code);
        }
    }
}

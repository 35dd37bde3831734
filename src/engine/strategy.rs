//! The computer opponent's roll strategy.
//!
//! A turn is a cap-bounded accumulation with early return on bust: the
//! AI draws up to `cap(difficulty)` values and stops the instant a 1
//! appears, forfeiting the turn. Game balance depends on this exact
//! shape, so [`take_turn`] is the single implementation shared by the
//! state machine and the scalar [`roll_total`] form.
//!
//! ## Per-roll distribution
//!
//! Each draw first picks a rung on the tier's range ladder uniformly,
//! then draws a face uniformly from `rung+1..=sides`. Stronger tiers
//! have taller ladders, so their draws skew high; rung 0 always spans
//! the full face range, so every tier can bust.

use smallvec::SmallVec;

use crate::core::RollSource;

use super::difficulty::Difficulty;

/// Roll buffer sized for the largest cap (legendary = 12).
pub type TurnRolls = SmallVec<[u8; 12]>;

/// How an AI turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiOutcome {
    /// A 1 was drawn; the turn total is forfeited.
    Busted,
    /// The cap was exhausted without a bust; the sum is safe to bank.
    Banked(u32),
}

/// Every value drawn during one AI turn, plus the outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiTurn {
    /// Drawn values in order. On a bust, the trailing value is 1.
    pub rolls: TurnRolls,
    pub outcome: AiOutcome,
}

/// Draw one biased face for the given tier.
fn draw_roll(difficulty: Difficulty, sides: u8, source: &mut dyn RollSource) -> u8 {
    let rungs = difficulty.range_count();
    let min = if rungs == 1 {
        1
    } else {
        let rung = source.draw(0, rungs - 1);
        (rung + 1).min(sides)
    };
    source.draw(min, sides)
}

/// Run one full AI turn for the given tier.
///
/// Draws up to `cap(difficulty)` values; returns immediately when a 1 is
/// drawn. Values never exceed `sides`.
pub fn take_turn(
    difficulty: Difficulty,
    sides: u8,
    source: &mut dyn RollSource,
) -> AiTurn {
    let mut rolls = TurnRolls::new();
    let mut total = 0u32;

    for _ in 0..difficulty.roll_cap() {
        let value = draw_roll(difficulty, sides, source);
        rolls.push(value);

        if value == 1 {
            return AiTurn {
                rolls,
                outcome: AiOutcome::Busted,
            };
        }
        total += u32::from(value);
    }

    AiTurn {
        rolls,
        outcome: AiOutcome::Banked(total),
    }
}

/// Scalar form of [`take_turn`]: 1 on bust, otherwise the banked sum.
pub fn roll_total(difficulty: Difficulty, sides: u8, source: &mut dyn RollSource) -> u32 {
    match take_turn(difficulty, sides, source).outcome {
        AiOutcome::Busted => 1,
        AiOutcome::Banked(total) => total,
    }
}

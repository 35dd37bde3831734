//! Game error taxonomy.
//!
//! Every failed precondition in the engine surfaces as a typed
//! [`GameError`] instead of mutating partial state. Persistence failures
//! have their own taxonomy in [`crate::persist::PersistError`].

use thiserror::Error;

/// Errors produced by the game state machine and its components.
///
/// All variants are recoverable at the caller's level: `GameOver` means
/// the caller must restart or abandon the session; the rest mean the
/// individual call was rejected and state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A roll, hold, or cheat was attempted after the game ended.
    #[error("the game is over; restart to keep playing")]
    GameOver,

    /// A hold was attempted with nothing banked this turn.
    #[error("cannot hold with a turn total of zero")]
    ZeroTurnScore,

    /// A difficulty label did not match any known tier.
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    /// Bad input to setup: empty name, zero-sided die, empty dice hand,
    /// zero winning score.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A dice hand total was requested before any roll.
    #[error("no roll results available; roll first")]
    NoRollYet,

    /// A cheat code did not match any known code.
    #[error("unknown cheat code '{0}'")]
    UnknownCheat(String),

    /// A computer turn was requested when the computer is not the
    /// active participant (or there is no computer opponent at all).
    #[error("it is not the computer's turn")]
    OutOfTurn,
}

//! # pig-engine
//!
//! Rules engine for "Pig", the turn-based dice game: players alternate
//! rolling a die, accumulating an at-risk turn total they can bank
//! ("hold") or lose outright on a roll of 1 ("bust"). First to the
//! winning score (default 100) wins.
//!
//! ## Design Principles
//!
//! 1. **Pure call-and-return core**: no I/O, no CLI, no rendering. The
//!    shell drives [`engine::PigGame`] and presents the results however
//!    it likes.
//!
//! 2. **Injectable randomness**: every draw flows through
//!    [`core::RollSource`], so games replay deterministically from a
//!    seed or a scripted sequence.
//!
//! 3. **One win-detection path**: holds and cheats alike funnel through
//!    the same check, so `game_over`, `winner`, and the scores can
//!    never disagree.
//!
//! 4. **First-class computer opponent**: the AI is a real participant
//!    with its own scoreboard, not a null sentinel.
//!
//! ## Modules
//!
//! - `core`: dice, players, RNG, the game error taxonomy
//! - `engine`: the state machine, difficulty tiers, AI strategy, cheats
//! - `persist`: snapshot codec and the save-store port
//! - `stats`: roll/game-end event sinks, histogram, high-score ledger

pub mod core;
pub mod engine;
pub mod persist;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    DiceHand, Die, GameError, GameRng, PlayerId, RollSource, Scoreboard, ScriptedRolls,
    DEFAULT_SIDES,
};

pub use crate::engine::{
    CheatCode, CheatOutcome, Difficulty, GameState, HoldOutcome, Opponent, PigGame,
    PigGameBuilder, Seat, TurnRecord, DEFAULT_WINNING_SCORE,
};

pub use crate::persist::{
    decode, encode, FileStore, MemoryStore, PersistError, SaveGame, SaveStore,
};

pub use crate::stats::{
    GameOutcome, HighScores, Histogram, NullSink, PlayerRecord, StatsRecorder, StatsSink,
};

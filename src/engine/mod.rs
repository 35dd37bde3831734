//! The game state machine and its collaborators: difficulty tiers, the
//! AI roll strategy, cheat codes, and the state it all mutates.

pub mod cheat;
pub mod difficulty;
pub mod game;
pub mod state;
pub mod strategy;

pub use cheat::{CheatCode, CheatOutcome};
pub use difficulty::Difficulty;
pub use game::{HoldOutcome, PigGame, PigGameBuilder};
pub use state::{GameState, Opponent, Seat, TurnRecord, DEFAULT_WINNING_SCORE};
pub use strategy::{take_turn, roll_total, AiOutcome, AiTurn, TurnRolls};

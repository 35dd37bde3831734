//! Core building blocks: dice, players, RNG, errors.
//!
//! These are the leaf components the state machine is assembled from;
//! none of them knows anything about Pig's turn rules.

pub mod die;
pub mod error;
pub mod player;
pub mod rng;

pub use die::{DiceHand, Die, DEFAULT_SIDES};
pub use error::GameError;
pub use player::{PlayerId, Scoreboard};
pub use rng::{GameRng, RollSource, ScriptedRolls};

//! Snapshot codec: GameState to bytes and back, losslessly.
//!
//! The byte format is bincode over [`SaveGame`], a flat, self-describing
//! record with a version tag. Decoding re-validates everything the
//! game-over invariants imply instead of trusting the file: identity
//! references must resolve, and the stored winner/game-over pair must
//! match what the stored scores actually say.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Scoreboard};
use crate::engine::{Difficulty, GameState, Opponent, Seat, TurnRecord};

use super::PersistError;

/// Current save format version.
pub const SAVE_FORMAT_VERSION: u32 = 1;

/// Name the computer is stored (and replays) under.
const COMPUTER_NAME: &str = "Computer";

/// The seat-two participant as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavedOpponent {
    Human {
        id: PlayerId,
        name: String,
        score: u32,
    },
    Computer {
        score: u32,
    },
}

/// Flat snapshot of a game. Every field of the live state is present,
/// so `decode(encode(state)) == state` field for field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveGame {
    pub version: u32,
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player1_score: u32,
    pub opponent: SavedOpponent,
    pub current_player_id: PlayerId,
    pub turn_total: u32,
    pub game_over: bool,
    pub winner_id: Option<PlayerId>,
    pub winning_score: u32,
    pub difficulty: Difficulty,
    pub die_sides: u8,
    pub roll_history: Vec<u8>,
    pub turn_history: Vec<TurnRecord>,
}

impl SaveGame {
    /// Capture a live state into the flat record.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let opponent = match state.opponent() {
            Opponent::Human(board) => SavedOpponent::Human {
                id: board.id(),
                name: board.name().to_string(),
                score: board.score(),
            },
            Opponent::Computer(board) => SavedOpponent::Computer {
                score: board.score(),
            },
        };

        Self {
            version: SAVE_FORMAT_VERSION,
            player1_id: state.player1().id(),
            player1_name: state.player1().name().to_string(),
            player1_score: state.player1().score(),
            opponent,
            current_player_id: state.current_board().id(),
            turn_total: state.turn_total(),
            game_over: state.game_over(),
            winner_id: state.winner_board().map(Scoreboard::id),
            winning_score: state.winning_score(),
            difficulty: state.difficulty(),
            die_sides: state.die_sides(),
            roll_history: state.roll_history().iter().copied().collect(),
            turn_history: state.turn_history().iter().copied().collect(),
        }
    }
}

/// Serialize a state snapshot.
pub fn encode(state: &GameState) -> Result<Vec<u8>, PersistError> {
    bincode::serialize(&SaveGame::from_state(state))
        .map_err(|e| PersistError::CorruptData(e.to_string()))
}

/// Deserialize and validate a state snapshot.
pub fn decode(bytes: &[u8]) -> Result<GameState, PersistError> {
    let record: SaveGame =
        bincode::deserialize(bytes).map_err(|e| PersistError::CorruptData(e.to_string()))?;

    if record.version != SAVE_FORMAT_VERSION {
        return Err(PersistError::CorruptData(format!(
            "unsupported save format version {}",
            record.version
        )));
    }
    if record.winning_score == 0 {
        return Err(PersistError::InvalidState(
            "winning score must be positive".into(),
        ));
    }
    if record.die_sides < 2 {
        return Err(PersistError::InvalidState(format!(
            "die must have at least 2 sides, got {}",
            record.die_sides
        )));
    }
    if record
        .roll_history
        .iter()
        .any(|&v| v < 1 || v > record.die_sides)
    {
        return Err(PersistError::InvalidState(
            "roll history contains values outside the die range".into(),
        ));
    }

    let mut player1 = Scoreboard::new(record.player1_id, &record.player1_name)
        .map_err(|e| PersistError::InvalidState(e.to_string()))?;
    player1.set_score(record.player1_score);

    let opponent = match &record.opponent {
        SavedOpponent::Human { id, name, score } => {
            let mut board = Scoreboard::new(*id, name)
                .map_err(|e| PersistError::InvalidState(e.to_string()))?;
            board.set_score(*score);
            Opponent::Human(board)
        }
        SavedOpponent::Computer { score } => {
            let mut board = Scoreboard::new(PlayerId::COMPUTER, COMPUTER_NAME)
                .map_err(|e| PersistError::InvalidState(e.to_string()))?;
            board.set_score(*score);
            Opponent::Computer(board)
        }
    };

    if player1.id() == opponent.board().id() {
        return Err(PersistError::InvalidState(
            "both participants share one id".into(),
        ));
    }

    let seat_of = |id: PlayerId| -> Option<Seat> {
        if id == player1.id() {
            Some(Seat::One)
        } else if id == opponent.board().id() {
            Some(Seat::Two)
        } else {
            None
        }
    };

    let current = seat_of(record.current_player_id).ok_or_else(|| {
        PersistError::InvalidState(format!(
            "current player {} matches neither participant",
            record.current_player_id
        ))
    })?;

    for turn in &record.turn_history {
        if seat_of(turn.player).is_none() {
            return Err(PersistError::InvalidState(format!(
                "turn history references unknown player {}",
                turn.player
            )));
        }
    }

    // Re-derive the outcome from the scores instead of trusting the
    // stored flags.
    let p1_reached = player1.score() >= record.winning_score;
    let p2_reached = opponent.board().score() >= record.winning_score;
    let derived_winner = match (p1_reached, p2_reached) {
        (true, true) => {
            return Err(PersistError::InvalidState(
                "both participants are at or above the winning score".into(),
            ))
        }
        (true, false) => Some(Seat::One),
        (false, true) => Some(Seat::Two),
        (false, false) => None,
    };

    if record.game_over != derived_winner.is_some() {
        return Err(PersistError::InvalidState(
            "game-over flag contradicts the stored scores".into(),
        ));
    }
    let stored_winner = record.winner_id.map(seat_of);
    let winner = match (derived_winner, stored_winner) {
        (None, None) => None,
        (Some(seat), Some(Some(stored))) if stored == seat => Some(seat),
        _ => {
            return Err(PersistError::InvalidState(
                "stored winner contradicts the stored scores".into(),
            ))
        }
    };

    Ok(GameState::from_parts(
        player1,
        opponent,
        current,
        record.turn_total,
        record.game_over,
        winner,
        record.winning_score,
        record.difficulty,
        record.die_sides,
        Vector::from_iter(record.roll_history),
        Vector::from_iter(record.turn_history),
    ))
}

//! Game state: seats, participants, and the turn/score bookkeeping.
//!
//! ## Seats and participants
//!
//! Player one always sits in [`Seat::One`]. The opposing seat holds an
//! [`Opponent`]: either a second human or the computer, each with its
//! own scoreboard. There is no null-sentinel encoding for the computer;
//! it is a first-class participant.
//!
//! ## Histories
//!
//! `roll_history` and `turn_history` are append-only `im::Vector`s,
//! cleared only by a restart. Persistent vectors keep state snapshots
//! cheap to clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Scoreboard, DEFAULT_SIDES};

use super::difficulty::Difficulty;

/// Default target score.
pub const DEFAULT_WINNING_SCORE: u32 = 100;

/// Which side currently plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    /// Player one's seat.
    One,
    /// The opposing seat (second human or computer).
    Two,
}

impl Seat {
    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// The participant in seat two.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    /// A second human player.
    Human(Scoreboard),
    /// The computer, with its own scoreboard.
    Computer(Scoreboard),
}

impl Opponent {
    /// The opponent's scoreboard.
    #[must_use]
    pub fn board(&self) -> &Scoreboard {
        match self {
            Opponent::Human(board) | Opponent::Computer(board) => board,
        }
    }

    /// Mutable access to the opponent's scoreboard.
    pub fn board_mut(&mut self) -> &mut Scoreboard {
        match self {
            Opponent::Human(board) | Opponent::Computer(board) => board,
        }
    }

    /// Whether seat two is the computer.
    #[must_use]
    pub fn is_computer(&self) -> bool {
        matches!(self, Opponent::Computer(_))
    }
}

/// One completed (held) turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who banked the points.
    pub player: PlayerId,
    /// Points banked this turn.
    pub turn_total: u32,
    /// The player's score after banking.
    pub total_score_after: u32,
}

/// Complete game state.
///
/// Mutated exclusively through [`crate::engine::PigGame`] operations;
/// the fields are read-only to the outside so every mutation path keeps
/// the invariants (turn total resets on bust, winner fixed once set,
/// histories append-only).
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    player1: Scoreboard,
    opponent: Opponent,
    current: Seat,
    turn_total: u32,
    game_over: bool,
    winner: Option<Seat>,
    winning_score: u32,
    difficulty: Difficulty,
    die_sides: u8,
    roll_history: Vector<u8>,
    turn_history: Vector<TurnRecord>,
}

impl GameState {
    /// Assemble a fresh state with zeroed scores and empty histories.
    #[must_use]
    pub fn new(
        player1: Scoreboard,
        opponent: Opponent,
        difficulty: Difficulty,
        winning_score: u32,
        die_sides: u8,
    ) -> Self {
        Self {
            player1,
            opponent,
            current: Seat::One,
            turn_total: 0,
            game_over: false,
            winner: None,
            winning_score,
            difficulty,
            die_sides,
            roll_history: Vector::new(),
            turn_history: Vector::new(),
        }
    }

    // === Participants ===

    /// Player one's scoreboard.
    #[must_use]
    pub fn player1(&self) -> &Scoreboard {
        &self.player1
    }

    /// The seat-two participant.
    #[must_use]
    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    /// Scoreboard for a seat.
    #[must_use]
    pub fn board(&self, seat: Seat) -> &Scoreboard {
        match seat {
            Seat::One => &self.player1,
            Seat::Two => self.opponent.board(),
        }
    }

    pub(crate) fn board_mut(&mut self, seat: Seat) -> &mut Scoreboard {
        match seat {
            Seat::One => &mut self.player1,
            Seat::Two => self.opponent.board_mut(),
        }
    }

    /// The seat holding the given participant id, if either does.
    #[must_use]
    pub fn seat_of(&self, id: PlayerId) -> Option<Seat> {
        if self.player1.id() == id {
            Some(Seat::One)
        } else if self.opponent.board().id() == id {
            Some(Seat::Two)
        } else {
            None
        }
    }

    /// Whether this is a human-vs-computer game.
    #[must_use]
    pub fn is_vs_computer(&self) -> bool {
        self.opponent.is_computer()
    }

    // === Turn bookkeeping ===

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Scoreboard of the participant whose turn it is.
    #[must_use]
    pub fn current_board(&self) -> &Scoreboard {
        self.board(self.current)
    }

    /// The at-risk, not-yet-banked total for the current turn.
    #[must_use]
    pub fn turn_total(&self) -> u32 {
        self.turn_total
    }

    pub(crate) fn set_turn_total(&mut self, total: u32) {
        self.turn_total = total;
    }

    pub(crate) fn switch_seat(&mut self) {
        self.current = self.current.other();
    }

    // === Outcome ===

    /// Whether the game has ended.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The winning seat, fixed once the game ends.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    /// The winner's scoreboard, once the game ends.
    #[must_use]
    pub fn winner_board(&self) -> Option<&Scoreboard> {
        self.winner.map(|seat| self.board(seat))
    }

    pub(crate) fn set_winner(&mut self, seat: Seat) {
        debug_assert!(!self.game_over, "winner set twice");
        self.game_over = true;
        self.winner = Some(seat);
    }

    // === Configuration ===

    /// The target score.
    #[must_use]
    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// The AI difficulty tier.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Faces on the die in play.
    #[must_use]
    pub fn die_sides(&self) -> u8 {
        self.die_sides
    }

    // === Histories ===

    /// Every die value rolled this game, in order.
    #[must_use]
    pub fn roll_history(&self) -> &Vector<u8> {
        &self.roll_history
    }

    /// Every held turn this game, in order.
    #[must_use]
    pub fn turn_history(&self) -> &Vector<TurnRecord> {
        &self.turn_history
    }

    pub(crate) fn record_roll(&mut self, value: u8) {
        self.roll_history.push_back(value);
    }

    pub(crate) fn record_turn(&mut self, record: TurnRecord) {
        self.turn_history.push_back(record);
    }

    // === Lifecycle ===

    /// Reset scores, turn total, outcome, and histories for a new game.
    ///
    /// Identities, difficulty, winning score, and die are retained, and
    /// player one starts again.
    pub(crate) fn reset_for_new_game(&mut self) {
        self.player1.reset();
        self.opponent.board_mut().reset();
        self.current = Seat::One;
        self.turn_total = 0;
        self.game_over = false;
        self.winner = None;
        self.roll_history = Vector::new();
        self.turn_history = Vector::new();
    }

    /// Rebuild a state from persisted fields. Validation happens in the
    /// codec; this just assembles.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        player1: Scoreboard,
        opponent: Opponent,
        current: Seat,
        turn_total: u32,
        game_over: bool,
        winner: Option<Seat>,
        winning_score: u32,
        difficulty: Difficulty,
        die_sides: u8,
        roll_history: Vector<u8>,
        turn_history: Vector<TurnRecord>,
    ) -> Self {
        Self {
            player1,
            opponent,
            current,
            turn_total,
            game_over,
            winner,
            winning_score,
            difficulty,
            die_sides,
            roll_history,
            turn_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> GameState {
        let p1 = Scoreboard::new(PlayerId(1), "Alice").unwrap();
        let computer = Scoreboard::new(PlayerId::COMPUTER, "Computer").unwrap();
        GameState::new(
            p1,
            Opponent::Computer(computer),
            Difficulty::Veteran,
            DEFAULT_WINNING_SCORE,
            DEFAULT_SIDES,
        )
    }

    #[test]
    fn test_new_state_defaults() {
        let state = sample_state();

        assert_eq!(state.current_seat(), Seat::One);
        assert_eq!(state.turn_total(), 0);
        assert!(!state.game_over());
        assert!(state.winner().is_none());
        assert!(state.is_vs_computer());
        assert!(state.roll_history().is_empty());
        assert!(state.turn_history().is_empty());
    }

    #[test]
    fn test_seat_resolution() {
        let state = sample_state();

        assert_eq!(state.seat_of(PlayerId(1)), Some(Seat::One));
        assert_eq!(state.seat_of(PlayerId::COMPUTER), Some(Seat::Two));
        assert_eq!(state.seat_of(PlayerId(42)), None);
    }

    #[test]
    fn test_switch_seat_alternates() {
        let mut state = sample_state();

        state.switch_seat();
        assert_eq!(state.current_seat(), Seat::Two);
        assert_eq!(state.current_board().id(), PlayerId::COMPUTER);

        state.switch_seat();
        assert_eq!(state.current_seat(), Seat::One);
    }

    #[test]
    fn test_reset_keeps_identity_and_difficulty() {
        let mut state = sample_state();
        state.board_mut(Seat::One).add_to_score(50);
        state.set_turn_total(7);
        state.record_roll(3);
        state.switch_seat();
        state.set_winner(Seat::One);

        state.reset_for_new_game();

        assert_eq!(state.player1().name(), "Alice");
        assert_eq!(state.player1().score(), 0);
        assert_eq!(state.difficulty(), Difficulty::Veteran);
        assert_eq!(state.current_seat(), Seat::One);
        assert_eq!(state.turn_total(), 0);
        assert!(!state.game_over());
        assert!(state.winner().is_none());
        assert!(state.roll_history().is_empty());
    }

    #[test]
    fn test_winner_fixes_game_over() {
        let mut state = sample_state();
        state.set_winner(Seat::Two);

        assert!(state.game_over());
        assert_eq!(state.winner(), Some(Seat::Two));
        assert_eq!(state.winner_board().unwrap().id(), PlayerId::COMPUTER);
    }
}

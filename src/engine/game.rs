//! The Pig game state machine.
//!
//! [`PigGame`] owns the game state, a dice hand, the roll source, and a
//! stats sink, and exposes the only mutation paths: `roll`, `hold`,
//! `computer_turn`, `restart`, and the cheat operations. Every path that
//! can reach the winning score funnels through one win check, so the
//! winner/game-over pair can never disagree.
//!
//! ```
//! use pig_engine::engine::{PigGameBuilder, HoldOutcome};
//! use pig_engine::core::ScriptedRolls;
//!
//! let mut game = PigGameBuilder::new("Alice")
//!     .vs_human("Bob")
//!     .roll_source(ScriptedRolls::new([3, 4]))
//!     .build()
//!     .unwrap();
//!
//! game.roll().unwrap();
//! game.roll().unwrap();
//! assert_eq!(game.turn_total(), 7);
//! assert!(matches!(game.hold().unwrap(), HoldOutcome::Banked(7)));
//! ```

use crate::core::{
    DiceHand, GameError, GameRng, PlayerId, RollSource, Scoreboard, DEFAULT_SIDES,
};
use crate::stats::{GameOutcome, NullSink, StatsSink};

use super::cheat::{CheatCode, CheatOutcome};
use super::difficulty::Difficulty;
use super::state::{GameState, Opponent, Seat, TurnRecord, DEFAULT_WINNING_SCORE};
use super::strategy::{self, AiOutcome, TurnRolls};

/// Name the computer plays under.
const COMPUTER_NAME: &str = "Computer";

/// Result of a successful hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldOutcome {
    /// Points banked; the turn passed to the other seat.
    Banked(u32),
    /// The banked points reached the winning score.
    Won(Seat),
}

/// The participant sitting opposite player one.
#[derive(Clone, Debug)]
enum OpponentSpec {
    Human(String),
    Computer,
}

/// Builder for [`PigGame`].
pub struct PigGameBuilder {
    player1: String,
    opponent: OpponentSpec,
    difficulty: Difficulty,
    winning_score: u32,
    sides: u8,
    rolls: Option<Box<dyn RollSource>>,
    sink: Option<Box<dyn StatsSink>>,
}

impl PigGameBuilder {
    /// Start a builder with player one's name. Defaults: computer
    /// opponent, casual difficulty, winning score 100, one d6, entropy
    /// seed, no stats sink.
    pub fn new(player1: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            opponent: OpponentSpec::Computer,
            difficulty: Difficulty::default(),
            winning_score: DEFAULT_WINNING_SCORE,
            sides: DEFAULT_SIDES,
            rolls: None,
            sink: None,
        }
    }

    /// Play against a second human.
    pub fn vs_human(mut self, name: impl Into<String>) -> Self {
        self.opponent = OpponentSpec::Human(name.into());
        self
    }

    /// Play against the computer (the default).
    pub fn vs_computer(mut self) -> Self {
        self.opponent = OpponentSpec::Computer;
        self
    }

    /// Set the AI difficulty tier.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the target score (must be positive).
    pub fn winning_score(mut self, target: u32) -> Self {
        self.winning_score = target;
        self
    }

    /// Set the number of die faces (at least 2).
    pub fn die_sides(mut self, sides: u8) -> Self {
        self.sides = sides;
        self
    }

    /// Inject a roll source (scripted sequences, fixed seeds).
    pub fn roll_source(mut self, source: impl RollSource + 'static) -> Self {
        self.rolls = Some(Box::new(source));
        self
    }

    /// Use a seeded RNG as the roll source.
    pub fn seed(self, seed: u64) -> Self {
        self.roll_source(GameRng::new(seed))
    }

    /// Attach a stats sink.
    pub fn stats_sink(mut self, sink: impl StatsSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Validate the configuration and build the game.
    pub fn build(self) -> Result<PigGame, GameError> {
        if self.winning_score == 0 {
            return Err(GameError::InvalidConfiguration(
                "winning score must be positive".into(),
            ));
        }

        let hand = DiceHand::single(self.sides)?;
        let player1 = Scoreboard::new(PlayerId(1), &self.player1)?;
        let opponent = match self.opponent {
            OpponentSpec::Human(name) => {
                Opponent::Human(Scoreboard::new(PlayerId(2), &name)?)
            }
            OpponentSpec::Computer => {
                Opponent::Computer(Scoreboard::new(PlayerId::COMPUTER, COMPUTER_NAME)?)
            }
        };

        let state = GameState::new(
            player1,
            opponent,
            self.difficulty,
            self.winning_score,
            self.sides,
        );

        Ok(PigGame {
            state,
            hand,
            rolls: self
                .rolls
                .unwrap_or_else(|| Box::new(GameRng::from_entropy())),
            sink: self.sink.unwrap_or_else(|| Box::new(NullSink)),
        })
    }
}

/// The game state machine.
pub struct PigGame {
    state: GameState,
    hand: DiceHand,
    rolls: Box<dyn RollSource>,
    sink: Box<dyn StatsSink>,
}

impl PigGame {
    /// Resume play on a previously saved (and already validated) state.
    pub fn resume(
        state: GameState,
        rolls: impl RollSource + 'static,
        sink: impl StatsSink + 'static,
    ) -> Result<Self, GameError> {
        let hand = DiceHand::single(state.die_sides())?;
        Ok(Self {
            state,
            hand,
            rolls: Box::new(rolls),
            sink: Box::new(sink),
        })
    }

    // === Operations ===

    /// Roll the die for the current player.
    ///
    /// A 1 busts: the turn total is forfeited and the turn passes.
    /// Anything else accumulates. Returns the rolled value.
    pub fn roll(&mut self) -> Result<u8, GameError> {
        if self.state.game_over() {
            return Err(GameError::GameOver);
        }

        self.hand.roll_all(self.rolls.as_mut());
        let value = self.hand.total()? as u8;

        self.state.record_roll(value);
        self.sink.roll_recorded(value);

        if value == 1 {
            log::debug!(
                "{} rolled a 1 and busted {} points",
                self.state.current_board().name(),
                self.state.turn_total()
            );
            self.state.set_turn_total(0);
            self.end_turn();
        } else {
            self.state
                .set_turn_total(self.state.turn_total() + u32::from(value));
        }

        Ok(value)
    }

    /// Bank the turn total into the current player's score.
    ///
    /// Wins the game if the new score reaches the winning score;
    /// otherwise the turn passes.
    pub fn hold(&mut self) -> Result<HoldOutcome, GameError> {
        if self.state.game_over() {
            return Err(GameError::GameOver);
        }
        let points = self.state.turn_total();
        if points == 0 {
            return Err(GameError::ZeroTurnScore);
        }

        let seat = self.state.current_seat();
        self.state.board_mut(seat).add_to_score(points);
        let board = self.state.board(seat);
        log::debug!("{} held {} points, now at {}", board.name(), points, board.score());

        self.state.record_turn(TurnRecord {
            player: board.id(),
            turn_total: points,
            total_score_after: board.score(),
        });
        self.state.set_turn_total(0);

        if self.check_win(seat) {
            Ok(HoldOutcome::Won(seat))
        } else {
            self.end_turn();
            Ok(HoldOutcome::Banked(points))
        }
    }

    /// Play the computer's whole turn with the configured difficulty.
    ///
    /// Stops immediately on a bust; otherwise holds the accumulated
    /// total through the regular `hold` path. Returns every roll in
    /// order. Fails with `OutOfTurn` unless the computer is the active
    /// participant.
    pub fn computer_turn(&mut self) -> Result<TurnRolls, GameError> {
        if self.state.game_over() {
            return Err(GameError::GameOver);
        }
        if !self.state.is_vs_computer() || self.state.current_seat() != Seat::Two {
            return Err(GameError::OutOfTurn);
        }

        let turn = strategy::take_turn(
            self.state.difficulty(),
            self.state.die_sides(),
            self.rolls.as_mut(),
        );

        for &value in &turn.rolls {
            self.state.record_roll(value);
            self.sink.roll_recorded(value);
        }

        match turn.outcome {
            AiOutcome::Busted => {
                log::debug!("computer busted after {} rolls", turn.rolls.len());
                self.state.set_turn_total(0);
                self.end_turn();
            }
            AiOutcome::Banked(total) => {
                self.state.set_turn_total(total);
                self.hold()?;
            }
        }

        Ok(turn.rolls)
    }

    /// Reset for a fresh game with the same players, difficulty, and
    /// target. Safe to call from any state; idempotent.
    pub fn restart(&mut self) {
        log::debug!("restarting game");
        self.state.reset_for_new_game();
    }

    /// Retune the AI between turns or between games.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.set_difficulty(difficulty);
    }

    // === Cheats ===

    /// Parse and apply a cheat code for the current player.
    ///
    /// Unrecognized codes fail with `UnknownCheat` and mutate nothing.
    pub fn apply_cheat(&mut self, code: &str) -> Result<CheatOutcome, GameError> {
        if self.state.game_over() {
            return Err(GameError::GameOver);
        }
        let code = CheatCode::parse(code)?;
        log::debug!("applying cheat {}", code.as_str());
        match code {
            CheatCode::Win => self.force_win(),
            CheatCode::Score10 => self.add_turn_score(10),
            CheatCode::Score25 => self.add_turn_score(25),
            CheatCode::Bonus5 => self.add_bonus(5),
            CheatCode::Bonus15 => self.add_bonus(15),
        }
    }

    /// Raise the current turn total (debug/testing).
    pub fn add_turn_score(&mut self, points: u32) -> Result<CheatOutcome, GameError> {
        if self.state.game_over() {
            return Err(GameError::GameOver);
        }
        let total = self.state.turn_total() + points;
        self.state.set_turn_total(total);
        Ok(CheatOutcome::TurnTotalRaised(total))
    }

    /// Add directly to the current player's banked score (debug/testing).
    ///
    /// Routes through the same win detection as `hold`.
    pub fn add_bonus(&mut self, points: u32) -> Result<CheatOutcome, GameError> {
        if self.state.game_over() {
            return Err(GameError::GameOver);
        }
        let seat = self.state.current_seat();
        self.state.board_mut(seat).add_to_score(points);
        if self.check_win(seat) {
            Ok(CheatOutcome::Won(seat))
        } else {
            Ok(CheatOutcome::ScoreRaised(self.state.board(seat).score()))
        }
    }

    /// Jump the current player to the winning score (debug/testing).
    pub fn force_win(&mut self) -> Result<CheatOutcome, GameError> {
        if self.state.game_over() {
            return Err(GameError::GameOver);
        }
        let seat = self.state.current_seat();
        let target = self.state.winning_score();
        self.state.board_mut(seat).set_score(target);
        let won = self.check_win(seat);
        debug_assert!(won);
        Ok(CheatOutcome::Won(seat))
    }

    // === Accessors ===

    /// Full state snapshot for status rendering and persistence.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Scoreboard of the participant whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Scoreboard {
        self.state.current_board()
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.state.current_seat()
    }

    /// The at-risk turn total.
    #[must_use]
    pub fn turn_total(&self) -> u32 {
        self.state.turn_total()
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    /// The winner's scoreboard, once the game ends.
    #[must_use]
    pub fn winner(&self) -> Option<&Scoreboard> {
        self.state.winner_board()
    }

    /// The target score.
    #[must_use]
    pub fn winning_score(&self) -> u32 {
        self.state.winning_score()
    }

    /// The AI difficulty tier.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty()
    }

    /// Whether the opponent is the computer.
    #[must_use]
    pub fn is_vs_computer(&self) -> bool {
        self.state.is_vs_computer()
    }

    // === Internals ===

    /// Pass the turn to the other seat. Never called once the game is
    /// over.
    fn end_turn(&mut self) {
        debug_assert!(!self.state.game_over());
        self.state.switch_seat();
    }

    /// Fix the winner and emit the game-end event if `seat` has reached
    /// the winning score. The single win-detection path for holds and
    /// cheats alike.
    fn check_win(&mut self, seat: Seat) -> bool {
        if self.state.board(seat).score() < self.state.winning_score() {
            return false;
        }

        self.state.set_winner(seat);
        let winner = self.state.board(seat);
        let loser = self.state.board(seat.other());
        log::info!("{} wins with {} points", winner.name(), winner.score());

        let outcome = GameOutcome {
            winner_id: winner.id(),
            winner_name: winner.name().to_string(),
            winner_score: winner.score(),
            loser_id: loser.id(),
            loser_name: loser.name().to_string(),
            loser_score: loser.score(),
            vs_computer: self.state.is_vs_computer(),
        };
        self.sink.game_finished(&outcome);
        true
    }
}

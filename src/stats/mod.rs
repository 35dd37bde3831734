//! Stats sinks: observers for roll and game-end events.
//!
//! The state machine emits two kinds of events and expects nothing
//! back: every die value rolled, and a summary when a game completes.
//! [`NullSink`] is the default; [`StatsRecorder`] keeps a roll
//! histogram, a per-player high-score ledger, and a recent-game log.

pub mod highscore;
pub mod histogram;

pub use highscore::{HighScores, PlayerRecord};
pub use histogram::Histogram;

use crate::core::PlayerId;

/// Summary of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner_id: PlayerId,
    pub winner_name: String,
    pub winner_score: u32,
    pub loser_id: PlayerId,
    pub loser_name: String,
    pub loser_score: u32,
    /// Whether the loser or winner was the computer.
    pub vs_computer: bool,
}

/// Observer for game events. Accept and do not block; no acknowledgment.
pub trait StatsSink {
    /// A die value was rolled (human or computer).
    fn roll_recorded(&mut self, value: u8) {
        let _ = value;
    }

    /// A game reached its winning score.
    fn game_finished(&mut self, outcome: &GameOutcome) {
        let _ = outcome;
    }
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl StatsSink for NullSink {}

/// Sink that aggregates rolls and game results in memory.
#[derive(Clone, Debug, Default)]
pub struct StatsRecorder {
    histogram: Histogram,
    high_scores: HighScores,
    games: Vec<GameOutcome>,
}

impl StatsRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frequencies of every roll observed.
    #[must_use]
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Per-player win/loss ledger.
    #[must_use]
    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Mutable ledger access (clearing, pruning).
    pub fn high_scores_mut(&mut self) -> &mut HighScores {
        &mut self.high_scores
    }

    /// The most recent `n` completed games, oldest first.
    #[must_use]
    pub fn recent_games(&self, n: usize) -> &[GameOutcome] {
        let start = self.games.len().saturating_sub(n);
        &self.games[start..]
    }

    /// Total games observed.
    #[must_use]
    pub fn games_recorded(&self) -> usize {
        self.games.len()
    }
}

impl StatsSink for StatsRecorder {
    fn roll_recorded(&mut self, value: u8) {
        self.histogram.add(value);
    }

    fn game_finished(&mut self, outcome: &GameOutcome) {
        self.high_scores.record_game(outcome);
        self.games.push(outcome.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> GameOutcome {
        GameOutcome {
            winner_id: PlayerId(1),
            winner_name: "Alice".into(),
            winner_score: 104,
            loser_id: PlayerId::COMPUTER,
            loser_name: "Computer".into(),
            loser_score: 61,
            vs_computer: true,
        }
    }

    #[test]
    fn test_recorder_counts_rolls() {
        let mut recorder = StatsRecorder::new();
        for v in [3, 3, 6, 1] {
            recorder.roll_recorded(v);
        }

        assert_eq!(recorder.histogram().count(3), 2);
        assert_eq!(recorder.histogram().count(6), 1);
        assert_eq!(recorder.histogram().count(1), 1);
        assert_eq!(recorder.histogram().total(), 4);
    }

    #[test]
    fn test_recorder_tracks_games() {
        let mut recorder = StatsRecorder::new();
        recorder.game_finished(&outcome());
        recorder.game_finished(&outcome());

        assert_eq!(recorder.games_recorded(), 2);
        assert_eq!(recorder.recent_games(1).len(), 1);
        assert_eq!(recorder.recent_games(10).len(), 2);

        let record = recorder.high_scores().get(PlayerId(1)).unwrap();
        assert_eq!(record.wins, 2);
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        let mut sink = NullSink;
        sink.roll_recorded(4);
        sink.game_finished(&outcome());
    }
}

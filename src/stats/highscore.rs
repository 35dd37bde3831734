//! Per-player win/loss ledger.
//!
//! Keyed by participant id so a player keeps their history across name
//! changes. Ranking orders by wins, then win rate, then average score.

use rustc_hash::FxHashMap;

use crate::core::PlayerId;

use super::GameOutcome;

/// One player's accumulated results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_score: u64,
}

impl PlayerRecord {
    /// Fraction of games won, 0.0 when none played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played)
        }
    }

    /// Mean final score across games, 0.0 when none played.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.games_played)
        }
    }
}

/// The ledger of all observed players.
#[derive(Clone, Debug, Default)]
pub struct HighScores {
    records: FxHashMap<PlayerId, PlayerRecord>,
}

impl HighScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one completed game into both participants' records.
    pub fn record_game(&mut self, outcome: &GameOutcome) {
        let sides = [
            (outcome.winner_id, &outcome.winner_name, outcome.winner_score, true),
            (outcome.loser_id, &outcome.loser_name, outcome.loser_score, false),
        ];
        for (id, name, score, won) in sides {
            let record = self.records.entry(id).or_default();
            // Names follow the latest game; history stays under the id.
            record.name = name.clone();
            record.games_played += 1;
            if won {
                record.wins += 1;
            } else {
                record.losses += 1;
            }
            record.total_score += u64::from(score);
        }
    }

    /// Look up a player's record.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.records.get(&id)
    }

    /// Players tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Top `n` players by wins, then win rate, then average score.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(PlayerId, &PlayerRecord)> {
        let mut entries: Vec<_> = self.records.iter().map(|(&id, r)| (id, r)).collect();
        entries.sort_by(|a, b| {
            b.1.wins
                .cmp(&a.1.wins)
                .then_with(|| {
                    b.1.win_rate()
                        .partial_cmp(&a.1.win_rate())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| {
                    b.1.average_score()
                        .partial_cmp(&a.1.average_score())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });
        entries.truncate(n);
        entries
    }

    /// Wipe the ledger.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

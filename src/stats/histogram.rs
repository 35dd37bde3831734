//! Roll-frequency histogram.

use rustc_hash::FxHashMap;

/// Counts of each die value observed.
///
/// Pure ingestion: rendering belongs to the shell layer.
#[derive(Clone, Debug, Default)]
pub struct Histogram {
    counts: FxHashMap<u8, u64>,
}

impl Histogram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation.
    pub fn add(&mut self, value: u8) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// How many times `value` was observed.
    #[must_use]
    pub fn count(&self, value: u8) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Total observations.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Whether anything has been observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// (value, count) pairs sorted by value.
    #[must_use]
    pub fn sorted_counts(&self) -> Vec<(u8, u64)> {
        let mut pairs: Vec<_> = self.counts.iter().map(|(&v, &c)| (v, c)).collect();
        pairs.sort_unstable_by_key(|&(v, _)| v);
        pairs
    }
}

//! Cache Statistics Module
//!
//! Advisory counters and point-in-time snapshots for diagnostics. Nothing in
//! the cache's correctness depends on these numbers.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Stats ==
/// Running counters kept by the entry store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Reads that returned a fresh value
    pub hits: u64,
    /// Reads that found nothing or a stale entry
    pub misses: u64,
    /// Entries removed by sweep ticks
    pub swept: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Adds the number of entries a sweep tick removed.
    pub fn record_swept(&mut self, count: usize) {
        self.swept += count as u64;
    }
}

// == Stats Snapshot ==
/// What the cache holds at a given moment.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Number of stored entries, stale ones not yet evicted included
    pub count: usize,
    /// Stored keys in lexicographic order
    pub keys: Vec<String>,
    /// When the snapshot was taken
    pub as_of: DateTime<Utc>,
    /// Counters at snapshot time
    #[serde(flatten)]
    pub counters: CacheStats,
}

impl StatsSnapshot {
    /// Builds a snapshot from the stored keys, sorting them.
    pub fn new(mut keys: Vec<String>, counters: CacheStats) -> Self {
        keys.sort_unstable();
        Self {
            count: keys.len(),
            keys,
            as_of: Utc::now(),
            counters,
        }
    }

    /// Returns true if `key` was stored when the snapshot was taken.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.binary_search_by(|k| k.as_str().cmp(key)).is_ok()
    }
}

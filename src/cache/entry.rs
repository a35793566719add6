//! Cache Entry Module
//!
//! Defines a single cached value together with its write time and TTL.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A cached value with the metadata needed to decide freshness.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Write timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Time to live in milliseconds
    pub ttl_ms: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            inserted_at: current_timestamp_ms(),
            ttl_ms: duration_to_ms(ttl),
        }
    }

    // == Staleness ==
    /// Checks whether the entry is stale at the given instant.
    ///
    /// An entry is stale once its age is strictly greater than its TTL, so an
    /// entry read exactly `ttl_ms` after insertion is still served.
    pub fn is_stale_at(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.inserted_at) > self.ttl_ms
    }

    /// Checks whether the entry is stale right now.
    pub fn is_stale(&self) -> bool {
        self.is_stale_at(current_timestamp_ms())
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in milliseconds, `0` once stale.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let age = current_timestamp_ms().saturating_sub(self.inserted_at);
        self.ttl_ms.saturating_sub(age)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as `0`.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(duration_to_ms)
        .unwrap_or(0)
}

fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

//! Cache Module
//!
//! In-memory entry store with lazy TTL expiry, the named key table and the
//! domain invalidation router.

mod entry;
pub mod invalidation;
mod keys;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use invalidation::{Domain, ParseDomainError, DASHBOARD_KEYS};
pub use keys::{CacheKey, ParseCacheKeyError};
pub use stats::{CacheStats, StatsSnapshot};
pub use store::EntryStore;

// == Public Constants ==
/// TTL applied when a caller does not pass one (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

/// Interval between sweep ticks (1 minute)
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

//! Entry Store Module
//!
//! Key to entry map with lazy TTL expiry. Unbounded: entries leave only
//! through expiry or explicit removal.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};

// == Entry Store ==
/// Holds every cached entry and answers freshness queries.
#[derive(Debug)]
pub struct EntryStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Advisory counters
    stats: CacheStats,
    /// TTL applied when the caller does not pass one
    default_ttl: Duration,
}

impl<V> EntryStore<V> {
    // == Constructor ==
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`, resetting its write time.
    ///
    /// `ttl` of `None` falls back to the store's default TTL.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        self.entries.insert(key.into(), CacheEntry::new(value, ttl));
    }

    // == Delete ==
    /// Removes `key`. Returns whether an entry was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    // == Sweep ==
    /// Removes all stale entries, returning the number removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale_at(now));

        let removed = before - self.entries.len();
        self.stats.record_swept(removed);
        removed
    }

    // == Stats ==
    /// Point-in-time view of the stored keys and counters.
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot::new(self.entries.keys().cloned().collect(), self.stats.clone())
    }

    /// Whether `key` has an entry, fresh or not. Does not touch counters.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> EntryStore<V> {
    // == Get ==
    /// Returns the value stored under `key` if it is still fresh.
    ///
    /// A stale entry found here is removed before reporting the miss.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let stale = match self.entries.get(key) {
            Some(entry) => entry.is_stale(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if stale {
            self.entries.remove(key);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    const DEFAULT_TTL: Duration = Duration::from_secs(300);

    fn store() -> EntryStore<String> {
        EntryStore::new(DEFAULT_TTL)
    }

    #[test]
    fn test_store_new() {
        let store = store();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.default_ttl(), DEFAULT_TTL);
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = store();

        store.set("inventory-value", "1200".to_string(), None);

        assert_eq!(store.get("inventory-value").as_deref(), Some("1200"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = store();
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_set_uses_default_ttl() {
        let mut store = store();
        store.set("k", "v".to_string(), None);

        let remaining = store.entries["k"].ttl_remaining_ms();
        assert!(remaining > 299_000 && remaining <= 300_000);
    }

    #[test]
    fn test_store_explicit_ttl_overrides_default() {
        let mut store = store();
        store.set("k", "v".to_string(), Some(Duration::from_millis(10_000)));

        assert_eq!(store.entries["k"].ttl_ms, 10_000);
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_store_overwrite_resets_entry() {
        let mut store = store();

        store.set("k", "old".to_string(), Some(Duration::from_millis(150)));
        sleep(Duration::from_millis(100));
        store.set("k", "new".to_string(), Some(Duration::from_millis(150)));
        sleep(Duration::from_millis(100));

        // 200ms since the first write, but only 100ms since the overwrite
        assert_eq!(store.get("k").as_deref(), Some("new"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_lazy_expiry_on_get() {
        let mut store = store();

        store.set("k", "v".to_string(), Some(Duration::from_millis(50)));
        assert!(store.get("k").is_some());

        sleep(Duration::from_millis(80));

        // Still stored until someone reads it
        assert!(store.contains_key("k"));
        assert!(store.get("k").is_none());
        assert!(!store.contains_key("k"));
    }

    #[test]
    fn test_store_delete() {
        let mut store = store();

        store.set("k", "v".to_string(), None);
        assert!(store.delete("k"));
        assert!(!store.delete("k"));
        assert!(store.get("k").is_none());
    }

    #[test]
    fn test_store_clear() {
        let mut store = store();
        store.set("a", "1".to_string(), None);
        store.set("b", "2".to_string(), None);

        assert_eq!(store.clear(), 2);
        assert!(store.is_empty());
        assert_eq!(store.clear(), 0);
    }

    #[test]
    fn test_store_sweep_expired() {
        let mut store = store();

        store.set("short", "1".to_string(), Some(Duration::from_millis(30)));
        store.set("long", "2".to_string(), Some(Duration::from_secs(10)));

        sleep(Duration::from_millis(60));

        assert_eq!(store.sweep_expired(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.contains_key("long"));
        assert_eq!(store.stats().counters.swept, 1);
    }

    #[test]
    fn test_store_stats_counters() {
        let mut store = store();

        store.set("k", "v".to_string(), None);
        store.get("k");
        store.get("missing");

        let stats = store.stats();
        assert_eq!(stats.counters.hits, 1);
        assert_eq!(stats.counters.misses, 1);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.keys, vec!["k"]);
    }

    #[test]
    fn test_store_stale_read_counts_as_miss() {
        let mut store = store();

        store.set("k", "v".to_string(), Some(Duration::from_millis(10)));
        sleep(Duration::from_millis(30));
        store.get("k");

        let stats = store.stats();
        assert_eq!(stats.counters.hits, 0);
        assert_eq!(stats.counters.misses, 1);
    }
}

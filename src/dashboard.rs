//! Dashboard Cache
//!
//! The accessor the aggregation handlers use: read-through `get`/`set`, the
//! named invalidations, diagnostics and teardown. One instance is built at
//! startup and shared by reference; tests build as many as they like.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{
    Domain, EntryStore, StatsSnapshot, DASHBOARD_KEYS, DEFAULT_SWEEP_INTERVAL_SECS, DEFAULT_TTL_MS,
};
use crate::tasks::spawn_sweeper;

/// Cache carrying JSON payloads, as served by the admin API.
pub type JsonCache = DashboardCache<serde_json::Value>;

// == Cache Settings ==
/// Tunables for a [`DashboardCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    /// TTL applied by [`DashboardCache::set`]
    pub default_ttl: Duration,
    /// Time between sweep ticks
    pub sweep_interval: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_millis(DEFAULT_TTL_MS),
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }
}

// == Dashboard Cache ==
/// Shared cache of aggregation results with domain fan-out invalidation.
pub struct DashboardCache<V> {
    store: Arc<RwLock<EntryStore<V>>>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
    settings: CacheSettings,
}

impl<V> DashboardCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Creates the cache and starts its sweeper.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: CacheSettings) -> Self {
        let store = Arc::new(RwLock::new(EntryStore::new(settings.default_ttl)));
        let handle = spawn_sweeper(store.clone(), settings.sweep_interval);
        Self {
            store,
            sweeper: Mutex::new(Some(handle)),
            settings,
        }
    }

    /// Creates the cache with no background sweeper. Stale entries then
    /// leave only through reads, invalidation or [`Self::sweep_now`].
    pub fn without_sweeper(settings: CacheSettings) -> Self {
        Self {
            store: Arc::new(RwLock::new(EntryStore::new(settings.default_ttl))),
            sweeper: Mutex::new(None),
            settings,
        }
    }

    pub fn settings(&self) -> CacheSettings {
        self.settings
    }

    // == Accessors ==
    /// Returns the cached value for `key` if present and fresh.
    pub async fn get(&self, key: impl AsRef<str>) -> Option<V> {
        let key = key.as_ref();
        let value = self.store.write().await.get(key);
        debug!(key, hit = value.is_some(), "cache lookup");
        value
    }

    /// Stores `value` under `key` with the default TTL.
    pub async fn set(&self, key: impl AsRef<str>, value: V) {
        self.store.write().await.set(key.as_ref(), value, None);
    }

    /// Stores `value` under `key` with an explicit TTL.
    pub async fn set_with_ttl(&self, key: impl AsRef<str>, value: V, ttl: Duration) {
        self.store.write().await.set(key.as_ref(), value, Some(ttl));
    }

    /// Cache-aside read: returns the cached value, or runs `compute`, caches
    /// its `Ok` result and returns it.
    ///
    /// The lock is not held while `compute` runs, so two concurrent misses
    /// may both compute. Errors are handed back and nothing is cached.
    pub async fn get_or_compute<F, E>(
        &self,
        key: impl AsRef<str>,
        ttl: Option<Duration>,
        compute: F,
    ) -> Result<V, E>
    where
        F: Future<Output = Result<V, E>>,
    {
        let key = key.as_ref();
        if let Some(value) = self.get(key).await {
            return Ok(value);
        }

        let value = compute.await?;
        self.store.write().await.set(key, value.clone(), ttl);
        Ok(value)
    }

    // == Invalidation ==
    /// Drops one key. Returns whether an entry was removed.
    pub async fn invalidate(&self, key: impl AsRef<str>) -> bool {
        let key = key.as_ref();
        let removed = self.store.write().await.delete(key);
        debug!(key, removed, "cache key invalidated");
        removed
    }

    /// Drops every entry. Returns how many were removed.
    pub async fn invalidate_all(&self) -> usize {
        let removed = self.store.write().await.clear();
        info!(removed, "cache cleared");
        removed
    }

    /// Drops every key fed by `domain`, the shared dashboard keys included.
    ///
    /// Returns how many entries were actually present.
    pub async fn invalidate_domain(&self, domain: Domain) -> usize {
        let removed = {
            let mut store = self.store.write().await;
            domain
                .keys()
                .filter(|key| store.delete(key.as_str()))
                .count()
        };
        info!(%domain, removed, "cache invalidated for domain");
        removed
    }

    /// Drops only the shared dashboard aggregates.
    pub async fn invalidate_dashboard_metrics(&self) -> usize {
        let mut store = self.store.write().await;
        DASHBOARD_KEYS
            .iter()
            .filter(|key| store.delete(key.as_str()))
            .count()
    }

    pub async fn invalidate_inventory(&self) -> usize {
        self.invalidate_domain(Domain::Inventory).await
    }

    pub async fn invalidate_sales(&self) -> usize {
        self.invalidate_domain(Domain::Sales).await
    }

    pub async fn invalidate_deliveries(&self) -> usize {
        self.invalidate_domain(Domain::Deliveries).await
    }

    // == Diagnostics ==
    pub async fn stats(&self) -> StatsSnapshot {
        self.store.read().await.stats()
    }

    /// Runs one sweep tick now, independent of the background sweeper.
    pub async fn sweep_now(&self) -> usize {
        self.store.write().await.sweep_expired()
    }

    /// Whether the background sweeper is still running.
    pub async fn is_sweeping(&self) -> bool {
        self.sweeper
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Lifecycle ==
    /// Stops the sweeper and clears every entry.
    ///
    /// The cache stays usable afterwards; it just no longer sweeps.
    pub async fn destroy(&self) {
        if let Some(handle) = self.sweeper.lock().await.take() {
            handle.abort();
        }
        let removed = self.store.write().await.clear();
        info!(removed, "cache destroyed");
    }
}

impl<V> Drop for DashboardCache<V> {
    fn drop(&mut self) {
        if let Some(handle) = self.sweeper.get_mut().take() {
            handle.abort();
        }
    }
}

impl<V> fmt::Debug for DashboardCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.store.try_read().map(|store| store.len()).ok();
        f.debug_struct("DashboardCache")
            .field("settings", &self.settings)
            .field("entries", &entries)
            .finish_non_exhaustive()
    }
}

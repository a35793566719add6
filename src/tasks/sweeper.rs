//! TTL Sweeper Task
//!
//! Background task that periodically evicts stale entries nobody read again.
//! Readers never depend on it: `get` checks staleness on its own.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::EntryStore;

/// Spawns a task that sweeps `store` once per `interval`.
///
/// The first tick happens one full interval after spawning. Each tick holds
/// the write lock for the whole scan, so it never interleaves with other
/// cache operations. The task runs until its handle is aborted.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(EntryStore::<u64>::new(Duration::from_secs(300))));
/// let handle = spawn_sweeper(store.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_sweeper<V>(store: Arc<RwLock<EntryStore<V>>>, interval: Duration) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("Starting cache sweeper with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut guard = store.write().await;
                guard.sweep_expired()
            };

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}

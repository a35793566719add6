//! Dashboard Cache - in-memory cache for dashboard aggregations
//!
//! TTL entries with lazy expiry, a periodic sweeper, and fan-out
//! invalidation from inventory, sales and delivery changes to the cached
//! aggregates they feed.

pub mod api;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheKey, Domain};
pub use config::Config;
pub use dashboard::{CacheSettings, DashboardCache, JsonCache};

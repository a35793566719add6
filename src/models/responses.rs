//! Response DTOs for the admin API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheKey, Domain, StatsSnapshot};

/// Response body for GET /cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: String,
    pub value: Value,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for PUT /cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
}

impl SetResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
        }
    }
}

/// Response body for DELETE /cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub key: String,
    /// Whether an entry was actually present
    pub removed: bool,
}

impl InvalidateResponse {
    pub fn new(key: impl Into<String>, removed: bool) -> Self {
        Self {
            key: key.into(),
            removed,
        }
    }
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Number of entries dropped
    pub removed: usize,
}

/// Response body for POST /invalidate/:domain
#[derive(Debug, Clone, Serialize)]
pub struct DomainInvalidationResponse {
    pub domain: Domain,
    /// Every key the domain fans out to
    pub keys: Vec<&'static str>,
    /// How many of those keys had an entry
    pub removed: usize,
}

impl DomainInvalidationResponse {
    pub fn new(domain: Domain, removed: usize) -> Self {
        Self {
            domain,
            keys: domain.keys().map(CacheKey::as_str).collect(),
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of stored entries
    pub count: usize,
    /// Stored keys, sorted
    pub keys: Vec<String>,
    /// Snapshot time in ISO 8601 format
    pub timestamp: String,
    pub hits: u64,
    pub misses: u64,
    /// Entries removed by the sweeper so far
    pub swept: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(snapshot: StatsSnapshot) -> Self {
        Self {
            count: snapshot.count,
            timestamp: snapshot.as_of.to_rfc3339(),
            hits: snapshot.counters.hits,
            misses: snapshot.counters.misses,
            swept: snapshot.counters.swept,
            hit_rate: snapshot.counters.hit_rate(),
            keys: snapshot.keys,
        }
    }
}

/// Response body for GET /keys
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    /// Every named key
    pub keys: Vec<&'static str>,
    /// Domain name to the keys it invalidates
    pub fan_out: BTreeMap<&'static str, Vec<&'static str>>,
}

impl KeysResponse {
    pub fn table() -> Self {
        Self {
            keys: CacheKey::ALL.iter().map(|k| k.as_str()).collect(),
            fan_out: Domain::ALL
                .iter()
                .map(|d| (d.as_str(), d.keys().map(CacheKey::as_str).collect()))
                .collect(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

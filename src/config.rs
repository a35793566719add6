//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{DEFAULT_SWEEP_INTERVAL_SECS, DEFAULT_TTL_MS};
use crate::dashboard::CacheSettings;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in milliseconds for entries without explicit TTL
    pub default_ttl_ms: u64,
    /// Sweeper interval in seconds
    pub sweep_interval_secs: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// Unset or unparsable variables fall back to their default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl_ms: env_or("DEFAULT_TTL_MS", defaults.default_ttl_ms),
            sweep_interval_secs: env_or("SWEEP_INTERVAL_SECS", defaults.sweep_interval_secs),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }

    /// Cache tunables derived from this configuration.
    ///
    /// A zero sweep interval is raised to one second.
    pub fn cache_settings(&self) -> CacheSettings {
        CacheSettings {
            default_ttl: Duration::from_millis(self.default_ttl_ms),
            sweep_interval: Duration::from_secs(self.sweep_interval_secs.max(1)),
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_ms: DEFAULT_TTL_MS,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            server_port: 3000,
        }
    }
}

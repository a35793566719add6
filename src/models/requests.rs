//! Request DTOs for the admin API
//!
//! Defines the structure of incoming HTTP request bodies and path checks.

use serde::Deserialize;
use serde_json::Value;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Request body for storing a value (PUT /cache/:key)
///
/// # Fields
/// - `value`: Any JSON payload
/// - `ttl_ms`: Optional TTL in milliseconds (uses default if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The value to store
    pub value: Value,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.ttl_ms == Some(0) {
            return Some("ttl_ms must be greater than zero".to_string());
        }
        None
    }
}

/// Checks a key taken from the request path.
///
/// Returns an error message if the key is empty or too long, None if valid.
pub fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}

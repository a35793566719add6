//! API Handlers
//!
//! HTTP request handlers for each admin endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::Domain;
use crate::config::Config;
use crate::dashboard::JsonCache;
use crate::error::{ApiError, Result};
use crate::models::{
    validate_key, ClearResponse, DomainInvalidationResponse, GetResponse, HealthResponse,
    InvalidateResponse, KeysResponse, SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide cache
    pub cache: Arc<JsonCache>,
}

impl AppState {
    pub fn new(cache: JsonCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Builds the cache described by `config` and starts its sweeper.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_config(config: &Config) -> Self {
        Self::new(JsonCache::new(config.cache_settings()))
    }
}

fn checked_key(key: String) -> Result<String> {
    match validate_key(&key) {
        Some(msg) => Err(ApiError::InvalidRequest(msg)),
        None => Ok(key),
    }
}

/// Handler for GET /cache/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let key = checked_key(key)?;
    match state.cache.get(&key).await {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(ApiError::NotFound(key)),
    }
}

/// Handler for PUT /cache/:key
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    let key = checked_key(key)?;
    if let Some(msg) = req.validate() {
        return Err(ApiError::InvalidRequest(msg));
    }

    match req.ttl_ms {
        Some(ttl) => {
            state
                .cache
                .set_with_ttl(&key, req.value, Duration::from_millis(ttl))
                .await
        }
        None => state.cache.set(&key, req.value).await,
    }

    Ok(Json(SetResponse::new(key)))
}

/// Handler for DELETE /cache/:key
///
/// Succeeds whether or not the key was cached.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<InvalidateResponse>> {
    let key = checked_key(key)?;
    let removed = state.cache.invalidate(&key).await;
    Ok(Json(InvalidateResponse::new(key, removed)))
}

/// Handler for DELETE /cache
pub async fn invalidate_all_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.cache.invalidate_all().await;
    Json(ClearResponse { removed })
}

/// Handler for POST /invalidate/:domain
pub async fn invalidate_domain_handler(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<DomainInvalidationResponse>> {
    let domain: Domain = domain.parse()?;
    let removed = state.cache.invalidate_domain(domain).await;
    info!(%domain, removed, "invalidation requested over HTTP");
    Ok(Json(DomainInvalidationResponse::new(domain, removed)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /keys
pub async fn keys_handler() -> Json<KeysResponse> {
    Json(KeysResponse::table())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::CacheSettings;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn test_state() -> AppState {
        AppState::new(JsonCache::without_sweeper(CacheSettings::default()))
    }

    fn set_request(value: serde_json::Value, ttl_ms: Option<u64>) -> Json<SetRequest> {
        Json(SetRequest { value, ttl_ms })
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = test_state();

        let result = set_handler(
            State(state.clone()),
            Path("sales-stats".to_string()),
            set_request(json!({"total": 120}), None),
        )
        .await;
        assert_ok!(result);

        let response = assert_ok!(
            get_handler(State(state), Path("sales-stats".to_string())).await
        );
        assert_eq!(response.value, json!({"total": 120}));
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let result = get_handler(State(test_state()), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_set_rejects_zero_ttl() {
        let result = set_handler(
            State(test_state()),
            Path("k".to_string()),
            set_request(json!(1), Some(0)),
        )
        .await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_set_rejects_long_key() {
        let result = set_handler(
            State(test_state()),
            Path("x".repeat(300)),
            set_request(json!(1), None),
        )
        .await;
        assert_err!(result);
    }

    #[tokio::test]
    async fn test_invalidate_handler_is_idempotent() {
        let state = test_state();
        state.cache.set("k", json!(1)).await;

        let first = assert_ok!(invalidate_handler(State(state.clone()), Path("k".to_string())).await);
        let second = assert_ok!(invalidate_handler(State(state), Path("k".to_string())).await);

        assert!(first.removed);
        assert!(!second.removed);
    }

    #[tokio::test]
    async fn test_invalidate_all_handler() {
        let state = test_state();
        state.cache.set("a", json!(1)).await;
        state.cache.set("b", json!(2)).await;

        let response = invalidate_all_handler(State(state.clone())).await;
        assert_eq!(response.removed, 2);
        assert_eq!(state.cache.stats().await.count, 0);
    }

    #[tokio::test]
    async fn test_invalidate_domain_handler() {
        let state = test_state();
        state.cache.set("dashboard-metrics", json!(1)).await;
        state.cache.set("inventory-value", json!(2)).await;
        state.cache.set("delivery-stats", json!(3)).await;

        let response = assert_ok!(
            invalidate_domain_handler(State(state.clone()), Path("inventory".to_string())).await
        );
        assert_eq!(response.removed, 2);
        assert_eq!(state.cache.stats().await.keys, vec!["delivery-stats"]);
    }

    #[tokio::test]
    async fn test_invalidate_unknown_domain() {
        let result =
            invalidate_domain_handler(State(test_state()), Path("customers".to_string())).await;
        assert!(matches!(result, Err(ApiError::UnknownDomain(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.count, 0);
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}

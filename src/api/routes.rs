//! API Routes
//!
//! Configures the Axum router with all admin endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    get_handler, health_handler, invalidate_all_handler, invalidate_domain_handler,
    invalidate_handler, keys_handler, set_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /cache/:key` - Read a cached value
/// - `PUT /cache/:key` - Store a value
/// - `DELETE /cache/:key` - Invalidate one key
/// - `DELETE /cache` - Invalidate everything
/// - `POST /invalidate/:domain` - Fan-out invalidation for a domain
/// - `GET /stats` - Entry count, keys and counters
/// - `GET /keys` - Named keys and the fan-out table
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/cache/:key",
            get(get_handler).put(set_handler).delete(invalidate_handler),
        )
        .route("/cache", delete(invalidate_all_handler))
        .route("/invalidate/:domain", post(invalidate_domain_handler))
        .route("/stats", get(stats_handler))
        .route("/keys", get(keys_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

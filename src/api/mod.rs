//! API Module
//!
//! HTTP handlers and routing for the cache admin API.
//!
//! # Endpoints
//! - `GET|PUT|DELETE /cache/:key` - Read, store or invalidate one key
//! - `DELETE /cache` - Invalidate every key
//! - `POST /invalidate/:domain` - Domain fan-out invalidation
//! - `GET /stats` - Cache statistics
//! - `GET /keys` - Named key table
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

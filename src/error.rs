//! Error types for the admin API
//!
//! Cache operations themselves never fail; these errors describe requests
//! the HTTP surface refuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::cache::ParseDomainError;
use crate::models::ErrorResponse;

// == API Error Enum ==
#[derive(Error, Debug)]
pub enum ApiError {
    /// Key absent or stale
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Domain name not in the invalidation table
    #[error(transparent)]
    UnknownDomain(#[from] ParseDomainError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) | ApiError::UnknownDomain(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the admin API.
pub type Result<T> = std::result::Result<T, ApiError>;

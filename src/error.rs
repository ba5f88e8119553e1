//! Error types for the sensor API
//!
//! Provides unified error handling using thiserror.
//!
//! The external contract is deliberately narrow: an empty query result maps
//! to 404 with no body, and every other failure collapses to a single
//! generic 500 body. The underlying cause is logged, never surfaced to the
//! caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Api Error Enum ==
/// Unified error type for the sensor API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Query or scan matched nothing
    #[error("no data matched the request")]
    NoData,

    /// Malformed payload, path parameter, or key
    #[error("invalid request: {0}")]
    Validation(String),

    /// Table store failure
    #[error("store error: {0}")]
    Store(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NoData => StatusCode::NOT_FOUND.into_response(),
            ApiError::Validation(_) | ApiError::Store(_) => {
                error!("request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"status": "Server error"})),
                )
                    .into_response()
            }
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the sensor API.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_maps_to_404() {
        let response = ApiError::NoData.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_500() {
        let response = ApiError::Validation("bad payload".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_maps_to_500() {
        let response = ApiError::Store("write rejected".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

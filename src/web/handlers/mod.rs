//! Route handlers.

pub(crate) mod images;
pub(crate) mod quiz;

use axum::Json;
use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::web::error::ApiError;
use crate::web::types::HealthResponse;

pub(crate) async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

pub(crate) async fn method_not_allowed_handler() -> ApiError {
    ApiError::method_not_allowed()
}

/// Parse a JSON body, answering 400 on malformed input.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {e}")))
}

/// Treat missing and empty strings alike.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

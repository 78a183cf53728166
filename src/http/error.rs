//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// The audit found no records for the hub in the reference year
    NoHubData(String),
    /// The forecast matched no records for the origin/destination pair
    NoRouteData { origin: String, dest: String },
    /// Fewer than the minimum training months were available
    InsufficientHistory { origin: String, dest: String },
    /// Invalid request (validation error)
    BadRequest(String),
    /// Store/loading failure
    Store(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NoHubData(hub) => (
                StatusCode::NOT_FOUND,
                ApiError::new("NO_HUB_DATA", format!("no data for hub '{}'", hub)),
            ),
            AppError::NoRouteData { origin, dest } => (
                StatusCode::NOT_FOUND,
                ApiError::new(
                    "NO_ROUTE_DATA",
                    format!("no records for route {} -> {}", origin, dest),
                ),
            ),
            AppError::InsufficientHistory { origin, dest } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new(
                    "INSUFFICIENT_HISTORY",
                    format!(
                        "not enough usable monthly history to forecast {} -> {}",
                        origin, dest
                    ),
                ),
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Store(e) => match &e {
                StoreError::BucketNotFound { .. } | StoreError::NoCsvObjects { .. } => (
                    StatusCode::NOT_FOUND,
                    ApiError::new("SOURCE_NOT_FOUND", e.to_string()),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("STORE_ERROR", e.to_string()),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

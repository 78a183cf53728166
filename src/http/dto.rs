//! Data Transfer Objects for the HTTP API.
//!
//! Engine output types already derive Serialize and are re-exported as-is;
//! the wrappers here add the envelope fields the frontend expects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export engine types that go over the wire unchanged.
pub use crate::models::{HubSummary, RouteAggregate, RouteStatus, SeriesKind};

use crate::models::ForecastPoint;

/// Response for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Bucket the server reads from
    pub source: String,
}

/// Response listing selectable hub airports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubListResponse {
    pub hubs: Vec<String>,
    pub total: usize,
}

/// Response for the hub audit endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResponse {
    pub hub: String,
    pub routes: Vec<RouteAggregate>,
    pub total: usize,
}

/// Query parameters for the forecast endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastQuery {
    /// Destination label (city name) or airport code
    pub dest: String,
}

/// One forecast series point with its derived chart date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPointDto {
    pub year: i32,
    pub month: u32,
    /// First of month, for charting
    pub date: Option<NaiveDate>,
    pub passengers: f64,
    pub kind: SeriesKind,
}

impl From<ForecastPoint> for ForecastPointDto {
    fn from(point: ForecastPoint) -> Self {
        Self {
            date: point.date(),
            year: point.year,
            month: point.month,
            passengers: point.passengers,
            kind: point.kind,
        }
    }
}

/// Response for the forecast endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub status: String,
    pub origin: String,
    pub dest: String,
    pub points: Vec<ForecastPointDto>,
}

/// Request body for cache invalidation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidateRequest {
    /// Bucket to invalidate; defaults to the server's configured bucket
    pub bucket: Option<String>,
    /// Prefix to invalidate; defaults to the server's configured prefix
    pub prefix: Option<String>,
}

/// Response for cache invalidation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidateResponse {
    pub invalidated: bool,
}

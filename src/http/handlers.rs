//! HTTP handlers for the REST API.
//!
//! Each handler loads the (cached) dataset and delegates to the service
//! layer; engines' no-data sentinels become typed HTTP errors here.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    AuditResponse, ForecastPointDto, ForecastQuery, ForecastResponse, HealthResponse,
    HubListResponse, HubSummary, InvalidateRequest, InvalidateResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::ForecastOutcome;
use crate::services::{self, audit};
use crate::store::Dataset;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

async fn load(state: &AppState) -> Result<Arc<Dataset>, AppError> {
    state
        .cache
        .get_or_load(state.store.as_ref(), &state.bucket, &state.prefix)
        .await
        .map_err(AppError::from)
}

/// GET /health
///
/// Verify the service is up and its data source is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let status = match load(&state).await {
        Ok(_) => "ok".to_string(),
        Err(_) => "degraded".to_string(),
    };
    Ok(Json(HealthResponse {
        status,
        version: "v1".to_string(),
        source: state.bucket.clone(),
    }))
}

/// GET /v1/hubs
///
/// List the selectable hub airports (sorted distinct origin codes).
pub async fn list_hubs(State(state): State<AppState>) -> HandlerResult<HubListResponse> {
    let dataset = load(&state).await?;
    let hubs = dataset.hubs();
    let total = hubs.len();
    Ok(Json(HubListResponse { hubs, total }))
}

/// GET /v1/hubs/{hub}/audit
///
/// Per-route profitability and market position for the hub's latest year.
pub async fn get_audit(
    State(state): State<AppState>,
    Path(hub): Path<String>,
) -> HandlerResult<AuditResponse> {
    let dataset = load(&state).await?;
    let routes = services::run_audit(&dataset.records, &hub);
    if routes.is_empty() {
        return Err(AppError::NoHubData(hub));
    }
    let total = routes.len();
    Ok(Json(AuditResponse { hub, routes, total }))
}

/// GET /v1/hubs/{hub}/summary
///
/// KPI roll-up over the hub audit.
pub async fn get_summary(
    State(state): State<AppState>,
    Path(hub): Path<String>,
) -> HandlerResult<HubSummary> {
    let dataset = load(&state).await?;
    let routes = services::run_audit(&dataset.records, &hub);
    audit::hub_summary(&routes)
        .map(Json)
        .ok_or(AppError::NoHubData(hub))
}

/// GET /v1/hubs/{hub}/forecast?dest=...
///
/// Historical + projected monthly passenger series for one route.
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(hub): Path<String>,
    Query(query): Query<ForecastQuery>,
) -> HandlerResult<ForecastResponse> {
    if query.dest.trim().is_empty() {
        return Err(AppError::BadRequest("dest must not be empty".to_string()));
    }

    let dataset = load(&state).await?;
    let outcome = services::get_forecast(&dataset.records, &hub, &query.dest);
    let status = outcome.status_label().to_string();
    match outcome {
        ForecastOutcome::Success(points) => Ok(Json(ForecastResponse {
            status,
            origin: hub,
            dest: query.dest,
            points: points.into_iter().map(ForecastPointDto::from).collect(),
        })),
        ForecastOutcome::NoData => Err(AppError::NoRouteData {
            origin: hub,
            dest: query.dest,
        }),
        ForecastOutcome::NotEnoughData => Err(AppError::InsufficientHistory {
            origin: hub,
            dest: query.dest,
        }),
    }
}

/// POST /v1/cache/invalidate
///
/// Drop the cached dataset so the next request reloads from the store.
pub async fn invalidate_cache(
    State(state): State<AppState>,
    Json(request): Json<InvalidateRequest>,
) -> HandlerResult<InvalidateResponse> {
    let bucket = request.bucket.unwrap_or_else(|| state.bucket.clone());
    let prefix = request.prefix.unwrap_or_else(|| state.prefix.clone());
    let invalidated = state.cache.invalidate(&bucket, &prefix).await;
    Ok(Json(InvalidateResponse { invalidated }))
}

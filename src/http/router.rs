//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing) and builds
//! the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS for development; restrict in production deployments.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/hubs", get(handlers::list_hubs))
        .route("/hubs/{hub}/audit", get(handlers::get_audit))
        .route("/hubs/{hub}/summary", get(handlers::get_summary))
        .route("/hubs/{hub}/forecast", get(handlers::get_forecast))
        .route("/cache/invalidate", post(handlers::invalidate_cache));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DatasetCache, LocalStore};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let store = Arc::new(LocalStore::new("data"));
        let cache = Arc::new(DatasetCache::new());
        let state = AppState::new(store, cache, "traffic", "");
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}

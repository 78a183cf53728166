//! Routelens HTTP Server Binary
//!
//! Entry point for the routelens REST API server. It wires the object store
//! and dataset cache, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin routelens-server --features http-server
//! ```
//!
//! # Configuration
//!
//! Data source settings come from `routelens.toml` (see
//! `store::SourceConfig::load` for the search order) or from the
//! `ROUTELENS_ROOT` / `ROUTELENS_BUCKET` / `ROUTELENS_PREFIX` environment
//! variables.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use routelens::http::{create_router, AppState};
use routelens::store::{DatasetCache, LocalStore, SourceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting routelens HTTP server");

    let config = SourceConfig::load().map_err(|e| anyhow::anyhow!(e))?;
    info!(
        "Data source: root={} bucket='{}' prefix='{}'",
        config.source.root.display(),
        config.source.bucket,
        config.source.prefix
    );

    let store = Arc::new(LocalStore::new(config.source.root.clone()));
    let cache = Arc::new(DatasetCache::new());
    let state = AppState::new(store, cache, config.source.bucket, config.source.prefix);

    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

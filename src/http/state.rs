//! Application state for the HTTP server.

use std::sync::Arc;

use crate::store::{DatasetCache, ObjectStore};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Object store the canonical records are loaded through
    pub store: Arc<dyn ObjectStore>,
    /// Memoized dataset loads, keyed by (bucket, prefix)
    pub cache: Arc<DatasetCache>,
    /// Bucket the handlers read from
    pub bucket: String,
    /// Object key prefix
    pub prefix: String,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        cache: Arc<DatasetCache>,
        bucket: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            cache,
            bucket: bucket.into(),
            prefix: prefix.into(),
        }
    }
}

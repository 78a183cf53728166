//! Dataset acquisition: object-store abstraction, loading, and caching.
//!
//! The canonical record supplier lives behind the [`ObjectStore`] trait so
//! the engines never know where CSVs come from. [`LocalStore`] serves a
//! directory tree (bucket = subdirectory) and is what tests and the default
//! server wiring use; a remote S3-style collaborator would implement the same
//! trait.
//!
//! Loaded datasets are cached by [`cache::DatasetCache`] keyed on
//! (bucket, prefix) with manual invalidation. The analytics engines hold no
//! cache of their own.

pub mod cache;
pub mod config;
pub mod local;

pub use cache::{DatasetCache, DatasetKey};
pub use config::SourceConfig;
pub use local::LocalStore;

use async_trait::async_trait;
use log::info;
use thiserror::Error;

use crate::ingest::{self, IngestError};
use crate::models::FlightRecord;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while locating or loading source data.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The bucket (directory, for the local store) does not exist.
    #[error("bucket '{bucket}' not found")]
    BucketNotFound { bucket: String },

    /// No `.csv` objects matched the bucket/prefix.
    #[error("no CSV objects found under bucket '{bucket}' prefix '{prefix}'")]
    NoCsvObjects { bucket: String, prefix: String },

    /// An object listed by the store could not be fetched.
    #[error("failed to fetch object '{key}': {source}")]
    Fetch {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file problems.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// CSV normalization failure.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Abstract listing + fetch over a bucket/prefix object layout.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List object keys under a bucket whose names start with `prefix`.
    async fn list_objects(&self, bucket: &str, prefix: &str) -> StoreResult<Vec<String>>;

    /// Fetch the full text content of one object.
    async fn fetch_object(&self, bucket: &str, key: &str) -> StoreResult<String>;
}

/// A fully loaded, filtered, canonical record snapshot.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Canonical flight records after retention filtering.
    pub records: Vec<FlightRecord>,
    /// SHA-256 fingerprint of the concatenated source bytes.
    pub fingerprint: String,
}

impl Dataset {
    /// Sorted distinct origin airport codes (hub selector input).
    pub fn hubs(&self) -> Vec<String> {
        let mut hubs: Vec<String> = self.records.iter().map(|r| r.origin_code.clone()).collect();
        hubs.sort();
        hubs.dedup();
        hubs
    }
}

/// Load and normalize every `.csv` object under `bucket`/`prefix` into one
/// dataset.
///
/// Objects are read in sorted key order so the fingerprint is stable for a
/// given source state.
pub async fn load_dataset(
    store: &dyn ObjectStore,
    bucket: &str,
    prefix: &str,
) -> StoreResult<Dataset> {
    let mut keys: Vec<String> = store
        .list_objects(bucket, prefix)
        .await?
        .into_iter()
        .filter(|k| k.ends_with(".csv"))
        .collect();
    keys.sort();

    if keys.is_empty() {
        return Err(StoreError::NoCsvObjects {
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
        });
    }

    let mut records = Vec::new();
    let mut raw = String::new();
    for key in &keys {
        let content = store.fetch_object(bucket, key).await?;
        records.extend(ingest::read_records(&content)?);
        raw.push_str(&content);
    }

    let fingerprint = ingest::fingerprint(&raw);
    info!(
        "loaded dataset bucket='{}' prefix='{}': {} objects, {} records, fingerprint {}",
        bucket,
        prefix,
        keys.len(),
        records.len(),
        &fingerprint[..12]
    );

    Ok(Dataset {
        records,
        fingerprint,
    })
}

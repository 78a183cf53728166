//! Filesystem-backed object store.
//!
//! Serves CSV objects from a directory tree where each bucket is a
//! subdirectory under the configured root. Used by tests and the default
//! server wiring; remote storage backends implement the same trait.

use std::path::PathBuf;

use async_trait::async_trait;

use super::{ObjectStore, StoreError, StoreResult};

/// Object store over a local directory tree.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

#[async_trait]
impl ObjectStore for LocalStore {
    async fn list_objects(&self, bucket: &str, prefix: &str) -> StoreResult<Vec<String>> {
        let dir = self.root.join(bucket);
        let mut entries = tokio::fs::read_dir(&dir).await.map_err(|_| {
            StoreError::BucketNotFound {
                bucket: bucket.to_string(),
            }
        })?;

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|source| StoreError::Fetch {
            key: dir.display().to_string(),
            source,
        })? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if is_file && name.starts_with(prefix) {
                keys.push(name);
            }
        }
        Ok(keys)
    }

    async fn fetch_object(&self, bucket: &str, key: &str) -> StoreResult<String> {
        let path = self.root.join(bucket).join(key);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| StoreError::Fetch {
                key: key.to_string(),
                source,
            })
    }
}

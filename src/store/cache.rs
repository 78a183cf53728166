//! Dataset cache keyed by source bucket and prefix.
//!
//! Reframes the original process-wide memoized load as an explicit component:
//! callers inject the cache alongside the store, and invalidation is a manual
//! operation rather than an ambient side effect.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use tokio::sync::Mutex;

use super::{load_dataset, Dataset, ObjectStore, StoreResult};

/// Cache key: the data-loading parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetKey {
    pub bucket: String,
    pub prefix: String,
}

impl DatasetKey {
    pub fn new(bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            prefix: prefix.into(),
        }
    }
}

/// Memoized dataset loads with manual invalidation.
///
/// Safe to share across invocations; the engines themselves never touch it.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<DatasetKey, Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for (bucket, prefix), loading it through the
    /// store on a miss.
    pub async fn get_or_load(
        &self,
        store: &dyn ObjectStore,
        bucket: &str,
        prefix: &str,
    ) -> StoreResult<Arc<Dataset>> {
        let key = DatasetKey::new(bucket, prefix);

        if let Some(dataset) = self.entries.lock().await.get(&key) {
            debug!("dataset cache hit for bucket='{}' prefix='{}'", bucket, prefix);
            return Ok(Arc::clone(dataset));
        }

        // Load outside the lock; a concurrent miss re-loads, which is
        // acceptable under the request-per-invocation model.
        let dataset = Arc::new(load_dataset(store, bucket, prefix).await?);
        self.entries
            .lock()
            .await
            .insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Drop one cached entry. Returns true if an entry was present.
    pub async fn invalidate(&self, bucket: &str, prefix: &str) -> bool {
        self.entries
            .lock()
            .await
            .remove(&DatasetKey::new(bucket, prefix))
            .is_some()
    }

    /// Drop all cached entries.
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{StoreError, StoreResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const CSV: &str = "\
YEAR,MONTH,ORIGIN,DEST,PASSENGERS,SEATS,DISTANCE
2023,1,JFK,LHR,1000,1200,3451
";

    /// Store that counts fetches so cache hits are observable.
    struct CountingStore {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl ObjectStore for CountingStore {
        async fn list_objects(&self, bucket: &str, _prefix: &str) -> StoreResult<Vec<String>> {
            if bucket == "missing" {
                return Err(StoreError::BucketNotFound {
                    bucket: bucket.to_string(),
                });
            }
            Ok(vec!["data.csv".to_string()])
        }

        async fn fetch_object(&self, _bucket: &str, _key: &str) -> StoreResult<String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(CSV.to_string())
        }
    }

    #[tokio::test]
    async fn test_second_load_is_cached() {
        let store = CountingStore {
            fetches: AtomicUsize::new(0),
        };
        let cache = DatasetCache::new();

        let first = cache.get_or_load(&store, "traffic", "").await.unwrap();
        let second = cache.get_or_load(&store, "traffic", "").await.unwrap();

        assert_eq!(store.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(first.fingerprint, second.fingerprint);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let store = CountingStore {
            fetches: AtomicUsize::new(0),
        };
        let cache = DatasetCache::new();

        cache.get_or_load(&store, "traffic", "").await.unwrap();
        assert!(cache.invalidate("traffic", "").await);
        assert!(!cache.invalidate("traffic", "").await);
        cache.get_or_load(&store, "traffic", "").await.unwrap();

        assert_eq!(store.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_distinct_keys_cached_separately() {
        let store = CountingStore {
            fetches: AtomicUsize::new(0),
        };
        let cache = DatasetCache::new();

        cache.get_or_load(&store, "traffic", "2022").await.unwrap();
        cache.get_or_load(&store, "traffic", "2023").await.unwrap();
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_load_failure_is_not_cached() {
        let store = CountingStore {
            fetches: AtomicUsize::new(0),
        };
        let cache = DatasetCache::new();

        assert!(cache.get_or_load(&store, "missing", "").await.is_err());
        assert!(cache.is_empty().await);
    }
}

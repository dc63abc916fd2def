//! Shared plumbing for object_store-backed remote backends (GCS, S3).

use crate::traits::{ObjectInfo, StorageError, StorageResult};
use crate::StorageBackend;
use lru::LruCache;
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{ObjectStore, ObjectStoreExt};
use std::num::NonZeroUsize;
use std::sync::Arc;
use taskhandler_core::Location;
use tokio::sync::Mutex;

/// Bounded set of per-bucket store handles.
///
/// Each handle owns an HTTP client, so keeping them around lets concurrent and
/// subsequent requests for the same bucket share connections.
pub(crate) struct BucketStores {
    stores: Mutex<LruCache<String, Arc<dyn ObjectStore>>>,
}

impl BucketStores {
    pub(crate) fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            stores: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Return the handle for `bucket`, building it with `build` on first use.
    pub(crate) async fn resolve<F>(
        &self,
        bucket: &str,
        build: F,
    ) -> StorageResult<Arc<dyn ObjectStore>>
    where
        F: FnOnce(&str) -> object_store::Result<Arc<dyn ObjectStore>>,
    {
        let mut stores = self.stores.lock().await;
        if let Some(store) = stores.get(bucket) {
            return Ok(Arc::clone(store));
        }

        let store = build(bucket).map_err(|e| {
            tracing::error!(error = %e, bucket = %bucket, "Failed to resolve bucket handle");
            StorageError::BackendError(format!("Failed to resolve bucket {}: {}", bucket, e))
        })?;
        stores.put(bucket.to_string(), Arc::clone(&store));
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.stores.lock().await.len()
    }
}

/// Fetch object metadata from `store`, classifying not-found separately from other failures.
pub(crate) async fn head_object(
    store: &Arc<dyn ObjectStore>,
    location: &Location,
    backend: StorageBackend,
) -> StorageResult<ObjectInfo> {
    let start = std::time::Instant::now();
    let path =
        Path::parse(&location.key).map_err(|e| StorageError::InvalidKey(e.to_string()))?;
    // Parsing trims leading and trailing delimiters; looking up the trimmed path
    // would answer for a different object.
    let parsed: &str = path.as_ref();
    if parsed != location.key {
        return Err(StorageError::InvalidKey(location.key.clone()));
    }

    match store.head(&path).await {
        Ok(meta) => {
            tracing::debug!(
                backend = %backend,
                bucket = %location.container,
                key = %location.key,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Object metadata fetched"
            );
            Ok(ObjectInfo {
                location: location.clone(),
                size: meta.size,
                last_modified: Some(meta.last_modified),
                e_tag: meta.e_tag,
            })
        }
        Err(ObjectStoreError::NotFound { .. }) => Err(StorageError::NotFound(location.to_string())),
        Err(other) => {
            tracing::error!(
                error = %other,
                backend = %backend,
                bucket = %location.container,
                key = %location.key,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Object metadata request failed"
            );
            Err(StorageError::BackendError(other.to_string()))
        }
    }
}

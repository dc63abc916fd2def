//! Object existence check
//!
//! Wraps a [`Storage`] backend with the per-request policy: an optional container
//! allowlist and a deadline on the metadata lookup. The lookup future is owned by
//! the caller, so dropping the request (e.g. on client disconnect) aborts it.

use crate::traits::{ObjectInfo, Storage, StorageError, StorageResult};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use taskhandler_core::Location;

#[derive(Clone)]
pub struct ExistenceChecker {
    storage: Arc<dyn Storage>,
    timeout: Duration,
    allowed_containers: Option<Arc<HashSet<String>>>,
}

impl ExistenceChecker {
    pub fn new(storage: Arc<dyn Storage>, timeout: Duration) -> Self {
        Self {
            storage,
            timeout,
            allowed_containers: None,
        }
    }

    /// Restrict checks to the given containers. Others fail with `ContainerNotAllowed`.
    pub fn with_allowed_containers<I>(mut self, containers: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.allowed_containers = Some(Arc::new(containers.into_iter().collect()));
        self
    }

    pub async fn check(&self, location: &Location) -> StorageResult<ObjectInfo> {
        if let Some(allowed) = &self.allowed_containers {
            if !allowed.contains(&location.container) {
                return Err(StorageError::ContainerNotAllowed(location.container.clone()));
            }
        }

        match tokio::time::timeout(self.timeout, self.storage.head(location)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    container = %location.container,
                    key = %location.key,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Storage lookup exceeded deadline"
                );
                Err(StorageError::Timeout(self.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageBackend;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingStorage {
        calls: AtomicUsize,
        delay: Duration,
    }

    impl CountingStorage {
        fn new(delay: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay,
            }
        }
    }

    #[async_trait]
    impl Storage for CountingStorage {
        async fn head(&self, location: &Location) -> StorageResult<ObjectInfo> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(ObjectInfo {
                location: location.clone(),
                size: 3,
                last_modified: None,
                e_tag: None,
            })
        }

        fn backend_type(&self) -> StorageBackend {
            StorageBackend::Local
        }
    }

    #[tokio::test]
    async fn test_check_delegates_to_storage() {
        let storage = Arc::new(CountingStorage::new(Duration::ZERO));
        let checker = ExistenceChecker::new(storage.clone(), Duration::from_secs(5));

        let info = checker.check(&Location::new("bucket", "a/b.txt")).await.unwrap();
        assert_eq!(info.location, Location::new("bucket", "a/b.txt"));
        assert_eq!(info.size, 3);
        assert_eq!(storage.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_disallowed_container_skips_backend() {
        let storage = Arc::new(CountingStorage::new(Duration::ZERO));
        let checker = ExistenceChecker::new(storage.clone(), Duration::from_secs(5))
            .with_allowed_containers(vec!["uploads".to_string()]);

        let result = checker.check(&Location::new("other", "file")).await;
        assert!(matches!(result, Err(StorageError::ContainerNotAllowed(c)) if c == "other"));
        assert_eq!(storage.calls.load(Ordering::SeqCst), 0);

        assert!(checker.check(&Location::new("uploads", "file")).await.is_ok());
        assert_eq!(storage.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let storage = Arc::new(CountingStorage::new(Duration::from_secs(10)));
        let checker = ExistenceChecker::new(storage, Duration::from_millis(50));

        let result = checker.check(&Location::new("bucket", "key")).await;
        assert!(matches!(result, Err(StorageError::Timeout(d)) if d == Duration::from_millis(50)));
    }
}

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use taskhandler_core::Location;
use taskhandler_storage::{ObjectInfo, Storage, StorageBackend, StorageError, StorageResult};

/// What the stub backend reports for every lookup.
#[derive(Debug, Clone, Copy)]
pub enum StubOutcome {
    Present,
    Missing,
    ContainerMissing,
    Failing,
    Slow(Duration),
}

/// Storage stub that records the locations it was asked about.
pub struct StubStorage {
    outcome: StubOutcome,
    lookups: Mutex<Vec<Location>>,
}

impl StubStorage {
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn lookups(&self) -> Vec<Location> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for StubStorage {
    async fn head(&self, location: &Location) -> StorageResult<ObjectInfo> {
        self.lookups.lock().unwrap().push(location.clone());

        match self.outcome {
            StubOutcome::Present => Ok(ObjectInfo {
                location: location.clone(),
                size: 1024,
                last_modified: None,
                e_tag: Some("\"abc123\"".to_string()),
            }),
            StubOutcome::Missing => Err(StorageError::NotFound(location.to_string())),
            StubOutcome::ContainerMissing => {
                Err(StorageError::ContainerNotFound(location.container.clone()))
            }
            StubOutcome::Failing => Err(StorageError::BackendError(
                "403 Forbidden: caller does not have storage.objects.get access".to_string(),
            )),
            StubOutcome::Slow(delay) => {
                tokio::time::sleep(delay).await;
                Err(StorageError::BackendError("unreachable".to_string()))
            }
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Gcs
    }
}

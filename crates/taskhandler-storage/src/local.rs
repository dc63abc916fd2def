use crate::traits::{ObjectInfo, Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use taskhandler_core::Location;
use tokio::fs;

/// Local filesystem storage implementation
///
/// Containers are subdirectories of `base_path`; object keys are paths relative to
/// their container. Unlike the remote backends this one can tell a missing
/// container apart from a missing object.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Base directory holding one subdirectory per container
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    /// Resolve a container name to its directory. The name must be a single normal path component.
    fn container_path(&self, container: &str) -> StorageResult<PathBuf> {
        let mut components = Path::new(container).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.base_path.join(container)),
            _ => Err(StorageError::InvalidKey(format!(
                "Invalid container name: {}",
                container
            ))),
        }
    }

    /// Resolve a key inside a container directory.
    ///
    /// Every `/`-separated segment must be a plain name, so the path on disk names
    /// exactly the requested key and never leaves the container.
    fn key_to_path(container_dir: &Path, key: &str) -> StorageResult<PathBuf> {
        let plain = key.split('/').all(|segment| {
            let mut components = Path::new(segment).components();
            matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(name)), None) if name == segment
            )
        });
        if !plain {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(container_dir.join(key))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn head(&self, location: &Location) -> StorageResult<ObjectInfo> {
        let container_dir = self.container_path(&location.container)?;

        match fs::metadata(&container_dir).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(StorageError::ContainerNotFound(location.container.clone())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::ContainerNotFound(location.container.clone()))
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    container = %location.container,
                    "Local container lookup failed"
                );
                return Err(StorageError::BackendError(e.to_string()));
            }
        }

        let path = Self::key_to_path(&container_dir, &location.key)?;
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(ObjectInfo {
                location: location.clone(),
                size: meta.len(),
                last_modified: meta.modified().ok().map(DateTime::<Utc>::from),
                e_tag: None,
            }),
            Ok(_) => Err(StorageError::NotFound(location.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(location.to_string()))
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %path.display(),
                    "Local object lookup failed"
                );
                Err(StorageError::BackendError(e.to_string()))
            }
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use taskhandler_core::Location;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    #[error("Container not allowed: {0}")]
    ContainerNotAllowed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Storage request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Metadata of an object that exists in storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    pub location: Location,
    pub size: u64,
    pub last_modified: Option<DateTime<Utc>>,
    pub e_tag: Option<String>,
}

/// Storage abstraction trait
///
/// Implementations must be safe to share between concurrently handled requests;
/// every operation here is read-only.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch metadata for the object at `location`.
    ///
    /// Returns `NotFound` when the container exists but the key does not, and
    /// `ContainerNotFound` when the backend can tell the container itself is missing.
    async fn head(&self, location: &Location) -> StorageResult<ObjectInfo>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

//! Taskhandler Storage Library
//!
//! This crate provides the storage abstraction used to check whether an uploaded
//! object has landed, plus implementations for Google Cloud Storage, S3-compatible
//! stores and the local filesystem.
//!
//! # Containers and keys
//!
//! A [`Location`](taskhandler_core::Location) names a container (bucket) and an
//! object key. Remote backends resolve one store handle per bucket and keep a
//! bounded set of them so HTTP connection pools are reused across requests. The
//! local backend maps containers to subdirectories of its base path.

pub mod checker;
pub mod factory;
#[cfg(feature = "storage-gcs")]
pub mod gcs;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(any(feature = "storage-gcs", feature = "storage-s3"))]
pub(crate) mod remote;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use checker::ExistenceChecker;
pub use factory::create_storage;
#[cfg(feature = "storage-gcs")]
pub use gcs::GcsStorage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use taskhandler_core::StorageBackend;
pub use traits::{ObjectInfo, Storage, StorageError, StorageResult};

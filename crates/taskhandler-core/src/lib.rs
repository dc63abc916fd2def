//! Taskhandler Core Library
//!
//! This crate provides the domain types shared by the storage backends and the
//! HTTP service: configuration, the task payload, storage location parsing and
//! the error taxonomy that drives response status codes.

pub mod config;
pub mod error;
pub mod location;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, LogFormat};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use location::{Location, LocationError, LocationParser};
pub use models::{Disposition, TaskDescriptor};
pub use storage_types::StorageBackend;

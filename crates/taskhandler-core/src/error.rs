//! Error types module
//!
//! All request-level failures are unified under `AppError`. Each variant carries
//! its own HTTP status, machine-readable code and log level through
//! `ErrorMetadata`, so the HTTP layer only has to render a status code.

use crate::location::LocationError;
use crate::models::Disposition;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Info level - for expected errors like malformed client input
    Info,
    /// Warning level - for conditions the caller can fix or retry
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "OBJECT_NOT_FOUND")
    fn error_code(&self) -> &'static str;

    /// Whether retrying the same request later may succeed
    fn is_recoverable(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    #[error("Container not allowed: {0}")]
    ContainerNotAllowed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage request timed out: {0}")]
    Timeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        AppError::InvalidLocation(err.to_string())
    }
}

/// (status, code, recoverable, log level)
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, LogLevel::Info),
        AppError::InvalidLocation(_) => (400, "INVALID_LOCATION", false, LogLevel::Info),
        AppError::ContainerNotFound(_) => (400, "CONTAINER_NOT_FOUND", false, LogLevel::Warn),
        AppError::ContainerNotAllowed(_) => (400, "CONTAINER_NOT_ALLOWED", false, LogLevel::Warn),
        AppError::NotFound(_) => (404, "OBJECT_NOT_FOUND", true, LogLevel::Warn),
        AppError::Storage(_) => (500, "STORAGE_ERROR", true, LogLevel::Error),
        AppError::Timeout(_) => (500, "STORAGE_TIMEOUT", true, LogLevel::Warn),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", false, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::InvalidLocation(_) => "InvalidLocation",
            AppError::ContainerNotFound(_) => "ContainerNotFound",
            AppError::ContainerNotAllowed(_) => "ContainerNotAllowed",
            AppError::NotFound(_) => "NotFound",
            AppError::Storage(_) => "Storage",
            AppError::Timeout(_) => "Timeout",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Existence-check disposition this error represents, if it came from the check.
    ///
    /// Body and framing errors happen before a location exists and have none.
    pub fn disposition(&self) -> Option<Disposition> {
        match self {
            AppError::InvalidLocation(_) => Some(Disposition::InvalidLocation),
            AppError::ContainerNotFound(_) | AppError::ContainerNotAllowed(_) => {
                Some(Disposition::ContainerNotFound)
            }
            AppError::NotFound(_) => Some(Disposition::ObjectNotFound),
            AppError::Storage(_) | AppError::Timeout(_) => Some(Disposition::BackendError),
            AppError::InvalidInput(_) | AppError::Internal(_) => None,
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }
}

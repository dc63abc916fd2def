//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`. Every failure renders as a bare status
//! code: the caller never sees error details, they are only logged here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use taskhandler_core::{AppError, ErrorMetadata, LogLevel};
use taskhandler_storage::StorageError;

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from taskhandler-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    let disposition = error.disposition().map(|d| d.as_str()).unwrap_or("-");
    let recoverable = error.is_recoverable();
    match error.log_level() {
        LogLevel::Info => {
            tracing::info!(
                error = %error,
                error_type,
                error_code,
                disposition,
                recoverable,
                "Request rejected"
            );
        }
        LogLevel::Warn => {
            tracing::warn!(
                error = %error,
                error_type,
                error_code,
                disposition,
                recoverable,
                "Request rejected"
            );
        }
        LogLevel::Error => {
            tracing::error!(
                error = %error,
                error_type,
                error_code,
                disposition,
                recoverable,
                "Request failed"
            );
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(&self.0);

        status.into_response()
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::ContainerNotFound(msg) => AppError::ContainerNotFound(msg),
            StorageError::ContainerNotAllowed(msg) => AppError::ContainerNotAllowed(msg),
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            StorageError::InvalidKey(msg) => AppError::InvalidLocation(msg),
            StorageError::BackendError(msg) => AppError::Storage(msg),
            StorageError::Timeout(after) => {
                AppError::Timeout(format!("no response after {:?}", after))
            }
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

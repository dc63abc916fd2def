use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode, Uri},
};
use std::sync::Arc;
use taskhandler_core::{AppError, Disposition, TaskDescriptor};

/// Report whether the object named by the task payload exists.
///
/// Responds with a bare status: 200 found, 404 object missing, 400 for a bad
/// payload, location or container, 500 when the storage backend fails.
pub async fn check_upload(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, HttpAppError> {
    let body = body.map_err(|e| {
        AppError::InvalidInput(format!(
            "{} {}: failed to read request body: {}",
            method,
            uri.path(),
            e
        ))
    })?;

    let task: TaskDescriptor = serde_json::from_slice(&body).map_err(|e| {
        AppError::InvalidInput(format!(
            "{} {}: invalid task payload: {}",
            method,
            uri.path(),
            e
        ))
    })?;

    tracing::info!(
        method = %method,
        path = %uri.path(),
        job_id = %task.job_id_or_placeholder(),
        gcs_path = %task.gcs_path,
        has_session_url = task.has_session_url(),
        "Handling task request"
    );

    let location = state
        .locations
        .parse(&task.gcs_path)
        .map_err(AppError::from)?;

    let object = state.checker.check(&location).await?;

    tracing::info!(
        job_id = %task.job_id_or_placeholder(),
        bucket = %object.location.container,
        key = %object.location.key,
        size_bytes = object.size,
        e_tag = ?object.e_tag,
        last_modified = ?object.last_modified,
        disposition = %Disposition::Found,
        "Object found"
    );

    Ok(StatusCode::OK)
}

/// Every method other than POST, on any path, is reported as not found.
pub async fn not_found(method: Method, uri: Uri) -> StatusCode {
    tracing::debug!(method = %method, path = %uri.path(), "No handler for request");
    StatusCode::NOT_FOUND
}

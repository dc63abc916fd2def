//! Storage setup and initialization

use anyhow::{Context, Result};
use std::sync::Arc;
use taskhandler_core::Config;
use taskhandler_storage::{create_storage, Storage};

/// Build the process-wide storage backend. It is held for the lifetime of the process.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage backend...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;

    tracing::info!(
        backend = %storage.backend_type(),
        location_scheme = %config.location_scheme,
        backend_timeout_secs = config.backend_timeout_secs,
        allowed_containers = ?config.allowed_containers,
        "Storage backend initialized successfully"
    );

    Ok(storage)
}

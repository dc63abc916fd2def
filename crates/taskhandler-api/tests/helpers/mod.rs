//! Test helpers: build AppState and router over an injected storage backend.
//!
//! Run from workspace root: `cargo test -p taskhandler-api`.

pub mod storage;

use axum_test::TestServer;
use std::sync::Arc;
use taskhandler_api::setup::routes;
use taskhandler_api::AppState;
use taskhandler_core::Config;
use taskhandler_storage::Storage;

/// Default configuration with optional overrides, independent of the process environment.
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    Config::from_lookup(|key| {
        overrides
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
    .expect("Failed to build test config")
}

/// Setup a test server with default configuration.
pub fn setup_test_server(storage: Arc<dyn Storage>) -> TestServer {
    setup_test_server_with(test_config(&[]), storage)
}

/// Setup a test server with explicit configuration.
pub fn setup_test_server_with(config: Config, storage: Arc<dyn Storage>) -> TestServer {
    config.validate().expect("Test config should be valid");
    let state = Arc::new(AppState::new(&config, storage));
    let app = routes::setup_routes(&config, state);
    TestServer::new(app.into_make_service()).expect("Failed to create test server")
}

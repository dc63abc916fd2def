//! Application state shared by all request handlers.
//!
//! Built once at startup from the configuration and an injected storage backend;
//! nothing in it is mutated per request.

use std::sync::Arc;
use taskhandler_core::{Config, LocationParser};
use taskhandler_storage::{ExistenceChecker, Storage};

#[derive(Clone)]
pub struct AppState {
    pub locations: LocationParser,
    pub checker: ExistenceChecker,
}

impl AppState {
    pub fn new(config: &Config, storage: Arc<dyn Storage>) -> Self {
        let mut checker = ExistenceChecker::new(storage, config.backend_timeout());
        if let Some(allowed) = &config.allowed_containers {
            checker = checker.with_allowed_containers(allowed.iter().cloned());
        }

        Self {
            locations: LocationParser::new(config.location_scheme.clone()),
            checker,
        }
    }
}

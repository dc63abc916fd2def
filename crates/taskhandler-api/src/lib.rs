//! Taskhandler API Library
//!
//! This crate provides the HTTP handler that reports whether an uploaded object
//! has landed in storage, plus application setup (configuration, storage,
//! telemetry, routes and server startup).

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
mod telemetry;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;

//! Route configuration and setup.
//!
//! POST on any path runs the existence check; every other method falls through to
//! a bare 404.

use crate::handlers::task::{check_upload, not_found};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;
use taskhandler_core::Config;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    let task_route = post(check_upload).fallback(not_found);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", task_route.clone())
        .route("/{*path}", task_route)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(trace_layer)
        .with_state(state)
}

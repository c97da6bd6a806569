//! HTTP server setup and composition root.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests. Collaborators are wired
//! here and nowhere else; handlers only ever see the trait objects.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::{bad_practice, good_practice};
use crate::services::{Clock, FileStore, LocalFileStore, LogSink, SystemClock, TracingSink};

/// Application state shared across the good-practice handlers.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub files: Arc<dyn FileStore>,
    pub log: Arc<dyn LogSink>,
}

/// Create application state with the production collaborators.
///
/// `files_root` is the directory the file store resolves names under.
pub fn create_app_state(files_root: impl Into<std::path::PathBuf>) -> AppState {
    AppState {
        clock: Arc::new(SystemClock),
        files: Arc::new(LocalFileStore::new(files_root)),
        log: Arc::new(TracingSink),
    }
}

/// Create application state from explicit collaborators.
///
/// Tests use this to substitute a fixed clock, an in-memory file store,
/// or a recording sink.
pub fn create_app_state_with(
    clock: Arc<dyn Clock>,
    files: Arc<dyn FileStore>,
    log: Arc<dyn LogSink>,
) -> AppState {
    AppState { clock, files, log }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Ambient-dependency endpoints
        .route("/badpractice/time", get(bad_practice::bad_time))
        .route("/badpractice/log", post(bad_practice::bad_log))
        .route("/badpractice/file", get(bad_practice::bad_read_file))
        // Injected-dependency endpoints
        .route("/goodpractice/time", get(good_practice::good_time))
        .route("/goodpractice/log", post(good_practice::good_log))
        .route("/goodpractice/file", get(good_practice::good_read_file))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

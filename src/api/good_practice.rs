//! The recommended replacements: each handler receives its capabilities
//! through [`AppState`], so tests swap in fakes without touching the
//! handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use super::TimeResponse;
use crate::error::ApiError;
use crate::server::AppState;
use crate::services::LogEntry;

use super::bad_practice::CONFIG_FILE;

/// Current time from the injected clock
#[utoipa::path(
    get,
    path = "/goodpractice/time",
    responses(
        (status = 200, description = "Current server time", body = TimeResponse),
    ),
    tag = "Good practice"
)]
pub async fn good_time(State(state): State<AppState>) -> impl IntoResponse {
    let now = state.clock.local_now();
    Json(TimeResponse { current_time: now })
}

/// Emit one structured entry through the injected sink
///
/// The template keeps its `{time}` placeholder; the clock's value travels
/// as a named argument, not concatenated into the message.
#[utoipa::path(
    post,
    path = "/goodpractice/log",
    responses(
        (status = 200, description = "Confirmation string", body = String),
    ),
    tag = "Good practice"
)]
pub async fn good_log(State(state): State<AppState>) -> impl IntoResponse {
    let now = state.clock.local_now();
    state.log.record(
        LogEntry::info("Processing log request at {time}").with("time", now.to_rfc3339()),
    );
    "Logged to structured logger"
}

/// Read `config.json` without blocking the worker
///
/// Existence check first: absent means an immediate 404, no read attempt,
/// nothing logged. Present means a suspending read; a failure there is
/// recorded through the sink and surfaced as a 400 with the failure's
/// message.
#[utoipa::path(
    get,
    path = "/goodpractice/file",
    responses(
        (status = 200, description = "File contents", body = String),
        (status = 404, description = "File does not exist"),
        (status = 400, description = "Read failed"),
    ),
    tag = "Good practice"
)]
pub async fn good_read_file(State(state): State<AppState>) -> Result<String, ApiError> {
    if !state.files.exists(CONFIG_FILE).await {
        return Err(ApiError::FileNotFound);
    }

    match state.files.read_to_string(CONFIG_FILE).await {
        Ok(content) => Ok(content),
        Err(e) => {
            state
                .log
                .record(LogEntry::error("Error reading file: {error}").with("error", e.to_string()));
            Err(ApiError::ReadFailed(e.to_string()))
        }
    }
}

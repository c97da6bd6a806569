//! The banned patterns: every handler here reaches for an ambient
//! capability instead of an injected one. `clippy.toml` disallows each of
//! these calls; run `cargo clippy` to see them flagged.

use axum::response::{IntoResponse, Json};

use super::TimeResponse;
use crate::error::ApiError;

/// Fixed filename read by both file endpoints
pub const CONFIG_FILE: &str = "config.json";

/// Current time, read straight from the wall clock
///
/// There is no injection point, so no test can pin the returned instant
/// without patching this function.
#[utoipa::path(
    get,
    path = "/badpractice/time",
    responses(
        (status = 200, description = "Current server time", body = TimeResponse),
    ),
    tag = "Bad practice"
)]
pub async fn bad_time() -> impl IntoResponse {
    let now = chrono::Local::now().fixed_offset();
    Json(TimeResponse { current_time: now })
}

/// Write a fixed line to process stdout
///
/// Whatever captures the process's standard streams sees the line; the
/// application's log infrastructure does not.
#[utoipa::path(
    post,
    path = "/badpractice/log",
    responses(
        (status = 200, description = "Confirmation string", body = String),
    ),
    tag = "Bad practice"
)]
pub async fn bad_log() -> impl IntoResponse {
    println!("Processing log request...");
    "Logged to console"
}

/// Read `config.json` synchronously on the calling worker
///
/// The read blocks the async worker for its full duration; under load this
/// is how pools get exhausted. Any failure comes back as a 400 carrying the
/// I/O error's message, missing file included.
#[utoipa::path(
    get,
    path = "/badpractice/file",
    responses(
        (status = 200, description = "File contents", body = String),
        (status = 400, description = "Read failed"),
    ),
    tag = "Bad practice"
)]
pub async fn bad_read_file() -> Result<String, ApiError> {
    let content = std::fs::read_to_string(CONFIG_FILE)?;
    Ok(content)
}

pub mod bad_practice;
pub mod good_practice;

use serde::Serialize;
use utoipa::ToSchema;

pub use bad_practice::{bad_log, bad_read_file, bad_time};
pub use bad_practice::{__path_bad_log, __path_bad_read_file, __path_bad_time};
pub use good_practice::{good_log, good_read_file, good_time};
pub use good_practice::{__path_good_log, __path_good_read_file, __path_good_time};

/// Response from the time endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct TimeResponse {
    /// Current server time, RFC 3339 with local offset
    #[serde(rename = "CurrentTime")]
    pub current_time: chrono::DateTime<chrono::FixedOffset>,
}

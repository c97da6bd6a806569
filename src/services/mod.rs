pub mod clock;
pub mod file_store;
pub mod log_sink;

pub use clock::{Clock, SystemClock};
pub use file_store::{FileStore, LocalFileStore};
pub use log_sink::{LogEntry, LogLevel, LogSink, TracingSink};

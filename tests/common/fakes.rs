//! Fake collaborators for the good-practice handlers.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use api_hygiene::services::{Clock, FileStore, LogEntry, LogLevel, LogSink};

/// Clock pinned to one instant
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Parse an RFC 3339 literal, e.g. `"2024-01-01T00:00:00+00:00"`
    pub fn at(instant: &str) -> Self {
        Self(DateTime::parse_from_rfc3339(instant).expect("valid RFC 3339 instant"))
    }
}

impl Clock for FixedClock {
    fn local_now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// File store backed by a map of name -> content
#[derive(Default)]
pub struct InMemoryFileStore {
    files: HashMap<String, String>,
}

impl InMemoryFileStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_file(name: &str, content: &str) -> Self {
        let mut files = HashMap::new();
        files.insert(name.to_string(), content.to_string());
        Self { files }
    }
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    async fn read_to_string(&self, name: &str) -> io::Result<String> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{name} not found")))
    }
}

/// File store whose files exist but whose reads always fail
pub struct FailingFileStore {
    message: String,
}

impl FailingFileStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl FileStore for FailingFileStore {
    async fn exists(&self, _name: &str) -> bool {
        true
    }

    async fn read_to_string(&self, _name: &str) -> io::Result<String> {
        Err(io::Error::other(self.message.clone()))
    }
}

/// Sink that records every entry for later assertions
#[derive(Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn entries_at(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn record(&self, entry: LogEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}

/// Severity of a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// One structured log entry: a message template plus named arguments.
///
/// The template keeps its placeholders (`"... at {time}"`); argument values
/// travel separately so the sink can index them instead of receiving a
/// pre-formatted string.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub template: &'static str,
    pub fields: Vec<(&'static str, String)>,
}

impl LogEntry {
    pub fn info(template: &'static str) -> Self {
        Self {
            level: LogLevel::Info,
            template,
            fields: Vec::new(),
        }
    }

    pub fn error(template: &'static str) -> Self {
        Self {
            level: LogLevel::Error,
            template,
            fields: Vec::new(),
        }
    }

    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    /// Value of a named field, if present
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Trait for structured log emission.
///
/// Handlers record entries through this sink rather than writing to stdout,
/// so tests can substitute a recording implementation and production output
/// lands in the log infrastructure.
pub trait LogSink: Send + Sync {
    fn record(&self, entry: LogEntry);
}

/// Production sink forwarding entries to `tracing`
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, entry: LogEntry) {
        match entry.level {
            LogLevel::Info => {
                tracing::info!(fields = ?entry.fields, "{}", entry.template);
            }
            LogLevel::Error => {
                tracing::error!(fields = ?entry.fields, "{}", entry.template);
            }
        }
    }
}

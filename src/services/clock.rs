use chrono::{DateTime, FixedOffset, Local};

/// Trait for supplying the current local time.
///
/// Handlers that receive a `Clock` instead of calling `Local::now()` can be
/// pinned to a fixed instant in tests without touching the call site.
pub trait Clock: Send + Sync {
    /// Current local time, offset preserved
    fn local_now(&self) -> DateTime<FixedOffset>;
}

/// Production clock backed by the system wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    // the one sanctioned wall-clock call site
    #[allow(clippy::disallowed_methods)]
    fn local_now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

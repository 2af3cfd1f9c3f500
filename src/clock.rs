//! Deterministic clock abstraction for testable expiry checks.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::time::Instant;

/// Clock trait for deterministic time in tests.
pub trait Clock: Send + Sync {
    /// Get the current UTC time.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall time captured once per process, paired with a monotonic instant.
static ANCHOR: Lazy<(DateTime<Utc>, Instant)> = Lazy::new(|| (Utc::now(), Instant::now()));

/// System clock that never moves backwards within a process.
///
/// Wall time is sampled once, then advanced with [`Instant`], so adjustments
/// to the system clock after startup do not rewind expiry checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        let (wall, started) = *ANCHOR;
        match chrono::Duration::from_std(started.elapsed()) {
            Ok(elapsed) => wall + elapsed,
            Err(_) => Utc::now(),
        }
    }
}

/// Mock clock for deterministic testing.
#[cfg(any(test, feature = "test-seams"))]
#[derive(Debug, Clone)]
pub struct MockClock {
    now: DateTime<Utc>,
}

#[cfg(any(test, feature = "test-seams"))]
impl MockClock {
    /// Create a mock clock frozen at the given time.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Create a mock clock from an RFC 3339 string.
    pub fn from_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        let now = DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc);
        Ok(Self { now })
    }

    /// Advance the clock by a duration.
    pub fn advance(&mut self, duration: chrono::Duration) {
        self.now = self.now + duration;
    }
}

#[cfg(any(test, feature = "test-seams"))]
impl Clock for MockClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.now
    }
}

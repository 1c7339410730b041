//! Time source abstraction for the prerelease date stamp

use chrono::{DateTime, Utc};
use std::fmt;

/// Source of the current instant.
///
/// Production code uses [`SystemClock`]; tests inject a [`FixedClock`] so the
/// composed date stamp is deterministic.
pub trait Clock: fmt::Debug {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

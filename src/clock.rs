//! Injectable wall-clock abstraction
//!
//! Boundary and aggregation logic are pure functions of explicit reference
//! instants; the only wall-clock reads in the crate (the `is_current` flag
//! and the `*_at`-less convenience methods) go through this trait so tests
//! can pin "now".

use chrono::{DateTime, Utc};

/// Source of the current instant
pub trait Clock {
    /// Current wall-clock reading
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

//! Clock abstraction and event-time stamping
//!
//! The engine never reads ambient time; it is handed a `Clock` so tests can
//! pin "now" and replay the seconds-override timestamp convention exactly.

use chrono::{DateTime, Timelike, Utc};

/// Source of the server-observed wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock reading `Utc::now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Stamp an event time: the observed "now" with its seconds-within-minute
/// field replaced by the caller-supplied value. Minute, hour and date stay
/// whatever the clock says.
///
/// `None` means the caller sent no seconds field; the event stays
/// untimestamped. Values outside 0-59 are rejected at the API boundary
/// before this runs.
pub fn stamp(now: DateTime<Utc>, seconds: Option<u32>) -> Option<DateTime<Utc>> {
    seconds.and_then(|s| now.with_second(s))
}

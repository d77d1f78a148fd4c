//! Injectable source of "now".
//!
//! The release-year rule depends on the current calendar year, so anything
//! that validates records takes a [`Clock`] instead of reading the wall clock
//! directly. Tests pin time with [`FixedClock`].

use chrono::{Datelike, Utc};

use crate::types::Timestamp;

/// A source of the current UTC time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Calendar year of [`Clock::now`].
    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl FixedClock {
    /// A clock pinned to midday, January 1st of `year` (UTC).
    ///
    /// # Panics
    ///
    /// Panics if `year` is outside chrono's representable range.
    pub fn at_year(year: i32) -> Self {
        let instant = chrono::NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("year must be representable")
            .and_utc();
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

//! Time source for id generation, record dates and overdue checks.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Injectable wall clock. All dates are UTC.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Epoch milliseconds; doubles as the id of newly created records.
    fn now_ms(&self) -> i64 {
        self.now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// `YYYY-MM-DD`, the on-disk format of `createdAt`/`updatedAt`.
    fn today_iso(&self) -> String {
        self.today().format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// Pins the clock to `millis` after the Unix epoch.
    ///
    /// Out-of-range values clamp to the epoch.
    pub fn from_millis(millis: i64) -> Self {
        let at = Utc
            .timestamp_millis_opt(millis)
            .single()
            .unwrap_or_default();
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

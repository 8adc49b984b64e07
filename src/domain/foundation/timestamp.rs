//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Adds whole days. Returns `None` if the result is out of range.
    pub fn plus_days(&self, days: i64) -> Option<Self> {
        self.checked_add(Duration::try_days(days)?)
    }

    /// Subtracts whole days. Returns `None` if the result is out of range.
    pub fn minus_days(&self, days: i64) -> Option<Self> {
        self.0.checked_sub_signed(Duration::try_days(days)?).map(Self)
    }

    /// Adds milliseconds. Returns `None` if the result is out of range.
    pub fn plus_millis(&self, millis: i64) -> Option<Self> {
        self.checked_add(Duration::try_milliseconds(millis)?)
    }

    fn checked_add(&self, duration: Duration) -> Option<Self> {
        self.0.checked_add_signed(duration).map(Self)
    }

    /// Formats the time of day as `HH:MM:SS` (UTC).
    pub fn time_of_day(&self) -> String {
        self.0.format("%H:%M:%S").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

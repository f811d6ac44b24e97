//! Time handling for sensor samples
//!
//! Readings arrive as separate local `date` and `time` strings. This module
//! turns them into epoch-millisecond timestamps and provides the clock
//! abstraction the aggregator's callers use to obtain "now":
//! - System clock (local wall-clock time)
//! - Fixed clock (tests, replaying old data)
//!
//! All calendar comparisons happen in a caller-chosen `chrono::TimeZone`,
//! usually `Local`. Tests use `Utc` or a `FixedOffset` so they do not
//! depend on the machine's zone.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::errors::{DataError, DataResult};

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = i64;

/// Source of the current wall-clock instant
pub trait Clock {
    /// Zone the clock reports in
    type Zone: TimeZone;

    /// Current instant
    fn now(&self) -> DateTime<Self::Zone>;
}

/// Local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Zone = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Fixed clock for testing
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    now: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    /// Clock frozen at `now`
    pub fn new(now: DateTime<Tz>) -> Self {
        Self { now }
    }

    /// Jump to `now`
    pub fn set(&mut self, now: DateTime<Tz>) {
        self.now = now;
    }

    /// Move forward by `by`
    pub fn advance(&mut self, by: Duration) {
        self.now = self.now.clone() + by;
    }
}

impl<Tz: TimeZone> Clock for FixedClock<Tz> {
    type Zone = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.now.clone()
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(date: &str) -> DataResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| DataError::InvalidDate {
        value: date.to_string(),
    })
}

/// Parse an `HH:MM` or `HH:MM:SS[.fff]` time of day
pub fn parse_time(time: &str) -> DataResult<NaiveTime> {
    let trimmed = time.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| DataError::InvalidTime {
            value: time.to_string(),
        })
}

/// Hour-of-day component of a time string
///
/// Only the part before the first colon is looked at, so `"7:05"` and
/// `"07:05:00"` both give 7.
pub fn hour_of(time: &str) -> Option<u32> {
    let hour = time.split(':').next()?.trim().parse::<u32>().ok()?;
    (hour < 24).then_some(hour)
}

/// Combine a local date and time into an epoch-millisecond timestamp
///
/// When the wall-clock time is ambiguous (DST fold) the earlier instant wins.
pub fn derive_timestamp<Tz: TimeZone>(date: &str, time: &str, tz: &Tz) -> DataResult<Timestamp> {
    let naive = NaiveDateTime::new(parse_date(date)?, parse_time(time)?);
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|instant| instant.timestamp_millis())
        .ok_or_else(|| DataError::NonexistentLocalTime {
            date: date.to_string(),
            time: time.to_string(),
        })
}

/// Timestamp of local midnight at the start of `date`
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<Timestamp> {
    tz.from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
        .earliest()
        .map(|instant| instant.timestamp_millis())
}

/// Local wall-clock view of a timestamp
pub fn local_datetime<Tz: TimeZone>(timestamp: Timestamp, tz: &Tz) -> Option<NaiveDateTime> {
    tz.timestamp_millis_opt(timestamp)
        .single()
        .map(|instant| instant.naive_local())
}

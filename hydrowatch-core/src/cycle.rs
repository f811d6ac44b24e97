//! Grow-cycle tracking
//!
//! A grow cycle is the date range between planting and harvest. The home
//! screen shows how far into it today is. The boundaries are persisted in
//! a key-value store as RFC 3339 strings (usually UTC) and reloaded on
//! start-up. Day arithmetic happens in the user's local zone, so a stored
//! instant is converted to that zone before its date is taken.

use chrono::{DateTime, NaiveDate, TimeZone};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{DataError, DataResult};

/// Planting and harvest dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrowCycle {
    /// Local planting date
    pub start: NaiveDate,
    /// Local harvest date
    pub end: NaiveDate,
}

impl GrowCycle {
    /// Cycle between two local dates
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Restore a cycle from persisted RFC 3339 strings
    ///
    /// Each instant is viewed in `tz` and only its calendar date is kept.
    pub fn from_saved<Tz: TimeZone>(start: &str, end: &str, tz: &Tz) -> DataResult<Self> {
        Ok(Self::new(saved_date(start, tz)?, saved_date(end, tz)?))
    }

    /// Replace whichever boundaries were found in storage
    pub fn with_saved<Tz: TimeZone>(
        self,
        start: Option<&str>,
        end: Option<&str>,
        tz: &Tz,
    ) -> DataResult<Self> {
        Ok(Self {
            start: start.map(|v| saved_date(v, tz)).transpose()?.unwrap_or(self.start),
            end: end.map(|v| saved_date(v, tz)).transpose()?.unwrap_or(self.end),
        })
    }

    /// Whole days from start to end (negative when reversed)
    pub fn days_in_period(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whole days from start to `today` (negative before the start)
    pub fn days_passed(&self, today: NaiveDate) -> i64 {
        (today - self.start).num_days()
    }

    /// Fraction of the cycle elapsed, clamped to `[0, 1]`
    ///
    /// An empty or reversed cycle reports 0.
    pub fn progress(&self, today: NaiveDate) -> f64 {
        let period = self.days_in_period();
        if period <= 0 {
            return 0.0;
        }

        (self.days_passed(today) as f64 / period as f64).clamp(0.0, 1.0)
    }

    /// Progress as a whole percentage
    pub fn percent(&self, today: NaiveDate) -> u32 {
        (self.progress(today) * 100.0).round() as u32
    }
}

impl Default for GrowCycle {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 12, 12).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2025, 12, 12).unwrap_or_default(),
        }
    }
}

fn saved_date<Tz: TimeZone>(value: &str, tz: &Tz) -> DataResult<NaiveDate> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|instant| instant.with_timezone(tz).date_naive())
        .map_err(|_| DataError::InvalidStoredDate {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_cycle_spans_a_year() {
        let cycle = GrowCycle::default();
        assert_eq!(cycle.days_in_period(), 365);
    }

    #[test]
    fn progress_is_clamped() {
        let cycle = GrowCycle::new(day(2025, 1, 1), day(2025, 1, 11));

        assert_eq!(cycle.progress(day(2024, 12, 1)), 0.0);
        assert_eq!(cycle.progress(day(2025, 1, 6)), 0.5);
        assert_eq!(cycle.percent(day(2025, 1, 4)), 30);
        assert_eq!(cycle.progress(day(2025, 6, 1)), 1.0);
    }

    #[test]
    fn empty_period_has_no_progress() {
        let cycle = GrowCycle::new(day(2025, 1, 1), day(2025, 1, 1));
        assert_eq!(cycle.progress(day(2025, 1, 1)), 0.0);

        let reversed = GrowCycle::new(day(2025, 2, 1), day(2025, 1, 1));
        assert_eq!(reversed.percent(day(2025, 1, 15)), 0);
    }

    #[test]
    fn saved_dates_parse() {
        let cycle = GrowCycle::from_saved("2025-02-01T09:30:00.000Z", "2025-05-01T00:00:00Z", &Utc).unwrap();
        assert_eq!(cycle.start, day(2025, 2, 1));
        assert_eq!(cycle.days_in_period(), 89);

        let err = GrowCycle::from_saved("yesterday", "2025-05-01T00:00:00Z", &Utc).unwrap_err();
        assert!(matches!(err, DataError::InvalidStoredDate { .. }));
    }

    #[test]
    fn partial_storage_keeps_defaults() {
        let cycle = GrowCycle::default()
            .with_saved(None, Some("2026-01-01T00:00:00Z"), &Utc)
            .unwrap();
        assert_eq!(cycle.start, day(2024, 12, 12));
        assert_eq!(cycle.end, day(2026, 1, 1));
    }

    #[test]
    fn saved_instant_uses_local_date() {
        // 00:30 on Feb 2 in UTC+1, stored as UTC
        let warsaw = FixedOffset::east_opt(3600).unwrap();
        let cycle = GrowCycle::from_saved("2025-02-01T23:30:00.000Z", "2025-05-01T22:00:00.000Z", &warsaw).unwrap();

        assert_eq!(cycle.start, day(2025, 2, 2));
        assert_eq!(cycle.end, day(2025, 5, 1));
        assert_eq!(cycle.days_passed(day(2025, 2, 2)), 0);

        let partial = GrowCycle::default()
            .with_saved(Some("2025-02-01T23:30:00Z"), None, &warsaw)
            .unwrap();
        assert_eq!(partial.start, day(2025, 2, 2));
    }
}

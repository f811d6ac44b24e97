//! Time-Range Aggregation for Charting
//!
//! ## Overview
//!
//! The charts screen offers four range selectors. Each one reduces the full
//! history of sensor rows to a handful of points:
//!
//! | Selector     | Points            | Strategy                                   |
//! |--------------|-------------------|--------------------------------------------|
//! | `LastHour`   | last 6 rows       | raw rows, labeled `1`..`6`                 |
//! | `LastDay`    | up to 8           | first row in each 3-hourly slot, `HH:00`   |
//! | `LastWeek`   | up to 6           | per-day averages, `MM-dd`                  |
//! | `LastMonths` | up to 6           | per-month averages, short month name       |
//!
//! Buckets without any matching row are left out, never padded with empty
//! points. The output is always in ascending chronological order.
//!
//! ## Determinism
//!
//! The caller passes "now" explicitly. Given the same rows, selector and
//! instant the output is identical, and input rows are never modified.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use hydrowatch_core::aggregate::{aggregate, RangeSelector};
//! use hydrowatch_core::sample::{SensorField, SensorSample};
//!
//! let rows = vec![
//!     SensorSample::new("a", "2025-03-10", "08:00").with(SensorField::Ph, 6.0).stamped(&Utc),
//!     SensorSample::new("b", "2025-03-10", "09:00").with(SensorField::Ph, 6.4).stamped(&Utc),
//! ];
//! let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
//!
//! let week = aggregate(&rows, RangeSelector::LastWeek, &now);
//! assert_eq!(week.len(), 1);
//! assert_eq!(week[0].ph, Some(6.2));
//! ```

pub mod average;
pub mod windows;

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, TimeZone};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::AggregationConfig;
use crate::sample::SensorSample;

pub use average::{field_mean, round_to};

/// User-selected chart window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RangeSelector {
    /// Most recent raw rows
    LastHour,
    /// Rows sampled every few hours over the last day
    #[default]
    LastDay,
    /// Daily averages
    LastWeek,
    /// Monthly averages
    LastMonths,
}

impl RangeSelector {
    /// Every selector, in picker order
    pub const ALL: [RangeSelector; 4] = [
        RangeSelector::LastHour,
        RangeSelector::LastDay,
        RangeSelector::LastWeek,
        RangeSelector::LastMonths,
    ];

    /// Name used by the app and stored preferences
    pub const fn as_str(self) -> &'static str {
        match self {
            RangeSelector::LastHour => "LastHour",
            RangeSelector::LastDay => "LastDay",
            RangeSelector::LastWeek => "LastWeek",
            RangeSelector::LastMonths => "LastMonths",
        }
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeSelector {
    type Err = UnknownRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeSelector::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| UnknownRange(s.to_string()))
    }
}

/// Name did not match any range selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRange(pub String);

impl fmt::Display for UnknownRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown time range '{}'", self.0)
    }
}

/// Reduces sensor history to chart points
#[derive(Debug, Clone, Default)]
pub struct TimeRangeAggregator {
    config: AggregationConfig,
}

impl TimeRangeAggregator {
    /// Aggregator using the given window sizes
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// Window sizes in use
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Reduce `samples` for `range` relative to `now`
    ///
    /// Calendar dates and hours are evaluated in the zone of `now`.
    pub fn aggregate<Tz: TimeZone>(
        &self,
        samples: &[SensorSample],
        range: RangeSelector,
        now: &DateTime<Tz>,
    ) -> Vec<SensorSample> {
        if samples.is_empty() {
            return Vec::new();
        }

        let sorted = sorted_by_timestamp(samples);
        let points = match range {
            RangeSelector::LastHour => windows::last_samples(&sorted, self.config.last_hour_samples),
            RangeSelector::LastDay => windows::hourly_picks(&sorted, now, &self.config),
            RangeSelector::LastWeek => windows::daily_averages(&sorted, now, &self.config),
            RangeSelector::LastMonths => windows::monthly_averages(&sorted, now, &self.config),
        };

        log_debug!(
            "{}: reduced {} samples to {} points",
            range,
            samples.len(),
            points.len()
        );
        points
    }
}

/// Reduce `samples` for `range` with the default window sizes
pub fn aggregate<Tz: TimeZone>(
    samples: &[SensorSample],
    range: RangeSelector,
    now: &DateTime<Tz>,
) -> Vec<SensorSample> {
    TimeRangeAggregator::default().aggregate(samples, range, now)
}

/// Copy of `samples` in ascending timestamp order
///
/// The sort is stable, and rows without a timestamp come first.
pub fn sorted_by_timestamp(samples: &[SensorSample]) -> Vec<SensorSample> {
    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|sample| sample.timestamp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SensorField;
    use chrono::Utc;

    fn row(id: &str, date: &str, time: &str) -> SensorSample {
        SensorSample::new(id, date, time)
            .with(SensorField::Tds, 750.0)
            .stamped(&Utc)
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let now = Utc::now();
        for range in RangeSelector::ALL {
            assert!(aggregate(&[], range, &now).is_empty(), "{range}");
        }
    }

    #[test]
    fn input_order_does_not_matter() {
        let rows = vec![
            row("c", "2025-03-10", "11:00"),
            row("a", "2025-03-10", "09:00"),
            row("b", "2025-03-10", "10:00"),
        ];
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();

        let hour = aggregate(&rows, RangeSelector::LastHour, &now);
        let ids: Vec<_> = hour.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(rows[0].formatted_date, None);
    }

    #[test]
    fn custom_window_sizes_apply() {
        let rows: Vec<_> = (0..5).map(|i| row(&format!("r{i}"), "2025-03-10", &format!("0{i}:00"))).collect();
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let aggregator = TimeRangeAggregator::new(AggregationConfig {
            last_hour_samples: 2,
            ..AggregationConfig::default()
        });

        let hour = aggregator.aggregate(&rows, RangeSelector::LastHour, &now);
        assert_eq!(hour.len(), 2);
        assert_eq!(hour[0].id, "r3");
    }

    #[test]
    fn selector_names_parse() {
        assert_eq!("LastMonths".parse::<RangeSelector>(), Ok(RangeSelector::LastMonths));
        assert!("Yesterday".parse::<RangeSelector>().is_err());
        assert_eq!(RangeSelector::default(), RangeSelector::LastDay);
    }
}

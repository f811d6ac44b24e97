//! Aggregation window configuration
//!
//! The defaults reproduce the app's four range views. A host application can
//! override them from JSON:
//!
//! ```json
//! { "last_day_interval_hours": 2, "last_months": 12 }
//! ```
//!
//! Missing keys keep their default.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
    LAST_DAY_INTERVAL_HOURS, LAST_DAY_SPAN_HOURS, LAST_HOUR_SAMPLES, LAST_MONTHS,
    LAST_WEEK_DAYS, LAST_WEEK_DAY_STEP,
};

/// Window sizes for each range selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AggregationConfig {
    /// Raw samples kept for the last-hour view
    pub last_hour_samples: usize,
    /// Hours between picked samples in the last-day view
    pub last_day_interval_hours: u32,
    /// Hours covered by the last-day view
    pub last_day_span_hours: u32,
    /// Days between averaged buckets in the last-week view
    pub last_week_day_step: u32,
    /// Number of daily buckets in the last-week view
    pub last_week_days: u32,
    /// Number of monthly buckets in the months view
    pub last_months: u32,
}

impl AggregationConfig {
    /// Number of target instants probed by the last-day view
    ///
    /// A zero interval probes nothing rather than dividing by zero.
    pub fn last_day_targets(&self) -> u32 {
        self.last_day_span_hours
            .checked_div(self.last_day_interval_hours)
            .unwrap_or(0)
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            last_hour_samples: LAST_HOUR_SAMPLES,
            last_day_interval_hours: LAST_DAY_INTERVAL_HOURS,
            last_day_span_hours: LAST_DAY_SPAN_HOURS,
            last_week_day_step: LAST_WEEK_DAY_STEP,
            last_week_days: LAST_WEEK_DAYS,
            last_months: LAST_MONTHS,
        }
    }
}

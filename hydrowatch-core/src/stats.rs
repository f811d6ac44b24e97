//! Summary figures for one chart series
//!
//! The chart detail view shows the first and last reading of the visible
//! window plus its mean and extremes. Absent readings count as zero here,
//! the same way the chart itself plots them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::NOT_AVAILABLE;
use crate::sample::{SensorField, SensorSample};

/// Mean of `field` formatted with two decimals, or `"N/A"` for no data
pub fn average_label(samples: &[SensorSample], field: SensorField) -> String {
    if samples.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    let sum: f64 = samples.iter().map(|s| s.get(field).unwrap_or(0.0)).sum();
    format!("{:.2}", sum / samples.len() as f64)
}

/// Smallest and largest value of `field`
pub fn min_max(samples: &[SensorSample], field: SensorField) -> Option<(f64, f64)> {
    samples
        .iter()
        .map(|s| s.get(field).unwrap_or(0.0))
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Everything the detail view needs for one series
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeriesSummary {
    /// Summarized field
    pub field: SensorField,
    /// Oldest value in the series
    pub first: Option<f64>,
    /// Newest value in the series
    pub last: Option<f64>,
    /// Mean with two decimals, or `N/A`
    pub average: String,
    /// Smallest value (absent = 0)
    pub min: Option<f64>,
    /// Largest value (absent = 0)
    pub max: Option<f64>,
}

impl SeriesSummary {
    /// Summarize `field` over `samples`
    pub fn of(samples: &[SensorSample], field: SensorField) -> Self {
        let extremes = min_max(samples, field);

        Self {
            field,
            first: samples.first().and_then(|s| s.get(field)),
            last: samples.last().and_then(|s| s.get(field)),
            average: average_label(samples, field),
            min: extremes.map(|(lo, _)| lo),
            max: extremes.map(|(_, hi)| hi),
        }
    }

    /// Change between the first and last reading
    pub fn delta(&self) -> Option<f64> {
        Some(self.last? - self.first?)
    }
}

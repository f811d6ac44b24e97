//! Window sizes and display constants
//!
//! Defaults for [`AggregationConfig`](crate::config::AggregationConfig) and
//! the chart helpers. They match what the mobile app shows for each range
//! selector.

// ===== LAST HOUR =====

/// Raw samples shown for the last-hour view.
///
/// The rig reports roughly every ten minutes, so six rows cover an hour.
pub const LAST_HOUR_SAMPLES: usize = 6;

// ===== LAST DAY =====

/// Spacing between the picked samples in the last-day view (hours).
pub const LAST_DAY_INTERVAL_HOURS: u32 = 3;

/// Span covered by the last-day view (hours).
pub const LAST_DAY_SPAN_HOURS: u32 = 24;

// ===== LAST WEEK =====

/// Step between averaged days in the last-week view.
pub const LAST_WEEK_DAY_STEP: u32 = 1;

/// Number of daily buckets in the last-week view.
pub const LAST_WEEK_DAYS: u32 = 6;

// ===== LAST MONTHS =====

/// Number of monthly buckets in the months view.
pub const LAST_MONTHS: u32 = 6;

// ===== LABELS =====

/// Prefix of synthetic ids given to averaged buckets.
pub const AGGREGATE_ID_PREFIX: &str = "avg-";

/// Time of day stored on averaged buckets.
pub const AGGREGATE_TIME: &str = "00:00";

/// Label format for daily buckets.
pub const DAY_LABEL_FORMAT: &str = "%m-%d";

/// Label format for monthly buckets (short month name).
pub const MONTH_LABEL_FORMAT: &str = "%b";

// ===== CHARTS =====

/// Values above this are printed as whole numbers on chart points.
pub const WHOLE_NUMBER_THRESHOLD: f64 = 101.0;

/// Headroom multiplier applied to the largest value for the y-axis.
pub const AXIS_HEADROOM: f64 = 1.1;

/// Placeholder shown when a series has no data.
pub const NOT_AVAILABLE: &str = "N/A";

// ===== ASSISTANT =====

/// Below this water temperature iron uptake suffers (°C).
pub const IRON_UPTAKE_MIN_C: f64 = 18.0;

/// Above this water temperature calcium deficiency becomes likely (°C).
pub const CALCIUM_HEAT_STRESS_C: f64 = 30.0;

/// Daily growth under this share of the expected rate is too slow.
pub const SLOW_GROWTH_RATIO: f64 = 0.7;

/// Daily growth over this share of the expected rate is above average.
pub const FAST_GROWTH_RATIO: f64 = 1.3;

/// Nutrient level (%) under which slow growth is blamed on feeding.
pub const LOW_NUTRIENT_LEVEL: f64 = 70.0;

/// Milliseconds per day, for whole-day growth periods.
pub const MS_PER_DAY: i64 = 86_400_000;

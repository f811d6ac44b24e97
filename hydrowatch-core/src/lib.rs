//! Core data engine for HydroWatch
//!
//! Turns the raw sensor history of a hydroponic rig into chart-ready points
//! and answers growers' questions through a rule-based assistant.
//! Rows carry pH, TDS, water and air temperature, humidity and light
//! readings with a local date and time.
//!
//! Everything here is synchronous and pure: the same rows, range and "now"
//! always produce the same output.
//!
//! ```no_run
//! use hydrowatch_core::{aggregate, RangeSelector, SensorField, SystemClock, Clock};
//! use hydrowatch_core::series::{points, ChartKind};
//!
//! let history = Vec::new(); // rows loaded by the records crate
//! let now = SystemClock.now();
//!
//! let week = aggregate(&history, RangeSelector::LastWeek, &now);
//! let ph_line = points(ChartKind::LineChart, &week, SensorField::Ph);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod aggregate;
pub mod assistant;
pub mod config;
pub mod constants;
pub mod cycle;
pub mod errors;
pub mod sample;
pub mod series;
pub mod stats;
pub mod time;

// Public API
pub use aggregate::{aggregate, RangeSelector, TimeRangeAggregator};
pub use assistant::{Assistant, AssistantContext, NutrientCatalog, NutrientProfile, PlantRecord, TemperatureReading};
pub use config::AggregationConfig;
pub use cycle::GrowCycle;
pub use errors::{DataError, DataResult};
pub use sample::{SensorField, SensorSample};
pub use time::{Clock, FixedClock, SystemClock, Timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}

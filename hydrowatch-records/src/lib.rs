//! Realtime-Database Records for HydroWatch
//!
//! ## Overview
//!
//! The growing rig pushes one row per measurement into the `sensor_data`
//! collection of a realtime database. This crate turns that collection into
//! the chart points the app displays:
//!
//! 1. A [`SnapshotSource`] hands over the collection as JSON.
//! 2. [`Snapshot`] decodes the rows, keeps the newest ones by key and
//!    derives each row's timestamp from its local `date` and `time`.
//! 3. The core [`TimeRangeAggregator`](hydrowatch_core::TimeRangeAggregator)
//!    reduces them for the selected range.
//!
//! [`load_latest_temperature`] and [`load_plants`] feed the assistant's
//! [`AssistantContext`](hydrowatch_core::AssistantContext).
//!
//! ## Failure Handling
//!
//! [`try_fetch_by_time_range`] reports errors. [`fetch_by_time_range`]
//! logs them and returns an empty series instead, which is what the chart
//! screen wants: a failed load looks like a range without data.
//!
//! ## Usage Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use hydrowatch_core::RangeSelector;
//! use hydrowatch_records::{fetch_by_time_range, MemorySource, RecordsConfig};
//!
//! let source = MemorySource::new().with_json(
//!     "sensor_data",
//!     r#"{ "-N1": { "ph": 6.1, "date": "2025-03-10", "time": "09:00" },
//!          "-N2": { "ph": 6.3, "date": "2025-03-10", "time": "11:00" } }"#,
//! )?;
//! let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
//!
//! let week = fetch_by_time_range(&source, RangeSelector::LastWeek, &now, &RecordsConfig::default());
//! assert_eq!(week.len(), 1);
//! assert_eq!(week[0].ph, Some(6.2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod fetch;
pub mod snapshot;
pub mod source;

pub use config::RecordsConfig;
pub use fetch::{
    fetch_by_time_range, fetch_latest, load_latest_temperature, load_plants, load_samples,
    try_fetch_by_time_range,
};
pub use snapshot::{RawReading, Snapshot};
pub use source::{ExportDirSource, MemorySource, SnapshotSource};

use thiserror::Error;

/// Errors while loading or decoding records
#[derive(Debug, Error)]
pub enum RecordError {
    /// Snapshot text is not valid JSON, or a row has the wrong types
    #[error("Malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot is valid JSON but not an object of rows
    #[error("Expected an object of rows, found {0}")]
    UnexpectedShape(&'static str),

    /// The source could not hand over the collection
    #[error("Could not read collection '{collection}': {reason}")]
    Source {
        /// Collection that was requested
        collection: String,
        /// What went wrong
        reason: String,
    },
}

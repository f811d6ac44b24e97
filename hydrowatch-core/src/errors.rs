//! Error Types for Sample Parsing and Grow-Cycle Setup
//!
//! ## Where Errors Can Happen
//!
//! Aggregation itself never fails. A range with no matching samples simply
//! produces fewer points, and averaging only ever runs over non-empty
//! groups. Errors are confined to the edges where text coming from the
//! database or the key-value store is turned into typed values:
//!
//! - `InvalidDate` / `InvalidTime`: a sample's `date` or `time` string does
//!   not parse. Samples carrying such strings still flow through the
//!   aggregator, they just have no timestamp.
//! - `NonexistentLocalTime`: the wall-clock time falls into a DST gap of
//!   the aggregator's time zone.
//! - `InvalidStoredDate`: a persisted grow-cycle boundary is not RFC 3339.
//!
//! ```rust
//! use hydrowatch_core::{errors::DataError, time::derive_timestamp};
//! use chrono::Utc;
//!
//! match derive_timestamp("2025-01-14", "25:00", &Utc) {
//!     Ok(ms) => println!("sample at {ms}"),
//!     Err(DataError::InvalidTime { value }) => println!("bad time {value}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for parsing operations
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised while turning stored text into typed values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Calendar date is not `YYYY-MM-DD`
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The offending date string
        value: String,
    },

    /// Time of day is not `HH:MM` or `HH:MM:SS`
    #[error("Invalid time '{value}', expected HH:MM[:SS]")]
    InvalidTime {
        /// The offending time string
        value: String,
    },

    /// Wall-clock time does not exist in the configured time zone
    #[error("Local time {date}T{time} does not exist in this time zone")]
    NonexistentLocalTime {
        /// Date part of the reading
        date: String,
        /// Time part of the reading
        time: String,
    },

    /// Persisted grow-cycle date could not be parsed
    #[error("Stored date '{value}' is not an RFC 3339 timestamp")]
    InvalidStoredDate {
        /// The offending stored value
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_value() {
        let err = DataError::InvalidTime { value: "7h".into() };
        assert_eq!(err.to_string(), "Invalid time '7h', expected HH:MM[:SS]");
    }
}

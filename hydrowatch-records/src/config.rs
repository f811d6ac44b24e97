//! Fetch configuration
//!
//! ```json
//! {
//!   "collection": "sensor_data",
//!   "plants_collection": "plants_data",
//!   "fetch_limit": 30000,
//!   "aggregation": { "last_months": 12 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use hydrowatch_core::AggregationConfig;

use crate::RecordError;

/// Collection read by default
pub const DEFAULT_COLLECTION: &str = "sensor_data";

/// Collection holding the monitored plants
pub const DEFAULT_PLANTS_COLLECTION: &str = "plants_data";

/// Newest rows pulled per fetch
pub const DEFAULT_FETCH_LIMIT: usize = 30_000;

/// Where to read rows from and how many
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    /// Collection path in the realtime database
    pub collection: String,
    /// Collection path of the monitored plants
    pub plants_collection: String,
    /// Rows kept from the end of the key order
    pub fetch_limit: usize,
    /// Window sizes handed to the aggregator
    pub aggregation: AggregationConfig,
}

impl RecordsConfig {
    /// Load from JSON, keeping defaults for missing keys
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            plants_collection: DEFAULT_PLANTS_COLLECTION.to_string(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            aggregation: AggregationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RecordsConfig::from_json(r#"{ "aggregation": { "last_months": 12 } }"#).unwrap();

        assert_eq!(config.collection, "sensor_data");
        assert_eq!(config.plants_collection, "plants_data");
        assert_eq!(config.fetch_limit, 30_000);
        assert_eq!(config.aggregation.last_months, 12);
        assert_eq!(config.aggregation.last_hour_samples, 6);
    }
}

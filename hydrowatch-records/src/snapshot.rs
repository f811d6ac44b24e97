//! Realtime-database snapshot decoding
//!
//! The `sensor_data` collection is exported as one JSON object whose keys
//! are row ids and whose values are the readings:
//!
//! ```json
//! {
//!   "-NxA1": { "ph": 6.1, "tds": 812, "temperature_ds18b20": 19.5,
//!              "temperature_dht": 23.1, "humidity": 61, "ldr_value": 440,
//!              "date": "2025-03-10", "time": "12:05:00" }
//! }
//! ```
//!
//! A missing collection comes back as `null`. Numeric fields that arrive
//! as strings are parsed; anything else non-numeric counts as absent.
//!
//! Rows follow the database's key order: keys that are canonical 32-bit
//! integers come first in numeric order, then all other keys by bytes.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::TimeZone;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use hydrowatch_core::SensorSample;

use crate::RecordError;

/// One row as stored in the database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReading {
    /// Nutrient solution pH
    #[serde(default, deserialize_with = "lenient_number")]
    pub ph: Option<f64>,
    /// Total dissolved solids (ppm)
    #[serde(default, deserialize_with = "lenient_number")]
    pub tds: Option<f64>,
    /// Water temperature from the submerged probe (°C)
    #[serde(default, deserialize_with = "lenient_number")]
    pub temperature_ds18b20: Option<f64>,
    /// Air temperature (°C)
    #[serde(default, deserialize_with = "lenient_number")]
    pub temperature_dht: Option<f64>,
    /// Relative humidity (%)
    #[serde(default, deserialize_with = "lenient_number")]
    pub humidity: Option<f64>,
    /// Raw light-dependent resistor reading
    #[serde(default, deserialize_with = "lenient_number")]
    pub ldr_value: Option<f64>,
    /// Local date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    /// Local time, `HH:MM[:SS]`
    #[serde(default)]
    pub time: String,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

impl RawReading {
    /// Build the sample for row `id`, deriving its timestamp in `tz`
    pub fn to_sample<Tz: TimeZone>(&self, id: &str, tz: &Tz) -> SensorSample {
        let mut sample = SensorSample {
            id: id.to_string(),
            ph: self.ph,
            tds: self.tds,
            temperature_ds18b20: self.temperature_ds18b20,
            temperature_dht: self.temperature_dht,
            humidity: self.humidity,
            ldr_value: self.ldr_value,
            date: self.date.clone(),
            time: self.time.clone(),
            timestamp: None,
            formatted_date: None,
        };

        if let Err(e) = sample.stamp(tz) {
            log::warn!("Row {id} has no usable timestamp: {e}");
        }
        sample
    }
}

/// Row id ordered the way the database orders keys
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
struct RowKey(String);

impl RowKey {
    fn as_integer(&self) -> Option<i32> {
        self.0
            .parse::<i32>()
            .ok()
            .filter(|n| n.to_string() == self.0)
    }
}

impl Ord for RowKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_integer(), other.as_integer()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for RowKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rows of the collection ordered by key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    rows: BTreeMap<RowKey, RawReading>,
}

impl Snapshot {
    /// Decode an exported collection
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decode an already-parsed collection
    ///
    /// `null` means the collection does not exist and yields no rows.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        if !value.is_object() {
            return Err(RecordError::UnexpectedShape(kind_of(&value)));
        }

        Ok(Self {
            rows: serde_json::from_value(value)?,
        })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the collection had no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Add or replace row `id`
    pub fn insert(&mut self, id: impl Into<String>, reading: RawReading) {
        self.rows.insert(RowKey(id.into()), reading);
    }

    /// Keep only the `limit` rows with the greatest keys
    pub fn limit_to_last(mut self, limit: usize) -> Self {
        let excess = self.rows.len().saturating_sub(limit);
        if excess > 0 {
            let cutoff = self.rows.keys().nth(excess).cloned();
            if let Some(cutoff) = cutoff {
                self.rows = self.rows.split_off(&cutoff);
            } else {
                self.rows.clear();
            }
        }
        self
    }

    /// Samples with derived timestamps, in key order
    pub fn samples_in_key_order<Tz: TimeZone>(&self, tz: &Tz) -> Vec<SensorSample> {
        self.rows
            .iter()
            .map(|(id, reading)| reading.to_sample(&id.0, tz))
            .collect()
    }

    /// Samples with derived timestamps, ascending by timestamp
    pub fn into_samples<Tz: TimeZone>(self, tz: &Tz) -> Vec<SensorSample> {
        let mut samples = self.samples_in_key_order(tz);
        samples.sort_by_key(|sample| sample.timestamp);
        samples
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const EXPORT: &str = r#"{
        "-N3": { "ph": 6.3, "tds": "805", "date": "2025-03-10", "time": "12:00:00" },
        "-N1": { "ph": 6.1, "humidity": 60.5, "date": "2025-03-10", "time": "10:00" },
        "-N2": { "ph": null, "ldr_value": "dark", "date": "2025-03-09", "time": "23:30", "extra": true }
    }"#;

    #[test]
    fn decodes_rows_and_sorts_by_time() {
        let samples = Snapshot::from_json(EXPORT).unwrap().into_samples(&Utc);
        let ids: Vec<_> = samples.iter().map(|s| s.id.as_str()).collect();

        assert_eq!(ids, ["-N2", "-N1", "-N3"]);
        assert_eq!(samples[2].tds, Some(805.0));
        assert_eq!(samples[0].ph, None);
        assert_eq!(samples[0].ldr_value, None);
        assert!(samples.iter().all(|s| s.timestamp.is_some()));
    }

    #[test]
    fn null_collection_is_empty() {
        assert!(Snapshot::from_json("null").unwrap().is_empty());
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let err = Snapshot::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, RecordError::UnexpectedShape("array")));
        assert!(matches!(Snapshot::from_json("{"), Err(RecordError::Json(_))));
    }

    #[test]
    fn limit_keeps_greatest_keys() {
        let snapshot = Snapshot::from_json(EXPORT).unwrap();
        let kept = snapshot.clone().limit_to_last(2);
        let ids: Vec<_> = kept.into_samples(&Utc).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["-N2", "-N3"]);

        assert_eq!(snapshot.clone().limit_to_last(10).len(), 3);
        assert!(snapshot.limit_to_last(0).is_empty());
    }

    #[test]
    fn bad_time_keeps_row_without_timestamp() {
        let mut snapshot = Snapshot::default();
        snapshot.insert("-X", RawReading { date: "2025-03-10".into(), time: "late".into(), ..RawReading::default() });

        let samples = snapshot.into_samples(&Utc);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].timestamp, None);
    }

    #[test]
    fn integer_keys_order_first_and_numerically() {
        let mut snapshot = Snapshot::default();
        for key in ["-Nabc", "10", "9", "0042", "100", "-N0"] {
            snapshot.insert(key, RawReading::default());
        }

        let ids: Vec<_> = snapshot
            .samples_in_key_order(&Utc)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, ["9", "10", "100", "-N0", "-Nabc", "0042"]);

        let kept: Vec<_> = snapshot
            .limit_to_last(3)
            .samples_in_key_order(&Utc)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(kept, ["-N0", "-Nabc", "0042"]);
    }

    #[test]
    fn integer_keyed_export_keeps_highest_numbers() {
        let rows: serde_json::Map<String, Value> = (1..=12)
            .map(|i| (i.to_string(), serde_json::json!({ "date": "2025-03-10", "time": format!("{i:02}:00") })))
            .collect();

        let kept = Snapshot::from_value(Value::Object(rows)).unwrap().limit_to_last(3);
        let ids: Vec<_> = kept.into_samples(&Utc).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["10", "11", "12"]);
    }
}

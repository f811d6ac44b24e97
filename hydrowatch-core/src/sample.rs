//! Sensor sample data model
//!
//! A [`SensorSample`] is one row of the `sensor_data` collection: six
//! optional measurements plus the local date and time they were taken at.
//! The aggregator also produces samples, either raw rows with a display
//! label attached or synthetic per-bucket averages.

use core::fmt;
use core::str::FromStr;

use chrono::TimeZone;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::DataResult;
use crate::time::{derive_timestamp, Timestamp};

/// Measurement channels reported by the growing rig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SensorField {
    /// Nutrient solution acidity
    Ph,
    /// Total dissolved solids (ppm)
    Tds,
    /// Water temperature from the DS18B20 probe (°C)
    WaterTemperature,
    /// Air temperature from the DHT sensor (°C)
    RoomTemperature,
    /// Relative humidity from the DHT sensor (%)
    Humidity,
    /// Light-dependent resistor reading (Ω)
    Light,
}

impl SensorField {
    /// Every field, in chart order
    pub const ALL: [SensorField; 6] = [
        SensorField::Ph,
        SensorField::Tds,
        SensorField::WaterTemperature,
        SensorField::RoomTemperature,
        SensorField::Humidity,
        SensorField::Light,
    ];

    /// Record key used in the database rows
    pub const fn key(self) -> &'static str {
        match self {
            SensorField::Ph => "ph",
            SensorField::Tds => "tds",
            SensorField::WaterTemperature => "temperature_ds18b20",
            SensorField::RoomTemperature => "temperature_dht",
            SensorField::Humidity => "humidity",
            SensorField::Light => "ldr_value",
        }
    }

    /// Chart legend
    pub const fn legend(self) -> &'static str {
        match self {
            SensorField::Ph => "pH Level",
            SensorField::Tds => "TDS Changes",
            SensorField::WaterTemperature => "Watertemperature Changes",
            SensorField::RoomTemperature => "Roomtemperature Changes",
            SensorField::Humidity => "Humidity Changes",
            SensorField::Light => "LDR Changes",
        }
    }

    /// Unit of measurement shown next to values
    pub const fn unit(self) -> &'static str {
        match self {
            SensorField::Ph => "pH",
            SensorField::Tds => "ppm",
            SensorField::WaterTemperature | SensorField::RoomTemperature => "°C",
            SensorField::Humidity => "%",
            SensorField::Light => "Ω",
        }
    }

    /// Suffix appended to y-axis labels (empty for unitless axes)
    pub const fn axis_suffix(self) -> &'static str {
        match self {
            SensorField::WaterTemperature | SensorField::RoomTemperature => "°C",
            SensorField::Humidity => "%",
            _ => "",
        }
    }

    /// Decimal places kept when averaging this field
    pub const fn decimals(self) -> u32 {
        match self {
            SensorField::Ph => 2,
            SensorField::Tds | SensorField::Light => 0,
            SensorField::WaterTemperature
            | SensorField::RoomTemperature
            | SensorField::Humidity => 1,
        }
    }
}

impl fmt::Display for SensorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Record key did not name a known field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sensor field '{}'", self.0)
    }
}

impl FromStr for SensorField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SensorField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// One sensor reading, raw or aggregated
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorSample {
    /// Source row key, or `avg-<bucket>` for aggregates
    pub id: String,
    /// Nutrient solution pH
    pub ph: Option<f64>,
    /// Total dissolved solids (ppm)
    pub tds: Option<f64>,
    /// Water temperature (°C)
    pub temperature_ds18b20: Option<f64>,
    /// Air temperature (°C)
    pub temperature_dht: Option<f64>,
    /// Relative humidity (%)
    pub humidity: Option<f64>,
    /// Light-dependent resistor reading
    pub ldr_value: Option<f64>,
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Local time of day, `HH:MM[:SS]`
    pub time: String,
    /// Epoch milliseconds derived from `date` and `time`; `None` when they don't parse
    pub timestamp: Option<Timestamp>,
    /// Display label assigned during aggregation
    #[cfg_attr(
        feature = "serde",
        serde(rename = "formattedDate", default, skip_serializing_if = "Option::is_none")
    )]
    pub formatted_date: Option<String>,
}

impl SensorSample {
    /// Create a sample with no readings and no timestamp yet
    pub fn new(id: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time: time.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter for one measurement
    pub fn with(mut self, field: SensorField, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    /// Builder-style setter for the display label
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.formatted_date = Some(label.into());
        self
    }

    /// Value of one measurement
    pub fn get(&self, field: SensorField) -> Option<f64> {
        match field {
            SensorField::Ph => self.ph,
            SensorField::Tds => self.tds,
            SensorField::WaterTemperature => self.temperature_ds18b20,
            SensorField::RoomTemperature => self.temperature_dht,
            SensorField::Humidity => self.humidity,
            SensorField::Light => self.ldr_value,
        }
    }

    /// Overwrite one measurement
    pub fn set(&mut self, field: SensorField, value: Option<f64>) {
        let slot = match field {
            SensorField::Ph => &mut self.ph,
            SensorField::Tds => &mut self.tds,
            SensorField::WaterTemperature => &mut self.temperature_ds18b20,
            SensorField::RoomTemperature => &mut self.temperature_dht,
            SensorField::Humidity => &mut self.humidity,
            SensorField::Light => &mut self.ldr_value,
        };
        *slot = value;
    }

    /// Derive and store the timestamp from `date` and `time` in `tz`
    ///
    /// On failure the timestamp is cleared and the error returned so the
    /// caller can decide whether to log it.
    pub fn stamp<Tz: TimeZone>(&mut self, tz: &Tz) -> DataResult<Timestamp> {
        let derived = derive_timestamp(&self.date, &self.time, tz);
        self.timestamp = derived.as_ref().ok().copied();
        derived
    }

    /// Builder-style [`SensorSample::stamp`] that ignores parse failures
    pub fn stamped<Tz: TimeZone>(mut self, tz: &Tz) -> Self {
        let _ = self.stamp(tz);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn field_keys_round_trip() {
        for field in SensorField::ALL {
            assert_eq!(field.key().parse::<SensorField>(), Ok(field));
        }
        assert!("co2".parse::<SensorField>().is_err());
    }

    #[test]
    fn accessors_hit_the_right_slot() {
        let sample = SensorSample::new("r1", "2025-01-14", "10:00")
            .with(SensorField::WaterTemperature, 19.5)
            .with(SensorField::Light, 812.0);

        assert_eq!(sample.temperature_ds18b20, Some(19.5));
        assert_eq!(sample.get(SensorField::Light), Some(812.0));
        assert_eq!(sample.get(SensorField::RoomTemperature), None);
    }

    #[test]
    fn stamp_clears_on_bad_input() {
        let mut sample = SensorSample::new("r1", "2025-01-14", "10:00").stamped(&Utc);
        assert!(sample.timestamp.is_some());

        sample.time = "later".into();
        assert!(sample.stamp(&Utc).is_err());
        assert_eq!(sample.timestamp, None);
    }
}

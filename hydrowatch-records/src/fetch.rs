//! Range fetch pipeline
//!
//! load collection -> keep newest rows -> build samples -> aggregate
//!
//! The chart screen never sees an error: any failure is logged and shows up
//! as an empty series, the same as a range with no data.
//!
//! The assistant's live data (latest water temperature, monitored plants)
//! is loaded here too.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone};

use hydrowatch_core::assistant::latest_temperature;
use hydrowatch_core::{
    Clock, PlantRecord, RangeSelector, SensorSample, TemperatureReading, TimeRangeAggregator,
};

use crate::config::RecordsConfig;
use crate::snapshot::{kind_of, Snapshot};
use crate::source::SnapshotSource;
use crate::RecordError;

/// Load all rows of the configured collection, sorted by timestamp
pub fn load_samples<S, Tz>(
    source: &S,
    config: &RecordsConfig,
    tz: &Tz,
) -> Result<Vec<SensorSample>, RecordError>
where
    S: SnapshotSource + ?Sized,
    Tz: TimeZone,
{
    let value = source.load(&config.collection)?;
    let snapshot = Snapshot::from_value(value)?.limit_to_last(config.fetch_limit);
    log::debug!("Loaded {} rows from {}", snapshot.len(), config.collection);
    Ok(snapshot.into_samples(tz))
}

/// Chart points for `range`, or the error that prevented loading them
pub fn try_fetch_by_time_range<S, Tz>(
    source: &S,
    range: RangeSelector,
    now: &DateTime<Tz>,
    config: &RecordsConfig,
) -> Result<Vec<SensorSample>, RecordError>
where
    S: SnapshotSource + ?Sized,
    Tz: TimeZone,
{
    let samples = load_samples(source, config, &now.timezone())?;
    let aggregator = TimeRangeAggregator::new(config.aggregation);
    Ok(aggregator.aggregate(&samples, range, now))
}

/// Chart points for `range`; empty when anything goes wrong
pub fn fetch_by_time_range<S, Tz>(
    source: &S,
    range: RangeSelector,
    now: &DateTime<Tz>,
    config: &RecordsConfig,
) -> Vec<SensorSample>
where
    S: SnapshotSource + ?Sized,
    Tz: TimeZone,
{
    try_fetch_by_time_range(source, range, now, config).unwrap_or_else(|e| {
        log::error!("Error fetching {range} data: {e}");
        Vec::new()
    })
}

/// [`fetch_by_time_range`] relative to the clock's current instant
pub fn fetch_latest<S, C>(
    source: &S,
    range: RangeSelector,
    clock: &C,
    config: &RecordsConfig,
) -> Vec<SensorSample>
where
    S: SnapshotSource + ?Sized,
    C: Clock,
{
    fetch_by_time_range(source, range, &clock.now(), config)
}

/// Newest water temperature in the sensor collection, in key order
///
/// The fetch limit does not apply: the whole collection is scanned.
pub fn load_latest_temperature<S, Tz>(
    source: &S,
    config: &RecordsConfig,
    tz: &Tz,
) -> Result<Option<TemperatureReading>, RecordError>
where
    S: SnapshotSource + ?Sized,
    Tz: TimeZone,
{
    let snapshot = Snapshot::from_value(source.load(&config.collection)?)?;
    Ok(latest_temperature(&snapshot.samples_in_key_order(tz)))
}

/// Monitored plants by name; empty when the collection does not exist
pub fn load_plants<S>(source: &S, config: &RecordsConfig) -> Result<BTreeMap<String, PlantRecord>, RecordError>
where
    S: SnapshotSource + ?Sized,
{
    let value = source.load(&config.plants_collection)?;
    if value.is_null() {
        return Ok(BTreeMap::new());
    }
    if !value.is_object() {
        return Err(RecordError::UnexpectedShape(kind_of(&value)));
    }

    let plants: BTreeMap<String, PlantRecord> = serde_json::from_value(value)?;
    log::debug!("Loaded {} plants from {}", plants.len(), config.plants_collection);
    Ok(plants)
}

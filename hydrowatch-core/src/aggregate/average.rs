//! Per-bucket averaging
//!
//! Every field is averaged over the full group size. An absent value counts
//! as zero in the sum, so a bucket where some rows lack a field reports a
//! lower mean for it. Consumers have always seen these numbers, so the
//! divisor is not adjusted for missing values.

use crate::constants::{AGGREGATE_ID_PREFIX, AGGREGATE_TIME};
use crate::sample::{SensorField, SensorSample};
use crate::time::Timestamp;

/// Round to a fixed number of decimal places
///
/// Halves round away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Rounded mean of one field over a group
///
/// Returns `None` only for an empty group.
pub fn field_mean(group: &[&SensorSample], field: SensorField) -> Option<f64> {
    if group.is_empty() {
        return None;
    }

    let sum: f64 = group.iter().map(|s| s.get(field).unwrap_or(0.0)).sum();
    Some(round_to(sum / group.len() as f64, field.decimals()))
}

/// Identity and label of a bucket being built
pub(crate) struct BucketKey<'a> {
    /// Suffix of the `avg-` id
    pub key: &'a str,
    /// Representative date, `YYYY-MM-DD`
    pub date: String,
    /// Local midnight of the bucket's first day
    pub timestamp: Option<Timestamp>,
    /// Display label
    pub label: String,
}

/// Build the synthetic sample representing `group`
///
/// `group` must be non-empty; callers only build buckets that matched.
pub(crate) fn bucket(group: &[&SensorSample], key: BucketKey<'_>) -> SensorSample {
    let mut averaged = SensorSample {
        id: format!("{AGGREGATE_ID_PREFIX}{}", key.key),
        date: key.date,
        time: AGGREGATE_TIME.to_string(),
        timestamp: key.timestamp,
        formatted_date: Some(key.label),
        ..SensorSample::default()
    };

    for field in SensorField::ALL {
        averaged.set(field, Some(field_mean(group, field).unwrap_or(0.0)));
    }

    averaged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(ph: f64) -> SensorSample {
        SensorSample::new("r", "2025-01-14", "10:00").with(SensorField::Ph, ph)
    }

    #[test]
    fn rounding_per_precision() {
        assert_eq!(round_to(6.2049, 2), 6.2);
        assert_eq!(round_to(6.205001, 2), 6.21);
        assert_eq!(round_to(412.5, 0), 413.0);
        assert_eq!(round_to(21.349, 1), 21.3);
    }

    #[test]
    fn ph_average_keeps_two_decimals() {
        let rows = [reading(6.0), reading(6.4), reading(6.2)];
        let group: Vec<&SensorSample> = rows.iter().collect();
        assert_eq!(field_mean(&group, SensorField::Ph), Some(6.2));
    }

    #[test]
    fn missing_values_count_as_zero() {
        let full = reading(6.0).with(SensorField::Tds, 800.0);
        let partial = reading(6.0);
        let group = vec![&full, &partial];

        assert_eq!(field_mean(&group, SensorField::Tds), Some(400.0));
        assert_eq!(field_mean(&group, SensorField::Humidity), Some(0.0));
    }

    #[test]
    fn empty_group_has_no_mean() {
        assert_eq!(field_mean(&[], SensorField::Ph), None);
    }

    #[test]
    fn bucket_carries_key_and_label() {
        let rows = [reading(5.9).with(SensorField::Humidity, 61.24), reading(6.1)];
        let group: Vec<&SensorSample> = rows.iter().collect();

        let averaged = bucket(
            &group,
            BucketKey {
                key: "2025-01-14",
                date: "2025-01-14".into(),
                timestamp: Some(0),
                label: "01-14".into(),
            },
        );

        assert_eq!(averaged.id, "avg-2025-01-14");
        assert_eq!(averaged.time, "00:00");
        assert_eq!(averaged.formatted_date.as_deref(), Some("01-14"));
        assert_eq!(averaged.ph, Some(6.0));
        assert_eq!(averaged.humidity, Some(30.6));
        assert_eq!(averaged.ldr_value, Some(0.0));
    }
}

//! Per-range reduction strategies
//!
//! Each function receives samples already sorted by timestamp and returns
//! points in ascending chronological order. Targets are walked newest-first
//! and the result is reversed at the end.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, TimeZone, Timelike};

use super::average::{bucket, BucketKey};
use crate::config::AggregationConfig;
use crate::constants::{DAY_LABEL_FORMAT, MONTH_LABEL_FORMAT};
use crate::sample::SensorSample;
use crate::time::{hour_of, local_datetime, start_of_day};

/// Newest `count` samples labeled `"1"..="count"`
pub fn last_samples(sorted: &[SensorSample], count: usize) -> Vec<SensorSample> {
    let start = sorted.len().saturating_sub(count);
    sorted[start..]
        .iter()
        .enumerate()
        .map(|(index, sample)| sample.clone().labeled((index + 1).to_string()))
        .collect()
}

/// One raw sample per hour slot, spaced `interval` hours back from `now`
///
/// A slot picks the first sample (in sort order) recorded on the slot's
/// date during the slot's hour. Slots with no such sample are skipped, and
/// probing stops at the first slot before the representable calendar.
pub fn hourly_picks<Tz: TimeZone>(
    sorted: &[SensorSample],
    now: &DateTime<Tz>,
    config: &AggregationConfig,
) -> Vec<SensorSample> {
    let mut picks = Vec::new();

    for step in 0..config.last_day_targets() {
        let back = i64::from(step) * i64::from(config.last_day_interval_hours);
        let Some(target) = Duration::try_hours(back).and_then(|by| now.clone().checked_sub_signed(by)) else {
            break;
        };
        let target_date = target.date_naive().format("%Y-%m-%d").to_string();
        let target_hour = target.hour();

        let matched = sorted
            .iter()
            .find(|s| s.date == target_date && hour_of(&s.time) == Some(target_hour));

        if let Some(sample) = matched {
            picks.push(sample.clone().labeled(format!("{target_hour:02}:00")));
        }
    }

    picks.reverse();
    picks
}

/// One averaged bucket per calendar day, going back `last_week_days` days
pub fn daily_averages<Tz: TimeZone>(
    sorted: &[SensorSample],
    now: &DateTime<Tz>,
    config: &AggregationConfig,
) -> Vec<SensorSample> {
    let tz = now.timezone();
    let today = now.date_naive();
    let mut buckets = Vec::new();

    for step in 0..config.last_week_days {
        let back = u64::from(step) * u64::from(config.last_week_day_step);
        let Some(day) = today.checked_sub_days(Days::new(back)) else {
            break;
        };
        let day_key = day.format("%Y-%m-%d").to_string();

        let group: Vec<&SensorSample> = sorted.iter().filter(|s| s.date == day_key).collect();
        if group.is_empty() {
            continue;
        }

        buckets.push(bucket(
            &group,
            BucketKey {
                key: &day_key,
                date: day_key.clone(),
                timestamp: start_of_day(day, &tz),
                label: day.format(DAY_LABEL_FORMAT).to_string(),
            },
        ));
    }

    buckets.reverse();
    buckets
}

/// One averaged bucket per calendar month, going back `last_months` months
///
/// Membership is decided from each sample's timestamp viewed in the zone of
/// `now`. Samples without a timestamp never land in a month.
pub fn monthly_averages<Tz: TimeZone>(
    sorted: &[SensorSample],
    now: &DateTime<Tz>,
    config: &AggregationConfig,
) -> Vec<SensorSample> {
    let tz = now.timezone();
    let today = now.date_naive();
    let mut used = BTreeSet::new();
    let mut buckets = Vec::new();

    for step in 0..config.last_months {
        let Some(target) = today.checked_sub_months(Months::new(step)) else {
            break;
        };
        let month = (target.year(), target.month());
        if used.contains(&month) {
            continue;
        }

        let group: Vec<&SensorSample> = sorted
            .iter()
            .filter(|s| {
                s.timestamp
                    .and_then(|ts| local_datetime(ts, &tz))
                    .is_some_and(|local| (local.year(), local.month()) == month)
            })
            .collect();
        if group.is_empty() {
            continue;
        }

        let Some(first_day) = NaiveDate::from_ymd_opt(month.0, month.1, 1) else {
            continue;
        };
        let month_key = first_day.format("%Y-%m").to_string();

        buckets.push(bucket(
            &group,
            BucketKey {
                key: &month_key,
                date: first_day.format("%Y-%m-%d").to_string(),
                timestamp: start_of_day(first_day, &tz),
                label: first_day.format(MONTH_LABEL_FORMAT).to_string(),
            },
        ));
        used.insert(month);
    }

    buckets.reverse();
    buckets
}

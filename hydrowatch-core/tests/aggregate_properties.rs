//! Property tests for the aggregator's output shape

mod common;

use chrono::{Duration, Utc};
use proptest::prelude::*;

use hydrowatch_core::{aggregate, RangeSelector, SensorField, SensorSample};

use common::fixed_now;

fn range_strategy() -> impl Strategy<Value = RangeSelector> {
    prop_oneof![
        Just(RangeSelector::LastHour),
        Just(RangeSelector::LastDay),
        Just(RangeSelector::LastWeek),
        Just(RangeSelector::LastMonths),
    ]
}

/// Rows scattered over the 200 days before the fixed "now", in random order
fn history_strategy() -> impl Strategy<Value = Vec<SensorSample>> {
    prop::collection::vec((0i64..200 * 24 * 60, 4.0f64..8.0, prop::option::of(0.0f64..100.0)), 0..120)
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (minutes_back, ph, humidity))| {
                    let at = fixed_now() - Duration::minutes(minutes_back);
                    let mut sample = SensorSample::new(
                        format!("row{i}"),
                        at.format("%Y-%m-%d").to_string(),
                        at.format("%H:%M").to_string(),
                    )
                    .with(SensorField::Ph, ph);
                    sample.humidity = humidity;
                    sample.stamped(&Utc)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn output_is_bounded_and_ascending(rows in history_strategy(), range in range_strategy()) {
        let out = aggregate(&rows, range, &fixed_now());

        let bound = match range {
            RangeSelector::LastHour => 6,
            RangeSelector::LastDay => 8,
            RangeSelector::LastWeek | RangeSelector::LastMonths => 6,
        };
        prop_assert!(out.len() <= bound);
        prop_assert!(out.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        prop_assert!(out.iter().all(|s| s.formatted_date.is_some()));
        if rows.is_empty() {
            prop_assert!(out.is_empty());
        }
    }

    #[test]
    fn last_hour_size_matches_input(rows in history_strategy()) {
        let out = aggregate(&rows, RangeSelector::LastHour, &fixed_now());
        prop_assert_eq!(out.len(), rows.len().min(6));

        for (i, sample) in out.iter().enumerate() {
            let expected = (i + 1).to_string();
            prop_assert_eq!(sample.formatted_date.as_deref(), Some(expected.as_str()));
        }
    }

    #[test]
    fn aggregation_is_repeatable(rows in history_strategy(), range in range_strategy()) {
        let now = fixed_now();
        let before = rows.clone();

        let first = aggregate(&rows, range, &now);
        let second = aggregate(&rows, range, &now);

        prop_assert_eq!(first, second);
        prop_assert_eq!(rows, before);
    }

    #[test]
    fn buckets_are_averages_within_input_range(rows in history_strategy()) {
        let week = aggregate(&rows, RangeSelector::LastWeek, &fixed_now());

        for bucket in &week {
            let same_day: Vec<_> = rows.iter().filter(|s| s.date == bucket.date).collect();
            prop_assert!(!same_day.is_empty());

            let ph = bucket.ph.unwrap();
            prop_assert!((3.995..=8.005).contains(&ph));
            let humidity = bucket.humidity.unwrap();
            prop_assert!((0.0..=100.05).contains(&humidity));
        }
    }
}

//! Shared fixtures for the integration tests
//!
//! - A deterministic history generator producing rows on a fixed cadence
//! - A fixed "now" so calendar windows are stable
//! - Small helpers to build single rows

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use hydrowatch_core::{SensorField, SensorSample};

/// Instant all integration tests treat as "now": 2025-03-10 12:30 UTC
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 30, 0).unwrap()
}

/// Single stamped row with every field set
pub fn row(id: &str, date: &str, time: &str, ph: f64) -> SensorSample {
    SensorSample::new(id, date, time)
        .with(SensorField::Ph, ph)
        .with(SensorField::Tds, 800.0)
        .with(SensorField::WaterTemperature, 20.0)
        .with(SensorField::RoomTemperature, 23.0)
        .with(SensorField::Humidity, 60.0)
        .with(SensorField::Light, 500.0)
        .stamped(&Utc)
}

/// Generator for plausible sensor history
pub struct HistoryGenerator {
    seed: u32,
}

impl HistoryGenerator {
    pub fn new() -> Self {
        Self { seed: 42 }
    }

    /// Rows every `every` minutes from `start` up to and including `end`
    pub fn rows_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        every: Duration,
    ) -> Vec<SensorSample> {
        let mut rows = Vec::new();
        let mut at = start;
        let mut n = 0;

        while at <= end {
            let sample = SensorSample::new(
                format!("-N{n:06}"),
                at.format("%Y-%m-%d").to_string(),
                at.format("%H:%M:%S").to_string(),
            )
            .with(SensorField::Ph, 5.8 + self.jitter(0.6))
            .with(SensorField::Tds, 700.0 + self.jitter(200.0))
            .with(SensorField::WaterTemperature, 19.0 + self.jitter(3.0))
            .with(SensorField::RoomTemperature, 22.0 + self.jitter(5.0))
            .with(SensorField::Humidity, 55.0 + self.jitter(20.0))
            .with(SensorField::Light, 300.0 + self.jitter(600.0))
            .stamped(&Utc);

            rows.push(sample);
            at += every;
            n += 1;
        }

        rows
    }

    /// Uniform value in `[0, span)`
    fn jitter(&mut self, span: f64) -> f64 {
        // Simple LCG keeps runs reproducible
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let unit = f64::from((self.seed >> 16) & 0x7fff) / 32_768.0;
        unit * span
    }
}

//! Plant growth analysis
//!
//! Compares a plant's average daily growth since planting with the rate
//! expected for it:
//!
//! | Daily growth               | Status          |
//! |----------------------------|-----------------|
//! | `< expected × 0.7`         | below expected  |
//! | `> expected × 1.3`         | above average   |
//! | otherwise                  | on track        |
//!
//! Only slow growth gets a recommendation. Feeding is blamed first, then a
//! water temperature outside the plant's range, then pH and lighting.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{FAST_GROWTH_RATIO, LOW_NUTRIENT_LEVEL, MS_PER_DAY, SLOW_GROWTH_RATIO};
use crate::time::Timestamp;

/// Growth record of one monitored plant
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlantRecord {
    /// Height at planting (cm)
    pub initial_height: f64,
    /// Latest measured height (cm)
    pub current_height: f64,
    /// Planting instant, epoch milliseconds
    pub start_date: Timestamp,
    /// Expected growth per day (cm)
    pub expected_daily_growth: f64,
    /// Nutrient solution level (%)
    pub nutrient_level: f64,
    /// Lowest comfortable water temperature (°C)
    pub min_temp: f64,
    /// Highest comfortable water temperature (°C)
    pub max_temp: f64,
}

/// How growth compares with the expected rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthStatus {
    /// Slower than expected
    BelowExpected,
    /// Within the expected band
    OnTrack,
    /// Faster than expected
    AboveExpected,
}

impl GrowthStatus {
    /// Classify `daily` growth against the `expected` rate
    pub fn classify(daily: f64, expected: f64) -> Self {
        if daily < expected * SLOW_GROWTH_RATIO {
            GrowthStatus::BelowExpected
        } else if daily > expected * FAST_GROWTH_RATIO {
            GrowthStatus::AboveExpected
        } else {
            GrowthStatus::OnTrack
        }
    }

    /// Label used in replies
    pub const fn label(self) -> &'static str {
        match self {
            GrowthStatus::BelowExpected => "poniżej oczekiwań",
            GrowthStatus::OnTrack => "dobry",
            GrowthStatus::AboveExpected => "ponadprzeciętny",
        }
    }
}

/// Suggested action for a slow plant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recommendation {
    /// Nutrient level is low
    RaiseNutrients,
    /// Water temperature is outside the plant's range
    AdjustTemperature {
        /// Lower bound of the range (°C)
        min: f64,
        /// Upper bound of the range (°C)
        max: f64,
    },
    /// Nothing obvious; check the remaining factors
    CheckPhAndLight,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::RaiseNutrients => {
                write!(f, "Zalecenie: zwiększ stężenie składników odżywczych.")
            }
            Recommendation::AdjustTemperature { min, max } => {
                write!(f, "Zalecenie: dostosuj temperaturę (optymalna: {min}-{max}°C).")
            }
            Recommendation::CheckPhAndLight => {
                write!(f, "Zalecenie: sprawdź pH roztworu i poziom oświetlenia.")
            }
        }
    }
}

/// Outcome of [`analyze_growth`]
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthReport {
    /// Plant name as stored
    pub plant: String,
    /// Height gained since planting (cm)
    pub growth: f64,
    /// Whole days since planting
    pub days: i64,
    /// Average growth per day (cm)
    pub daily_growth: f64,
    /// Comparison with the expected rate
    pub status: GrowthStatus,
    /// Suggested action, only for slow plants
    pub recommendation: Option<Recommendation>,
}

impl fmt::Display for GrowthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: wzrost {}cm w ciągu {} dni ({:.2}cm/dzień). Stan: {}.",
            self.plant,
            self.growth,
            self.days,
            self.daily_growth,
            self.status.label()
        )?;
        if let Some(recommendation) = &self.recommendation {
            write!(f, " {recommendation}")?;
        }
        Ok(())
    }
}

/// Analyze the growth of plant `name` as of `now`
///
/// `temperature` is the latest water temperature, if known. A plant planted
/// less than a day ago is averaged over one day.
pub fn analyze_growth(
    name: &str,
    plant: &PlantRecord,
    now: Timestamp,
    temperature: Option<f64>,
) -> GrowthReport {
    let growth = plant.current_height - plant.initial_height;
    let days = now.saturating_sub(plant.start_date).div_euclid(MS_PER_DAY);
    let divisor = if days == 0 { 1 } else { days };
    let daily_growth = growth / divisor as f64;

    let status = GrowthStatus::classify(daily_growth, plant.expected_daily_growth);
    let recommendation = (status == GrowthStatus::BelowExpected).then(|| recommend(plant, temperature));

    GrowthReport {
        plant: name.to_string(),
        growth,
        days,
        daily_growth,
        status,
        recommendation,
    }
}

fn recommend(plant: &PlantRecord, temperature: Option<f64>) -> Recommendation {
    if plant.nutrient_level < LOW_NUTRIENT_LEVEL {
        return Recommendation::RaiseNutrients;
    }

    match temperature {
        Some(t) if t < plant.min_temp || t > plant.max_temp => Recommendation::AdjustTemperature {
            min: plant.min_temp,
            max: plant.max_temp,
        },
        _ => Recommendation::CheckPhAndLight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: Timestamp = 1_741_608_000_000; // 2025-03-10 12:00 UTC

    fn basil(current_height: f64, nutrient_level: f64) -> PlantRecord {
        PlantRecord {
            initial_height: 10.0,
            current_height,
            start_date: NOW - 10 * MS_PER_DAY - 3_600_000,
            expected_daily_growth: 0.5,
            nutrient_level,
            min_temp: 18.0,
            max_temp: 26.0,
        }
    }

    #[test]
    fn slow_growth_blames_feeding_first() {
        let report = analyze_growth("Bazylia", &basil(13.0, 60.0), NOW, Some(15.0));

        assert_eq!(report.days, 10);
        assert_eq!(report.status, GrowthStatus::BelowExpected);
        assert_eq!(report.recommendation, Some(Recommendation::RaiseNutrients));
        assert_eq!(
            report.to_string(),
            "Bazylia: wzrost 3cm w ciągu 10 dni (0.30cm/dzień). Stan: poniżej oczekiwań. \
             Zalecenie: zwiększ stężenie składników odżywczych."
        );
    }

    #[test]
    fn slow_growth_then_temperature_then_ph() {
        let cold = analyze_growth("Bazylia", &basil(13.0, 80.0), NOW, Some(15.0));
        assert_eq!(
            cold.recommendation,
            Some(Recommendation::AdjustTemperature { min: 18.0, max: 26.0 })
        );
        assert!(cold.to_string().ends_with("Zalecenie: dostosuj temperaturę (optymalna: 18-26°C)."));

        let unknown = analyze_growth("Bazylia", &basil(13.0, 80.0), NOW, None);
        assert_eq!(unknown.recommendation, Some(Recommendation::CheckPhAndLight));

        let comfortable = analyze_growth("Bazylia", &basil(13.0, 80.0), NOW, Some(22.0));
        assert_eq!(comfortable.recommendation, Some(Recommendation::CheckPhAndLight));
    }

    #[test]
    fn healthy_growth_has_no_recommendation() {
        let on_track = analyze_growth("Bazylia", &basil(15.0, 50.0), NOW, Some(10.0));
        assert_eq!(on_track.status, GrowthStatus::OnTrack);
        assert_eq!(on_track.recommendation, None);
        assert!(on_track.to_string().ends_with("(0.50cm/dzień). Stan: dobry."));

        let fast = analyze_growth("Bazylia", &basil(17.0, 50.0), NOW, None);
        assert_eq!(fast.status, GrowthStatus::AboveExpected);
        assert_eq!(fast.recommendation, None);
    }

    #[test]
    fn planted_today_counts_as_one_day() {
        let plant = PlantRecord {
            start_date: NOW - 3_600_000,
            ..basil(10.4, 90.0)
        };

        let report = analyze_growth("Sałata", &plant, NOW, None);
        assert_eq!(report.days, 0);
        assert!((report.daily_growth - 0.4).abs() < 1e-9);
        assert_eq!(report.status, GrowthStatus::OnTrack);
    }
}

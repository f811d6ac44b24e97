//! Nutrient questions
//!
//! The knowledge table itself is supplied by the host through
//! [`NutrientCatalog`]. This module only decides which entry a question is
//! about, what the question asks, and how to phrase the answer.
//!
//! | Intent       | Keywords                         |
//! |--------------|----------------------------------|
//! | `Dosage`     | `dawkow`, `ile`, `stężeni`       |
//! | `Deficiency` | `niedobór`, `brak`               |
//! | `Excess`     | `nadmiar`, `za dużo`             |
//! | `Effect`     | `wpływ`, `działanie`, `efekt`    |
//! | `General`    | anything else                    |
//!
//! The first matching row wins.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::phrases::{contains_any, DEFICIENCY, DOSAGE, EFFECT, EXCESS};
use crate::constants::{CALCIUM_HEAT_STRESS_C, IRON_UPTAKE_MIN_C};

/// Temperature caveat attached to answers about a nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemperatureNote {
    /// Iron is poorly absorbed in cold solution
    IronUptake,
    /// Calcium shortages are more common in the heat
    CalciumDemand,
}

/// What the assistant knows about one nutrient or additive
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NutrientProfile {
    /// Lowercase name, matched as a substring of the question
    pub name: String,
    /// What it does for the plant
    pub effect: String,
    /// Recommended concentration
    pub dosage: String,
    /// Symptoms when lacking
    pub deficiency: String,
    /// Symptoms when overdosed
    pub excess: String,
    /// Caveat added depending on the water temperature
    #[cfg_attr(feature = "serde", serde(default))]
    pub temperature_note: Option<TemperatureNote>,
}

impl NutrientProfile {
    /// Profile without a temperature caveat
    pub fn new(
        name: impl Into<String>,
        effect: impl Into<String>,
        dosage: impl Into<String>,
        deficiency: impl Into<String>,
        excess: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            effect: effect.into(),
            dosage: dosage.into(),
            deficiency: deficiency.into(),
            excess: excess.into(),
            temperature_note: None,
        }
    }

    /// Attach a temperature caveat
    pub fn with_temperature_note(mut self, note: TemperatureNote) -> Self {
        self.temperature_note = Some(note);
        self
    }
}

/// Lookup table of nutrient profiles
pub trait NutrientCatalog {
    /// Profiles in match priority order
    fn profiles(&self) -> &[NutrientProfile];

    /// First profile whose name occurs in the lowercase `query`
    fn find(&self, query: &str) -> Option<&NutrientProfile> {
        self.profiles()
            .iter()
            .find(|profile| query.contains(profile.name.as_str()))
    }
}

impl NutrientCatalog for [NutrientProfile] {
    fn profiles(&self) -> &[NutrientProfile] {
        self
    }
}

impl NutrientCatalog for Vec<NutrientProfile> {
    fn profiles(&self) -> &[NutrientProfile] {
        self
    }
}

impl<T: NutrientCatalog + ?Sized> NutrientCatalog for &T {
    fn profiles(&self) -> &[NutrientProfile] {
        (**self).profiles()
    }
}

/// What a nutrient question asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// How much to dose
    Dosage,
    /// Symptoms of a shortage
    Deficiency,
    /// Symptoms of an overdose
    Excess,
    /// What the nutrient does
    Effect,
    /// Everything at once
    General,
}

impl Intent {
    /// Classify a lowercase question
    pub fn classify(query: &str) -> Self {
        if contains_any(query, &DOSAGE) {
            Intent::Dosage
        } else if contains_any(query, &DEFICIENCY) {
            Intent::Deficiency
        } else if contains_any(query, &EXCESS) {
            Intent::Excess
        } else if contains_any(query, &EFFECT) {
            Intent::Effect
        } else {
            Intent::General
        }
    }
}

/// Answer a question about a nutrient in `catalog`
///
/// Returns `None` when the question names no known nutrient. With a water
/// `temperature` the answer may carry the profile's temperature caveat.
pub fn nutrient_reply<C>(catalog: &C, question: &str, temperature: Option<f64>) -> Option<String>
where
    C: NutrientCatalog + ?Sized,
{
    let query = question.to_lowercase();
    let n = catalog.find(&query)?;

    let mut reply = match Intent::classify(&query) {
        Intent::Dosage => format!(
            "Zalecane stężenie {} w roztworze odżywczym to {}. {}.",
            n.name, n.dosage, n.effect
        ),
        Intent::Deficiency => format!(
            "Niedobór {} objawia się poprzez: {}. Zalecane stężenie to {}.",
            n.name, n.deficiency, n.dosage
        ),
        Intent::Excess => format!(
            "Nadmiar {} może powodować: {}. Uważaj, aby nie przekraczać zalecanych dawek ({}).",
            n.name, n.excess, n.dosage
        ),
        Intent::Effect => format!(
            "{} {}. Zalecane stężenie to {}.",
            capitalized(&n.name),
            n.effect,
            n.dosage
        ),
        Intent::General => format!(
            "{}: {}. Zalecane stężenie: {}. Niedobór powoduje {}. Nadmiar może prowadzić do {}.",
            capitalized(&n.name),
            n.effect,
            n.dosage,
            n.deficiency,
            n.excess
        ),
    };

    if let (Some(note), Some(celsius)) = (n.temperature_note, temperature) {
        if let Some(caveat) = temperature_caveat(note, celsius) {
            reply.push_str(&caveat);
        }
    }

    Some(reply)
}

fn temperature_caveat(note: TemperatureNote, celsius: f64) -> Option<String> {
    match note {
        TemperatureNote::IronUptake if celsius < IRON_UPTAKE_MIN_C => Some(format!(
            " Przy obecnej temperaturze {celsius}°C przyswajanie żelaza może być utrudnione. Optymalna temperatura to 20-25°C."
        )),
        TemperatureNote::CalciumDemand if celsius > CALCIUM_HEAT_STRESS_C => Some(format!(
            " Przy obecnej temperaturze {celsius}°C zwróć uwagę na wystarczające nawodnienie, gdyż niedobory wapnia są częstsze przy wysokich temperaturach."
        )),
        _ => None,
    }
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

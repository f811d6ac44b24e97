//! Rule-based grower assistant
//!
//! ## Overview
//!
//! Answers free-text questions from the chat screen using keyword rules,
//! a host-supplied nutrient table and the latest readings. No remote model
//! is involved; every answer is deterministic.
//!
//! ## Routing
//!
//! Questions are lowercased, then routed by the first rule that matches:
//!
//! | Rule                                                   | Topic         |
//! |--------------------------------------------------------|---------------|
//! | mentions temperature, not fertilizer                   | `Temperature` |
//! | mentions fertilizer or a nutrient word (`azot`, `ph`…) | `Nutrients`   |
//! | mentions plants or growth, and plants are monitored    | `Growth`      |
//! | anything else                                          | `SmallTalk`   |
//!
//! ## Usage Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use hydrowatch_core::assistant::{Assistant, AssistantContext, NutrientProfile, Topic};
//!
//! let catalog = vec![NutrientProfile::new(
//!     "azot", "przyspiesza wzrost liści", "100-200 ppm", "żółknięcie liści", "słabe korzenie",
//! )];
//! let plants = BTreeMap::new();
//! let context = AssistantContext::new(1_741_608_000_000, &plants);
//!
//! let answer = Assistant::new(catalog).answer("Ile azotu dawkować?", &context);
//! assert_eq!(answer.topic, Topic::Nutrients);
//! assert!(answer.text.contains("100-200 ppm"));
//! ```

pub mod growth;
pub mod nutrients;
pub(crate) mod phrases;

use std::collections::BTreeMap;

use core::fmt;

pub use growth::{analyze_growth, GrowthReport, GrowthStatus, PlantRecord, Recommendation};
pub use nutrients::{nutrient_reply, Intent, NutrientCatalog, NutrientProfile, TemperatureNote};
pub use phrases::WELCOME;

use crate::sample::SensorSample;
use crate::time::Timestamp;
use phrases::{
    contains_any, CAPABILITIES, CAPABILITIES_REPLY, CHECKING_TEMPERATURE, FALLBACK_REPLY,
    FERTILIZER, FERTILIZER_REPLY, GREETING, GREETING_REPLY, GROWTH_QUESTION, GROWTH_REPLY,
    NAME_THE_PLANT, NO_TEMPERATURE, NUTRIENT_OVERVIEW, NUTRIENT_WORDS, PLANTS, TEMPERATURE,
    THANKS, THANKS_REPLY,
};

/// Latest water temperature and when it was taken
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    /// Water temperature (°C)
    pub celsius: f64,
    /// Local time of the reading as stored
    pub time: String,
}

impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aktualna temperatura: {}°C ({})", self.celsius, self.time)
    }
}

/// Newest sample with a non-zero water temperature and a time of day
///
/// `samples` are scanned from the end, so pass them oldest first.
pub fn latest_temperature(samples: &[SensorSample]) -> Option<TemperatureReading> {
    samples.iter().rev().find_map(|sample| match sample.temperature_ds18b20 {
        Some(celsius) if celsius != 0.0 && !celsius.is_nan() && !sample.time.is_empty() => {
            Some(TemperatureReading {
                celsius,
                time: sample.time.clone(),
            })
        }
        _ => None,
    })
}

/// Canned reply for questions no rule claims
pub fn small_talk(question: &str) -> &'static str {
    let query = question.to_lowercase();

    if query.contains(TEMPERATURE) {
        CHECKING_TEMPERATURE
    } else if contains_any(&query, &GREETING) {
        GREETING_REPLY
    } else if contains_any(&query, &THANKS) {
        THANKS_REPLY
    } else if contains_any(&query, &CAPABILITIES) {
        CAPABILITIES_REPLY
    } else if contains_any(&query, &FERTILIZER) {
        FERTILIZER_REPLY
    } else if contains_any(&query, &GROWTH_QUESTION) {
        GROWTH_REPLY
    } else {
        FALLBACK_REPLY
    }
}

/// What an answer is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// Current water temperature
    Temperature,
    /// Fertilizers and nutrients
    Nutrients,
    /// Growth of a monitored plant
    Growth,
    /// Greetings, thanks and fallbacks
    SmallTalk,
}

/// One reply of the assistant
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// Rule that produced the reply
    pub topic: Topic,
    /// Reply text
    pub text: String,
}

impl Answer {
    fn new(topic: Topic, text: impl Into<String>) -> Self {
        Self {
            topic,
            text: text.into(),
        }
    }
}

/// Live data the assistant may refer to
#[derive(Debug, Clone, Copy)]
pub struct AssistantContext<'a> {
    /// Latest water temperature, if one could be read
    pub temperature: Option<&'a TemperatureReading>,
    /// Monitored plants by name
    pub plants: &'a BTreeMap<String, PlantRecord>,
    /// Current instant, epoch milliseconds
    pub now: Timestamp,
}

impl<'a> AssistantContext<'a> {
    /// Context without a temperature reading
    pub fn new(now: Timestamp, plants: &'a BTreeMap<String, PlantRecord>) -> Self {
        Self {
            temperature: None,
            plants,
            now,
        }
    }

    /// Attach the latest temperature reading
    pub fn with_temperature(mut self, reading: Option<&'a TemperatureReading>) -> Self {
        self.temperature = reading;
        self
    }

    fn celsius(&self) -> Option<f64> {
        self.temperature.map(|reading| reading.celsius)
    }
}

/// Keyword-routed assistant over a nutrient catalog
#[derive(Debug, Clone, Default)]
pub struct Assistant<C> {
    catalog: C,
}

impl<C: NutrientCatalog> Assistant<C> {
    /// Assistant answering nutrient questions from `catalog`
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Nutrient table in use
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Answer `question`
    pub fn answer(&self, question: &str, context: &AssistantContext<'_>) -> Answer {
        let query = question.to_lowercase();
        let answer = self.route(&query, context);
        log_debug!("Assistant answered a {:?} question", answer.topic);
        answer
    }

    fn route(&self, query: &str, context: &AssistantContext<'_>) -> Answer {
        let fertilizer = contains_any(query, &FERTILIZER);

        if query.contains(TEMPERATURE) && !fertilizer {
            return match context.temperature {
                Some(reading) => Answer::new(Topic::Temperature, reading.to_string()),
                None => Answer::new(Topic::Temperature, NO_TEMPERATURE),
            };
        }

        if fertilizer || contains_any(query, &NUTRIENT_WORDS) {
            let text = nutrient_reply(&self.catalog, query, context.celsius())
                .unwrap_or_else(|| NUTRIENT_OVERVIEW.to_string());
            return Answer::new(Topic::Nutrients, text);
        }

        if contains_any(query, &PLANTS) && !context.plants.is_empty() {
            let named = context
                .plants
                .iter()
                .find(|(name, _)| query.contains(name.to_lowercase().as_str()));

            return match named {
                Some((name, plant)) => Answer::new(
                    Topic::Growth,
                    analyze_growth(name, plant, context.now, context.celsius()).to_string(),
                ),
                None => Answer::new(Topic::Growth, NAME_THE_PLANT),
            };
        }

        Answer::new(Topic::SmallTalk, small_talk(query))
    }
}

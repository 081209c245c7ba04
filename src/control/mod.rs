//! Fuzzy irrigation control.
//!
//! ```text
//!  Reading ──▶ membership ──▶ rules ──▶ defuzz ──▶ minutes
//!             (per term)    (min/max)  (weighted avg)
//! ```
//!
//! Every stage is a pure function of its arguments; an
//! [`IrrigationController`] is `Copy` and may be shared across threads
//! freely.

pub mod defuzz;
pub mod membership;
pub mod rules;

use crate::config::FuzzyConfig;
use crate::error::ConfigError;
use crate::sensors::Reading;
use defuzz::{OutputCategory, OutputCentroids, defuzzify_with};
use rules::{FiringStrengths, Memberships, RuleBase, RulePreset};

/// Full result of one evaluation, kept for logic traces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub reading: Reading,
    pub memberships: Memberships,
    pub strengths: FiringStrengths,
    /// Recommended watering time (minutes). 0.0 when no rule fired.
    pub duration_minutes: f32,
}

impl Recommendation {
    pub fn dominant(&self) -> Option<OutputCategory> {
        self.strengths.dominant()
    }
}

/// Rule base plus output centroids, validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrigationController {
    rules: RuleBase,
    centroids: OutputCentroids,
}

impl Default for IrrigationController {
    fn default() -> Self {
        Self {
            rules: RuleBase::default(),
            centroids: OutputCentroids::default(),
        }
    }
}

impl IrrigationController {
    pub fn new(config: &FuzzyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rules: config.rules,
            centroids: config.centroids,
        })
    }

    /// Built-in tables under `preset`.
    pub fn with_preset(preset: RulePreset) -> Self {
        Self {
            rules: RuleBase::new(preset),
            ..Self::default()
        }
    }

    pub fn preset(&self) -> RulePreset {
        self.rules.preset
    }

    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    pub fn evaluate(&self, reading: &Reading) -> FiringStrengths {
        self.rules.evaluate(
            reading.temperature_c,
            reading.humidity_percent,
            reading.moisture_percent,
        )
    }

    pub fn defuzzify(&self, strengths: FiringStrengths) -> f32 {
        defuzzify_with(strengths, &self.centroids)
    }

    /// Run the whole pipeline on one reading.
    pub fn recommend(&self, reading: &Reading) -> Recommendation {
        let memberships = self.rules.fuzzify(
            reading.temperature_c,
            reading.humidity_percent,
            reading.moisture_percent,
        );
        let strengths = self.rules.fire(&memberships);
        Recommendation {
            reading: *reading,
            memberships,
            strengths,
            duration_minutes: self.defuzzify(strengths),
        }
    }
}

//! Linguistic variables and the two irrigation rule-bases.
//!
//! Each crisp input is fuzzified against the terms of its variable, then
//! the rules combine term memberships with `min` (AND) and `max` (OR):
//!
//! ```text
//!            │ two-term preset                  │ three-term preset
//! ───────────┼──────────────────────────────────┼──────────────────────────────────────────
//!  High      │ dry AND (hot OR humidity low)    │ dry AND (hot OR humidity low)
//!  Medium    │ moist AND temp optimal           │ moist AND (temp optimal OR humidity optimal)
//!  Low       │ wet OR humidity high             │ wet OR humidity high OR cold
//! ```
//!
//! Only the terms a preset references are evaluated. The two-term preset
//! leaves `temp_cold` and `humidity_optimal` as `None` in [`Memberships`].

use serde::{Deserialize, Serialize};

use super::defuzz::OutputCategory;
use super::membership::TriangularSet;
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Which rule-base to fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePreset {
    /// Temperature {optimal, hot}, humidity {low, high}.
    #[default]
    TwoTerm,
    /// Temperature {cold, optimal, hot}, humidity {low, optimal, high}.
    ThreeTerm,
}

// ---------------------------------------------------------------------------
// Linguistic variables
// ---------------------------------------------------------------------------

/// Temperature terms (°C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureTerms {
    pub cold: TriangularSet,
    pub optimal: TriangularSet,
    pub hot: TriangularSet,
}

/// Relative humidity terms (%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HumidityTerms {
    pub low: TriangularSet,
    pub optimal: TriangularSet,
    pub high: TriangularSet,
}

/// Soil moisture terms (%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoistureTerms {
    pub dry: TriangularSet,
    pub moist: TriangularSet,
    pub wet: TriangularSet,
}

pub const DEFAULT_TEMPERATURE: TemperatureTerms = TemperatureTerms {
    cold: TriangularSet::from_bounds(0.0, 0.0, 18.0),
    optimal: TriangularSet::from_bounds(16.0, 22.0, 28.0),
    hot: TriangularSet::from_bounds(26.0, 32.0, 40.0),
};

pub const DEFAULT_HUMIDITY: HumidityTerms = HumidityTerms {
    low: TriangularSet::from_bounds(0.0, 0.0, 50.0),
    optimal: TriangularSet::from_bounds(40.0, 60.0, 80.0),
    high: TriangularSet::from_bounds(70.0, 100.0, 100.0),
};

pub const DEFAULT_MOISTURE: MoistureTerms = MoistureTerms {
    dry: TriangularSet::from_bounds(0.0, 0.0, 40.0),
    moist: TriangularSet::from_bounds(30.0, 50.0, 70.0),
    wet: TriangularSet::from_bounds(60.0, 100.0, 100.0),
};

// ---------------------------------------------------------------------------
// Fuzzified inputs and rule outputs
// ---------------------------------------------------------------------------

/// Term memberships for one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Memberships {
    /// Only evaluated by the three-term preset.
    pub temp_cold: Option<f32>,
    pub temp_optimal: f32,
    pub temp_hot: f32,
    pub humidity_low: f32,
    /// Only evaluated by the three-term preset.
    pub humidity_optimal: Option<f32>,
    pub humidity_high: f32,
    pub soil_dry: f32,
    pub soil_moist: f32,
    pub soil_wet: f32,
}

/// Aggregate truth of the Low / Medium / High irrigation rules, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FiringStrengths {
    pub low: f32,
    pub medium: f32,
    pub high: f32,
}

impl FiringStrengths {
    pub const fn new(low: f32, medium: f32, high: f32) -> Self {
        Self { low, medium, high }
    }

    pub fn total(&self) -> f32 {
        self.low + self.medium + self.high
    }

    pub fn get(&self, category: OutputCategory) -> f32 {
        match category {
            OutputCategory::Low => self.low,
            OutputCategory::Medium => self.medium,
            OutputCategory::High => self.high,
        }
    }

    /// The strongest rule, or `None` if nothing fired. Ties go to the
    /// category that waters more.
    pub fn dominant(&self) -> Option<OutputCategory> {
        OutputCategory::ALL
            .into_iter()
            .filter(|&cat| self.get(cat) > 0.0)
            .fold(None, |best: Option<OutputCategory>, cat| match best {
                Some(b) if self.get(b) > self.get(cat) => Some(b),
                _ => Some(cat),
            })
    }
}

impl From<FiringStrengths> for (f32, f32, f32) {
    fn from(s: FiringStrengths) -> Self {
        (s.low, s.medium, s.high)
    }
}

// ---------------------------------------------------------------------------
// Rule base
// ---------------------------------------------------------------------------

/// A preset together with the term tables it fires against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleBase {
    pub preset: RulePreset,
    pub temperature: TemperatureTerms,
    pub humidity: HumidityTerms,
    pub moisture: MoistureTerms,
}

impl Default for RuleBase {
    fn default() -> Self {
        Self::new(RulePreset::default())
    }
}

impl RuleBase {
    /// The built-in term tables under the given preset.
    pub const fn new(preset: RulePreset) -> Self {
        Self {
            preset,
            temperature: DEFAULT_TEMPERATURE,
            humidity: DEFAULT_HUMIDITY,
            moisture: DEFAULT_MOISTURE,
        }
    }

    /// Re-check every term set. Sets built through [`TriangularSet::new`]
    /// or deserialization are already valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.temperature;
        let h = &self.humidity;
        let m = &self.moisture;
        for set in [t.cold, t.optimal, t.hot, h.low, h.optimal, h.high, m.dry, m.moist, m.wet] {
            set.validated()?;
        }
        Ok(())
    }

    /// Fuzzify the three crisp inputs against the terms this preset uses.
    pub fn fuzzify(&self, temperature: f32, humidity: f32, moisture: f32) -> Memberships {
        let three_term = self.preset == RulePreset::ThreeTerm;
        Memberships {
            temp_cold: three_term.then(|| self.temperature.cold.membership(temperature)),
            temp_optimal: self.temperature.optimal.membership(temperature),
            temp_hot: self.temperature.hot.membership(temperature),
            humidity_low: self.humidity.low.membership(humidity),
            humidity_optimal: three_term.then(|| self.humidity.optimal.membership(humidity)),
            humidity_high: self.humidity.high.membership(humidity),
            soil_dry: self.moisture.dry.membership(moisture),
            soil_moist: self.moisture.moist.membership(moisture),
            soil_wet: self.moisture.wet.membership(moisture),
        }
    }

    /// Combine memberships into rule firing strengths.
    ///
    /// A term missing from `mu` counts as 0.
    pub fn fire(&self, mu: &Memberships) -> FiringStrengths {
        let high = mu.soil_dry.min(mu.temp_hot.max(mu.humidity_low));
        match self.preset {
            RulePreset::TwoTerm => FiringStrengths {
                low: mu.soil_wet.max(mu.humidity_high),
                medium: mu.soil_moist.min(mu.temp_optimal),
                high,
            },
            RulePreset::ThreeTerm => {
                let humidity_optimal = mu.humidity_optimal.unwrap_or(0.0);
                let cold = mu.temp_cold.unwrap_or(0.0);
                FiringStrengths {
                    low: mu.soil_wet.max(mu.humidity_high).max(cold),
                    medium: mu.soil_moist.min(mu.temp_optimal.max(humidity_optimal)),
                    high,
                }
            }
        }
    }

    /// Fuzzify and fire in one step.
    pub fn evaluate(&self, temperature: f32, humidity: f32, moisture: f32) -> FiringStrengths {
        self.fire(&self.fuzzify(temperature, humidity, moisture))
    }
}

/// Fire the built-in tables under `preset`.
pub fn evaluate_rules(
    preset: RulePreset,
    temperature: f32,
    humidity: f32,
    moisture: f32,
) -> FiringStrengths {
    RuleBase::new(preset).evaluate(temperature, humidity, moisture)
}

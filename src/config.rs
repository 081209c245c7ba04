//! Controller configuration.
//!
//! All tunable tables for the irrigation controller. The defaults are the
//! built-in constants; a configuration may also be loaded from JSON or from
//! a compact postcard blob. Both loaders validate once, so the evaluation
//! path carries no checks.

use serde::{Deserialize, Serialize};

use crate::control::defuzz::OutputCentroids;
use crate::control::rules::{RuleBase, RulePreset};
use crate::error::ConfigError;

/// Inclusive-exclusive bounds of one simulated input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A range is usable when `min < max` and the width itself is finite;
    /// `-f32::MAX..f32::MAX` has finite ends but cannot be sampled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min < self.max && (self.max - self.min).is_finite() {
            Ok(())
        } else {
            Err(ConfigError::InvalidSimulationRange {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// True if a uniform draw from this range can produce `x`.
    pub fn contains(&self, x: f32) -> bool {
        x >= self.min && x < self.max
    }
}

/// Bounds of the random weather generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRanges {
    /// °C
    pub temperature: Range,
    /// %
    pub humidity: Range,
    /// %
    pub moisture: Range,
}

impl Default for SimulationRanges {
    /// Full sensor span, as used by the console trace.
    fn default() -> Self {
        Self {
            temperature: Range::new(0.0, 50.0),
            humidity: Range::new(0.0, 100.0),
            moisture: Range::new(0.0, 100.0),
        }
    }
}

impl SimulationRanges {
    /// Narrower spans typical of a growing season.
    pub const fn weather() -> Self {
        Self {
            temperature: Range::new(10.0, 40.0),
            humidity: Range::new(20.0, 90.0),
            moisture: Range::new(10.0, 80.0),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.temperature.validate()?;
        self.humidity.validate()?;
        self.moisture.validate()
    }
}

/// Core controller configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FuzzyConfig {
    /// Preset and input term tables.
    pub rules: RuleBase,
    /// Output centroids (minutes).
    pub centroids: OutputCentroids,
    /// Random generator bounds for simulated runs.
    pub simulation: SimulationRanges,
}

impl FuzzyConfig {
    /// Default tables under `preset`.
    pub fn with_preset(preset: RulePreset) -> Self {
        Self {
            rules: RuleBase::new(preset),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules.validate()?;
        self.centroids.validate()?;
        self.simulation.validate()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("config JSON rejected: {e}");
            ConfigError::Decode
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            log::warn!("config JSON encoding failed: {e}");
            ConfigError::Encode
        })
    }

    pub fn to_postcard(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|e| {
            log::warn!("config blob encoding failed: {e}");
            ConfigError::Encode
        })
    }

    pub fn from_postcard(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|e| {
            log::warn!("config blob rejected: {e}");
            ConfigError::Decode
        })?;
        config.validate()?;
        Ok(config)
    }
}

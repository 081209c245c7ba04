//! Weighted-average defuzzification.
//!
//! Each output category is reduced to the peak of its output triangle:
//!
//! | category | output set (min) | centroid |
//! |----------|------------------|----------|
//! | Low      | (0, 10, 20)      | 10       |
//! | Medium   | (15, 30, 45)     | 30       |
//! | High     | (40, 60, 60)     | 60       |
//!
//! The crisp duration is the strength-weighted mean of the centroids.

use serde::{Deserialize, Serialize};

use super::rules::FiringStrengths;
use crate::error::ConfigError;

/// Irrigation output categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputCategory {
    Low,
    Medium,
    High,
}

impl OutputCategory {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Representative duration (minutes) of each output category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputCentroids {
    pub low: f32,
    pub medium: f32,
    pub high: f32,
}

pub const DEFAULT_CENTROIDS: OutputCentroids = OutputCentroids {
    low: 10.0,
    medium: 30.0,
    high: 60.0,
};

impl Default for OutputCentroids {
    fn default() -> Self {
        DEFAULT_CENTROIDS
    }
}

impl OutputCentroids {
    pub fn get(&self, category: OutputCategory) -> f32 {
        match category {
            OutputCategory::Low => self.low,
            OutputCategory::Medium => self.medium,
            OutputCategory::High => self.high,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = self.low.is_finite() && self.medium.is_finite() && self.high.is_finite();
        if finite && self.low < self.medium && self.medium < self.high {
            Ok(())
        } else {
            Err(ConfigError::InvalidCentroids)
        }
    }
}

/// Collapse firing strengths into minutes using `centroids`.
///
/// Returns 0.0 when no rule fired. The result is not clamped.
pub fn defuzzify_with(strengths: FiringStrengths, centroids: &OutputCentroids) -> f32 {
    let total = strengths.total();
    if total == 0.0 {
        return 0.0;
    }
    let numerator = OutputCategory::ALL
        .iter()
        .map(|&cat| strengths.get(cat) * centroids.get(cat))
        .sum::<f32>();
    numerator / total
}

/// Collapse `(low, medium, high)` into minutes with the default centroids
/// (10, 30, 60).
pub fn defuzzify(low: f32, medium: f32, high: f32) -> f32 {
    defuzzify_with(FiringStrengths::new(low, medium, high), &DEFAULT_CENTROIDS)
}

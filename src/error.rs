//! Unified error types for the irrigation controller.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! service layer's error handling uniform. All variants are `Copy` so they
//! can be passed through events without allocation.
//!
//! The fuzzy pipeline itself never fails: numeric edge cases resolve to a
//! defined value (see [`crate::control`]). Errors only arise when a
//! configuration is loaded or a sensor source misbehaves.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Configuration is invalid or could not be decoded.
    Config(ConfigError),
    /// A reading source could not produce a reading.
    Sensor(SensorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Sensor(e) => write!(f, "sensor: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A triangle bound is NaN or infinite.
    NonFiniteBound,
    /// Triangle bounds are not ordered `a <= b <= c`.
    UnorderedBounds { a: f32, b: f32, c: f32 },
    /// `a == c`: the set can never have non-zero membership.
    EmptySupport { at: f32 },
    /// Output centroids must be finite and strictly ascending (low < medium < high).
    InvalidCentroids,
    /// A simulation range is inverted, not finite, or too wide to sample.
    InvalidSimulationRange { min: f32, max: f32 },
    /// Serialized configuration could not be decoded.
    Decode,
    /// Configuration could not be serialized.
    Encode,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBound => write!(f, "triangle bound is not finite"),
            Self::UnorderedBounds { a, b, c } => {
                write!(f, "triangle bounds ({a}, {b}, {c}) are not ordered a <= b <= c")
            }
            Self::EmptySupport { at } => write!(f, "triangle collapses to the single point {at}"),
            Self::InvalidCentroids => write!(f, "output centroids must be finite and ascending"),
            Self::InvalidSimulationRange { min, max } => {
                write!(f, "simulation range {min}..{max} is not a finite, non-empty span")
            }
            Self::Decode => write!(f, "configuration could not be decoded"),
            Self::Encode => write!(f, "configuration could not be encoded"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The source failed to produce a reading.
    ReadFailed,
    /// The generator was handed ranges it cannot sample.
    InvalidRange,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "read failed"),
            Self::InvalidRange => write!(f, "invalid simulation range"),
        }
    }
}

impl core::error::Error for SensorError {}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

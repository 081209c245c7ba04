//! Reading sources.
//!
//! The controller only needs three crisp numbers per interval. Where they
//! come from is behind [`SensorPort`]: a [`FixedSensor`] for manual input
//! and tests, or a [`simulated::SimulatedSensor`] drawing random weather.

pub mod simulated;

use crate::app::ports::SensorPort;
use crate::error::SensorError;

/// One set of environmental readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reading {
    /// Air temperature (°C).
    pub temperature_c: f32,
    /// Relative humidity (%).
    pub humidity_percent: f32,
    /// Volumetric soil moisture (%).
    pub moisture_percent: f32,
}

impl Reading {
    pub const fn new(temperature_c: f32, humidity_percent: f32, moisture_percent: f32) -> Self {
        Self {
            temperature_c,
            humidity_percent,
            moisture_percent,
        }
    }
}

/// Source that returns the same reading every time.
#[derive(Debug, Clone, Copy)]
pub struct FixedSensor {
    reading: Reading,
}

impl FixedSensor {
    pub fn new(reading: Reading) -> Self {
        Self { reading }
    }
}

impl SensorPort for FixedSensor {
    fn read(&mut self) -> Result<Reading, SensorError> {
        Ok(self.reading)
    }
}

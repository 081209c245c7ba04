//! Random weather generator.
//!
//! Draws three independent uniform values per read, each within its
//! [`SimulationRanges`] bound. Seeded instances are reproducible, which is
//! what the tests rely on; the console binary uses the thread RNG.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::Reading;
use crate::app::ports::SensorPort;
use crate::config::{Range, SimulationRanges};
use crate::error::SensorError;

pub struct SimulatedSensor<R: Rng> {
    rng: R,
    ranges: SimulationRanges,
    reads: u32,
}

impl SimulatedSensor<ThreadRng> {
    pub fn from_entropy(ranges: SimulationRanges) -> Result<Self, SensorError> {
        Self::with_rng(rand::rng(), ranges)
    }
}

impl SimulatedSensor<StdRng> {
    pub fn seeded(seed: u64, ranges: SimulationRanges) -> Result<Self, SensorError> {
        Self::with_rng(StdRng::seed_from_u64(seed), ranges)
    }
}

impl<R: Rng> SimulatedSensor<R> {
    pub fn with_rng(rng: R, ranges: SimulationRanges) -> Result<Self, SensorError> {
        ranges.validate().map_err(|e| {
            log::warn!("simulated sensor rejected: {e}");
            SensorError::InvalidRange
        })?;
        Ok(Self {
            rng,
            ranges,
            reads: 0,
        })
    }

    pub fn ranges(&self) -> &SimulationRanges {
        &self.ranges
    }

    /// Number of readings produced so far.
    pub fn reads(&self) -> u32 {
        self.reads
    }

    fn draw(&mut self, range: Range) -> f32 {
        self.rng.random_range(range.min..range.max)
    }
}

impl<R: Rng> SensorPort for SimulatedSensor<R> {
    fn read(&mut self) -> Result<Reading, SensorError> {
        let ranges = self.ranges;
        let reading = Reading::new(
            self.draw(ranges.temperature),
            self.draw(ranges.humidity),
            self.draw(ranges.moisture),
        );
        self.reads = self.reads.saturating_add(1);
        log::debug!(
            "simulated read #{}: T={:.1} H={:.1} M={:.1}",
            self.reads,
            reading.temperature_c,
            reading.humidity_percent,
            reading.moisture_percent
        );
        Ok(reading)
    }
}

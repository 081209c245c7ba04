//! Application service — the hexagonal core.
//!
//! [`IrrigationService`] owns the fuzzy controller and the interval
//! counter. All I/O flows through port traits passed in at call sites,
//! making the service testable with mock sources and sinks.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────┐ ──▶ EventSink
//!                 │  IrrigationService   │
//!                 │  fuzzify · rules ·   │
//!                 │  defuzzify           │
//!                 └──────────────────────┘
//! ```

use heapless::Vec;
use log::{debug, info, warn};

use crate::config::FuzzyConfig;
use crate::control::IrrigationController;
use crate::control::rules::RulePreset;
use crate::error::Result;

use super::events::{AppEvent, DecisionRecord};
use super::ports::{EventSink, SensorPort};

/// The application service orchestrates one decision per interval.
pub struct IrrigationService {
    controller: IrrigationController,
    interval: u32,
}

impl IrrigationService {
    /// Construct the service, validating `config`.
    pub fn new(config: &FuzzyConfig) -> Result<Self> {
        let controller = IrrigationController::new(config)?;
        Ok(Self::with_controller(controller))
    }

    pub fn with_controller(controller: IrrigationController) -> Self {
        Self {
            controller,
            interval: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        let preset = self.controller.preset();
        sink.emit(&AppEvent::Started(preset));
        info!("IrrigationService started with {:?} rules", preset);
    }

    // ── Per-interval orchestration ────────────────────────────

    /// Read one reading, evaluate it, and emit the decision.
    ///
    /// A failed read is emitted as [`AppEvent::SensorFault`] and returned
    /// as an error; the interval still counts.
    pub fn tick(
        &mut self,
        sensor: &mut impl SensorPort,
        sink: &mut impl EventSink,
    ) -> Result<DecisionRecord> {
        self.interval += 1;
        let interval = self.interval;

        let reading = match sensor.read() {
            Ok(r) => r,
            Err(error) => {
                warn!("interval {interval}: sensor read failed: {error}");
                sink.emit(&AppEvent::SensorFault { interval, error });
                return Err(error.into());
            }
        };

        let recommendation = self.controller.recommend(&reading);
        if recommendation.strengths.total() == 0.0 {
            debug!("interval {interval}: no rule fired for {reading:?}");
        }

        let record = DecisionRecord {
            interval,
            recommendation,
        };
        sink.emit(&AppEvent::Decision(record));
        Ok(record)
    }

    /// Run `N` intervals back to back, stopping at the first sensor fault.
    pub fn run<const N: usize>(
        &mut self,
        sensor: &mut impl SensorPort,
        sink: &mut impl EventSink,
    ) -> Result<Vec<DecisionRecord, N>> {
        let mut records = Vec::new();
        for _ in 0..N {
            let record = self.tick(sensor, sink)?;
            // Capacity is N and the loop runs N times.
            let _ = records.push(record);
        }
        Ok(records)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn controller(&self) -> &IrrigationController {
        &self.controller
    }

    pub fn preset(&self) -> RulePreset {
        self.controller.preset()
    }

    /// Intervals attempted so far.
    pub fn interval(&self) -> u32 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::{FixedSensor, Reading};

    struct CountingSink(usize);

    impl EventSink for CountingSink {
        fn emit(&mut self, _event: &AppEvent) {
            self.0 += 1;
        }
    }

    #[test]
    fn tick_numbers_intervals_from_one() {
        let mut svc = IrrigationService::new(&FuzzyConfig::default()).unwrap();
        let mut sensor = FixedSensor::new(Reading::new(22.0, 50.0, 50.0));
        let mut sink = CountingSink(0);

        let first = svc.tick(&mut sensor, &mut sink).unwrap();
        let second = svc.tick(&mut sensor, &mut sink).unwrap();
        assert_eq!(first.interval, 1);
        assert_eq!(second.interval, 2);
        assert_eq!(first.duration_minutes(), 30.0);
        assert_eq!(sink.0, 2);
    }

    #[test]
    fn run_fills_exactly_n_records() {
        let mut svc = IrrigationService::with_controller(IrrigationController::default());
        let mut sensor = FixedSensor::new(Reading::new(30.0, 20.0, 20.0));
        let mut sink = CountingSink(0);

        let records = svc.run::<10>(&mut sensor, &mut sink).unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(records[9].interval, 10);
        assert_eq!(svc.interval(), 10);
    }
}

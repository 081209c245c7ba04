//! Mock adapters for integration tests.
//!
//! `ScriptedSensor` replays a fixed list of readings (and failures);
//! `RecordingSink` keeps every emitted event for later assertions.

use irrigation::Reading;
use irrigation::app::events::AppEvent;
use irrigation::app::ports::{EventSink, SensorPort};
use irrigation::error::SensorError;
use std::collections::VecDeque;

// ── ScriptedSensor ────────────────────────────────────────────

pub struct ScriptedSensor {
    script: VecDeque<Result<Reading, SensorError>>,
}

#[allow(dead_code)]
impl ScriptedSensor {
    pub fn new(readings: &[Reading]) -> Self {
        Self {
            script: readings.iter().copied().map(Ok).collect(),
        }
    }

    /// Queue a failed read after the readings scripted so far.
    pub fn then_fail(mut self) -> Self {
        self.script.push_back(Err(SensorError::ReadFailed));
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl SensorPort for ScriptedSensor {
    fn read(&mut self) -> Result<Reading, SensorError> {
        self.script.pop_front().unwrap_or(Err(SensorError::ReadFailed))
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn decisions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Decision(_)))
            .count()
    }

    pub fn faults(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::SensorFault { .. }))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

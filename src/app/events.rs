//! Outbound application events.
//!
//! The [`IrrigationService`](super::service::IrrigationService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on the
//! other side decide what to do with them: log them, print a table, or
//! collect them in a test.

use crate::control::Recommendation;
use crate::control::rules::RulePreset;
use crate::error::SensorError;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service is ready (carries the active preset).
    Started(RulePreset),

    /// One interval was evaluated.
    Decision(DecisionRecord),

    /// The reading source failed for this interval.
    SensorFault { interval: u32, error: SensorError },
}

/// The outcome of one interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRecord {
    /// 1-based interval number.
    pub interval: u32,
    pub recommendation: Recommendation,
}

impl DecisionRecord {
    pub fn duration_minutes(&self) -> f32 {
        self.recommendation.duration_minutes
    }
}

//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade. Whatever logger the binary installs decides where the
//! lines end up.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Decision(d) => {
                let rec = &d.recommendation;
                info!(
                    "DECIDE | #{} | T={:.1}\u{00b0}C H={:.1}% M={:.1}% | \
                     low={:.2} med={:.2} high={:.2} | {:.1} min ({})",
                    d.interval,
                    rec.reading.temperature_c,
                    rec.reading.humidity_percent,
                    rec.reading.moisture_percent,
                    rec.strengths.low,
                    rec.strengths.medium,
                    rec.strengths.high,
                    rec.duration_minutes,
                    rec.dominant().map_or("none", |c| c.label()),
                );
            }
            AppEvent::SensorFault { interval, error } => {
                warn!("FAULT | #{} | {}", interval, error);
            }
            AppEvent::Started(preset) => {
                info!("START | preset={:?}", preset);
            }
        }
    }
}

//! Port traits — the boundary between the controller and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ IrrigationService (domain)
//! ```
//!
//! Reading sources and event sinks implement these traits. The
//! [`IrrigationService`](super::service::IrrigationService) consumes them
//! via generics, so the fuzzy core never touches a random number generator,
//! a terminal, or a clock.

use super::events::AppEvent;
use crate::error::SensorError;
use crate::sensors::Reading;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: environment → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: a source of three crisp readings per interval.
pub trait SensorPort {
    fn read(&mut self) -> Result<Reading, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: domain → observers)
// ───────────────────────────────────────────────────────────────

/// Outbound port for structured application events.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

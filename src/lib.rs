//! Fuzzy-logic irrigation controller.
//!
//! Turns air temperature, relative humidity, and soil moisture into a
//! recommended watering time. The fuzzy core lives in [`control`]; the
//! [`app`] service, [`sensors`], and [`adapters`] form a thin outer ring
//! used by the console binary and the integration tests.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod sensors;

pub use control::defuzz::defuzzify;
pub use control::membership::membership;
pub use control::rules::{FiringStrengths, RulePreset, evaluate_rules};
pub use control::{IrrigationController, Recommendation};
pub use sensors::Reading;

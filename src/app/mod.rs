//! Application core — orchestration, zero I/O.
//!
//! Ties reading sources to the fuzzy controller and reports each decision.
//! All interaction with the environment happens through **port traits**
//! defined in [`ports`], keeping this layer testable with fixed readings.

pub mod events;
pub mod ports;
pub mod service;

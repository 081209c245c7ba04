//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters. Everything runs on the host with fixed or
//! seeded readings.

mod mock_sensor;
mod pipeline_tests;
mod service_tests;

//! Fuzz target: `FuzzyConfig::from_postcard`
//!
//! Drives arbitrary bytes into the config decoder. Anything it accepts
//! must validate, build a controller, and build a simulated sensor.
//!
//! cargo fuzz run fuzz_config_blob

#![no_main]

use irrigation::IrrigationController;
use irrigation::config::FuzzyConfig;
use irrigation::sensors::simulated::SimulatedSensor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = FuzzyConfig::from_postcard(data) {
        assert!(config.validate().is_ok(), "decoder accepted an invalid config");
        assert!(IrrigationController::new(&config).is_ok());
        assert!(SimulatedSensor::seeded(0, config.simulation).is_ok());
    }
});

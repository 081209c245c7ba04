//! Fuzz target: `IrrigationController::recommend`
//!
//! Reinterprets the input as three `f32` readings (any bit pattern,
//! including NaN and infinities) and runs both presets over them.
//!
//! Invariants checked:
//! - No panics for any reading
//! - Every firing strength is a degree in [0, 1]
//! - The duration is 0 when nothing fired, otherwise a finite value
//!
//! cargo fuzz run fuzz_pipeline

#![no_main]

use irrigation::{IrrigationController, Reading, RulePreset};
use libfuzzer_sys::fuzz_target;

fn f32_at(data: &[u8], i: usize) -> f32 {
    f32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]])
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }
    let reading = Reading::new(f32_at(data, 0), f32_at(data, 4), f32_at(data, 8));

    for preset in [RulePreset::TwoTerm, RulePreset::ThreeTerm] {
        let rec = IrrigationController::with_preset(preset).recommend(&reading);
        for v in [rec.strengths.low, rec.strengths.medium, rec.strengths.high] {
            assert!((0.0..=1.0).contains(&v), "strength out of range: {v}");
        }
        if rec.strengths.total() == 0.0 {
            assert_eq!(rec.duration_minutes, 0.0);
        } else {
            assert!(rec.duration_minutes.is_finite());
        }
    }
});

//! End-to-end scenarios through fuzzify → rules → defuzzify.

use irrigation::control::defuzz::OutputCategory;
use irrigation::{IrrigationController, Reading, RulePreset, defuzzify, evaluate_rules};

// ── Hot, dry afternoon ────────────────────────────────────────

#[test]
fn hot_dry_reading_leans_toward_long_watering() {
    let s = evaluate_rules(RulePreset::TwoTerm, 30.0, 20.0, 20.0);
    assert!(s.high > 0.0, "dry soil on a hot day must fire High");
    assert_eq!(s.low, 0.0, "neither wet soil nor humid air");

    let minutes = defuzzify(s.low, s.medium, s.high);
    assert!(minutes > 30.0 && minutes <= 60.0, "got {minutes}");
}

// ── Textbook conditions ───────────────────────────────────────

#[test]
fn optimal_reading_gives_exactly_medium_duration() {
    for preset in [RulePreset::TwoTerm, RulePreset::ThreeTerm] {
        let rec =
            IrrigationController::with_preset(preset).recommend(&Reading::new(22.0, 50.0, 50.0));
        assert_eq!(rec.memberships.temp_optimal, 1.0);
        assert_eq!(rec.memberships.soil_moist, 1.0);
        assert_eq!(rec.strengths.medium, 1.0);
        assert_eq!(rec.strengths.low, 0.0);
        assert_eq!(rec.strengths.high, 0.0);
        assert_eq!(rec.duration_minutes, 30.0, "{preset:?}");
    }
}

// ── Saturated soil ────────────────────────────────────────────

#[test]
fn soaked_soil_recommends_short_watering() {
    let rec = IrrigationController::default().recommend(&Reading::new(25.0, 80.0, 95.0));
    assert_eq!(rec.dominant(), Some(OutputCategory::Low));
    assert!(
        (rec.duration_minutes - 10.0).abs() < 1e-4,
        "got {}",
        rec.duration_minutes
    );
}

// ── Nothing applies ───────────────────────────────────────────

#[test]
fn reading_outside_every_set_yields_zero_minutes() {
    let rec = IrrigationController::with_preset(RulePreset::ThreeTerm)
        .recommend(&Reading::new(-20.0, 150.0, 150.0));
    assert_eq!(rec.strengths.total(), 0.0);
    assert_eq!(rec.duration_minutes, 0.0);
    assert_eq!(rec.dominant(), None);
}

// ── Presets differ where they should ──────────────────────────

#[test]
fn cold_snap_only_registers_with_three_terms() {
    let reading = Reading::new(4.0, 55.0, 45.0);
    let two = IrrigationController::with_preset(RulePreset::TwoTerm).recommend(&reading);
    let three = IrrigationController::with_preset(RulePreset::ThreeTerm).recommend(&reading);

    assert_eq!(two.strengths.low, 0.0);
    assert!(three.strengths.low > 0.0);
    assert!(three.duration_minutes < 30.0);
}

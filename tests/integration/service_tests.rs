//! Integration tests for the SensorPort → IrrigationService → EventSink chain.

use crate::mock_sensor::{RecordingSink, ScriptedSensor};

use irrigation::adapters::log_sink::LogEventSink;
use irrigation::app::events::AppEvent;
use irrigation::app::service::IrrigationService;
use irrigation::config::{FuzzyConfig, SimulationRanges};
use irrigation::error::{ConfigError, Error, SensorError};
use irrigation::sensors::simulated::SimulatedSensor;
use irrigation::{Reading, RulePreset};

fn make_service(preset: RulePreset) -> (IrrigationService, RecordingSink) {
    let mut svc = IrrigationService::new(&FuzzyConfig::with_preset(preset)).unwrap();
    let mut sink = RecordingSink::new();
    svc.start(&mut sink);
    (svc, sink)
}

#[test]
fn start_announces_preset() {
    let (_svc, sink) = make_service(RulePreset::ThreeTerm);
    assert_eq!(sink.events, vec![AppEvent::Started(RulePreset::ThreeTerm)]);
}

#[test]
fn each_tick_emits_one_decision() {
    let (mut svc, mut sink) = make_service(RulePreset::TwoTerm);
    let mut sensor = ScriptedSensor::new(&[
        Reading::new(30.0, 20.0, 20.0),
        Reading::new(22.0, 50.0, 50.0),
    ]);

    let first = svc.tick(&mut sensor, &mut sink).unwrap();
    let second = svc.tick(&mut sensor, &mut sink).unwrap();

    assert_eq!(sink.decisions(), 2);
    assert!(first.duration_minutes() > second.duration_minutes());
    assert_eq!(second.duration_minutes(), 30.0);
    assert_eq!(sensor.remaining(), 0);
}

#[test]
fn sensor_fault_is_emitted_and_returned() {
    let (mut svc, mut sink) = make_service(RulePreset::TwoTerm);
    let mut sensor = ScriptedSensor::new(&[Reading::new(22.0, 50.0, 50.0)]).then_fail();

    assert!(svc.tick(&mut sensor, &mut sink).is_ok());
    let err = svc.tick(&mut sensor, &mut sink).unwrap_err();

    assert_eq!(err, Error::Sensor(SensorError::ReadFailed));
    assert_eq!(sink.faults(), 1);
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::SensorFault {
            interval: 2,
            error: SensorError::ReadFailed,
        })
    );
}

#[test]
fn run_stops_at_first_fault() {
    let (mut svc, mut sink) = make_service(RulePreset::TwoTerm);
    let mut sensor = ScriptedSensor::new(&[Reading::new(22.0, 50.0, 50.0); 3]).then_fail();

    assert!(svc.run::<10>(&mut sensor, &mut sink).is_err());
    assert_eq!(sink.decisions(), 3);
    assert_eq!(svc.interval(), 4);
}

#[test]
fn simulated_run_stays_within_centroid_span() {
    let (mut svc, mut sink) = make_service(RulePreset::ThreeTerm);
    let mut sensor = SimulatedSensor::seeded(2024, SimulationRanges::weather()).unwrap();

    let records = svc.run::<10>(&mut sensor, &mut sink).unwrap();
    assert_eq!(records.len(), 10);
    for r in &records {
        let m = r.duration_minutes();
        assert!(
            m == 0.0 || (10.0 - 1e-3..=60.0 + 1e-3).contains(&m),
            "interval {}: {m}",
            r.interval
        );
    }
}

#[test]
fn log_sink_accepts_every_event_kind() {
    let mut svc = IrrigationService::new(&FuzzyConfig::default()).unwrap();
    let mut sink = LogEventSink::new();
    svc.start(&mut sink);
    let mut sensor = ScriptedSensor::new(&[Reading::new(28.0, 35.0, 25.0)]).then_fail();
    assert!(svc.tick(&mut sensor, &mut sink).is_ok());
    assert!(svc.tick(&mut sensor, &mut sink).is_err());
}

#[test]
fn invalid_config_never_builds_a_service() {
    let mut cfg = FuzzyConfig::default();
    cfg.centroids.low = f32::NAN;
    assert!(matches!(
        IrrigationService::new(&cfg),
        Err(Error::Config(ConfigError::InvalidCentroids))
    ));
}

#[test]
fn inverted_simulation_range_never_builds_a_service() {
    let mut cfg = FuzzyConfig::default();
    cfg.simulation.humidity.min = 95.0;
    assert_eq!(
        IrrigationService::new(&cfg).err(),
        Some(Error::Config(ConfigError::InvalidSimulationRange {
            min: 95.0,
            max: 100.0,
        }))
    );
}

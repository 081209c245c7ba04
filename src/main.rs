//! Irrigation console — Main Entry Point
//!
//! ```text
//! irrigation [--three-term] [--weather] [--seed N] [TEMP HUMIDITY MOISTURE]
//! ```
//!
//! With three numbers, evaluates that single reading and prints the logic
//! trace. Without, simulates ten intervals of random weather and prints one
//! table row per interval. Set `RUST_LOG=info` to see the service events.

use anyhow::{Context, Result, anyhow, bail};
use log::info;
use tracing_subscriber::EnvFilter;

use irrigation::adapters::log_sink::LogEventSink;
use irrigation::app::events::DecisionRecord;
use irrigation::app::service::IrrigationService;
use irrigation::config::{FuzzyConfig, SimulationRanges};
use irrigation::control::Recommendation;
use irrigation::control::rules::RulePreset;
use irrigation::sensors::simulated::SimulatedSensor;
use irrigation::sensors::{FixedSensor, Reading};

const INTERVALS: usize = 10;

// ── Command line ──────────────────────────────────────────────

#[derive(Debug, Default)]
struct Args {
    preset: RulePreset,
    weather: bool,
    seed: Option<u64>,
    reading: Option<Reading>,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut numbers = Vec::new();

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--three-term" => args.preset = RulePreset::ThreeTerm,
            "--weather" => args.weather = true,
            "--seed" => {
                let raw = argv.next().context("--seed needs a value")?;
                args.seed = Some(raw.parse().with_context(|| format!("bad seed {raw:?}"))?);
            }
            other if other.starts_with("--") => bail!("unknown flag {other}"),
            value => numbers.push(
                value
                    .parse::<f32>()
                    .with_context(|| format!("not a number: {value:?}"))?,
            ),
        }
    }

    match numbers.as_slice() {
        [] => {}
        &[t, h, m] => args.reading = Some(Reading::new(t, h, m)),
        _ => bail!("expected TEMP HUMIDITY MOISTURE, got {} values", numbers.len()),
    }
    Ok(args)
}

// ── Output ────────────────────────────────────────────────────

fn print_trace(rec: &Recommendation) {
    let r = &rec.reading;
    let mu = &rec.memberships;
    println!(
        "Reading: {:.1} \u{00b0}C | {:.1} % humidity | {:.1} % soil moisture",
        r.temperature_c, r.humidity_percent, r.moisture_percent
    );
    println!("Memberships:");
    if let Some(cold) = mu.temp_cold {
        println!("  temperature cold     {cold:.2}");
    }
    println!("  temperature optimal  {:.2}", mu.temp_optimal);
    println!("  temperature hot      {:.2}", mu.temp_hot);
    println!("  humidity low         {:.2}", mu.humidity_low);
    if let Some(optimal) = mu.humidity_optimal {
        println!("  humidity optimal     {optimal:.2}");
    }
    println!("  humidity high        {:.2}", mu.humidity_high);
    println!("  soil dry             {:.2}", mu.soil_dry);
    println!("  soil moist           {:.2}", mu.soil_moist);
    println!("  soil wet             {:.2}", mu.soil_wet);
    println!(
        "Rule strengths: low {:.2} | medium {:.2} | high {:.2}",
        rec.strengths.low, rec.strengths.medium, rec.strengths.high
    );
    println!("Recommended watering time: {:.1} minutes", rec.duration_minutes);
}

fn print_table(records: &[DecisionRecord]) {
    println!(
        "{:<10} | {:<6} | {:<6} | {:<6} || {:<4} {:<4} {:<4} || {:<10}",
        "Interval", "Temp", "Humid", "Moist", "Low", "Med", "High", "Result"
    );
    println!("{}", "-".repeat(75));
    for d in records {
        let rec = &d.recommendation;
        println!(
            "Interval {:<2}| {:<6.1} | {:<6.1} | {:<6.1} || {:.2} {:.2} {:.2} || {:.1} mins",
            d.interval,
            rec.reading.temperature_c,
            rec.reading.humidity_percent,
            rec.reading.moisture_percent,
            rec.strengths.low,
            rec.strengths.medium,
            rec.strengths.high,
            rec.duration_minutes,
        );
    }
}

// ── Entry ─────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    let args = parse_args(std::env::args().skip(1))?;
    let mut config = FuzzyConfig::with_preset(args.preset);
    if args.weather {
        config.simulation = SimulationRanges::weather();
    }

    let mut service = IrrigationService::new(&config).context("invalid configuration")?;
    let mut sink = LogEventSink::new();
    service.start(&mut sink);

    if let Some(reading) = args.reading {
        let mut sensor = FixedSensor::new(reading);
        let record = service.tick(&mut sensor, &mut sink)?;
        print_trace(&record.recommendation);
        return Ok(());
    }

    println!("Starting Fuzzy Logic Irrigation Simulation");
    let records = match args.seed {
        Some(seed) => {
            info!("simulating with seed {seed}");
            let mut sensor = SimulatedSensor::seeded(seed, config.simulation)?;
            service.run::<INTERVALS>(&mut sensor, &mut sink)?
        }
        None => {
            let mut sensor = SimulatedSensor::from_entropy(config.simulation)?;
            service.run::<INTERVALS>(&mut sensor, &mut sink)?
        }
    };
    print_table(&records);
    Ok(())
}

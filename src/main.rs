use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use pendulum_tuner::{logging, session, Backend, RunReport, Settings};

#[derive(Parser, Debug)]
#[command(name = "pendulum-tuner")]
#[command(about = "Measure a pendulum's period from a proximity sensor")]
struct Args {
    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sensor backend (overrides the settings file)
    #[arg(short, long, value_enum)]
    sensor: Option<Backend>,

    /// Seconds to wait before sampling starts
    #[arg(short, long)]
    warmup: Option<f64>,

    /// Write the run report as JSON to this file when done
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(sensor) = args.sensor {
        settings.sensor.backend = sensor;
    }
    if let Some(warmup) = args.warmup {
        settings.run.warmup_secs = warmup;
    }
    settings.validate()?;

    logging::init(&settings.log)?;

    let report = session::run(&settings, io::stdout().lock())?;

    if let Some(path) = args.export {
        export_to_file(&report, &path)?;
    }
    Ok(())
}

/// Export the run report to a JSON file
fn export_to_file(report: &RunReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    eprintln!("Exported run report to: {}", path.display());
    Ok(())
}

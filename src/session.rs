//! Program sequencing: build the collaborators for the chosen backend,
//! wait for the pendulum to be started, then run the engine.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use pendulum_adapters::sim::SimulatedPendulum;
use pendulum_adapters::sysfs::{SysfsInput, SysfsOutput};
use pendulum_core::sim::ManualClock;
use pendulum_core::{
    Delay, Engine, Indicator, MonotonicTicks, PassSource, PollingPassSource, RunReport,
    ThreadDelay, TickSource, Timer, TracingReporter,
};
use tracing::info;

use crate::console::ConsoleReporter;
use crate::settings::{Backend, Settings};

/// Run one measurement with the backend selected in `settings`, writing
/// progress lines to `out`.
pub fn run<W: Write>(settings: &Settings, out: W) -> Result<RunReport> {
    match settings.sensor.backend {
        Backend::Sim => run_simulated(settings, out),
        Backend::Sysfs => run_sysfs(settings, out),
    }
}

/// Simulated pendulum on simulated time; completes immediately.
fn run_simulated<W: Write>(settings: &Settings, mut out: W) -> Result<RunReport> {
    let clock = ManualClock::new();
    let mut pendulum = SimulatedPendulum::builder(clock.clone())
        .period(secs(settings.sim.period_secs, "sim.period_secs")?)
        .dwell(secs(settings.sim.dwell_secs, "sim.dwell_secs")?);
    if let Some(stall) = settings.sim.stall_after_secs {
        pendulum = pendulum.stall_after(secs(stall, "sim.stall_after_secs")?);
    }
    info!(period = settings.sim.period_secs, "using simulated pendulum");
    writeln!(
        out,
        "Simulated pendulum ({}s period), no sensor is read.",
        settings.sim.period_secs
    )
    .context("Failed to write report")?;

    let engine = Engine::new(
        Timer::new(clock.clone()),
        PollingPassSource::new(pendulum.build(), clock.clone()),
    );
    measure(engine, clock, warmup(settings)?, out)
}

/// Real sensor on sysfs GPIO and wall-clock time.
fn run_sysfs<W: Write>(settings: &Settings, out: W) -> Result<RunReport> {
    let root = &settings.sysfs.root;
    let input = SysfsInput::open(root, settings.sensor.pin)
        .with_context(|| format!("Failed to open sensor GPIO {}", settings.sensor.pin))?
        .active_low(settings.sensor.active_low);

    let indicator = settings
        .indicator
        .pin
        .map(|pin| {
            SysfsOutput::open(root, pin)
                .map(|led| led.active_low(settings.indicator.active_low))
                .with_context(|| format!("Failed to open indicator GPIO {}", pin))
        })
        .transpose()?;
    info!(
        sensor = settings.sensor.pin,
        indicator = ?settings.indicator.pin,
        root = %root.display(),
        "using sysfs GPIO"
    );

    let engine = Engine::new(
        Timer::new(MonotonicTicks::new()),
        PollingPassSource::new(input, ThreadDelay),
    )
    .with_indicator(indicator);
    measure(engine, ThreadDelay, warmup(settings)?, out)
}

fn warmup(settings: &Settings) -> Result<Duration> {
    secs(settings.run.warmup_secs, "run.warmup_secs")
}

fn secs(value: f64, name: &str) -> Result<Duration> {
    Duration::try_from_secs_f64(value).with_context(|| format!("{} is out of range: {}", name, value))
}

/// Announce the warm-up, sleep through it, then run every window.
pub fn measure<T, P, X, D, W>(
    mut engine: Engine<T, P, X>,
    mut delay: D,
    warmup: Duration,
    out: W,
) -> Result<RunReport>
where
    T: TickSource,
    P: PassSource<T>,
    X: Indicator,
    D: Delay,
    W: Write,
{
    let mut console = ConsoleReporter::new(out);
    console.line(format_args!(
        "Sleeping for {} seconds, start the pendulum.",
        warmup.as_secs_f64()
    ));
    delay.sleep(warmup);
    console.line("Starting counter");

    let mut reporters = (console, TracingReporter);
    let report = engine.run(&mut reporters).context("Sampling loop lost track of the timer")?;

    let (console, _) = reporters;
    console.finish().context("Failed to write report")?;
    Ok(report)
}

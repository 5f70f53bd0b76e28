//! # pendulum-core
//!
//! Timing and sampling engine for measuring a pendulum's oscillation period.
//!
//! The engine polls a binary proximity sensor, counts falling edges as the
//! bob passes over it, and repeats this over several fixed-length windows
//! before averaging the per-window period estimates.
//!
//! ## Quick Start
//!
//! ```rust
//! use pendulum_core::sim::ManualClock;
//! use pendulum_core::{DigitalInput, Engine, PollingPassSource, RecordingReporter, Timer};
//!
//! // A sensor that never sees the bob.
//! struct Idle;
//!
//! impl DigitalInput for Idle {
//!     fn read(&mut self) -> bool {
//!         true
//!     }
//! }
//!
//! let clock = ManualClock::new();
//! let timer = Timer::new(clock.clone());
//! let passes = PollingPassSource::new(Idle, clock.clone());
//!
//! let mut engine = Engine::new(timer, passes);
//! let mut reporter = RecordingReporter::default();
//! let report = engine.run(&mut reporter).unwrap();
//!
//! assert!(!report.summary.is_complete());
//! ```
//!
//! ## Building blocks
//!
//! - **[`Timer`]**: a start/stop/restart stopwatch over any [`TickSource`],
//!   safe across one counter rollover
//! - **[`PassSource`]**: anything that can count bob passes while a window
//!   is open; [`PollingPassSource`] does it by fixed-rate polling
//! - **[`Aggregate`]**: folds window reports into a [`Summary`]
//! - **[`Engine`]**: drives the windows and reports progress to a [`Reporter`]

mod aggregate;
mod edge;
mod engine;
mod error;
mod io;
mod pass;
mod report;
mod tick;
mod timer;

pub mod sim;

pub use aggregate::Aggregate;
pub use edge::EdgeDetector;
pub use engine::Engine;
pub use error::TimerError;
pub use io::{Delay, DigitalInput, Indicator, NoIndicator, ThreadDelay};
pub use pass::{PassSource, PollingPassSource};
pub use report::{RecordingReporter, ReportEvent, Reporter, TracingReporter};
pub use tick::{ticks_diff, MonotonicTicks, TickSource};
pub use timer::Timer;

// Re-export types for convenience
pub use pendulum_types::{
    RunReport, Seconds, Summary, WindowReport, MAX_SAMPLES, POLL_INTERVAL, WINDOW_DURATION,
};

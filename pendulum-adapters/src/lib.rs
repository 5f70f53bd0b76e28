//! # pendulum-adapters
//!
//! Ready-made collaborators for the pendulum sampling engine.
//!
//! ## Supported Backends
//!
//! - **Simulation** (`sim` feature) - A pendulum swinging over a sensor on
//!   simulated time, with optional sensor dropout
//! - **Linux sysfs GPIO** (`sysfs` feature) - Reads the sensor from
//!   `/sys/class/gpio/gpioN/value` and drives an indicator pin
//!
//! ## Quick Start (simulation)
//!
//! ```rust
//! use pendulum_adapters::sim::SimulatedPendulum;
//! use pendulum_core::sim::ManualClock;
//! use pendulum_core::{Engine, PollingPassSource, RecordingReporter, Seconds, Timer};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let pendulum = SimulatedPendulum::builder(clock.clone())
//!     .period(Duration::from_secs(2))
//!     .build();
//!
//! let mut engine = Engine::new(
//!     Timer::new(clock.clone()),
//!     PollingPassSource::new(pendulum, clock),
//! );
//! let report = engine.run(&mut RecordingReporter::default()).unwrap();
//! assert_eq!(report.summary.mean_period(), Some(Seconds::new(2.0)));
//! ```

pub mod error;

#[cfg(feature = "sim")]
pub mod sim;

#[cfg(feature = "sysfs")]
pub mod sysfs;

pub use error::AdapterError;

// Re-export the capability traits for convenience
pub use pendulum_core::{Delay, DigitalInput, Indicator};

//! # pendulum-tuner
//!
//! Measures a pendulum's period by timing passes of the bob over a
//! proximity sensor, for regulating clock pendulums.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         pendulum-tuner                       │
//! │  ┌──────────┐    ┌──────────┐    ┌───────────┐   ┌─────────┐ │
//! │  │ settings │───▶│ session  │───▶│  Engine   │──▶│ console │ │
//! │  │ (config) │    │ (wiring) │    │  (core)   │   │ (stdout)│ │
//! │  └──────────┘    └────┬─────┘    └─────▲─────┘   └─────────┘ │
//! │                       │                │                     │
//! │                       ▼                │                     │
//! │                 ┌───────────┐          │                     │
//! │                 │ adapters  │──────────┘                     │
//! │                 │ sim|sysfs │                                │
//! │                 └───────────┘                                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`settings`]**: layered configuration (defaults, TOML file, environment)
//! - **[`session`]**: builds the sensor, timer and indicator for the selected
//!   backend and runs the warm-up and measurement sequence
//! - **[`console`]**: prints per-window and summary lines
//! - **[`logging`]**: tracing subscriber setup
//!
//! ## Usage
//!
//! ```bash
//! # Real sensor on GPIO 12, indicator on GPIO 2
//! PENDULUM_INDICATOR__PIN=2 pendulum-tuner --export run.json
//!
//! # Simulated 2 s pendulum, finishes immediately
//! pendulum-tuner --sensor sim
//! ```
//!
//! ### As a library
//!
//! ```
//! use pendulum_tuner::{session, Backend, Settings};
//!
//! let mut settings = Settings::default();
//! settings.sensor.backend = Backend::Sim;
//! settings.run.warmup_secs = 0.0;
//!
//! let report = session::run(&settings, std::io::sink()).unwrap();
//! assert!(report.summary.is_complete());
//! ```

pub mod console;
pub mod logging;
pub mod session;
pub mod settings;

// Re-export main types for convenience
pub use console::ConsoleReporter;
pub use pendulum_types::{RunReport, Seconds, Summary, WindowReport};
pub use settings::{Backend, Settings};

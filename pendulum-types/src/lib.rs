//! # pendulum-types
//!
//! Core types for pendulum period measurement. This crate defines the values
//! that flow out of a measurement run: elapsed times, per-window reports and
//! the final summary.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable the `serde` feature to export run reports
//! - **Fixed sampling policy**: Window length, window count and polling cadence are constants
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: JSON/TOML/etc. serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use pendulum_types::{Seconds, Summary, WindowReport};
//!
//! let report = WindowReport::new(1, 4);
//! assert_eq!(report.period_estimate(), Some(Seconds::new(30.0)));
//!
//! let failed = WindowReport::new(2, 0);
//! assert_eq!(failed.period_estimate(), None);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod report;
mod seconds;
mod window;

pub use report::*;
pub use seconds::*;
pub use window::*;

/// Number of independent windows sampled in one run.
pub const MAX_SAMPLES: u32 = 5;

/// Length of one sampling window.
pub const WINDOW_DURATION: Seconds = Seconds::new(60.0);

/// Time between two consecutive sensor reads.
pub const POLL_INTERVAL: Seconds = Seconds::new(0.01);

/// Numerator of the period estimate.
///
/// The bob crosses the sensor twice per oscillation, so a window of
/// [`WINDOW_DURATION`] seconds seeing `n` edges implies a period of
/// `2 * 60 / n` seconds.
pub const PERIOD_NUMERATOR: f64 = 120.0;

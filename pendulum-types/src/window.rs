//! Per-window measurement results.

use crate::{Seconds, PERIOD_NUMERATOR};

/// Outcome of one sampling window.
///
/// `pass_count` is the number of falling edges seen on the sensor while the
/// window was open. It is an edge count, not a swing count: one full
/// oscillation crosses the sensor twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowReport {
    /// 1-based position of the window in the run.
    pub index: u32,

    /// Falling edges counted while the window was open.
    pub pass_count: u32,
}

impl WindowReport {
    /// Create a report for a closed window.
    pub const fn new(index: u32, pass_count: u32) -> Self {
        Self { index, pass_count }
    }

    /// Whether the sensor saw the bob at all during this window.
    pub const fn swing_detected(&self) -> bool {
        self.pass_count > 0
    }

    /// Estimated oscillation period, `120 / pass_count` seconds.
    ///
    /// Returns `None` when no swing was detected.
    pub fn period_estimate(&self) -> Option<Seconds> {
        if self.swing_detected() {
            Some(Seconds::new(PERIOD_NUMERATOR / f64::from(self.pass_count)))
        } else {
            None
        }
    }
}

//! Folding window reports into a run summary.

use pendulum_types::{Seconds, Summary, WindowReport};

/// Running totals across the windows of a run.
///
/// Failed windows (no swing detected) count toward the window total but add
/// nothing to the period sum. A single failed window makes the final
/// summary [`Summary::Incomplete`], whatever the other windows report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregate {
    total_windows: u32,
    sum_of_periods: Seconds,
    failed_windows: u32,
}

impl Aggregate {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a closed window.
    pub fn record(&mut self, report: &WindowReport) {
        self.total_windows += 1;
        match report.period_estimate() {
            Some(period) => self.sum_of_periods += period,
            None => self.failed_windows += 1,
        }
    }

    /// Windows recorded so far.
    pub fn total_windows(&self) -> u32 {
        self.total_windows
    }

    /// Sum of the period estimates of successful windows.
    pub fn sum_of_periods(&self) -> Seconds {
        self.sum_of_periods
    }

    /// Whether any recorded window saw no swing. Never resets.
    pub fn any_window_failed(&self) -> bool {
        self.failed_windows > 0
    }

    /// Produce the final summary.
    ///
    /// The mean divides by every recorded window. An aggregate with no
    /// windows has nothing to average and is reported as incomplete.
    pub fn finish(&self) -> Summary {
        if self.any_window_failed() || self.total_windows == 0 {
            Summary::Incomplete {
                windows: self.total_windows,
                failed_windows: self.failed_windows,
            }
        } else {
            Summary::Average {
                windows: self.total_windows,
                mean_period: self.sum_of_periods / self.total_windows,
            }
        }
    }
}

//! Run-level results.

use alloc::vec::Vec;

use crate::{Seconds, WindowReport};

/// Final outcome of a measurement run.
///
/// A run either produces a mean period over every window, or refuses to
/// average because at least one window saw no swing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum Summary {
    /// Every window produced a period estimate.
    Average {
        /// Number of windows that were averaged.
        windows: u32,
        /// Sum of the per-window periods divided by `windows`.
        mean_period: Seconds,
    },

    /// One or more windows saw no swing, so no average is reported.
    Incomplete {
        /// Number of windows sampled.
        windows: u32,
        /// Windows with a zero pass count.
        failed_windows: u32,
    },
}

impl Summary {
    /// Number of windows the summary covers.
    pub const fn windows(&self) -> u32 {
        match self {
            Summary::Average { windows, .. } | Summary::Incomplete { windows, .. } => *windows,
        }
    }

    /// The averaged period, if the run was complete.
    pub const fn mean_period(&self) -> Option<Seconds> {
        match self {
            Summary::Average { mean_period, .. } => Some(*mean_period),
            Summary::Incomplete { .. } => None,
        }
    }

    /// Whether every window detected a swing.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Summary::Average { .. })
    }
}

/// Everything a run produced: each window in order, the summary, and the
/// total time the timer was running across all windows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    /// Window reports in sampling order.
    pub windows: Vec<WindowReport>,

    /// Averaged outcome.
    pub summary: Summary,

    /// Sum of every window's timer reading, from `start` to the final `stop`.
    pub elapsed: Seconds,
}

impl RunReport {
    /// Bundle the results of a finished run.
    pub fn new(windows: Vec<WindowReport>, summary: Summary, elapsed: Seconds) -> Self {
        Self {
            windows,
            summary,
            elapsed,
        }
    }

    /// Windows that saw no swing.
    pub fn failed_windows(&self) -> impl Iterator<Item = &WindowReport> {
        self.windows.iter().filter(|w| !w.swing_detected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn average_accessors() {
        let summary = Summary::Average {
            windows: 5,
            mean_period: Seconds::new(2.0),
        };
        assert!(summary.is_complete());
        assert_eq!(summary.windows(), 5);
        assert_eq!(summary.mean_period(), Some(Seconds::new(2.0)));
    }

    #[test]
    fn incomplete_has_no_mean() {
        let summary = Summary::Incomplete {
            windows: 5,
            failed_windows: 1,
        };
        assert!(!summary.is_complete());
        assert_eq!(summary.windows(), 5);
        assert_eq!(summary.mean_period(), None);
    }

    #[test]
    fn failed_windows_filters_zero_counts() {
        let report = RunReport::new(
            vec![
                WindowReport::new(1, 4),
                WindowReport::new(2, 0),
                WindowReport::new(3, 4),
            ],
            Summary::Incomplete {
                windows: 3,
                failed_windows: 1,
            },
            Seconds::new(180.0),
        );
        let failed: Vec<u32> = report.failed_windows().map(|w| w.index).collect();
        assert_eq!(failed, vec![2]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn summary_is_tagged() {
        let json = serde_json::to_value(Summary::Average {
            windows: 5,
            mean_period: Seconds::new(30.0),
        })
        .unwrap();
        assert_eq!(json["outcome"], "average");
        assert_eq!(json["mean_period"], 30.0);

        let json = serde_json::to_value(Summary::Incomplete {
            windows: 5,
            failed_windows: 2,
        })
        .unwrap();
        assert_eq!(json["outcome"], "incomplete");
        assert_eq!(json["failed_windows"], 2);
    }
}

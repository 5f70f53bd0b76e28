//! Progress reporting.
//!
//! The engine announces each stage of a run to a [`Reporter`]. The order of
//! calls is fixed: `run_started`, then `window_started`/`window_closed` for
//! each window, then `finished`.

use pendulum_types::{Summary, WindowReport};
use tracing::{info, warn};

/// Receives progress from a running engine.
pub trait Reporter {
    /// A run is about to sample `windows` windows.
    fn run_started(&mut self, _windows: u32) {}

    /// Window `index` (1-based) has opened.
    fn window_started(&mut self, _index: u32) {}

    /// A window has closed with its pass count.
    fn window_closed(&mut self, report: &WindowReport);

    /// All windows are done.
    fn finished(&mut self, summary: &Summary);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn run_started(&mut self, windows: u32) {
        (**self).run_started(windows)
    }

    fn window_started(&mut self, index: u32) {
        (**self).window_started(index)
    }

    fn window_closed(&mut self, report: &WindowReport) {
        (**self).window_closed(report)
    }

    fn finished(&mut self, summary: &Summary) {
        (**self).finished(summary)
    }
}

/// Fans every callback out to two reporters, first `A` then `B`.
impl<A: Reporter, B: Reporter> Reporter for (A, B) {
    fn run_started(&mut self, windows: u32) {
        self.0.run_started(windows);
        self.1.run_started(windows);
    }

    fn window_started(&mut self, index: u32) {
        self.0.window_started(index);
        self.1.window_started(index);
    }

    fn window_closed(&mut self, report: &WindowReport) {
        self.0.window_closed(report);
        self.1.window_closed(report);
    }

    fn finished(&mut self, summary: &Summary) {
        self.0.finished(summary);
        self.1.finished(summary);
    }
}

/// Reports progress as `tracing` events only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn run_started(&mut self, windows: u32) {
        info!(windows, "run started");
    }

    fn window_started(&mut self, index: u32) {
        info!(window = index, "window started");
    }

    fn window_closed(&mut self, report: &WindowReport) {
        match report.period_estimate() {
            Some(period) => info!(
                window = report.index,
                passes = report.pass_count,
                period = period.as_secs_f64(),
                "window closed"
            ),
            None => warn!(window = report.index, "swing not detected"),
        }
    }

    fn finished(&mut self, summary: &Summary) {
        match summary {
            Summary::Average {
                windows,
                mean_period,
            } => info!(windows, mean_period = mean_period.as_secs_f64(), "run finished"),
            Summary::Incomplete {
                windows,
                failed_windows,
            } => warn!(windows, failed_windows, "run finished without an average"),
        }
    }
}

/// A single reporter callback, as recorded by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    RunStarted(u32),
    WindowStarted(u32),
    WindowClosed(WindowReport),
    Finished(Summary),
}

/// Keeps every callback in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub events: Vec<ReportEvent>,
}

impl RecordingReporter {
    /// Window reports in the order they closed.
    pub fn windows(&self) -> Vec<WindowReport> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::WindowClosed(report) => Some(*report),
                _ => None,
            })
            .collect()
    }

    /// The summary, once the run has finished.
    pub fn summary(&self) -> Option<Summary> {
        self.events.iter().find_map(|e| match e {
            ReportEvent::Finished(summary) => Some(*summary),
            _ => None,
        })
    }
}

impl Reporter for RecordingReporter {
    fn run_started(&mut self, windows: u32) {
        self.events.push(ReportEvent::RunStarted(windows));
    }

    fn window_started(&mut self, index: u32) {
        self.events.push(ReportEvent::WindowStarted(index));
    }

    fn window_closed(&mut self, report: &WindowReport) {
        self.events.push(ReportEvent::WindowClosed(*report));
    }

    fn finished(&mut self, summary: &Summary) {
        self.events.push(ReportEvent::Finished(*summary));
    }
}

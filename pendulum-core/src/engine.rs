//! The sampling loop.

use pendulum_types::{RunReport, Seconds, WindowReport, MAX_SAMPLES, WINDOW_DURATION};
use tracing::debug;

use crate::io::{Indicator, NoIndicator};
use crate::pass::PassSource;
use crate::report::Reporter;
use crate::tick::TickSource;
use crate::{Aggregate, Timer, TimerError};

/// Drives [`MAX_SAMPLES`] windows of [`WINDOW_DURATION`] each and averages
/// their period estimates.
///
/// The engine owns the timer for the whole run. It starts the timer once,
/// restarts it at the top of every window, and stops it after the last
/// window. A window with no passes is reported and the run carries on. There
/// are no retries.
pub struct Engine<T, P, X = NoIndicator> {
    timer: Timer<T>,
    passes: P,
    indicator: X,
}

impl<T, P> Engine<T, P, NoIndicator>
where
    T: TickSource,
    P: PassSource<T>,
{
    /// Create an engine with no status indicator.
    pub fn new(timer: Timer<T>, passes: P) -> Self {
        Self {
            timer,
            passes,
            indicator: NoIndicator,
        }
    }
}

impl<T, P, X> Engine<T, P, X>
where
    T: TickSource,
    P: PassSource<T>,
    X: Indicator,
{
    /// Light `indicator` while each window is sampling.
    pub fn with_indicator<Y: Indicator>(self, indicator: Y) -> Engine<T, P, Y> {
        Engine {
            timer: self.timer,
            passes: self.passes,
            indicator,
        }
    }

    /// The engine's timer.
    pub fn timer(&self) -> &Timer<T> {
        &self.timer
    }

    /// The pass source.
    pub fn passes(&self) -> &P {
        &self.passes
    }

    /// The status indicator.
    pub fn indicator(&self) -> &X {
        &self.indicator
    }

    /// Run every window and return the results.
    ///
    /// Fails only on timer misuse, for example when the timer was already
    /// running before the call.
    pub fn run<R: Reporter + ?Sized>(&mut self, reporter: &mut R) -> Result<RunReport, TimerError> {
        self.timer.start()?;
        reporter.run_started(MAX_SAMPLES);

        let mut aggregate = Aggregate::new();
        let mut windows = Vec::with_capacity(MAX_SAMPLES as usize);
        let mut elapsed = Seconds::ZERO;
        for index in 1..=MAX_SAMPLES {
            // Each restart discards the running value, so bank it first.
            elapsed += self.timer.value()?;
            let report = self.sample_window(index, reporter)?;
            aggregate.record(&report);
            windows.push(report);
        }

        elapsed += self.timer.stop()?;
        let summary = aggregate.finish();
        reporter.finished(&summary);

        Ok(RunReport::new(windows, summary, elapsed))
    }

    fn sample_window<R: Reporter + ?Sized>(
        &mut self,
        index: u32,
        reporter: &mut R,
    ) -> Result<WindowReport, TimerError> {
        self.timer.restart()?;
        reporter.window_started(index);

        self.indicator.set(true);
        let counted = self.passes.count_passes(&self.timer, WINDOW_DURATION);
        self.indicator.set(false);

        let report = WindowReport::new(index, counted?);
        debug!(window = index, passes = report.pass_count, "window closed");
        reporter.window_closed(&report);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ManualClock;
    use crate::{RecordingReporter, ReportEvent, Summary};
    use std::collections::VecDeque;

    /// Returns canned pass counts and advances the clock one window each.
    struct Canned {
        clock: ManualClock,
        counts: VecDeque<u32>,
    }

    impl PassSource<ManualClock> for Canned {
        fn count_passes(
            &mut self,
            timer: &Timer<ManualClock>,
            window: Seconds,
        ) -> Result<u32, TimerError> {
            assert_eq!(timer.value()?, Seconds::ZERO);
            self.clock.advance(window.to_duration());
            Ok(self.counts.pop_front().unwrap_or(0))
        }
    }

    #[derive(Debug, Default)]
    struct Lamp {
        history: Vec<bool>,
    }

    impl Indicator for Lamp {
        fn set(&mut self, lit: bool) {
            self.history.push(lit);
        }
    }

    fn engine(counts: &[u32]) -> Engine<ManualClock, Canned> {
        let clock = ManualClock::new();
        let canned = Canned {
            clock: clock.clone(),
            counts: counts.iter().copied().collect(),
        };
        Engine::new(Timer::new(clock), canned)
    }

    #[test]
    fn reports_in_sequence() {
        let mut engine = engine(&[4, 4, 4, 4, 4]);
        let mut reporter = RecordingReporter::default();
        engine.run(&mut reporter).unwrap();

        let mut expected = vec![ReportEvent::RunStarted(5)];
        for i in 1..=5 {
            expected.push(ReportEvent::WindowStarted(i));
            expected.push(ReportEvent::WindowClosed(WindowReport::new(i, 4)));
        }
        expected.push(ReportEvent::Finished(Summary::Average {
            windows: 5,
            mean_period: Seconds::new(30.0),
        }));
        assert_eq!(reporter.events, expected);
    }

    #[test]
    fn timer_is_stopped_after_run() {
        let mut engine = engine(&[4, 4, 4, 4, 4]);
        let report = engine.run(&mut RecordingReporter::default()).unwrap();
        assert!(!engine.timer().is_running());
        assert_eq!(report.elapsed, Seconds::new(300.0));
    }

    #[test]
    fn elapsed_covers_time_before_the_first_window() {
        // Time spent between start and the first restart still counts.
        struct Late(ManualClock);
        impl Reporter for Late {
            fn run_started(&mut self, _windows: u32) {
                self.0.advance(std::time::Duration::from_millis(250));
            }
            fn window_closed(&mut self, _report: &WindowReport) {}
            fn finished(&mut self, _summary: &Summary) {}
        }

        let clock = ManualClock::new();
        let canned = Canned {
            clock: clock.clone(),
            counts: VecDeque::from(vec![4; 5]),
        };
        let mut engine = Engine::new(Timer::new(clock.clone()), canned);
        let report = engine.run(&mut Late(clock)).unwrap();
        assert_eq!(report.elapsed, Seconds::new(300.25));
    }

    #[test]
    fn already_running_timer_is_rejected() {
        let clock = ManualClock::new();
        let mut timer = Timer::new(clock.clone());
        timer.start().unwrap();
        let canned = Canned {
            clock,
            counts: VecDeque::new(),
        };
        let mut engine = Engine::new(timer, canned);
        let mut reporter = RecordingReporter::default();

        assert_eq!(engine.run(&mut reporter), Err(TimerError::AlreadyRunning));
        assert!(reporter.events.is_empty());
    }

    #[test]
    fn indicator_lit_only_while_sampling() {
        let mut engine = engine(&[4, 0, 4, 4, 4]).with_indicator(Lamp::default());
        engine.run(&mut RecordingReporter::default()).unwrap();
        assert_eq!(engine.indicator().history, [true, false].repeat(5));
    }
}

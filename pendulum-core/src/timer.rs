//! Elapsed-time stopwatch.

use pendulum_types::Seconds;

use crate::tick::{ticks_diff, TickSource};
use crate::TimerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Running { start: u64 },
}

/// A stopwatch over a [`TickSource`].
///
/// The timer is either idle or running from a recorded start tick. Every
/// operation that does not fit the current state returns a [`TimerError`]
/// instead of clamping or returning zero.
///
/// | operation   | Idle              | Running                    |
/// |-------------|-------------------|----------------------------|
/// | `start`     | → Running         | `AlreadyRunning`           |
/// | `stop`      | `NotRunning`      | → Idle, returns elapsed    |
/// | `restart`   | `NotRunning`      | → Running, elapsed reset   |
/// | `value`     | `NotRunning`      | returns elapsed            |
///
/// # Example
///
/// ```rust
/// use pendulum_core::sim::ManualClock;
/// use pendulum_core::{Seconds, Timer, TimerError};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let mut timer = Timer::new(clock.clone());
///
/// assert_eq!(timer.value(), Err(TimerError::NotRunning));
///
/// timer.start().unwrap();
/// clock.advance(Duration::from_millis(1500));
/// assert_eq!(timer.value(), Ok(Seconds::new(1.5)));
/// assert_eq!(timer.stop(), Ok(Seconds::new(1.5)));
/// ```
#[derive(Debug)]
pub struct Timer<T> {
    source: T,
    state: State,
}

impl<T: TickSource> Timer<T> {
    /// Create an idle timer reading from `source`.
    pub fn new(source: T) -> Self {
        Self {
            source,
            state: State::Idle,
        }
    }

    /// Whether the timer is currently running.
    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    /// The underlying tick source.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Start timing from the current tick.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.is_running() {
            return Err(TimerError::AlreadyRunning);
        }
        self.state = State::Running {
            start: self.source.now_ticks(),
        };
        Ok(())
    }

    /// Stop the timer and return the time elapsed since `start` or the last
    /// `restart`.
    pub fn stop(&mut self) -> Result<Seconds, TimerError> {
        let elapsed = self.value()?;
        self.state = State::Idle;
        Ok(elapsed)
    }

    /// Reset elapsed time to zero without leaving the running state.
    pub fn restart(&mut self) -> Result<(), TimerError> {
        match self.state {
            State::Running { .. } => {
                self.state = State::Running {
                    start: self.source.now_ticks(),
                };
                Ok(())
            }
            State::Idle => Err(TimerError::NotRunning),
        }
    }

    /// Time elapsed since `start` or the last `restart`.
    pub fn value(&self) -> Result<Seconds, TimerError> {
        match self.state {
            State::Running { start } => {
                let ticks = ticks_diff(self.source.now_ticks(), start, self.source.period());
                Ok(self.source.to_seconds(ticks))
            }
            State::Idle => Err(TimerError::NotRunning),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ManualClock;
    use crate::MonotonicTicks;
    use std::time::Duration;

    #[test]
    fn start_twice_fails() {
        let mut timer = Timer::new(ManualClock::new());
        timer.start().unwrap();
        assert_eq!(timer.start(), Err(TimerError::AlreadyRunning));
        assert!(timer.is_running());
    }

    #[test]
    fn idle_operations_fail() {
        let mut timer = Timer::new(ManualClock::new());
        assert_eq!(timer.stop(), Err(TimerError::NotRunning));
        assert_eq!(timer.restart(), Err(TimerError::NotRunning));
        assert_eq!(timer.value(), Err(TimerError::NotRunning));
        assert!(!timer.is_running());
    }

    #[test]
    fn stop_returns_to_idle() {
        let clock = ManualClock::new();
        let mut timer = Timer::new(clock.clone());
        timer.start().unwrap();
        clock.advance(Duration::from_secs(2));
        assert_eq!(timer.stop(), Ok(Seconds::new(2.0)));
        assert!(!timer.is_running());
        assert_eq!(timer.value(), Err(TimerError::NotRunning));

        // A stopped timer can be started again.
        timer.start().unwrap();
        assert_eq!(timer.value(), Ok(Seconds::ZERO));
    }

    #[test]
    fn restart_zeroes_elapsed_time() {
        let clock = ManualClock::new();
        let mut timer = Timer::new(clock.clone());
        timer.start().unwrap();
        clock.advance(Duration::from_secs(61));
        timer.restart().unwrap();
        assert!(timer.is_running());
        assert_eq!(timer.value(), Ok(Seconds::ZERO));

        clock.advance(Duration::from_millis(250));
        assert_eq!(timer.value(), Ok(Seconds::new(0.25)));
    }

    #[test]
    fn value_has_no_side_effects() {
        let clock = ManualClock::new();
        let mut timer = Timer::new(clock.clone());
        timer.start().unwrap();
        clock.advance(Duration::from_millis(10));
        assert_eq!(timer.value(), timer.value());
        assert!(timer.is_running());
    }

    #[test]
    fn elapsed_survives_rollover() {
        let period = 1 << 30;
        let clock = ManualClock::starting_at(period - 20, period);
        let mut timer = Timer::new(clock.clone());
        timer.start().unwrap();

        clock.advance(Duration::from_millis(15));
        assert_eq!(timer.value(), Ok(Seconds::new(0.015)));

        clock.advance(Duration::from_millis(15));
        assert!(clock.now_ticks() < 20);
        assert_eq!(timer.value(), Ok(Seconds::new(0.03)));
        assert_eq!(timer.stop(), Ok(Seconds::new(0.03)));
    }

    #[test]
    fn value_after_restart_within_one_tick_on_real_clock() {
        let mut timer = Timer::new(MonotonicTicks::new());
        timer.start().unwrap();
        std::thread::sleep(Duration::from_millis(5));
        timer.restart().unwrap();
        let value = timer.value().unwrap();
        assert!(value >= Seconds::ZERO);
        assert!(value <= timer.source().resolution());
    }

    #[test]
    fn stop_measures_sleep_on_real_clock() {
        let mut timer = Timer::new(MonotonicTicks::new());
        timer.start().unwrap();
        std::thread::sleep(Duration::from_millis(50));
        let elapsed = timer.stop().unwrap().as_secs_f64();
        assert!(elapsed >= 0.049, "elapsed {elapsed}");
        assert!(elapsed < 0.5, "elapsed {elapsed}");
    }
}

//! Simulated time.
//!
//! [`ManualClock`] is a millisecond tick source that only moves when told
//! to. It also implements [`Delay`], so a sampling loop that sleeps on it
//! runs as fast as the CPU allows while observing exact, repeatable
//! timestamps. Clones share the same time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::io::Delay;
use crate::tick::TickSource;

#[derive(Debug)]
struct ClockState {
    elapsed_nanos: Cell<u64>,
    origin_ticks: u64,
    period: u64,
}

/// A shared, manually advanced clock.
///
/// Ticks are milliseconds. The clock can start at any tick offset, which is
/// handy for exercising counter rollover.
#[derive(Debug, Clone)]
pub struct ManualClock {
    state: Rc<ClockState>,
}

impl ManualClock {
    /// A clock at tick zero that wraps at 2^30 ms.
    pub fn new() -> Self {
        Self::starting_at(0, crate::MonotonicTicks::DEFAULT_PERIOD)
    }

    /// A clock whose first reading is `tick`, wrapping every `period` ticks.
    pub fn starting_at(tick: u64, period: u64) -> Self {
        let period = period.max(1);
        Self {
            state: Rc::new(ClockState {
                elapsed_nanos: Cell::new(0),
                origin_ticks: tick % period,
                period,
            }),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        let elapsed = &self.state.elapsed_nanos;
        elapsed.set(elapsed.get().saturating_add(nanos));
    }

    /// Total simulated time since the clock was created. Does not wrap.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.state.elapsed_nanos.get())
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for ManualClock {
    fn now_ticks(&self) -> u64 {
        let millis = self.state.elapsed_nanos.get() / 1_000_000;
        let offset = millis % self.state.period;
        let headroom = self.state.period - self.state.origin_ticks;
        if offset >= headroom {
            offset - headroom
        } else {
            self.state.origin_ticks + offset
        }
    }

    fn period(&self) -> u64 {
        self.state.period
    }

    fn ticks_per_second(&self) -> u64 {
        1000
    }
}

impl Delay for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
    }
}

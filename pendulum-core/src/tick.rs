//! Monotonic tick sources.
//!
//! A tick source is a free-running counter that rolls over to zero after a
//! fixed period. Elapsed time is the difference of two readings taken
//! modulo that period, which stays correct as long as no more than one full
//! period passes between them.

use std::time::Instant;

use pendulum_types::Seconds;

/// A platform monotonic counter.
///
/// Implementations must document their rollover period. Readings are always
/// in `0..period()`.
pub trait TickSource {
    /// Current counter value.
    fn now_ticks(&self) -> u64;

    /// Counter value at which the counter wraps back to zero. Must be
    /// non-zero.
    fn period(&self) -> u64;

    /// Counter increments per second.
    fn ticks_per_second(&self) -> u64;

    /// Duration of a single tick.
    fn resolution(&self) -> Seconds {
        Seconds::new(1.0 / self.ticks_per_second() as f64)
    }

    /// Convert a tick count to seconds.
    fn to_seconds(&self, ticks: u64) -> Seconds {
        Seconds::new(ticks as f64 / self.ticks_per_second() as f64)
    }
}

/// Ticks from `earlier` to `later`, allowing for one rollover in between.
///
/// Both values must be below `period`.
pub fn ticks_diff(later: u64, earlier: u64, period: u64) -> u64 {
    if later >= earlier {
        later - earlier
    } else {
        (period - earlier) + later
    }
}

/// Millisecond counter backed by `std::time::Instant`.
///
/// Wraps at [`MonotonicTicks::DEFAULT_PERIOD`] (2^30 ms, about 12.4 days)
/// unless another period is given, matching the `ticks_ms` width found on
/// common microcontroller runtimes.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTicks {
    origin: Instant,
    period: u64,
}

impl MonotonicTicks {
    /// Default rollover period in milliseconds.
    pub const DEFAULT_PERIOD: u64 = 1 << 30;

    /// Create a counter starting at zero now.
    pub fn new() -> Self {
        Self::with_period(Self::DEFAULT_PERIOD)
    }

    /// Create a counter that wraps every `period` milliseconds.
    pub fn with_period(period: u64) -> Self {
        Self {
            origin: Instant::now(),
            period: period.max(1),
        }
    }
}

impl Default for MonotonicTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicTicks {
    fn now_ticks(&self) -> u64 {
        (self.origin.elapsed().as_millis() % u128::from(self.period)) as u64
    }

    fn period(&self) -> u64 {
        self.period
    }

    fn ticks_per_second(&self) -> u64 {
        1000
    }
}

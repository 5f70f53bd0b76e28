//! Elapsed time representation.
//!
//! Timer readings and period estimates are fractional seconds. The wrapper
//! keeps them distinct from raw tick counts.

use core::fmt;
use core::ops::{Add, AddAssign, Div};
use core::time::Duration;

/// A span of time in fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Seconds(f64);

impl Seconds {
    /// Zero elapsed time.
    pub const ZERO: Seconds = Seconds(0.0);

    /// Create from a number of seconds.
    pub const fn new(secs: f64) -> Self {
        Self(secs)
    }

    /// Create from whole milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self(millis as f64 / 1000.0)
    }

    /// Get the value in seconds.
    pub const fn as_secs_f64(&self) -> f64 {
        self.0
    }

    /// Convert to a standard Duration.
    ///
    /// Negative and NaN values map to zero, values too large for a
    /// `Duration` saturate.
    pub fn to_duration(&self) -> Duration {
        if self.0.is_nan() || self.0 <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(self.0).unwrap_or(Duration::MAX)
    }
}

impl From<Duration> for Seconds {
    fn from(d: Duration) -> Self {
        Self(d.as_secs_f64())
    }
}

impl From<Seconds> for Duration {
    fn from(s: Seconds) -> Self {
        s.to_duration()
    }
}

impl Add for Seconds {
    type Output = Seconds;

    fn add(self, rhs: Seconds) -> Seconds {
        Seconds(self.0 + rhs.0)
    }
}

impl AddAssign for Seconds {
    fn add_assign(&mut self, rhs: Seconds) {
        self.0 += rhs.0;
    }
}

impl Div<u32> for Seconds {
    type Output = Seconds;

    fn div(self, rhs: u32) -> Seconds {
        Seconds(self.0 / f64::from(rhs))
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}s", p, self.0),
            None => write!(f, "{:.3}s", self.0),
        }
    }
}

//! Simulated pendulum over a proximity sensor.
//!
//! The sensor idles high (pull-up) and reads low while the bob is over it.
//! The bob passes the sensor twice per oscillation, once in each direction,
//! so the sensor dips every half period.

use std::ops::Range;
use std::time::Duration;

use pendulum_core::sim::ManualClock;
use pendulum_core::DigitalInput;

const DEFAULT_PERIOD: Duration = Duration::from_secs(2);
const DEFAULT_DWELL: Duration = Duration::from_millis(50);

/// A [`DigitalInput`] that follows an ideal pendulum on a [`ManualClock`].
///
/// # Example
///
/// ```rust
/// use pendulum_adapters::sim::SimulatedPendulum;
/// use pendulum_core::sim::ManualClock;
/// use pendulum_core::DigitalInput;
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let mut pendulum = SimulatedPendulum::builder(clock.clone())
///     .period(Duration::from_secs(2))
///     .phase(Duration::from_millis(500))
///     .build();
///
/// assert!(pendulum.read());
/// clock.advance(Duration::from_millis(500));
/// assert!(!pendulum.read());
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedPendulum {
    clock: ManualClock,
    half_period: Duration,
    phase: Duration,
    dwell: Duration,
    dropouts: Vec<Range<Duration>>,
}

impl SimulatedPendulum {
    /// Create a builder reading time from `clock`.
    pub fn builder(clock: ManualClock) -> SimulatedPendulumBuilder {
        SimulatedPendulumBuilder::new(clock)
    }

    /// Time between consecutive crossings.
    pub fn half_period(&self) -> Duration {
        self.half_period
    }

    /// Whether the bob is over the sensor at time `t`.
    fn occluded_at(&self, t: Duration) -> bool {
        if self.dropouts.iter().any(|d| d.contains(&t)) {
            return false;
        }
        let Some(since_first) = t.checked_sub(self.phase) else {
            return false;
        };
        since_first.as_nanos() % self.half_period.as_nanos() < self.dwell.as_nanos()
    }
}

impl DigitalInput for SimulatedPendulum {
    fn read(&mut self) -> bool {
        !self.occluded_at(self.clock.elapsed())
    }
}

/// Builder for [`SimulatedPendulum`].
#[derive(Debug)]
pub struct SimulatedPendulumBuilder {
    clock: ManualClock,
    period: Duration,
    phase: Option<Duration>,
    dwell: Duration,
    dropouts: Vec<Range<Duration>>,
}

impl SimulatedPendulumBuilder {
    fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            period: DEFAULT_PERIOD,
            phase: None,
            dwell: DEFAULT_DWELL,
            dropouts: Vec::new(),
        }
    }

    /// Full oscillation period (default 2 s).
    pub fn period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Time of the first crossing (default a quarter period, as if released
    /// from the extreme of the swing at time zero).
    pub fn phase(mut self, phase: Duration) -> Self {
        self.phase = Some(phase);
        self
    }

    /// How long the bob occludes the sensor per crossing (default 50 ms).
    pub fn dwell(mut self, dwell: Duration) -> Self {
        self.dwell = dwell;
        self
    }

    /// The sensor sees nothing during `range` of simulated time.
    pub fn dropout(mut self, range: Range<Duration>) -> Self {
        self.dropouts.push(range);
        self
    }

    /// The pendulum stops swinging at `at` and never resumes.
    pub fn stall_after(self, at: Duration) -> Self {
        self.dropout(at..Duration::MAX)
    }

    /// Build the simulated sensor.
    ///
    /// The half period is at least 2 ns and the dwell is clamped to half of
    /// it so every crossing produces exactly one falling edge.
    pub fn build(self) -> SimulatedPendulum {
        let half_period = (self.period / 2).max(Duration::from_nanos(2));
        SimulatedPendulum {
            clock: self.clock,
            half_period,
            phase: self.phase.unwrap_or(self.period / 4),
            dwell: self.dwell.min(half_period / 2),
            dropouts: self.dropouts,
        }
    }
}

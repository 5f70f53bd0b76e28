//! Counting bob passes during a window.

use pendulum_types::{Seconds, POLL_INTERVAL};
use tracing::debug;

use crate::io::{Delay, DigitalInput};
use crate::tick::TickSource;
use crate::{EdgeDetector, Timer, TimerError};

/// A source of discrete pass events during a time window.
///
/// The engine restarts the timer, then asks the pass source how many passes
/// occurred before `timer.value()` reached `window`. Implementations may poll,
/// or drain a counter fed by interrupts.
pub trait PassSource<T: TickSource> {
    /// Count passes until the timer reaches `window`.
    fn count_passes(&mut self, timer: &Timer<T>, window: Seconds) -> Result<u32, TimerError>;
}

impl<T: TickSource, P: PassSource<T> + ?Sized> PassSource<T> for Box<P> {
    fn count_passes(&mut self, timer: &Timer<T>, window: Seconds) -> Result<u32, TimerError> {
        (**self).count_passes(timer, window)
    }
}

/// Counts falling edges by polling a [`DigitalInput`] every
/// [`POLL_INTERVAL`].
///
/// The input is read once before the loop to seed the edge detector. The
/// loop condition is checked before each sleep, so the last poll of a window
/// can land up to one interval past the window length.
#[derive(Debug)]
pub struct PollingPassSource<I, D> {
    input: I,
    delay: D,
}

impl<I: DigitalInput, D: Delay> PollingPassSource<I, D> {
    /// Poll `input`, pacing reads with `delay`.
    pub fn new(input: I, delay: D) -> Self {
        Self { input, delay }
    }

    /// The sensor input.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Consume the source, returning the input and delay.
    pub fn into_parts(self) -> (I, D) {
        (self.input, self.delay)
    }
}

impl<T, I, D> PassSource<T> for PollingPassSource<I, D>
where
    T: TickSource,
    I: DigitalInput,
    D: Delay,
{
    fn count_passes(&mut self, timer: &Timer<T>, window: Seconds) -> Result<u32, TimerError> {
        let interval = POLL_INTERVAL.to_duration();
        let mut edges = EdgeDetector::new(self.input.read());
        let mut passes = 0u32;

        while timer.value()? < window {
            self.delay.sleep(interval);
            if edges.update(self.input.read()) {
                passes += 1;
                debug!(passes, "falling edge");
            }
        }

        Ok(passes)
    }
}

//! Falling-edge detection on a sampled binary signal.

/// Tracks the previous reading of a polled input and reports high-to-low
/// transitions.
///
/// Only the last reading is kept. The seed reading never counts as an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    /// Create a detector seeded with an initial reading.
    pub const fn new(seed: bool) -> Self {
        Self { previous: seed }
    }

    /// Feed the next reading. Returns `true` on a falling edge
    /// (`previous == true && current == false`).
    pub fn update(&mut self, current: bool) -> bool {
        let falling = self.previous && !current;
        self.previous = current;
        falling
    }

    /// The most recent reading.
    pub const fn previous(&self) -> bool {
        self.previous
    }
}

//! Hardware capabilities the engine depends on.
//!
//! These traits are the boundary between the sampling logic and the
//! platform. Pin setup, pull-up configuration and the like belong to the
//! implementations.

use std::fmt::Debug;
use std::time::Duration;

/// A binary sensor input.
///
/// Reads are not debounced. Electrical bounce shows up as extra edges.
pub trait DigitalInput {
    /// Current logic level of the pin.
    fn read(&mut self) -> bool;
}

impl<I: DigitalInput + ?Sized> DigitalInput for Box<I> {
    fn read(&mut self) -> bool {
        (**self).read()
    }
}

/// A blocking delay.
pub trait Delay {
    /// Block for `duration`. There is no way to cancel a sleep once entered.
    fn sleep(&mut self, duration: Duration);
}

impl<D: Delay + ?Sized> Delay for Box<D> {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// [`Delay`] backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// A status output, lit while a sampling window is open.
pub trait Indicator: Debug {
    /// Turn the output on or off.
    fn set(&mut self, lit: bool);
}

impl<X: Indicator + ?Sized> Indicator for Box<X> {
    fn set(&mut self, lit: bool) {
        (**self).set(lit)
    }
}

/// An absent indicator is a no-op.
impl<X: Indicator> Indicator for Option<X> {
    fn set(&mut self, lit: bool) {
        if let Some(indicator) = self {
            indicator.set(lit);
        }
    }
}

/// No indicator wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndicator;

impl Indicator for NoIndicator {
    fn set(&mut self, _lit: bool) {}
}

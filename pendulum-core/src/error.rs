//! Error types for the timer.

use thiserror::Error;

/// Timer operations called in the wrong state.
///
/// These indicate a bug in the caller's sequencing, not a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// `start` was called while the timer was already running.
    #[error("Timer is already running. Use stop() to stop it or restart() to restart it")]
    AlreadyRunning,

    /// `stop`, `restart` or `value` was called on an idle timer.
    #[error("Timer is not running. Use start() to start it")]
    NotRunning,
}

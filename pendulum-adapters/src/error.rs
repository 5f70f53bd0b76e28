//! Error types for adapters.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up a hardware backend.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Reading or writing a device file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A GPIO value file held something other than `0` or `1`.
    #[error("Invalid GPIO level: {0:?}")]
    InvalidLevel(String),

    /// The pin directory did not appear after exporting.
    #[error("GPIO {0} is not exported")]
    Unexported(u32),
}

impl AdapterError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| AdapterError::Io { path, source }
    }
}

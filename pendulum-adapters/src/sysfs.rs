//! Linux sysfs GPIO backend.
//!
//! Pins live under a GPIO root (normally `/sys/class/gpio`). Opening a pin
//! exports it if its `gpioN` directory is missing and sets its direction.
//! Pull-up and pull-down resistors cannot be set through sysfs and must be
//! configured in the device tree or on the board.

use std::fs;
use std::path::{Path, PathBuf};

use pendulum_core::{DigitalInput, Indicator};
use tracing::{debug, warn};

use crate::AdapterError;

/// Default sysfs GPIO root.
pub const DEFAULT_ROOT: &str = "/sys/class/gpio";

/// Parse the contents of a `value` file.
pub fn parse_level(raw: &str) -> Result<bool, AdapterError> {
    match raw.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(AdapterError::InvalidLevel(other.to_string())),
    }
}

/// Export `pin` under `root` if needed and return its directory.
fn export(root: &Path, pin: u32) -> Result<PathBuf, AdapterError> {
    let dir = root.join(format!("gpio{pin}"));
    if !dir.is_dir() {
        let export = root.join("export");
        debug!(pin, path = %export.display(), "exporting GPIO");
        fs::write(&export, pin.to_string()).map_err(AdapterError::io(&export))?;
        if !dir.is_dir() {
            return Err(AdapterError::Unexported(pin));
        }
    }
    Ok(dir)
}

fn set_direction(dir: &Path, direction: &str) -> Result<(), AdapterError> {
    let path = dir.join("direction");
    fs::write(&path, direction).map_err(AdapterError::io(&path))
}

/// A sensor input read from a sysfs `value` file.
///
/// Read failures after opening are logged and the last good level is
/// returned, so a transient glitch looks like a held level rather than an
/// edge.
#[derive(Debug)]
pub struct SysfsInput {
    pin: u32,
    value_path: PathBuf,
    active_low: bool,
    last_level: bool,
}

impl SysfsInput {
    /// Open `pin` as an input under `root`.
    pub fn open(root: impl AsRef<Path>, pin: u32) -> Result<Self, AdapterError> {
        let dir = export(root.as_ref(), pin)?;
        set_direction(&dir, "in")?;
        let value_path = dir.join("value");
        let last_level = read_level(&value_path)?;
        Ok(Self {
            pin,
            value_path,
            active_low: false,
            last_level,
        })
    }

    /// Invert the logic level reported by [`DigitalInput::read`].
    pub fn active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    /// The GPIO number.
    pub fn pin(&self) -> u32 {
        self.pin
    }
}

fn read_level(path: &Path) -> Result<bool, AdapterError> {
    let raw = fs::read_to_string(path).map_err(AdapterError::io(path))?;
    parse_level(&raw)
}

impl DigitalInput for SysfsInput {
    fn read(&mut self) -> bool {
        match read_level(&self.value_path) {
            Ok(level) => self.last_level = level,
            Err(e) => warn!(pin = self.pin, error = %e, "GPIO read failed, holding last level"),
        }
        self.last_level != self.active_low
    }
}

/// An indicator output written to a sysfs `value` file.
#[derive(Debug)]
pub struct SysfsOutput {
    pin: u32,
    value_path: PathBuf,
    active_low: bool,
}

impl SysfsOutput {
    /// Open `pin` as an output under `root`, initially off.
    pub fn open(root: impl AsRef<Path>, pin: u32) -> Result<Self, AdapterError> {
        let dir = export(root.as_ref(), pin)?;
        set_direction(&dir, "out")?;
        let output = Self {
            pin,
            value_path: dir.join("value"),
            active_low: false,
        };
        output.write(false)?;
        Ok(output)
    }

    /// Drive the pin low to light the indicator. The pin is rewritten to
    /// the off level for the new polarity.
    pub fn active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self.set(false);
        self
    }

    /// The GPIO number.
    pub fn pin(&self) -> u32 {
        self.pin
    }

    fn write(&self, lit: bool) -> Result<(), AdapterError> {
        let level = if lit != self.active_low { "1" } else { "0" };
        fs::write(&self.value_path, level).map_err(AdapterError::io(&self.value_path))
    }
}

impl Indicator for SysfsOutput {
    fn set(&mut self, lit: bool) {
        if let Err(e) = self.write(lit) {
            warn!(pin = self.pin, error = %e, "GPIO write failed");
        }
    }
}

//! Runtime settings.
//!
//! Settings are layered from built-in defaults, an optional TOML file and
//! `PENDULUM_*` environment variables, in that order. Nested keys use a
//! double underscore in the environment: `PENDULUM_SENSOR__BACKEND=sysfs`.
//!
//! ```toml
//! [sensor]
//! backend = "sysfs"
//! pin = 12
//!
//! [indicator]
//! pin = 2
//!
//! [run]
//! warmup_secs = 3.0
//! ```
//!
//! The sampling policy (window length, window count and polling interval)
//! is fixed and has no settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Which sensor backend to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// A simulated pendulum on simulated time.
    Sim,
    /// A Linux sysfs GPIO pin.
    #[default]
    Sysfs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorSettings {
    pub backend: Backend,
    /// GPIO number of the proximity sensor.
    pub pin: u32,
    /// Treat a low level as "idle" instead of "bob present".
    pub active_low: bool,
}

impl Default for SensorSettings {
    fn default() -> Self {
        Self {
            backend: Backend::Sysfs,
            pin: 12,
            active_low: false,
        }
    }
}

/// Status LED lit while a window is sampling. Disabled unless a pin is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub pin: Option<u32>,
    pub active_low: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SysfsSettings {
    pub root: PathBuf,
}

impl Default for SysfsSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from(pendulum_adapters::sysfs::DEFAULT_ROOT),
        }
    }
}

/// Parameters of the simulated pendulum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub period_secs: f64,
    pub dwell_secs: f64,
    /// Simulated time after which the pendulum stops swinging.
    pub stall_after_secs: Option<f64>,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            period_secs: 2.0,
            dwell_secs: 0.05,
            stall_after_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Pause before sampling so the pendulum can be started.
    pub warmup_secs: f64,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self { warmup_secs: 3.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// All runtime settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sensor: SensorSettings,
    pub indicator: IndicatorSettings,
    pub sysfs: SysfsSettings,
    pub sim: SimSettings,
    pub run: RunSettings,
    pub log: LogSettings,
}

impl Settings {
    /// Load settings from an optional TOML file and the environment.
    ///
    /// Values are not checked here so that command-line overrides can still
    /// replace them; call [`Settings::validate`] once they are applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        builder = builder.add_source(
            Environment::with_prefix("PENDULUM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().with_context(|| match path {
            Some(path) => format!("Failed to load settings from {}", path.display()),
            None => "Failed to load settings".to_string(),
        })?;
        config.try_deserialize().context("Invalid settings")
    }

    /// Reject values that cannot drive a run.
    pub fn validate(&self) -> Result<()> {
        if !(self.run.warmup_secs >= 0.0 && self.run.warmup_secs.is_finite()) {
            anyhow::bail!("run.warmup_secs must be a non-negative number");
        }
        if !(self.sim.period_secs > 0.0 && self.sim.period_secs.is_finite()) {
            anyhow::bail!("sim.period_secs must be positive");
        }
        if !(self.sim.dwell_secs > 0.0 && self.sim.dwell_secs.is_finite()) {
            anyhow::bail!("sim.dwell_secs must be positive");
        }
        if let Some(stall) = self.sim.stall_after_secs {
            if !(stall >= 0.0 && stall.is_finite()) {
                anyhow::bail!("sim.stall_after_secs must be a non-negative number");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.sensor.backend, Backend::Sysfs);
        assert_eq!(settings.sensor.pin, 12);
        assert_eq!(settings.indicator.pin, None);
        assert_eq!(settings.sysfs.root, PathBuf::from("/sys/class/gpio"));
        assert_eq!(settings.run.warmup_secs, 3.0);
        assert_eq!(settings.log.level, "warn");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn file_overrides_defaults() {
        let file = write_config(
            r#"
[sensor]
backend = "sim"
pin = 17
active_low = true

[indicator]
pin = 2

[run]
warmup_secs = 0.5

[log]
level = "debug"
format = "pretty"
"#,
        );

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.sensor.backend, Backend::Sim);
        assert_eq!(settings.sensor.pin, 17);
        assert!(settings.sensor.active_low);
        assert_eq!(settings.indicator.pin, Some(2));
        assert_eq!(settings.run.warmup_secs, 0.5);
        assert_eq!(settings.log.format, LogFormat::Pretty);
        // Untouched sections keep their defaults.
        assert_eq!(settings.sim, SimSettings::default());
    }

    #[test]
    fn partial_section_keeps_other_fields() {
        let file = write_config("[sim]\nperiod_secs = 1.25\n");
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.sim.period_secs, 1.25);
        assert_eq!(settings.sim.dwell_secs, 0.05);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/pendulum.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/pendulum.toml"));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let file = write_config("[sensor]\nbackend = \"serial\"\n");
        assert!(Settings::load(Some(file.path())).is_err());
    }

    #[test]
    fn non_positive_period_is_rejected() {
        let file = write_config("[sim]\nperiod_secs = 0.0\n");
        let settings = Settings::load(Some(file.path())).unwrap();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("period_secs"));
    }

    #[test]
    fn bad_file_value_can_be_overridden_before_validation() {
        let file = write_config("[run]\nwarmup_secs = -5.0\n");
        let mut settings = Settings::load(Some(file.path())).unwrap();
        assert!(settings.validate().is_err());

        settings.run.warmup_secs = 1.0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn negative_warmup_is_rejected() {
        let mut settings = Settings::default();
        settings.run.warmup_secs = -1.0;
        assert!(settings.validate().is_err());
    }
}

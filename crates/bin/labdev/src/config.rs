//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `labdev.toml` in the working directory (or the path in
//! `LABDEV_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use labdev_app::session::SessionOptions;
use labdev_domain::container::DeviceContainer;
use labdev_domain::device::Device;
use labdev_domain::material::Material;
use labdev_domain::temperature::TemperatureScale;
use serde::Deserialize;

const DEFAULT_PATH: &str = "labdev.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Interactive session settings.
    pub session: SessionConfig,
    /// Devices added to the container before the session starts.
    pub devices: Vec<DeviceSeed>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Interactive session configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Prompt for devices before showing the main menu.
    pub add_devices_on_start: bool,
}

/// Which device variant a seed describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedKind {
    Basic,
    Temperature,
}

/// A device declared in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceSeed {
    pub kind: SeedKind,
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub min_value: f64,
    #[serde(default)]
    pub max_value: f64,
    #[serde(default)]
    pub material: Material,
    /// Display scale; required for temperature seeds only.
    pub scale: Option<TemperatureScale>,
}

impl DeviceSeed {
    /// Build the inactive device this seed describes.
    #[must_use]
    pub fn to_device(&self) -> Device {
        let builder = Device::builder()
            .name(self.name.as_str())
            .unit(self.unit.as_str())
            .min_value(self.min_value)
            .max_value(self.max_value)
            .material(self.material);
        let builder = match self.kind {
            SeedKind::Temperature => builder.temperature(self.scale.unwrap_or_default()),
            SeedKind::Basic => builder,
        };
        builder.build()
    }
}

impl Config {
    /// Load configuration from `labdev.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// seed device is inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("LABDEV_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LABDEV_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("LABDEV_ADD_ON_START") {
            if let Ok(flag) = val.parse() {
                self.session.add_devices_on_start = flag;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for seed in &self.devices {
            match (seed.kind, seed.scale) {
                (SeedKind::Temperature, None) => {
                    return Err(ConfigError::Validation(format!(
                        "temperature device '{}' needs a scale",
                        seed.name
                    )));
                }
                (SeedKind::Basic, Some(_)) => {
                    return Err(ConfigError::Validation(format!(
                        "basic device '{}' cannot have a scale",
                        seed.name
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Container holding the seed devices in declaration order.
    #[must_use]
    pub fn seed_container(&self) -> DeviceContainer {
        let mut container = DeviceContainer::new();
        for seed in &self.devices {
            container.insert_back(seed.to_device());
        }
        container
    }

    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            add_devices_on_start: self.session.add_devices_on_start,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "labdev=warn".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            add_devices_on_start: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

//! Device — a laboratory measurement device, optionally temperature-capable.
//!
//! Both variants share one struct; the temperature-specific part is reached
//! through [`Device::as_temperature`] rather than by inspecting the concrete
//! type.

use crate::error::DeviceError;
use crate::material::Material;
use crate::number::Significant;
use crate::temperature::{TemperatureProbe, TemperatureScale};

const SEPARATOR: &str = "============";

/// Which variant of measurement device this is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DeviceKind {
    /// A plain measurement device.
    #[default]
    Basic,
    /// A temperature measurement device and its probe state.
    Temperature(TemperatureProbe),
}

/// Informational message produced by a measurement state change.
///
/// The base notices carry their own blank line: before the start notice and
/// after the end notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MeasurementStarted,
    MeasurementStopped,
    TemperatureMeasurementStarted,
    TemperatureMeasurementStopped,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MeasurementStarted => f.write_str("\nStart of measurement"),
            Self::MeasurementStopped => f.write_str("End of measurement\n"),
            Self::TemperatureMeasurementStarted => f.write_str("Temperature measurement started"),
            Self::TemperatureMeasurementStopped => f.write_str("Temperature measurement stopped"),
        }
    }
}

/// A measurement device owned by a [`DeviceContainer`](crate::container::DeviceContainer).
///
/// Descriptive fields are public and may be overwritten freely; no ordering
/// is enforced between `min_value` and `max_value`. The active flag and the
/// temperature state are private because writes to them are gated.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub name: String,
    pub unit: String,
    pub min_value: f64,
    pub max_value: f64,
    pub material: Material,
    active: bool,
    kind: DeviceKind,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Temperature-specific view, or `None` for a plain device.
    #[must_use]
    pub fn as_temperature(&self) -> Option<&TemperatureProbe> {
        match &self.kind {
            DeviceKind::Temperature(probe) => Some(probe),
            DeviceKind::Basic => None,
        }
    }

    /// Current temperature in Celsius, or `None` for a plain device.
    #[must_use]
    pub fn current_temperature(&self) -> Option<f64> {
        self.as_temperature()
            .map(TemperatureProbe::current_temperature)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }

    pub fn set_min_value(&mut self, value: f64) {
        self.min_value = value;
    }

    pub fn set_max_value(&mut self, value: f64) {
        self.max_value = value;
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Begin measuring.
    ///
    /// The base notice is only produced on an actual transition. A
    /// temperature device always appends its own notice after it.
    pub fn start_measuring(&mut self) -> Vec<Notice> {
        let mut notices = Vec::with_capacity(2);
        if !self.active {
            self.active = true;
            notices.push(Notice::MeasurementStarted);
        }
        if matches!(self.kind, DeviceKind::Temperature(_)) {
            notices.push(Notice::TemperatureMeasurementStarted);
        }
        notices
    }

    /// Stop measuring. Mirrors [`start_measuring`](Self::start_measuring).
    pub fn stop_measuring(&mut self) -> Vec<Notice> {
        let mut notices = Vec::with_capacity(2);
        if self.active {
            self.active = false;
            notices.push(Notice::MeasurementStopped);
        }
        if matches!(self.kind, DeviceKind::Temperature(_)) {
            notices.push(Notice::TemperatureMeasurementStopped);
        }
        notices
    }

    /// Record a new reading (Celsius).
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotTemperatureDevice`] on a plain device and
    /// [`DeviceError::Inactive`] when the device is not measuring. The value
    /// is discarded in both cases.
    pub fn set_current_temperature(&mut self, value: f64) -> Result<(), DeviceError> {
        let DeviceKind::Temperature(probe) = &mut self.kind else {
            return Err(DeviceError::NotTemperatureDevice);
        };
        if !self.active {
            return Err(DeviceError::Inactive);
        }
        probe.set_current_temperature(value);
        Ok(())
    }

    /// Change the display scale.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotTemperatureDevice`] on a plain device.
    pub fn set_temperature_scale(&mut self, scale: TemperatureScale) -> Result<(), DeviceError> {
        match &mut self.kind {
            DeviceKind::Temperature(probe) => {
                probe.set_scale(scale);
                Ok(())
            }
            DeviceKind::Basic => Err(DeviceError::NotTemperatureDevice),
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Unit: {}", self.unit)?;
        writeln!(f, "Min Value: {}", Significant(self.min_value))?;
        writeln!(f, "Max Value: {}", Significant(self.max_value))?;
        writeln!(f, "Material: {}", self.material)?;
        write!(f, "{SEPARATOR}")?;
        if let Some(probe) = self.as_temperature() {
            write!(f, "\n{probe}")?;
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    name: Option<String>,
    unit: Option<String>,
    min_value: f64,
    max_value: f64,
    material: Material,
    kind: DeviceKind,
}

impl DeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn min_value(mut self, value: f64) -> Self {
        self.min_value = value;
        self
    }

    #[must_use]
    pub fn max_value(mut self, value: f64) -> Self {
        self.max_value = value;
        self
    }

    #[must_use]
    pub fn material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Make this a temperature device displaying in `scale`.
    #[must_use]
    pub fn temperature(mut self, scale: TemperatureScale) -> Self {
        self.kind = DeviceKind::Temperature(TemperatureProbe::new(scale));
        self
    }

    /// Consume the builder and return an inactive [`Device`].
    #[must_use]
    pub fn build(self) -> Device {
        Device {
            name: self.name.unwrap_or_default(),
            unit: self.unit.unwrap_or_default(),
            min_value: self.min_value,
            max_value: self.max_value,
            material: self.material,
            active: false,
            kind: self.kind,
        }
    }
}

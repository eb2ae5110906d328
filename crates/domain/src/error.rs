//! Common error types used across the workspace.
//!
//! Each concern has its own typed error; [`LabError`] aggregates them via
//! `#[from]` so callers can propagate with `?` and print a single diagnostic.
//! The `Display` texts are the user-facing diagnostics shown by the console.

use crate::device::Device;

/// Top-level error for every fallible domain operation.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error(transparent)]
    Insert(#[from] InsertError),
}

/// Input that cannot be mapped onto a domain value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Material codes are 1-based: 1 Plastic, 2 Metal, 3 Glass.
    #[error("Unknown material code {0}.")]
    UnknownMaterialCode(i64),

    /// Scale codes are 1-based: 1 Celsius, 2 Fahrenheit, 3 Kelvin.
    #[error("Unknown temperature scale code {0}.")]
    UnknownScaleCode(i64),

    #[error(
        "Invalid device type '{0}'. Please choose either MeasurementDevice or TemperatureMeasurementDevice."
    )]
    UnknownDeviceType(String),
}

/// Rejections raised by a single device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// A temperature-only operation was invoked on a plain device.
    #[error("Current device is not a TemperatureMeasurementDevice.")]
    NotTemperatureDevice,

    /// Temperature writes are only accepted while measuring.
    #[error("Device is not ACTIVE!!!")]
    Inactive,
}

/// Rejections raised by the container's selection logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    #[error("Invalid device index.")]
    InvalidIndex { index: usize, len: usize },

    #[error("No device selected.")]
    Empty,
}

/// A device could not be inserted at the requested position.
///
/// Ownership of the device is handed back so the caller decides whether to
/// retry elsewhere or drop it.
#[derive(Debug, thiserror::Error)]
#[error("Invalid index. Device not added.")]
pub struct InsertError {
    pub device: Box<Device>,
    /// Container length at the time of the attempt.
    pub len: usize,
}

impl InsertError {
    /// Recover the rejected device.
    #[must_use]
    pub fn into_device(self) -> Device {
        *self.device
    }
}

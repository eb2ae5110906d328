//! Temperature scales and the temperature-specific state of a device.

use serde::Deserialize;

use crate::error::ValidationError;
use crate::number::Significant;

/// Scale in which a temperature device presents its reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Map a 1-based menu code onto a scale.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownScaleCode`] for anything outside `1..=3`.
    pub fn from_code(code: i64) -> Result<Self, ValidationError> {
        match code {
            1 => Ok(Self::Celsius),
            2 => Ok(Self::Fahrenheit),
            3 => Ok(Self::Kelvin),
            other => Err(ValidationError::UnknownScaleCode(other)),
        }
    }
}

impl std::fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Celsius => f.write_str("Celsius"),
            Self::Fahrenheit => f.write_str("Fahrenheit"),
            Self::Kelvin => f.write_str("Kelvin"),
        }
    }
}

/// Convert a Celsius value into `scale` for presentation.
///
/// Only the Celsius → target direction is provided; there is no inverse.
#[must_use]
pub fn convert_temperature(celsius: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Celsius => celsius,
        TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TemperatureScale::Kelvin => celsius + 273.15,
    }
}

/// Temperature-specific state carried by a temperature device.
///
/// The reading is stored in Celsius; [`scale`](Self::scale) only affects
/// how it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureProbe {
    current_temperature: f64,
    scale: TemperatureScale,
}

impl TemperatureProbe {
    #[must_use]
    pub fn new(scale: TemperatureScale) -> Self {
        Self {
            current_temperature: 0.0,
            scale,
        }
    }

    /// Stored reading, in Celsius.
    #[must_use]
    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }

    #[must_use]
    pub fn scale(&self) -> TemperatureScale {
        self.scale
    }

    /// Stored reading converted into the display scale.
    #[must_use]
    pub fn displayed_temperature(&self) -> f64 {
        convert_temperature(self.current_temperature, self.scale)
    }

    pub(crate) fn set_current_temperature(&mut self, value: f64) {
        self.current_temperature = value;
    }

    pub(crate) fn set_scale(&mut self, scale: TemperatureScale) {
        self.scale = scale;
    }
}

impl std::fmt::Display for TemperatureProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Current Temperature: {} {}",
            Significant(self.displayed_temperature()),
            self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_zero_celsius_to_32_fahrenheit() {
        let converted = convert_temperature(0.0, TemperatureScale::Fahrenheit);
        assert!((converted - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_convert_zero_celsius_to_273_15_kelvin() {
        let converted = convert_temperature(0.0, TemperatureScale::Kelvin);
        assert!((converted - 273.15).abs() < f64::EPSILON);
    }

    #[test]
    fn should_leave_value_unchanged_when_scale_is_celsius() {
        for value in [-40.0, 0.0, 21.5, 1e9, f64::MIN_POSITIVE] {
            assert_eq!(
                convert_temperature(value, TemperatureScale::Celsius).to_bits(),
                value.to_bits()
            );
        }
    }

    #[test]
    fn should_convert_boiling_point_to_fahrenheit() {
        let converted = convert_temperature(100.0, TemperatureScale::Fahrenheit);
        assert!((converted - 212.0).abs() < 1e-9);
    }

    #[test]
    fn should_reject_scale_code_when_out_of_range() {
        assert_eq!(
            TemperatureScale::from_code(0),
            Err(ValidationError::UnknownScaleCode(0))
        );
        assert_eq!(
            TemperatureScale::from_code(4),
            Err(ValidationError::UnknownScaleCode(4))
        );
    }

    #[test]
    fn should_map_scale_codes() {
        assert_eq!(TemperatureScale::from_code(3), Ok(TemperatureScale::Kelvin));
        assert_eq!(TemperatureScale::from_code(2), Ok(TemperatureScale::Fahrenheit));
    }

    #[test]
    fn should_start_probe_at_zero() {
        let probe = TemperatureProbe::new(TemperatureScale::Kelvin);
        assert!(probe.current_temperature().abs() < f64::EPSILON);
        assert_eq!(probe.scale(), TemperatureScale::Kelvin);
    }

    #[test]
    fn should_display_converted_reading_with_scale_name() {
        let mut probe = TemperatureProbe::new(TemperatureScale::Fahrenheit);
        probe.set_current_temperature(100.0);
        assert_eq!(probe.to_string(), "Current Temperature: 212 Fahrenheit");
    }

    #[test]
    fn should_round_displayed_reading_to_six_significant_digits() {
        let mut probe = TemperatureProbe::new(TemperatureScale::Fahrenheit);
        probe.set_current_temperature(36.6);
        assert_eq!(probe.to_string(), "Current Temperature: 97.88 Fahrenheit");
    }
}

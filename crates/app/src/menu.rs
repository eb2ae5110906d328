//! Menu choices — typed views of the numeric codes the user types.

use labdev_domain::error::ValidationError;

pub const MAIN_MENU: &str = "\nChoose an option:\n\
    1. Switch to next device\n\
    2. Change device attributes\n\
    3. Print device info\n\
    4. Start measuring\n\
    5. Stop measuring\n\
    6. Print temperature\n\
    7. Print all devices\n\
    8. Add a new device\n\
    9. Search or sort devices\n\
    0. Exit\n\
    Enter option: ";

pub const ATTRIBUTE_MENU: &str = "Choose attribute to change:\n\
    1. Name\n\
    2. Unit\n\
    3. Min Value\n\
    4. Max Value\n\
    5. Material\n\
    6. Temperature\n\
    7. Temperature Scale\n\
    Enter option: ";

pub const SEARCH_MENU: &str = "Choose search or sort option:\n\
    1. Find devices by name\n\
    2. Sort devices by min value\n\
    3. Sort devices by max value\n\
    4. Sort devices by temperature\n\
    Enter option: ";

pub const PLACEMENT_MENU: &str = "Choose position to insert the device \
    (1 - at the beginning, 2 - at the end, 3 - at a specific position): ";

/// Top-level menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainOption {
    Exit,
    SwitchToNext,
    EditAttribute,
    PrintDevice,
    StartMeasuring,
    StopMeasuring,
    PrintTemperature,
    PrintAll,
    AddDevices,
    SearchOrSort,
}

impl MainOption {
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::Exit,
            1 => Self::SwitchToNext,
            2 => Self::EditAttribute,
            3 => Self::PrintDevice,
            4 => Self::StartMeasuring,
            5 => Self::StopMeasuring,
            6 => Self::PrintTemperature,
            7 => Self::PrintAll,
            8 => Self::AddDevices,
            9 => Self::SearchOrSort,
            _ => return None,
        })
    }
}

/// Attribute submenu entry. `0` backs out without a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOption {
    Back,
    Name,
    Unit,
    MinValue,
    MaxValue,
    Material,
    Temperature,
    Scale,
}

impl AttributeOption {
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::Back,
            1 => Self::Name,
            2 => Self::Unit,
            3 => Self::MinValue,
            4 => Self::MaxValue,
            5 => Self::Material,
            6 => Self::Temperature,
            7 => Self::Scale,
            _ => return None,
        })
    }
}

/// Search/sort submenu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOption {
    FindByName,
    SortByMinValue,
    SortByMaxValue,
    SortByTemperature,
}

impl SearchOption {
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::FindByName),
            2 => Some(Self::SortByMinValue),
            3 => Some(Self::SortByMaxValue),
            4 => Some(Self::SortByTemperature),
            _ => None,
        }
    }
}

/// Where a newly entered device goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
    /// Ask for a 1-based position.
    Position,
}

impl Placement {
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Front),
            2 => Some(Self::Back),
            3 => Some(Self::Position),
            _ => None,
        }
    }
}

/// Device variant chosen at the device-type prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Measurement,
    Temperature,
}

impl std::str::FromStr for DeviceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MeasurementDevice" => Ok(Self::Measurement),
            "TemperatureMeasurementDevice" => Ok(Self::Temperature),
            other => Err(ValidationError::UnknownDeviceType(other.to_string())),
        }
    }
}

pub const SCALE_PROMPT: &str =
    "Choose temperature scale (1 - Celsius, 2 - Fahrenheit, 3 - Kelvin): ";

pub const MATERIAL_PROMPT: &str = "Enter material (1 for Plastic, 2 for Metal, 3 for Glass): ";

pub const NEW_MATERIAL_PROMPT: &str =
    "Enter new material (1 for Plastic, 2 for Metal, 3 for Glass): ";

pub const DEVICE_TYPE_PROMPT: &str =
    "Enter device type (MeasurementDevice / TemperatureMeasurementDevice): ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_every_main_menu_code() {
        assert_eq!(MainOption::from_code(0), Some(MainOption::Exit));
        assert_eq!(MainOption::from_code(9), Some(MainOption::SearchOrSort));
        assert_eq!(MainOption::from_code(10), None);
        assert_eq!(MainOption::from_code(-1), None);
    }

    #[test]
    fn should_treat_zero_as_back_in_attribute_menu() {
        assert_eq!(AttributeOption::from_code(0), Some(AttributeOption::Back));
        assert_eq!(AttributeOption::from_code(7), Some(AttributeOption::Scale));
        assert_eq!(AttributeOption::from_code(8), None);
    }

    #[test]
    fn should_reject_zero_in_search_menu() {
        assert_eq!(SearchOption::from_code(0), None);
        assert_eq!(
            SearchOption::from_code(4),
            Some(SearchOption::SortByTemperature)
        );
    }

    #[test]
    fn should_map_placement_codes() {
        assert_eq!(Placement::from_code(1), Some(Placement::Front));
        assert_eq!(Placement::from_code(3), Some(Placement::Position));
        assert_eq!(Placement::from_code(4), None);
    }

    #[test]
    fn should_parse_device_type_names_exactly() {
        assert_eq!(
            "TemperatureMeasurementDevice".parse::<DeviceType>(),
            Ok(DeviceType::Temperature)
        );
        assert_eq!(
            "MeasurementDevice".parse::<DeviceType>(),
            Ok(DeviceType::Measurement)
        );
        assert!("measurementdevice".parse::<DeviceType>().is_err());
    }

    #[test]
    fn should_list_exit_last_in_main_menu() {
        assert!(MAIN_MENU.ends_with("0. Exit\nEnter option: "));
    }
}

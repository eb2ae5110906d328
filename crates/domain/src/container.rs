//! Device container — ordered ownership of devices plus a current selection.

use std::cmp::Ordering;

use crate::device::Device;
use crate::error::{ContainerError, InsertError};

/// Ordered collection of devices with a "current" selection.
///
/// The container exclusively owns its devices. There is no removal: the
/// collection only grows. Insertions and sorts never move the current index,
/// so the device it designates may change underneath it.
#[derive(Debug, Default)]
pub struct DeviceContainer {
    devices: Vec<Device>,
    current: usize,
}

impl DeviceContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Devices in container order.
    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Device> {
        self.devices.get(index)
    }

    pub fn insert_front(&mut self, device: Device) {
        self.devices.insert(0, device);
    }

    pub fn insert_back(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// Insert `device` so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError`] carrying the device back when `index > len`;
    /// the container is left unchanged.
    pub fn insert_at(&mut self, device: Device, index: usize) -> Result<(), InsertError> {
        let len = self.devices.len();
        if index > len {
            return Err(InsertError {
                device: Box::new(device),
                len,
            });
        }
        self.devices.insert(index, device);
        Ok(())
    }

    /// Select the device at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidIndex`] when `index >= len`; the
    /// selection is left unchanged.
    pub fn switch_current(&mut self, index: usize) -> Result<(), ContainerError> {
        let len = self.devices.len();
        if index >= len {
            return Err(ContainerError::InvalidIndex { index, len });
        }
        self.current = index;
        Ok(())
    }

    /// Advance the selection by one, wrapping to the front, and return the
    /// new index.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] when there is nothing to select.
    pub fn switch_to_next(&mut self) -> Result<usize, ContainerError> {
        if self.devices.is_empty() {
            return Err(ContainerError::Empty);
        }
        let next = (self.current + 1) % self.devices.len();
        self.switch_current(next)?;
        Ok(next)
    }

    /// Index of the current device, `None` while the container is empty.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (self.current < self.devices.len()).then_some(self.current)
    }

    #[must_use]
    pub fn current_device(&self) -> Option<&Device> {
        self.devices.get(self.current)
    }

    pub fn current_device_mut(&mut self) -> Option<&mut Device> {
        self.devices.get_mut(self.current)
    }

    /// All devices whose name equals `name` exactly, in container order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Vec<&Device> {
        self.devices.iter().filter(|d| d.name == name).collect()
    }

    /// Ascending by minimum value. Ties end up in unspecified order.
    pub fn sort_by_min_value(&mut self) {
        self.devices
            .sort_unstable_by(|a, b| a.min_value.total_cmp(&b.min_value));
    }

    /// Ascending by maximum value. Ties end up in unspecified order.
    pub fn sort_by_max_value(&mut self) {
        self.devices
            .sort_unstable_by(|a, b| a.max_value.total_cmp(&b.max_value));
    }

    /// Ascending by current temperature.
    ///
    /// Temperature devices come first, ordered by reading; plain devices
    /// follow in their previous relative order.
    pub fn sort_by_temperature(&mut self) {
        self.devices.sort_by(|a, b| {
            match (a.current_temperature(), b.current_temperature()) {
                (Some(ta), Some(tb)) => ta.total_cmp(&tb),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }
}

impl<'a> IntoIterator for &'a DeviceContainer {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::temperature::TemperatureScale;

    fn named(name: &str) -> Device {
        Device::builder()
            .name(name)
            .unit("V")
            .material(Material::Plastic)
            .build()
    }

    fn with_range(min: f64, max: f64) -> Device {
        Device::builder()
            .name("range")
            .min_value(min)
            .max_value(max)
            .build()
    }

    fn thermometer(name: &str, reading: f64) -> Device {
        let mut device = Device::builder()
            .name(name)
            .temperature(TemperatureScale::Celsius)
            .build();
        device.start_measuring();
        device.set_current_temperature(reading).unwrap();
        device
    }

    fn names(container: &DeviceContainer) -> Vec<&str> {
        container.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn should_report_no_current_device_when_empty() {
        let container = DeviceContainer::new();
        assert!(container.current_device().is_none());
        assert_eq!(container.current_index(), None);
    }

    #[test]
    fn should_reject_switch_when_empty() {
        let mut container = DeviceContainer::new();
        assert_eq!(
            container.switch_current(0),
            Err(ContainerError::InvalidIndex { index: 0, len: 0 })
        );
        assert_eq!(container.current_index(), None);
    }

    #[test]
    fn should_select_first_device_after_first_insert() {
        let mut container = DeviceContainer::new();
        container.insert_back(named("A"));
        assert_eq!(container.current_index(), Some(0));
        assert_eq!(container.current_device().map(|d| d.name.as_str()), Some("A"));
    }

    #[test]
    fn should_insert_front_and_back() {
        let mut container = DeviceContainer::new();
        container.insert_back(named("B"));
        container.insert_front(named("A"));
        container.insert_back(named("C"));
        assert_eq!(names(&container), ["A", "B", "C"]);
    }

    #[test]
    fn should_place_device_at_every_valid_index() {
        for index in 0..=3 {
            let mut container = DeviceContainer::new();
            for name in ["A", "B", "C"] {
                container.insert_back(named(name));
            }
            container.insert_at(named("X"), index).unwrap();
            container.switch_current(index).unwrap();

            assert_eq!(container.current_device().map(|d| d.name.as_str()), Some("X"));
            assert_eq!(container.len(), 4);
        }
    }

    #[test]
    fn should_return_device_when_insert_index_out_of_range() {
        let mut container = DeviceContainer::new();
        container.insert_back(named("A"));
        let err = container.insert_at(named("X"), 2).unwrap_err();

        assert_eq!(err.len, 1);
        assert_eq!(err.into_device().name, "X");
        assert_eq!(names(&container), ["A"]);
    }

    #[test]
    fn should_keep_selection_when_switch_index_invalid() {
        let mut container = DeviceContainer::new();
        container.insert_back(named("A"));
        container.insert_back(named("B"));
        container.switch_current(1).unwrap();

        assert!(container.switch_current(2).is_err());
        assert_eq!(container.current_index(), Some(1));
    }

    #[test]
    fn should_keep_index_not_device_when_inserting_in_front() {
        let mut container = DeviceContainer::new();
        container.insert_back(named("A"));
        container.insert_front(named("B"));
        assert_eq!(container.current_index(), Some(0));
        assert_eq!(container.current_device().map(|d| d.name.as_str()), Some("B"));
    }

    #[test]
    fn should_wrap_when_switching_to_next() {
        let mut container = DeviceContainer::new();
        container.insert_back(named("A"));
        container.insert_back(named("B"));
        assert_eq!(container.switch_to_next(), Ok(1));
        assert_eq!(container.switch_to_next(), Ok(0));
    }

    #[test]
    fn should_reject_next_when_empty() {
        let mut container = DeviceContainer::new();
        assert_eq!(container.switch_to_next(), Err(ContainerError::Empty));
    }

    #[test]
    fn should_find_all_exact_matches_in_order() {
        let mut container = DeviceContainer::new();
        container.insert_back(Device::builder().name("X").unit("first").build());
        container.insert_back(named("Y"));
        container.insert_back(Device::builder().name("X").unit("second").build());

        let found: Vec<_> = container
            .find_by_name("X")
            .iter()
            .map(|d| d.unit.as_str())
            .collect();
        assert_eq!(found, ["first", "second"]);
    }

    #[test]
    fn should_match_names_case_sensitively() {
        let mut container = DeviceContainer::new();
        container.insert_back(named("Probe"));
        assert!(container.find_by_name("probe").is_empty());
        assert!(container.find_by_name("Z").is_empty());
    }

    #[test]
    fn should_sort_by_min_value_ascending() {
        let mut container = DeviceContainer::new();
        for min in [5.0, 1.0, 3.0] {
            container.insert_back(with_range(min, 0.0));
        }
        container.sort_by_min_value();
        let mins: Vec<f64> = container.iter().map(|d| d.min_value).collect();
        assert_eq!(mins, [1.0, 3.0, 5.0]);
    }

    #[test]
    fn should_sort_by_max_value_ascending() {
        let mut container = DeviceContainer::new();
        for max in [20.0, -4.0, 7.5] {
            container.insert_back(with_range(0.0, max));
        }
        container.sort_by_max_value();
        let maxes: Vec<f64> = container.iter().map(|d| d.max_value).collect();
        assert_eq!(maxes, [-4.0, 7.5, 20.0]);
    }

    #[test]
    fn should_sort_temperature_devices_by_reading() {
        let mut container = DeviceContainer::new();
        container.insert_back(thermometer("warm", 25.0));
        container.insert_back(thermometer("cold", -5.0));
        container.insert_back(thermometer("mild", 12.0));
        container.sort_by_temperature();
        assert_eq!(names(&container), ["cold", "mild", "warm"]);
    }

    #[test]
    fn should_place_plain_devices_after_temperature_devices() {
        let mut container = DeviceContainer::new();
        container.insert_back(named("plain-a"));
        container.insert_back(thermometer("hot", 80.0));
        container.insert_back(named("plain-b"));
        container.insert_back(thermometer("cool", 10.0));
        container.sort_by_temperature();
        assert_eq!(names(&container), ["cool", "hot", "plain-a", "plain-b"]);
    }

    #[test]
    fn should_not_move_selection_when_sorting() {
        let mut container = DeviceContainer::new();
        for min in [5.0, 1.0] {
            container.insert_back(with_range(min, 0.0));
        }
        container.switch_current(1).unwrap();
        container.sort_by_min_value();
        assert_eq!(container.current_index(), Some(1));
        assert_eq!(container.current_device().map(|d| d.min_value), Some(5.0));
    }
}

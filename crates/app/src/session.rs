//! Interactive session — the menu loop driving a [`DeviceContainer`].
//!
//! Every domain rejection is printed and the loop carries on; only console
//! failures end the session early. End of input ends it like choosing `0`.

use std::str::FromStr;

use labdev_domain::container::DeviceContainer;
use labdev_domain::device::Device;
use labdev_domain::error::{ContainerError, DeviceError, InsertError, LabError};
use labdev_domain::material::Material;
use labdev_domain::temperature::TemperatureScale;

use crate::error::SessionError;
use crate::menu::{
    ATTRIBUTE_MENU, AttributeOption, DEVICE_TYPE_PROMPT, DeviceType, MAIN_MENU, MATERIAL_PROMPT,
    MainOption, NEW_MATERIAL_PROMPT, PLACEMENT_MENU, Placement, SCALE_PROMPT, SEARCH_MENU,
    SearchOption,
};
use crate::ports::Console;

/// Behaviour switches for a [`Session`].
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Run the add-device loop before showing the main menu.
    pub add_devices_on_start: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            add_devices_on_start: true,
        }
    }
}

/// One interactive run over a device container.
pub struct Session<C> {
    console: C,
    container: DeviceContainer,
    options: SessionOptions,
}

impl<C: Console> Session<C> {
    /// Create a session over `container`, talking through `console`.
    pub fn new(console: C, container: DeviceContainer, options: SessionOptions) -> Self {
        Self {
            console,
            container,
            options,
        }
    }

    #[must_use]
    pub fn container(&self) -> &DeviceContainer {
        &self.container
    }

    /// End the session and take the container back.
    #[must_use]
    pub fn into_container(self) -> DeviceContainer {
        self.container
    }

    /// Run until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] when the console fails.
    pub fn run(&mut self) -> Result<(), SessionError> {
        match self.run_until_exit() {
            Err(SessionError::InputClosed) => {
                tracing::debug!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_until_exit(&mut self) -> Result<(), SessionError> {
        if self.options.add_devices_on_start {
            self.add_devices()?;
        }
        loop {
            let Some(option) = self.read_option(MAIN_MENU, MainOption::from_code)? else {
                continue;
            };
            match option {
                MainOption::Exit => {
                    self.console.say("Exiting program.")?;
                    return Ok(());
                }
                MainOption::SwitchToNext => self.switch_to_next()?,
                MainOption::EditAttribute => self.edit_attribute()?,
                MainOption::PrintDevice => self.print_current()?,
                MainOption::StartMeasuring => self.start_measuring()?,
                MainOption::StopMeasuring => self.stop_measuring()?,
                MainOption::PrintTemperature => self.print_temperature()?,
                MainOption::PrintAll => self.print_all()?,
                MainOption::AddDevices => self.add_devices()?,
                MainOption::SearchOrSort => self.search_or_sort()?,
            }
        }
    }

    #[tracing::instrument(skip(self))]
    fn add_devices(&mut self) -> Result<(), SessionError> {
        loop {
            if let Some(device) = self.read_device()? {
                self.print_all()?;
                self.place(device)?;
            }
            let answer = self.read_text("Do you want to add another device? (y/n): ")?;
            if answer != "y" {
                return Ok(());
            }
        }
    }

    fn read_device(&mut self) -> Result<Option<Device>, SessionError> {
        let device_type = loop {
            let text = self.read_text(DEVICE_TYPE_PROMPT)?;
            match DeviceType::from_str(&text) {
                Ok(device_type) => break device_type,
                Err(err) => self.reject(err)?,
            }
        };

        let name = self.read_text("Enter device name: ")?;
        let unit = self.read_text("Enter unit: ")?;
        let Some(min_value) = self.read_number::<f64>("Enter min value: ")? else {
            return Ok(None);
        };
        let Some(max_value) = self.read_number::<f64>("Enter max value: ")? else {
            return Ok(None);
        };
        let Some(material) = self.read_material(MATERIAL_PROMPT)? else {
            return Ok(None);
        };

        let builder = Device::builder()
            .name(name)
            .unit(unit)
            .min_value(min_value)
            .max_value(max_value)
            .material(material);
        let builder = match device_type {
            DeviceType::Measurement => builder,
            DeviceType::Temperature => {
                let Some(scale) = self.read_scale()? else {
                    return Ok(None);
                };
                builder.temperature(scale)
            }
        };
        Ok(Some(builder.build()))
    }

    fn place(&mut self, device: Device) -> Result<(), SessionError> {
        let Some(code) = self.read_number::<i64>(PLACEMENT_MENU)? else {
            return Ok(());
        };
        let Some(placement) = Placement::from_code(code) else {
            self.console.say("Invalid option. Device not inserted.")?;
            return Ok(());
        };

        let name = device.name.clone();
        match placement {
            Placement::Front => self.container.insert_front(device),
            Placement::Back => self.container.insert_back(device),
            Placement::Position => {
                let len = self.container.len();
                let prompt = format!("Enter position to insert (1 - {}): ", len + 1);
                let Some(position) = self.read_number::<i64>(&prompt)? else {
                    return Ok(());
                };
                let index = position
                    .checked_sub(1)
                    .and_then(|index| usize::try_from(index).ok());
                let inserted = match index {
                    Some(index) => self.container.insert_at(device, index),
                    None => Err(InsertError {
                        device: Box::new(device),
                        len,
                    }),
                };
                if let Err(err) = inserted {
                    tracing::warn!(
                        position,
                        len = err.len,
                        device = %err.device.name,
                        "dropping device rejected at invalid position"
                    );
                    return self.reject(err);
                }
            }
        }
        tracing::debug!(device = %name, ?placement, count = self.container.len(), "device added");
        Ok(())
    }

    fn switch_to_next(&mut self) -> Result<(), SessionError> {
        match self.container.switch_to_next() {
            Ok(index) => self
                .console
                .say(format_args!("Switched to device {}", index + 1))
                .map_err(SessionError::from),
            Err(err) => self.reject(err),
        }
    }

    fn edit_attribute(&mut self) -> Result<(), SessionError> {
        let Some(option) = self.read_option(ATTRIBUTE_MENU, AttributeOption::from_code)? else {
            return Ok(());
        };
        if option == AttributeOption::Back {
            return Ok(());
        }
        let Some(current) = self.container.current_device() else {
            return self.reject(ContainerError::Empty);
        };
        let is_temperature = current.as_temperature().is_some();

        match option {
            AttributeOption::Back => Ok(()),
            AttributeOption::Name => {
                let name = self.read_text("Enter new name: ")?;
                self.edit_current(|device| {
                    device.set_name(name);
                    Ok(())
                })
            }
            AttributeOption::Unit => {
                let unit = self.read_text("Enter new unit: ")?;
                self.edit_current(|device| {
                    device.set_unit(unit);
                    Ok(())
                })
            }
            AttributeOption::MinValue => {
                let Some(value) = self.read_number::<f64>("Enter new min value: ")? else {
                    return Ok(());
                };
                self.edit_current(|device| {
                    device.set_min_value(value);
                    Ok(())
                })
            }
            AttributeOption::MaxValue => {
                let Some(value) = self.read_number::<f64>("Enter new max value: ")? else {
                    return Ok(());
                };
                self.edit_current(|device| {
                    device.set_max_value(value);
                    Ok(())
                })
            }
            AttributeOption::Material => {
                let Some(material) = self.read_material(NEW_MATERIAL_PROMPT)? else {
                    return Ok(());
                };
                self.edit_current(|device| {
                    device.set_material(material);
                    Ok(())
                })
            }
            AttributeOption::Temperature => {
                if !is_temperature {
                    return self.reject(DeviceError::NotTemperatureDevice);
                }
                let Some(value) = self.read_number::<f64>("Enter new temperature: ")? else {
                    return Ok(());
                };
                self.edit_current(|device| Ok(device.set_current_temperature(value)?))
            }
            AttributeOption::Scale => {
                if !is_temperature {
                    return self.reject(DeviceError::NotTemperatureDevice);
                }
                let Some(scale) = self.read_scale()? else {
                    return Ok(());
                };
                self.edit_current(|device| Ok(device.set_temperature_scale(scale)?))
            }
        }
    }

    fn edit_current<F>(&mut self, edit: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut Device) -> Result<(), LabError>,
    {
        let outcome = match self.container.current_device_mut() {
            Some(device) => edit(device),
            None => Err(ContainerError::Empty.into()),
        };
        match outcome {
            Ok(()) => Ok(()),
            Err(err) => self.reject(err),
        }
    }

    fn print_current(&mut self) -> Result<(), SessionError> {
        match self.container.current_device() {
            Some(device) => self.console.say(device).map_err(SessionError::from),
            None => self.reject(ContainerError::Empty),
        }
    }

    fn start_measuring(&mut self) -> Result<(), SessionError> {
        let Some(device) = self.container.current_device_mut() else {
            return self.reject(ContainerError::Empty);
        };
        let notices = device.start_measuring();
        tracing::debug!(device = %device.name, active = device.is_active(), "start measuring");
        for notice in notices {
            self.console.say(notice)?;
        }
        Ok(())
    }

    fn stop_measuring(&mut self) -> Result<(), SessionError> {
        let Some(device) = self.container.current_device_mut() else {
            return self.reject(ContainerError::Empty);
        };
        let notices = device.stop_measuring();
        tracing::debug!(device = %device.name, active = device.is_active(), "stop measuring");
        for notice in notices {
            self.console.say(notice)?;
        }
        Ok(())
    }

    fn print_temperature(&mut self) -> Result<(), SessionError> {
        match self.container.current_device().map(Device::as_temperature) {
            Some(Some(probe)) => self.console.say(probe).map_err(SessionError::from),
            Some(None) => self.reject(DeviceError::NotTemperatureDevice),
            None => self.reject(ContainerError::Empty),
        }
    }

    fn print_all(&mut self) -> Result<(), SessionError> {
        self.console.say("Devices in container:")?;
        for (position, device) in self.container.iter().enumerate() {
            self.console.say(format_args!("{}. {device}", position + 1))?;
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn search_or_sort(&mut self) -> Result<(), SessionError> {
        let Some(option) = self.read_option(SEARCH_MENU, SearchOption::from_code)? else {
            return Ok(());
        };
        match option {
            SearchOption::FindByName => {
                let name = self.read_text("Enter device name to search: ")?;
                let found = self.container.find_by_name(&name);
                tracing::debug!(%name, matches = found.len(), "search by name");
                if found.is_empty() {
                    self.console.say("No devices found with the given name.")?;
                } else {
                    self.console
                        .say(format_args!("Devices found with the name '{name}':"))?;
                    for device in found {
                        self.console.say(device)?;
                    }
                }
            }
            SearchOption::SortByMinValue => {
                self.container.sort_by_min_value();
                self.console.say("Devices sorted by min value.")?;
            }
            SearchOption::SortByMaxValue => {
                self.container.sort_by_max_value();
                self.console.say("Devices sorted by max value.")?;
            }
            SearchOption::SortByTemperature => {
                self.container.sort_by_temperature();
                self.console.say("Devices sorted by temperature.")?;
            }
        }
        Ok(())
    }

    fn read_material(&mut self, prompt: &str) -> Result<Option<Material>, SessionError> {
        let Some(code) = self.read_number::<i64>(prompt)? else {
            return Ok(None);
        };
        match Material::from_code(code) {
            Ok(material) => Ok(Some(material)),
            Err(err) => self.reject(err).map(|()| None),
        }
    }

    fn read_scale(&mut self) -> Result<Option<TemperatureScale>, SessionError> {
        let Some(code) = self.read_number::<i64>(SCALE_PROMPT)? else {
            return Ok(None);
        };
        match TemperatureScale::from_code(code) {
            Ok(scale) => Ok(Some(scale)),
            Err(err) => self.reject(err).map(|()| None),
        }
    }

    fn read_option<T>(
        &mut self,
        prompt: &str,
        from_code: fn(i64) -> Option<T>,
    ) -> Result<Option<T>, SessionError> {
        let text = self.read_text(prompt)?;
        match text.parse::<i64>().ok().and_then(from_code) {
            Some(option) => Ok(Some(option)),
            None => {
                tracing::debug!(input = %text, "invalid menu option");
                self.console.say("Invalid option.")?;
                Ok(None)
            }
        }
    }

    fn read_number<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>, SessionError> {
        let text = self.read_text(prompt)?;
        if let Ok(value) = text.parse() {
            return Ok(Some(value));
        }
        tracing::debug!(input = %text, "malformed number");
        self.console.say("Invalid number.")?;
        Ok(None)
    }

    fn read_text(&mut self, prompt: &str) -> Result<String, SessionError> {
        let line = self
            .console
            .prompt(prompt)?
            .ok_or(SessionError::InputClosed)?;
        Ok(line.trim().to_string())
    }

    fn reject(&mut self, err: impl Into<LabError>) -> Result<(), SessionError> {
        let err = err.into();
        tracing::debug!(error = %err, "operation rejected");
        self.console.say(&err)?;
        Ok(())
    }
}

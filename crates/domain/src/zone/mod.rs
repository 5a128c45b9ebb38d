//! Zone: a room (or the garden) grouping lights, appliances and sensors.
//!
//! All device-level control operations live here so that services only
//! orchestrate: look the zone up, mutate it, store it back.

mod appliance;
mod light;
mod sensor;

pub use appliance::{ApplianceKind, ZoneAppliance, ZoneApplianceBuilder};
pub use light::{
    LightKind, MAX_BRIGHTNESS, ZoneLight, ZoneLightBuilder, check_brightness, check_power_draw,
};
pub use sensor::{SensorValue, ZoneSensor, ZoneSensorKind};

use serde::{Deserialize, Serialize};

use crate::error::{EcoSmartError, NotFoundError, ValidationError};
use crate::id::{DeviceId, ZoneId};
use crate::meter::SensorStatus;

/// A controllable area of the house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    /// Icon key used by clients.
    pub icon: String,
    /// Theme color, `#rrggbb`.
    pub accent_color: String,
    pub sensors: Vec<ZoneSensor>,
    pub lights: Vec<ZoneLight>,
    pub appliances: Vec<ZoneAppliance>,
}

/// Request to add a device to a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NewDevice {
    Light {
        name: String,
        power_draw: f64,
        #[serde(default)]
        dimmable: bool,
    },
    Appliance {
        name: String,
        power_draw: f64,
        #[serde(default)]
        icon: Option<String>,
    },
}

/// The device created by [`Zone::add_device`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "device", rename_all = "snake_case")]
pub enum AddedDevice {
    Light(ZoneLight),
    Appliance(ZoneAppliance),
}

impl AddedDevice {
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        match self {
            Self::Light(light) => &light.id,
            Self::Appliance(appliance) => &appliance.id,
        }
    }
}

impl Zone {
    /// Create a builder for constructing a [`Zone`].
    #[must_use]
    pub fn builder() -> ZoneBuilder {
        ZoneBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] when the id or name is empty,
    /// the accent color is malformed, or any device is invalid.
    pub fn validate(&self) -> Result<(), EcoSmartError> {
        if self.id.as_str().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        check_color(&self.accent_color)?;
        for light in &self.lights {
            light.validate()?;
        }
        for appliance in &self.appliances {
            appliance.validate()?;
        }
        Ok(())
    }

    /// Find a light by id.
    #[must_use]
    pub fn light(&self, id: &DeviceId) -> Option<&ZoneLight> {
        self.lights.iter().find(|l| &l.id == id)
    }

    /// Find an appliance by id.
    #[must_use]
    pub fn appliance(&self, id: &DeviceId) -> Option<&ZoneAppliance> {
        self.appliances.iter().find(|a| &a.id == id)
    }

    /// Flip a light on or off, returning its new state.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] for an unknown light.
    pub fn toggle_light(&mut self, id: &DeviceId) -> Result<bool, EcoSmartError> {
        let light = self.light_mut(id)?;
        light.is_on = !light.is_on;
        Ok(light.is_on)
    }

    /// Set a light's brightness without changing its on/off state.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] when `brightness > 100` and
    /// [`EcoSmartError::NotFound`] for an unknown light.
    pub fn set_brightness(&mut self, id: &DeviceId, brightness: u16) -> Result<(), EcoSmartError> {
        let brightness = check_brightness(brightness)?;
        self.light_mut(id)?.brightness = brightness;
        Ok(())
    }

    /// Flip an appliance on or off, returning its new state.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] for an unknown appliance.
    pub fn toggle_appliance(&mut self, id: &DeviceId) -> Result<bool, EcoSmartError> {
        let appliance = self.appliance_mut(id)?;
        appliance.is_on = !appliance.is_on;
        Ok(appliance.is_on)
    }

    /// Switch every light and appliance off.
    pub fn master_off(&mut self) {
        for light in &mut self.lights {
            light.is_on = false;
        }
        for appliance in &mut self.appliances {
            appliance.is_on = false;
        }
    }

    /// Change the theme color.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] unless `color` is `#rrggbb`.
    pub fn set_accent_color(&mut self, color: &str) -> Result<(), EcoSmartError> {
        check_color(color)?;
        self.accent_color = color.to_ascii_lowercase();
        Ok(())
    }

    /// Add a new, switched-off device.
    ///
    /// Lights start as [`LightKind::Main`] at full brightness; appliances
    /// as [`ApplianceKind::Appliance`].
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] if the request is invalid.
    pub fn add_device(&mut self, request: NewDevice) -> Result<AddedDevice, EcoSmartError> {
        match request {
            NewDevice::Light {
                name,
                power_draw,
                dimmable,
            } => {
                let light = ZoneLight::builder()
                    .name(name)
                    .power_draw(power_draw)
                    .dimmable(dimmable)
                    .build()?;
                self.lights.push(light.clone());
                Ok(AddedDevice::Light(light))
            }
            NewDevice::Appliance {
                name,
                power_draw,
                icon,
            } => {
                let mut builder = ZoneAppliance::builder().name(name).power_draw(power_draw);
                if let Some(icon) = icon {
                    builder = builder.icon(icon);
                }
                let appliance = builder.build()?;
                self.appliances.push(appliance.clone());
                Ok(AddedDevice::Appliance(appliance))
            }
        }
    }

    /// Remove a light.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] for an unknown light.
    pub fn remove_light(&mut self, id: &DeviceId) -> Result<ZoneLight, EcoSmartError> {
        let index = self
            .lights
            .iter()
            .position(|l| &l.id == id)
            .ok_or_else(|| not_found("Light", id))?;
        Ok(self.lights.remove(index))
    }

    /// Remove an appliance.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] for an unknown appliance.
    pub fn remove_appliance(&mut self, id: &DeviceId) -> Result<ZoneAppliance, EcoSmartError> {
        let index = self
            .appliances
            .iter()
            .position(|a| &a.id == id)
            .ok_or_else(|| not_found("Appliance", id))?;
        Ok(self.appliances.remove(index))
    }

    /// Whether any local sensor reports [`SensorStatus::Critical`].
    #[must_use]
    pub fn has_critical_alert(&self) -> bool {
        self.sensors
            .iter()
            .any(|s| s.status == SensorStatus::Critical)
    }

    /// Watts drawn by every device of this zone that is on.
    #[must_use]
    pub fn power_watts(&self) -> f64 {
        let lights: f64 = self.lights.iter().map(ZoneLight::effective_watts).sum();
        let appliances: f64 = self
            .appliances
            .iter()
            .map(ZoneAppliance::effective_watts)
            .sum();
        lights + appliances
    }

    fn light_mut(&mut self, id: &DeviceId) -> Result<&mut ZoneLight, EcoSmartError> {
        self.lights
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| not_found("Light", id))
    }

    fn appliance_mut(&mut self, id: &DeviceId) -> Result<&mut ZoneAppliance, EcoSmartError> {
        self.appliances
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| not_found("Appliance", id))
    }
}

fn not_found(entity: &'static str, id: &DeviceId) -> EcoSmartError {
    NotFoundError {
        entity,
        id: id.to_string(),
    }
    .into()
}

/// Accept only `#rrggbb` hex colors.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidColor`] otherwise.
pub fn check_color(color: &str) -> Result<(), ValidationError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidColor(color.to_string()))
    }
}

/// Step-by-step builder for [`Zone`].
#[derive(Debug, Default)]
pub struct ZoneBuilder {
    id: Option<ZoneId>,
    name: Option<String>,
    icon: Option<String>,
    accent_color: Option<String>,
    sensors: Vec<ZoneSensor>,
    lights: Vec<ZoneLight>,
    appliances: Vec<ZoneAppliance>,
}

impl ZoneBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<ZoneId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn sensor(mut self, sensor: ZoneSensor) -> Self {
        self.sensors.push(sensor);
        self
    }

    #[must_use]
    pub fn light(mut self, light: ZoneLight) -> Self {
        self.lights.push(light);
        self
    }

    #[must_use]
    pub fn appliance(mut self, appliance: ZoneAppliance) -> Self {
        self.appliances.push(appliance);
        self
    }

    /// Consume the builder, validate, and return a [`Zone`].
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] if required fields are missing
    /// or invalid.
    pub fn build(self) -> Result<Zone, EcoSmartError> {
        let zone = Zone {
            id: self.id.unwrap_or_else(|| ZoneId::generate("zone")),
            name: self.name.unwrap_or_default(),
            icon: self.icon.unwrap_or_else(|| "Home".to_string()),
            accent_color: self.accent_color.unwrap_or_else(|| "#10b981".to_string()),
            sensors: self.sensors,
            lights: self.lights,
            appliances: self.appliances,
        };
        zone.validate()?;
        Ok(zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn living_room() -> Zone {
        Zone::builder()
            .id("zone-lr")
            .name("Living Room")
            .accent_color("#8b5cf6")
            .light(
                ZoneLight::builder()
                    .id("l-lr-main")
                    .name("Main Chandelier")
                    .on(true)
                    .brightness(80)
                    .dimmable(true)
                    .power_draw(60.0)
                    .build()
                    .unwrap(),
            )
            .appliance(
                ZoneAppliance::builder()
                    .id("a-lr-ac")
                    .name("Air Conditioner")
                    .kind(ApplianceKind::Climate)
                    .on(true)
                    .power_draw(1200.0)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn should_toggle_light_and_report_new_state() {
        let mut zone = living_room();
        let id = DeviceId::new("l-lr-main");
        assert!(!zone.toggle_light(&id).unwrap());
        assert!(zone.toggle_light(&id).unwrap());
    }

    #[test]
    fn should_return_not_found_when_toggling_unknown_light() {
        let mut zone = living_room();
        let result = zone.toggle_light(&DeviceId::new("nope"));
        assert!(matches!(result, Err(EcoSmartError::NotFound(_))));
    }

    #[test]
    fn should_set_brightness_without_switching() {
        let mut zone = living_room();
        let id = DeviceId::new("l-lr-main");
        zone.set_brightness(&id, 25).unwrap();
        let light = zone.light(&id).unwrap();
        assert_eq!(light.brightness, 25);
        assert!(light.is_on);
    }

    #[test]
    fn should_reject_brightness_out_of_range() {
        let mut zone = living_room();
        let result = zone.set_brightness(&DeviceId::new("l-lr-main"), 150);
        assert!(matches!(
            result,
            Err(EcoSmartError::Validation(
                ValidationError::BrightnessOutOfRange(150)
            ))
        ));
    }

    #[test]
    fn should_switch_everything_off_on_master_off() {
        let mut zone = living_room();
        zone.master_off();
        assert!(zone.lights.iter().all(|l| !l.is_on));
        assert!(zone.appliances.iter().all(|a| !a.is_on));
        assert!(zone.power_watts().abs() < f64::EPSILON);
    }

    #[test]
    fn should_sum_power_of_devices_that_are_on() {
        let zone = living_room();
        assert!((zone.power_watts() - 1248.0).abs() < 1e-9);
    }

    #[test]
    fn should_accept_hex_color_and_normalise_case() {
        let mut zone = living_room();
        zone.set_accent_color("#FFAA00").unwrap();
        assert_eq!(zone.accent_color, "#ffaa00");
    }

    #[test]
    fn should_reject_malformed_color() {
        let mut zone = living_room();
        for bad in ["red", "#12345", "#gggggg", "123456#"] {
            assert!(zone.set_accent_color(bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn should_add_light_switched_off_at_full_brightness() {
        let mut zone = living_room();
        let added = zone
            .add_device(NewDevice::Light {
                name: "Reading Lamp".to_string(),
                power_draw: 10.0,
                dimmable: true,
            })
            .unwrap();
        let AddedDevice::Light(light) = added else {
            panic!("expected a light");
        };
        assert!(!light.is_on);
        assert_eq!(light.brightness, 100);
        assert_eq!(light.kind, LightKind::Main);
        assert_eq!(zone.lights.len(), 2);
    }

    #[test]
    fn should_add_appliance_with_icon() {
        let mut zone = living_room();
        let added = zone
            .add_device(NewDevice::Appliance {
                name: "Console".to_string(),
                power_draw: 90.0,
                icon: Some("Gamepad".to_string()),
            })
            .unwrap();
        let id = added.id().clone();
        let appliance = zone.appliance(&id).unwrap();
        assert_eq!(appliance.icon, "Gamepad");
        assert!(!appliance.is_on);
    }

    #[test]
    fn should_not_add_invalid_device() {
        let mut zone = living_room();
        let result = zone.add_device(NewDevice::Light {
            name: String::new(),
            power_draw: 10.0,
            dimmable: false,
        });
        assert!(result.is_err());
        assert_eq!(zone.lights.len(), 1);
    }

    #[test]
    fn should_remove_devices_by_id() {
        let mut zone = living_room();
        zone.remove_light(&DeviceId::new("l-lr-main")).unwrap();
        zone.remove_appliance(&DeviceId::new("a-lr-ac")).unwrap();
        assert!(zone.lights.is_empty());
        assert!(zone.appliances.is_empty());
        assert!(zone.remove_light(&DeviceId::new("l-lr-main")).is_err());
    }

    #[test]
    fn should_flag_critical_alert_from_sensors() {
        let mut zone = living_room();
        assert!(!zone.has_critical_alert());
        zone.sensors.push(
            ZoneSensor::new("s-smoke", ZoneSensorKind::Smoke, "Smoke", "Detected")
                .with_status(SensorStatus::Critical),
        );
        assert!(zone.has_critical_alert());
    }

    #[test]
    fn should_deserialize_new_device_from_tagged_json() {
        let json = serde_json::json!({
            "kind": "light",
            "name": "Desk",
            "power_draw": 8.0
        });
        let request: NewDevice = serde_json::from_value(json).unwrap();
        assert!(matches!(request, NewDevice::Light { dimmable: false, .. }));
    }
}

//! Scenario: a named preset of device actions ("Good Night", "Away Mode").

use serde::{Deserialize, Serialize};

use crate::error::{EcoSmartError, ValidationError};
use crate::id::{DeviceId, ScenarioId, ZoneId};
use crate::zone::{MAX_BRIGHTNESS, Zone};

/// Which collection of the zone a [`ScenarioAction`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Appliance,
}

/// Desired state of a single device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioAction {
    pub zone_id: ZoneId,
    pub device_id: DeviceId,
    pub device_kind: DeviceKind,
    pub is_on: bool,
    /// Brightness to apply to a light; the current value is kept when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
}

impl ScenarioAction {
    /// Switch a light on or off, keeping its brightness.
    #[must_use]
    pub fn light(zone_id: impl Into<ZoneId>, device_id: impl Into<DeviceId>, is_on: bool) -> Self {
        Self {
            zone_id: zone_id.into(),
            device_id: device_id.into(),
            device_kind: DeviceKind::Light,
            is_on,
            brightness: None,
        }
    }

    /// Switch an appliance on or off.
    #[must_use]
    pub fn appliance(
        zone_id: impl Into<ZoneId>,
        device_id: impl Into<DeviceId>,
        is_on: bool,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            device_id: device_id.into(),
            device_kind: DeviceKind::Appliance,
            is_on,
            brightness: None,
        }
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Whether this action targets the given device of the given zone.
    #[must_use]
    pub fn targets(&self, zone_id: &ZoneId, device_id: &DeviceId, kind: DeviceKind) -> bool {
        &self.zone_id == zone_id && &self.device_id == device_id && self.device_kind == kind
    }
}

impl std::fmt::Display for ScenarioAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.is_on { "on" } else { "off" };
        write!(f, "{}/{} {state}", self.zone_id, self.device_id)?;
        if let Some(brightness) = self.brightness {
            write!(f, " @{brightness}%")?;
        }
        Ok(())
    }
}

/// A named collection of actions applied in one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    /// Icon key used by clients.
    pub icon: String,
    pub description: String,
    pub actions: Vec<ScenarioAction>,
}

impl Scenario {
    /// Create a builder for constructing a [`Scenario`].
    #[must_use]
    pub fn builder() -> ScenarioBuilder {
        ScenarioBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] when:
    /// - `name` is blank ([`ValidationError::EmptyName`])
    /// - an action carries a brightness above 100
    ///   ([`ValidationError::BrightnessOutOfRange`])
    pub fn validate(&self) -> Result<(), EcoSmartError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        validate_actions(&self.actions)?;
        Ok(())
    }

    /// Capture the current state of every light and appliance as actions.
    #[must_use]
    pub fn snapshot(zones: &[Zone]) -> Vec<ScenarioAction> {
        zones
            .iter()
            .flat_map(|zone| {
                let lights = zone.lights.iter().map(move |light| {
                    ScenarioAction::light(zone.id.clone(), light.id.clone(), light.is_on)
                        .with_brightness(light.brightness)
                });
                let appliances = zone.appliances.iter().map(move |appliance| {
                    ScenarioAction::appliance(zone.id.clone(), appliance.id.clone(), appliance.is_on)
                });
                lights.chain(appliances)
            })
            .collect()
    }
}

/// User-supplied fields for creating or editing a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDraft {
    pub name: String,
    /// Icon key; creation falls back to `Zap`, editing keeps the current one.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub actions: Vec<ScenarioAction>,
}

/// Check every action of a candidate scenario.
///
/// # Errors
///
/// Returns [`ValidationError::BrightnessOutOfRange`] for the first action
/// whose brightness exceeds 100.
pub fn validate_actions(actions: &[ScenarioAction]) -> Result<(), ValidationError> {
    match actions
        .iter()
        .filter_map(|a| a.brightness)
        .find(|b| *b > MAX_BRIGHTNESS)
    {
        Some(brightness) => Err(ValidationError::BrightnessOutOfRange(u16::from(brightness))),
        None => Ok(()),
    }
}

/// Step-by-step builder for [`Scenario`].
#[derive(Debug, Default)]
pub struct ScenarioBuilder {
    id: Option<ScenarioId>,
    name: Option<String>,
    icon: Option<String>,
    description: Option<String>,
    actions: Vec<ScenarioAction>,
}

impl ScenarioBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<ScenarioId>) -> Self {
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
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: ScenarioAction) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn actions(mut self, actions: impl IntoIterator<Item = ScenarioAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Consume the builder, validate, and return a [`Scenario`].
    ///
    /// A missing id is generated with the `custom` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] if invariants fail.
    pub fn build(self) -> Result<Scenario, EcoSmartError> {
        let scenario = Scenario {
            id: self.id.unwrap_or_else(|| ScenarioId::generate("custom")),
            name: self.name.unwrap_or_default().trim().to_string(),
            icon: self.icon.unwrap_or_else(|| "Zap".to_string()),
            description: self.description.unwrap_or_default(),
            actions: self.actions,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}

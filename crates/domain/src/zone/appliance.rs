//! Zone appliance: an on/off consumer with a fixed power rating.

use serde::{Deserialize, Serialize};

use super::light::check_power_draw;
use crate::error::{EcoSmartError, ValidationError};
use crate::id::DeviceId;

/// Broad category of an appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplianceKind {
    Climate,
    #[default]
    Appliance,
    Security,
    Media,
}

/// A switchable appliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneAppliance {
    pub id: DeviceId,
    pub name: String,
    /// Icon key used by clients.
    pub icon: String,
    pub is_on: bool,
    /// Watts drawn while on.
    pub power_draw: f64,
    pub kind: ApplianceKind,
}

impl ZoneAppliance {
    /// Create a builder for constructing a [`ZoneAppliance`].
    #[must_use]
    pub fn builder() -> ZoneApplianceBuilder {
        ZoneApplianceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] when the name is empty or the
    /// power draw is invalid.
    pub fn validate(&self) -> Result<(), EcoSmartError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        check_power_draw(self.power_draw)?;
        Ok(())
    }

    /// Watts currently drawn.
    #[must_use]
    pub fn effective_watts(&self) -> f64 {
        if self.is_on { self.power_draw } else { 0.0 }
    }
}

/// Step-by-step builder for [`ZoneAppliance`].
#[derive(Debug, Default)]
pub struct ZoneApplianceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    icon: Option<String>,
    is_on: bool,
    power_draw: f64,
    kind: ApplianceKind,
}

impl ZoneApplianceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
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
    pub fn on(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    #[must_use]
    pub fn power_draw(mut self, watts: f64) -> Self {
        self.power_draw = watts;
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ApplianceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Consume the builder, validate, and return a [`ZoneAppliance`].
    ///
    /// A missing id is generated with the `appliance` prefix and a missing
    /// icon defaults to `Zap`.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] if invariants fail.
    pub fn build(self) -> Result<ZoneAppliance, EcoSmartError> {
        let appliance = ZoneAppliance {
            id: self.id.unwrap_or_else(|| DeviceId::generate("appliance")),
            name: self.name.unwrap_or_default(),
            icon: self.icon.unwrap_or_else(|| "Zap".to_string()),
            is_on: self.is_on,
            power_draw: self.power_draw,
            kind: self.kind,
        };
        appliance.validate()?;
        Ok(appliance)
    }
}

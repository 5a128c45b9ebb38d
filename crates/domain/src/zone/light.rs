//! Zone light: a switchable, optionally dimmable lamp.

use serde::{Deserialize, Serialize};

use crate::error::{EcoSmartError, ValidationError};
use crate::id::DeviceId;

/// Highest accepted brightness, in percent.
pub const MAX_BRIGHTNESS: u8 = 100;

/// Role of a light inside its zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    #[default]
    Main,
    Accent,
    Spot,
}

/// A light fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneLight {
    pub id: DeviceId,
    pub name: String,
    pub kind: LightKind,
    pub is_on: bool,
    /// Brightness in percent, `0..=100`.
    pub brightness: u8,
    pub dimmable: bool,
    /// Watts drawn at full brightness.
    pub power_draw: f64,
    /// Preview color (`#rrggbb`) for RGB lights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ZoneLight {
    /// Create a builder for constructing a [`ZoneLight`].
    #[must_use]
    pub fn builder() -> ZoneLightBuilder {
        ZoneLightBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] when the name is empty, the
    /// brightness exceeds [`MAX_BRIGHTNESS`], or the power draw is negative
    /// or not finite.
    pub fn validate(&self) -> Result<(), EcoSmartError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        check_brightness(u16::from(self.brightness))?;
        check_power_draw(self.power_draw)?;
        Ok(())
    }

    /// Watts currently drawn.
    ///
    /// Dimmable lights scale linearly with brightness; others draw their
    /// full rating whenever they are on.
    #[must_use]
    pub fn effective_watts(&self) -> f64 {
        if !self.is_on {
            return 0.0;
        }
        if self.dimmable {
            self.power_draw * f64::from(self.brightness) / 100.0
        } else {
            self.power_draw
        }
    }
}

/// Reject brightness values above [`MAX_BRIGHTNESS`].
///
/// # Errors
///
/// Returns [`ValidationError::BrightnessOutOfRange`] when out of range.
pub fn check_brightness(value: u16) -> Result<u8, ValidationError> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_BRIGHTNESS)
        .ok_or(ValidationError::BrightnessOutOfRange(value))
}

/// Reject negative or non-finite wattages.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPowerDraw`] for such values.
pub fn check_power_draw(watts: f64) -> Result<(), ValidationError> {
    if watts.is_finite() && watts >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidPowerDraw)
    }
}

/// Step-by-step builder for [`ZoneLight`].
#[derive(Debug)]
pub struct ZoneLightBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    kind: LightKind,
    is_on: bool,
    brightness: u8,
    dimmable: bool,
    power_draw: f64,
    color: Option<String>,
}

impl Default for ZoneLightBuilder {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            kind: LightKind::Main,
            is_on: false,
            brightness: MAX_BRIGHTNESS,
            dimmable: false,
            power_draw: 0.0,
            color: None,
        }
    }
}

impl ZoneLightBuilder {
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
    pub fn kind(mut self, kind: LightKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn on(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    #[must_use]
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub fn dimmable(mut self, dimmable: bool) -> Self {
        self.dimmable = dimmable;
        self
    }

    #[must_use]
    pub fn power_draw(mut self, watts: f64) -> Self {
        self.power_draw = watts;
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Consume the builder, validate, and return a [`ZoneLight`].
    ///
    /// A missing id is generated with the `light` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] if invariants fail.
    pub fn build(self) -> Result<ZoneLight, EcoSmartError> {
        let light = ZoneLight {
            id: self.id.unwrap_or_else(|| DeviceId::generate("light")),
            name: self.name.unwrap_or_default(),
            kind: self.kind,
            is_on: self.is_on,
            brightness: self.brightness,
            dimmable: self.dimmable,
            power_draw: self.power_draw,
            color: self.color,
        };
        light.validate()?;
        Ok(light)
    }
}

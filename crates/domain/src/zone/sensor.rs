//! Zone sensor: a local reading shown on a zone card.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::meter::SensorStatus;

/// What a zone sensor measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneSensorKind {
    Temp,
    Humidity,
    Motion,
    Lux,
    Smoke,
    Gas,
    Leak,
    Co2,
    Gate,
    Daylight,
}

/// Either a numeric reading or a textual state (`"Clear"`, `"Dry"`, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensorValue {
    Number(f64),
    Text(String),
}

impl SensorValue {
    /// Numeric value, if any.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl From<f64> for SensorValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for SensorValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

/// A sensor attached to a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSensor {
    pub id: String,
    pub kind: ZoneSensorKind,
    pub label: String,
    pub value: SensorValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub status: SensorStatus,
}

impl ZoneSensor {
    /// Create a sensor in the [`SensorStatus::Normal`] state without a unit.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: ZoneSensorKind,
        label: impl Into<String>,
        value: impl Into<SensorValue>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            value: value.into(),
            unit: None,
            status: SensorStatus::Normal,
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: SensorStatus) -> Self {
        self.status = status;
        self
    }
}

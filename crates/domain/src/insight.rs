//! Insight: an advisory message derived from indoor, outdoor and power readings.

use serde::{Deserialize, Serialize};

/// Urgency of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    Critical,
    Warning,
    Info,
}

/// A single piece of advice shown to the occupant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartInsight {
    /// Stable rule identifier, e.g. `critical-money-burner`.
    pub id: String,
    pub priority: InsightPriority,
    pub title: String,
    pub message: String,
    /// Suggested next step.
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential_savings_kzt: Option<f64>,
}

impl SmartInsight {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        priority: InsightPriority,
        title: impl Into<String>,
        message: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            priority,
            title: title.into(),
            message: message.into(),
            action: action.into(),
            potential_savings_kzt: None,
        }
    }

    #[must_use]
    pub fn with_savings(mut self, kzt: f64) -> Self {
        self.potential_savings_kzt = Some(kzt);
        self
    }
}

/// Indoor climate snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndoorState {
    /// °C
    pub temp: f64,
    /// Relative humidity, %.
    pub humidity: f64,
    /// ppm
    pub co2: f64,
    pub window_open: bool,
    pub heating_on: bool,
}

/// Outdoor weather and air quality snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutdoorConditions {
    /// °C
    pub temp: f64,
    /// Relative humidity, %.
    pub humidity: f64,
    /// European AQI.
    pub aqi: f64,
    /// µg/m³
    pub pm25: f64,
}

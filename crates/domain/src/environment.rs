//! Environment classification: air quality bands, CO₂ comfort and
//! ventilation advice.

use serde::{Deserialize, Serialize};

use crate::insight::{IndoorState, OutdoorConditions};

/// CO₂ level above which indoor air is considered stale, in ppm.
pub const STALE_CO2_PPM: f64 = 1000.0;

/// Outdoor AQI above which opening a window is discouraged.
pub const POOR_AQI: f64 = 60.0;

/// European AQI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirQuality {
    Good,
    Fair,
    Moderate,
    Poor,
    Hazardous,
}

impl AirQuality {
    #[must_use]
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi <= 20.0 {
            Self::Good
        } else if aqi <= 40.0 {
            Self::Fair
        } else if aqi <= POOR_AQI {
            Self::Moderate
        } else if aqi <= 80.0 {
            Self::Poor
        } else {
            Self::Hazardous
        }
    }
}

/// Indoor CO₂ comfort band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Co2Level {
    Fresh,
    Ok,
    Stuffy,
}

impl Co2Level {
    #[must_use]
    pub fn from_ppm(ppm: f64) -> Self {
        if ppm < 800.0 {
            Self::Fresh
        } else if ppm < STALE_CO2_PPM {
            Self::Ok
        } else {
            Self::Stuffy
        }
    }
}

/// What to do about indoor air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VentilationAdvice {
    Optimal,
    OpenWindow,
    UseAirPurifier,
}

impl VentilationAdvice {
    /// Stale indoor air calls for ventilation, unless the outdoor air is worse.
    ///
    /// Without outdoor data a window is recommended.
    #[must_use]
    pub fn evaluate(indoor: &IndoorState, outdoor: Option<&OutdoorConditions>) -> Self {
        if indoor.co2 <= STALE_CO2_PPM {
            return Self::Optimal;
        }
        match outdoor {
            Some(outdoor) if outdoor.aqi > POOR_AQI => Self::UseAirPurifier,
            _ => Self::OpenWindow,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Optimal => "Conditions are optimal",
            Self::OpenWindow => "Open Window",
            Self::UseAirPurifier => "Use Air Purifier",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Optimal => "Environment is balanced.",
            Self::OpenWindow => "Indoor CO₂ levels are high. Fresh air recommended.",
            Self::UseAirPurifier => "High CO₂ detected, but outdoor air quality is poor.",
        }
    }
}

/// Combined indoor/outdoor view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentReport {
    pub indoor: IndoorState,
    pub co2_level: Co2Level,
    pub outdoor: Option<OutdoorConditions>,
    pub air_quality: Option<AirQuality>,
    pub advice: VentilationAdvice,
    pub title: &'static str,
    pub message: &'static str,
}

impl EnvironmentReport {
    #[must_use]
    pub fn new(indoor: IndoorState, outdoor: Option<OutdoorConditions>) -> Self {
        let advice = VentilationAdvice::evaluate(&indoor, outdoor.as_ref());
        Self {
            indoor,
            co2_level: Co2Level::from_ppm(indoor.co2),
            outdoor,
            air_quality: outdoor.map(|o| AirQuality::from_aqi(o.aqi)),
            advice,
            title: advice.title(),
            message: advice.message(),
        }
    }
}

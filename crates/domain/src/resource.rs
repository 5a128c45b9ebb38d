//! Resources tracked by the house meters and their tariffs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Tariffs in KZT per unit (Almaty region, 2024/2025 estimates).
pub mod tariff {
    /// KZT per kWh (average tiered rate).
    pub const ELECTRICITY: f64 = 30.26;
    /// KZT per m³.
    pub const WATER: f64 = 73.92;
    /// KZT per m³ (≈ 4300.29 KZT per 1000 m³).
    pub const GAS: f64 = 4.30;
    /// KZT per Gcal.
    pub const HEAT: f64 = 8683.00;
}

/// A metered utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Electricity,
    Water,
    Gas,
    Heat,
}

impl ResourceType {
    /// Every resource, in display order.
    pub const ALL: [Self; 4] = [Self::Electricity, Self::Water, Self::Gas, Self::Heat];

    /// Cost in KZT of one usage unit.
    #[must_use]
    pub fn rate(self) -> f64 {
        match self {
            Self::Electricity => tariff::ELECTRICITY,
            Self::Water => tariff::WATER,
            Self::Gas => tariff::GAS,
            Self::Heat => tariff::HEAT,
        }
    }

    /// Unit of the live meter reading.
    ///
    /// Electricity is an instantaneous load; the others accumulate over the day.
    #[must_use]
    pub fn meter_unit(self) -> &'static str {
        match self {
            Self::Electricity => "kW",
            Self::Water | Self::Gas => "m³",
            Self::Heat => "Gcal",
        }
    }

    /// Unit of a consumption total (daily history, bills).
    #[must_use]
    pub fn usage_unit(self) -> &'static str {
        match self {
            Self::Electricity => "kWh",
            Self::Water | Self::Gas => "m³",
            Self::Heat => "Gcal",
        }
    }

    /// Cost in KZT of `usage` units of this resource.
    #[must_use]
    pub fn cost(self, usage: f64) -> f64 {
        usage * self.rate()
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Electricity => f.write_str("electricity"),
            Self::Water => f.write_str("water"),
            Self::Gas => f.write_str("gas"),
            Self::Heat => f.write_str("heat"),
        }
    }
}

impl FromStr for ResourceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electricity" => Ok(Self::Electricity),
            "water" => Ok(Self::Water),
            "gas" => Ok(Self::Gas),
            "heat" => Ok(Self::Heat),
            _ => Err(ValidationError::UnknownResource(s.to_string())),
        }
    }
}

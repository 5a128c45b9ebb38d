//! Open-Meteo adapter configuration.

use serde::Deserialize;

/// Configuration for the Open-Meteo weather provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenMeteoConfig {
    /// Whether outdoor weather is fetched at all.
    pub enabled: bool,
    /// Latitude of the house.
    pub latitude: f64,
    /// Longitude of the house.
    pub longitude: f64,
    /// How long a fetched reading stays fresh.
    pub refresh_secs: u64,
    /// How long a failed fetch is remembered before the next attempt.
    pub retry_secs: u64,
    /// Upper bound for a single upstream request.
    pub timeout_secs: u64,
    /// Forecast endpoint.
    pub forecast_url: String,
    /// Air-quality endpoint.
    pub air_quality_url: String,
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            latitude: 43.238_949,
            longitude: 76.889_709,
            refresh_secs: 900,
            retry_secs: 60,
            timeout_secs: 10,
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            air_quality_url: "https://air-quality-api.open-meteo.com/v1/air-quality".to_string(),
        }
    }
}

//! Open-Meteo adapter.
//!
//! Implements [`ecosmart_app::ports::WeatherProvider`] against the public
//! forecast and air-quality endpoints. One combined reading is cached for
//! [`OpenMeteoConfig::refresh_secs`] so the HTTP API can ask for insights as
//! often as it likes without hammering the upstream service.

mod client;
mod config;
mod error;
mod response;

pub use client::OpenMeteoWeather;
pub use config::OpenMeteoConfig;
pub use error::OpenMeteoError;

//! Outdoor weather source selected by configuration.

use std::future::Future;

use ecosmart_adapter_open_meteo::{OpenMeteoConfig, OpenMeteoError, OpenMeteoWeather};
use ecosmart_app::ports::WeatherProvider;
use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::insight::OutdoorConditions;

/// Either the live Open-Meteo provider or nothing at all.
#[derive(Debug)]
pub enum Outdoor {
    OpenMeteo(OpenMeteoWeather),
    Disabled,
}

impl Outdoor {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &OpenMeteoConfig) -> Result<Self, OpenMeteoError> {
        if !config.enabled {
            return Ok(Self::Disabled);
        }
        OpenMeteoWeather::new(config.clone()).map(Self::OpenMeteo)
    }
}

impl WeatherProvider for Outdoor {
    fn current(&self) -> impl Future<Output = Result<OutdoorConditions, EcoSmartError>> + Send {
        async move {
            match self {
                Self::OpenMeteo(weather) => weather.current().await,
                Self::Disabled => Err(EcoSmartError::Upstream(
                    "outdoor weather is disabled".into(),
                )),
            }
        }
    }
}

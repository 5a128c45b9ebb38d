//! Insight service: gathers readings and runs the insight engine.

use ecosmart_domain::environment::EnvironmentReport;
use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::insight::{OutdoorConditions, SmartInsight};
use ecosmart_domain::resource::ResourceType;

use crate::insight_engine;
use crate::ports::{IndoorClimate, MeterRepository, WeatherProvider};

/// Application service producing insights and the environment report.
pub struct InsightService<MR, W, C> {
    meters: MR,
    weather: W,
    climate: C,
}

impl<MR, W, C> InsightService<MR, W, C>
where
    MR: MeterRepository,
    W: WeatherProvider,
    C: IndoorClimate,
{
    pub fn new(meters: MR, weather: W, climate: C) -> Self {
        Self {
            meters,
            weather,
            climate,
        }
    }

    /// Evaluate the insight rules against the latest readings.
    ///
    /// An unreachable weather provider only disables the outdoor rules.
    ///
    /// # Errors
    ///
    /// Returns an error when the indoor climate or the meters cannot be read.
    pub async fn insights(&self) -> Result<Vec<SmartInsight>, EcoSmartError> {
        let indoor = self.climate.current().await?;
        let outdoor = self.outdoor().await;
        let kw = self
            .meters
            .get_by_resource(ResourceType::Electricity)
            .await?
            .map_or(0.0, |meter| meter.value);
        Ok(insight_engine::evaluate(&indoor, outdoor.as_ref(), kw))
    }

    /// Classify indoor and outdoor air and advise on ventilation.
    ///
    /// # Errors
    ///
    /// Returns an error when the indoor climate cannot be read.
    pub async fn environment(&self) -> Result<EnvironmentReport, EcoSmartError> {
        let indoor = self.climate.current().await?;
        let outdoor = self.outdoor().await;
        Ok(EnvironmentReport::new(indoor, outdoor))
    }

    async fn outdoor(&self) -> Option<OutdoorConditions> {
        match self.weather.current().await {
            Ok(conditions) => Some(conditions),
            Err(err) => {
                tracing::warn!(error = %err, "outdoor conditions unavailable");
                None
            }
        }
    }
}

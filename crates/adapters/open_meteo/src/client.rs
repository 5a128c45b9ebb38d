//! HTTP client for Open-Meteo with a single-entry cache.
//!
//! A failed fetch is remembered for `retry_secs`; requests in that window
//! fail without reaching the network.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::TimeDelta;

use ecosmart_app::ports::WeatherProvider;
use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::insight::OutdoorConditions;
use ecosmart_domain::time::{Timestamp, now};

use crate::config::OpenMeteoConfig;
use crate::error::OpenMeteoError;
use crate::response;

#[derive(Debug, Clone, Copy)]
struct CachedReading {
    fetched_at: Timestamp,
    conditions: OutdoorConditions,
}

#[derive(Debug, Default)]
struct Cache {
    reading: Option<CachedReading>,
    failed_at: Option<Timestamp>,
}

fn seconds(secs: u64) -> TimeDelta {
    i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX)
}

/// Weather provider backed by the Open-Meteo public API.
#[derive(Debug)]
pub struct OpenMeteoWeather {
    http: reqwest::Client,
    config: OpenMeteoConfig,
    ttl: TimeDelta,
    retry: TimeDelta,
    cache: Mutex<Cache>,
}

impl OpenMeteoWeather {
    /// Build a provider from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OpenMeteoError::Request`] if the HTTP client cannot be
    /// initialised (e.g. no TLS backend).
    pub fn new(config: OpenMeteoConfig) -> Result<Self, OpenMeteoError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(OpenMeteoError::Request)?;
        Ok(Self {
            http,
            ttl: seconds(config.refresh_secs),
            retry: seconds(config.retry_secs),
            config,
            cache: Mutex::new(Cache::default()),
        })
    }

    fn cache(&self) -> MutexGuard<'_, Cache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cached(&self, at: Timestamp) -> Option<OutdoorConditions> {
        self.cache()
            .reading
            .filter(|entry| at - entry.fetched_at < self.ttl)
            .map(|entry| entry.conditions)
    }

    /// Seconds left before the next fetch may be attempted.
    fn backoff_remaining(&self, at: Timestamp) -> Option<i64> {
        let failed_at = self.cache().failed_at?;
        let remaining = self.retry.checked_sub(&(at - failed_at))?;
        (remaining > TimeDelta::zero()).then(|| remaining.num_seconds().max(1))
    }

    fn store(&self, fetched_at: Timestamp, conditions: OutdoorConditions) {
        let mut cache = self.cache();
        cache.reading = Some(CachedReading {
            fetched_at,
            conditions,
        });
        cache.failed_at = None;
    }

    fn record_failure(&self, at: Timestamp) {
        self.cache().failed_at = Some(at);
    }

    async fn get(&self, url: &str, current: &str) -> Result<String, OpenMeteoError> {
        let body = self
            .http
            .get(url)
            .query(&[
                ("latitude", self.config.latitude.to_string()),
                ("longitude", self.config.longitude.to_string()),
                ("current", current.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }

    async fn fetch(&self) -> Result<OutdoorConditions, OpenMeteoError> {
        let (forecast, air) = tokio::try_join!(
            self.get(
                &self.config.forecast_url,
                "temperature_2m,relative_humidity_2m"
            ),
            self.get(&self.config.air_quality_url, "pm2_5,european_aqi"),
        )?;
        Ok(response::combine(
            response::parse_forecast(&forecast)?,
            response::parse_air_quality(&air)?,
        ))
    }
}

impl WeatherProvider for OpenMeteoWeather {
    fn current(&self) -> impl Future<Output = Result<OutdoorConditions, EcoSmartError>> + Send {
        async move {
            let at = now();
            if let Some(conditions) = self.cached(at) {
                tracing::trace!("serving cached outdoor conditions");
                return Ok(conditions);
            }

            if let Some(retry_in) = self.backoff_remaining(at) {
                tracing::trace!(retry_in, "skipping outdoor fetch after recent failure");
                return Err(OpenMeteoError::BackingOff(retry_in).into());
            }

            let conditions = match self.fetch().await {
                Ok(conditions) => conditions,
                Err(err) => {
                    tracing::warn!(error = %err, "failed to fetch outdoor conditions");
                    self.record_failure(at);
                    return Err(err.into());
                }
            };
            tracing::debug!(
                temp = conditions.temp,
                aqi = conditions.aqi,
                "outdoor conditions refreshed"
            );
            self.store(at, conditions);
            Ok(conditions)
        }
    }
}

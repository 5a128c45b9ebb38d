//! Wire shapes of the two Open-Meteo endpoints.
//!
//! Only the `current` block is read. Air-quality values come back as `null`
//! when a station has no data, so every field is optional on the wire.

use serde::Deserialize;

use ecosmart_domain::insight::OutdoorConditions;

use crate::error::OpenMeteoError;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    current: T,
}

#[derive(Debug, Deserialize)]
struct ForecastCurrent {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct AirQualityCurrent {
    pm2_5: Option<f64>,
    european_aqi: Option<f64>,
}

fn required(value: Option<f64>, field: &'static str) -> Result<f64, OpenMeteoError> {
    value.ok_or(OpenMeteoError::MissingField(field))
}

/// Temperature and humidity from a forecast body.
pub(crate) fn parse_forecast(body: &str) -> Result<(f64, f64), OpenMeteoError> {
    let envelope: Envelope<ForecastCurrent> =
        serde_json::from_str(body).map_err(OpenMeteoError::Parse)?;
    Ok((
        required(envelope.current.temperature_2m, "temperature_2m")?,
        required(envelope.current.relative_humidity_2m, "relative_humidity_2m")?,
    ))
}

/// European AQI and PM2.5 from an air-quality body.
pub(crate) fn parse_air_quality(body: &str) -> Result<(f64, f64), OpenMeteoError> {
    let envelope: Envelope<AirQualityCurrent> =
        serde_json::from_str(body).map_err(OpenMeteoError::Parse)?;
    Ok((
        required(envelope.current.european_aqi, "european_aqi")?,
        required(envelope.current.pm2_5, "pm2_5")?,
    ))
}

pub(crate) fn combine(forecast: (f64, f64), air: (f64, f64)) -> OutdoorConditions {
    let (temp, humidity) = forecast;
    let (aqi, pm25) = air;
    OutdoorConditions {
        temp,
        humidity,
        aqi,
        pm25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORECAST: &str = r#"{
        "latitude": 43.25,
        "longitude": 76.875,
        "current_units": {"temperature_2m": "°C", "relative_humidity_2m": "%"},
        "current": {"time": "2025-01-15T10:00", "interval": 900, "temperature_2m": -4.3, "relative_humidity_2m": 71}
    }"#;

    const AIR: &str = r#"{
        "latitude": 43.2,
        "longitude": 76.9,
        "current": {"time": "2025-01-15T10:00", "interval": 3600, "pm2_5": 48.7, "european_aqi": 83}
    }"#;

    #[test]
    fn should_parse_forecast_current_block() {
        let (temp, humidity) = parse_forecast(FORECAST).unwrap();
        assert!((temp + 4.3).abs() < 1e-9);
        assert!((humidity - 71.0).abs() < 1e-9);
    }

    #[test]
    fn should_parse_air_quality_current_block() {
        let (aqi, pm25) = parse_air_quality(AIR).unwrap();
        assert!((aqi - 83.0).abs() < 1e-9);
        assert!((pm25 - 48.7).abs() < 1e-9);
    }

    #[test]
    fn should_combine_into_outdoor_conditions() {
        let conditions = combine(
            parse_forecast(FORECAST).unwrap(),
            parse_air_quality(AIR).unwrap(),
        );
        assert!((conditions.temp + 4.3).abs() < 1e-9);
        assert!((conditions.aqi - 83.0).abs() < 1e-9);
    }

    #[test]
    fn should_report_null_values_as_missing() {
        let body = r#"{"current": {"pm2_5": 12.0, "european_aqi": null}}"#;
        let err = parse_air_quality(body).unwrap_err();
        assert!(matches!(err, OpenMeteoError::MissingField("european_aqi")));
    }

    #[test]
    fn should_reject_body_without_current_block() {
        let err = parse_forecast(r#"{"error": true, "reason": "bad latitude"}"#).unwrap_err();
        assert!(matches!(err, OpenMeteoError::Parse(_)));
    }
}

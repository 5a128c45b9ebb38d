//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `ecosmart.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use ecosmart_adapter_open_meteo::OpenMeteoConfig;
use ecosmart_domain::insight::IndoorState;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Outdoor weather provider.
    pub weather: OpenMeteoConfig,
    /// Background meter simulation.
    pub simulation: SimulationConfig,
    /// Initial indoor climate snapshot.
    pub indoor: IndoorConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Meter drift simulation.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub enabled: bool,
    /// Seconds between two simulation steps.
    pub interval_secs: u64,
}

/// Indoor readings the virtual climate starts from.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IndoorConfig {
    pub temp: f64,
    pub humidity: f64,
    pub co2: f64,
    pub window_open: bool,
    pub heating_on: bool,
}

impl Config {
    /// Load configuration from `ecosmart.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("ecosmart.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("ECOSMART_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("ECOSMART_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("ECOSMART_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("ECOSMART_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.simulation.enabled && self.simulation.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "simulation interval must be non-zero".to_string(),
            ));
        }
        if self.weather.enabled && self.weather.refresh_secs == 0 {
            return Err(ConfigError::Validation(
                "weather refresh interval must be non-zero".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&self.weather.latitude)
            || !(-180.0..=180.0).contains(&self.weather.longitude)
        {
            return Err(ConfigError::Validation(
                "weather coordinates are out of range".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ecosmartd=info,ecosmart=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 5,
        }
    }
}

impl Default for IndoorConfig {
    fn default() -> Self {
        Self {
            temp: 23.0,
            humidity: 28.0,
            co2: 1100.0,
            window_open: true,
            heating_on: true,
        }
    }
}

impl From<&IndoorConfig> for IndoorState {
    fn from(config: &IndoorConfig) -> Self {
        Self {
            temp: config.temp,
            humidity: config.humidity,
            co2: config.co2,
            window_open: config.window_open,
            heating_on: config.heating_on,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

//! Open-Meteo adapter error types.

use ecosmart_domain::error::EcoSmartError;

/// Errors specific to the Open-Meteo adapter.
#[derive(Debug, thiserror::Error)]
pub enum OpenMeteoError {
    /// The HTTP client could not be built or the request failed.
    #[error("open-meteo request failed")]
    Request(#[source] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("open-meteo returned status {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("failed to parse open-meteo response")]
    Parse(#[source] serde_json::Error),

    /// The response parsed but carried no value for a field.
    #[error("open-meteo response has no value for {0}")]
    MissingField(&'static str),

    /// A recent fetch failed; no request is made until the retry delay ends.
    #[error("open-meteo unavailable, next attempt in {0}s")]
    BackingOff(i64),
}

impl OpenMeteoError {
    /// Convert into an [`EcoSmartError::Upstream`] for propagation across
    /// port boundaries.
    pub fn into_domain(self) -> EcoSmartError {
        EcoSmartError::Upstream(Box::new(self))
    }
}

impl From<OpenMeteoError> for EcoSmartError {
    fn from(err: OpenMeteoError) -> Self {
        err.into_domain()
    }
}

impl From<reqwest::Error> for OpenMeteoError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Request(err),
        }
    }
}

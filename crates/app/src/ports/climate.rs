//! Climate ports: where indoor and outdoor readings come from.

use std::future::Future;
use std::sync::Arc;

use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::insight::{IndoorState, OutdoorConditions};

/// Source of outdoor weather and air quality.
pub trait WeatherProvider {
    /// Latest outdoor conditions.
    fn current(&self) -> impl Future<Output = Result<OutdoorConditions, EcoSmartError>> + Send;
}

/// Source of the indoor climate snapshot.
pub trait IndoorClimate {
    /// Latest indoor state.
    fn current(&self) -> impl Future<Output = Result<IndoorState, EcoSmartError>> + Send;
}

impl<T: WeatherProvider + Send + Sync> WeatherProvider for Arc<T> {
    fn current(&self) -> impl Future<Output = Result<OutdoorConditions, EcoSmartError>> + Send {
        (**self).current()
    }
}

impl<T: IndoorClimate + Send + Sync> IndoorClimate for Arc<T> {
    fn current(&self) -> impl Future<Output = Result<IndoorState, EcoSmartError>> + Send {
        (**self).current()
    }
}

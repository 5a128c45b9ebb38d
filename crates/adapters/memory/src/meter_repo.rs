//! In-memory implementation of [`MeterRepository`].

use std::future::Future;
use std::sync::RwLock;

use ecosmart_app::ports::MeterRepository;
use ecosmart_domain::error::{EcoSmartError, NotFoundError};
use ecosmart_domain::meter::MeterSensor;
use ecosmart_domain::resource::ResourceType;

use crate::error::StoreError;

/// Meters kept in display order.
#[derive(Debug, Default)]
pub struct InMemoryMeterRepository {
    meters: RwLock<Vec<MeterSensor>>,
}

impl InMemoryMeterRepository {
    #[must_use]
    pub fn new(meters: Vec<MeterSensor>) -> Self {
        Self {
            meters: RwLock::new(meters),
        }
    }

    fn replace(&self, meter: MeterSensor) -> Result<MeterSensor, EcoSmartError> {
        let mut meters = self
            .meters
            .write()
            .map_err(|_| StoreError::Poisoned("meter"))?;
        let slot = meters.iter_mut().find(|m| m.id == meter.id).ok_or_else(|| {
            NotFoundError {
                entity: "Meter",
                id: meter.id.to_string(),
            }
        })?;
        *slot = meter.clone();
        Ok(meter)
    }

    fn find(&self, resource: ResourceType) -> Result<Option<MeterSensor>, EcoSmartError> {
        let meters = self
            .meters
            .read()
            .map_err(|_| StoreError::Poisoned("meter"))?;
        Ok(meters.iter().find(|m| m.resource == resource).cloned())
    }
}

impl MeterRepository for InMemoryMeterRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<MeterSensor>, EcoSmartError>> + Send {
        let result = self
            .meters
            .read()
            .map(|meters| meters.to_vec())
            .map_err(|_| EcoSmartError::from(StoreError::Poisoned("meter")));
        async { result }
    }

    fn get_by_resource(
        &self,
        resource: ResourceType,
    ) -> impl Future<Output = Result<Option<MeterSensor>, EcoSmartError>> + Send {
        let result = self.find(resource);
        async { result }
    }

    fn update(
        &self,
        meter: MeterSensor,
    ) -> impl Future<Output = Result<MeterSensor, EcoSmartError>> + Send {
        let result = self.replace(meter);
        async { result }
    }
}

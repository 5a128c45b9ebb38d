//! Meter service: whole-house consumption readings.

use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::event::{Event, EventType};
use ecosmart_domain::meter::MeterSensor;
use ecosmart_domain::resource::ResourceType;

use crate::ports::{EventPublisher, MeterRepository};

/// Application service for meter readings.
pub struct MeterService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: MeterRepository, P: EventPublisher> MeterService<R, P> {
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// List all meters.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_meters(&self) -> Result<Vec<MeterSensor>, EcoSmartError> {
        self.repo.get_all().await
    }

    /// The electricity meter, if the house has one.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn electricity(&self) -> Result<Option<MeterSensor>, EcoSmartError> {
        self.repo.get_by_resource(ResourceType::Electricity).await
    }

    /// Store a batch of simulated readings and return every meter.
    ///
    /// Electricity readings are ignored: that meter follows the devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn apply_readings(
        &self,
        readings: Vec<MeterSensor>,
    ) -> Result<Vec<MeterSensor>, EcoSmartError> {
        let mut changed = 0_usize;
        for reading in readings {
            if reading.resource == ResourceType::Electricity {
                continue;
            }
            self.repo.update(reading).await?;
            changed += 1;
        }
        tracing::debug!(changed, "meter readings applied");

        let meters = self.repo.get_all().await?;
        let event = Event::new(
            EventType::MetersUpdated,
            None,
            serde_json::json!({ "meters": meters }),
        );
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(error = %err, "failed to publish meter update");
        }
        Ok(meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{FakeMeters, RecordingPublisher, meters};
    use ecosmart_domain::meter::{SensorStatus, Trend};
    use std::sync::Arc;

    #[tokio::test]
    async fn should_find_electricity_meter() {
        let svc = MeterService::new(FakeMeters::with(meters()), RecordingPublisher::default());
        let meter = svc.electricity().await.unwrap().unwrap();
        assert_eq!(meter.id.as_str(), "elec-01");
    }

    #[tokio::test]
    async fn should_apply_readings_except_electricity() {
        let repo = Arc::new(FakeMeters::with(meters()));
        let events = Arc::new(RecordingPublisher::default());
        let svc = MeterService::new(Arc::clone(&repo), Arc::clone(&events));

        let mut readings = meters();
        readings[0].record(9.0);
        readings[1].record(0.46);

        let updated = svc.apply_readings(readings).await.unwrap();
        assert_eq!(updated[0].value, 2.45);
        assert_eq!(updated[1].value, 0.46);
        assert_eq!(updated[1].trend, Trend::Up);
        assert_eq!(updated[1].status, SensorStatus::Warning);
        assert_eq!(events.types(), vec![EventType::MetersUpdated]);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_meter() {
        let svc = MeterService::new(FakeMeters::default(), RecordingPublisher::default());
        let reading = meters().remove(1);
        let result = svc.apply_readings(vec![reading]).await;
        assert!(matches!(result, Err(EcoSmartError::NotFound(_))));
    }
}

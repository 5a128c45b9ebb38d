//! Storage port: repository traits for the house state.
//!
//! The whole house lives in process memory; these traits only isolate the
//! services from the concrete store.

use std::future::Future;
use std::sync::Arc;

use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::id::{ScenarioId, ZoneId};
use ecosmart_domain::meter::MeterSensor;
use ecosmart_domain::resource::ResourceType;
use ecosmart_domain::scenario::Scenario;
use ecosmart_domain::zone::Zone;

/// Repository for [`Zone`]s and the devices they hold.
pub trait ZoneRepository {
    /// All zones, in their display order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Zone>, EcoSmartError>> + Send;

    /// Get a zone by its identifier.
    fn get_by_id(
        &self,
        id: &ZoneId,
    ) -> impl Future<Output = Result<Option<Zone>, EcoSmartError>> + Send;

    /// Apply `change` to one zone as a single atomic step and store it.
    ///
    /// The stored zone is left as is when `change` fails. Returns
    /// [`EcoSmartError::NotFound`] when no zone has `id`.
    fn modify<T, F>(
        &self,
        id: &ZoneId,
        change: F,
    ) -> impl Future<Output = Result<(Zone, T), EcoSmartError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Zone) -> Result<T, EcoSmartError> + Send;

    /// Rewrite every zone as a single atomic step.
    ///
    /// Returns the stored zones along with the closure's outcome.
    fn modify_all<T, F>(
        &self,
        change: F,
    ) -> impl Future<Output = Result<(Vec<Zone>, T), EcoSmartError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Vec<Zone>) -> T + Send;
}

/// Repository for [`Scenario`]s.
pub trait ScenarioRepository {
    /// Persist a new scenario.
    fn create(
        &self,
        scenario: Scenario,
    ) -> impl Future<Output = Result<Scenario, EcoSmartError>> + Send;

    /// Get a scenario by its identifier.
    fn get_by_id(
        &self,
        id: &ScenarioId,
    ) -> impl Future<Output = Result<Option<Scenario>, EcoSmartError>> + Send;

    /// All scenarios, in creation order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Scenario>, EcoSmartError>> + Send;

    /// Replace an existing scenario.
    fn update(
        &self,
        scenario: Scenario,
    ) -> impl Future<Output = Result<Scenario, EcoSmartError>> + Send;

    /// Delete a scenario by id.
    fn delete(&self, id: &ScenarioId) -> impl Future<Output = Result<(), EcoSmartError>> + Send;
}

/// Repository for whole-house [`MeterSensor`]s.
pub trait MeterRepository {
    /// All meters, in display order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<MeterSensor>, EcoSmartError>> + Send;

    /// The meter tracking `resource`, if any.
    fn get_by_resource(
        &self,
        resource: ResourceType,
    ) -> impl Future<Output = Result<Option<MeterSensor>, EcoSmartError>> + Send;

    /// Replace an existing meter.
    fn update(
        &self,
        meter: MeterSensor,
    ) -> impl Future<Output = Result<MeterSensor, EcoSmartError>> + Send;
}

impl<T: ZoneRepository + Send + Sync> ZoneRepository for Arc<T> {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Zone>, EcoSmartError>> + Send {
        (**self).get_all()
    }

    fn get_by_id(
        &self,
        id: &ZoneId,
    ) -> impl Future<Output = Result<Option<Zone>, EcoSmartError>> + Send {
        (**self).get_by_id(id)
    }

    fn modify<U, F>(
        &self,
        id: &ZoneId,
        change: F,
    ) -> impl Future<Output = Result<(Zone, U), EcoSmartError>> + Send
    where
        U: Send,
        F: FnOnce(&mut Zone) -> Result<U, EcoSmartError> + Send,
    {
        (**self).modify(id, change)
    }

    fn modify_all<U, F>(
        &self,
        change: F,
    ) -> impl Future<Output = Result<(Vec<Zone>, U), EcoSmartError>> + Send
    where
        U: Send,
        F: FnOnce(&mut Vec<Zone>) -> U + Send,
    {
        (**self).modify_all(change)
    }
}

impl<T: ScenarioRepository + Send + Sync> ScenarioRepository for Arc<T> {
    fn create(
        &self,
        scenario: Scenario,
    ) -> impl Future<Output = Result<Scenario, EcoSmartError>> + Send {
        (**self).create(scenario)
    }

    fn get_by_id(
        &self,
        id: &ScenarioId,
    ) -> impl Future<Output = Result<Option<Scenario>, EcoSmartError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Scenario>, EcoSmartError>> + Send {
        (**self).get_all()
    }

    fn update(
        &self,
        scenario: Scenario,
    ) -> impl Future<Output = Result<Scenario, EcoSmartError>> + Send {
        (**self).update(scenario)
    }

    fn delete(&self, id: &ScenarioId) -> impl Future<Output = Result<(), EcoSmartError>> + Send {
        (**self).delete(id)
    }
}

impl<T: MeterRepository + Send + Sync> MeterRepository for Arc<T> {
    fn get_all(&self) -> impl Future<Output = Result<Vec<MeterSensor>, EcoSmartError>> + Send {
        (**self).get_all()
    }

    fn get_by_resource(
        &self,
        resource: ResourceType,
    ) -> impl Future<Output = Result<Option<MeterSensor>, EcoSmartError>> + Send {
        (**self).get_by_resource(resource)
    }

    fn update(
        &self,
        meter: MeterSensor,
    ) -> impl Future<Output = Result<MeterSensor, EcoSmartError>> + Send {
        (**self).update(meter)
    }
}

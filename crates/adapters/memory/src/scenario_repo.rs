//! In-memory implementation of [`ScenarioRepository`].

use std::future::Future;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use ecosmart_app::ports::ScenarioRepository;
use ecosmart_domain::error::{EcoSmartError, NotFoundError};
use ecosmart_domain::id::ScenarioId;
use ecosmart_domain::scenario::Scenario;

use crate::error::StoreError;

/// Scenarios kept in creation order.
#[derive(Debug, Default)]
pub struct InMemoryScenarioRepository {
    scenarios: RwLock<Vec<Scenario>>,
}

impl InMemoryScenarioRepository {
    /// Create a repository holding `scenarios`.
    #[must_use]
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self {
            scenarios: RwLock::new(scenarios),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Scenario>>, StoreError> {
        self.scenarios
            .read()
            .map_err(|_| StoreError::Poisoned("scenario"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Scenario>>, StoreError> {
        self.scenarios
            .write()
            .map_err(|_| StoreError::Poisoned("scenario"))
    }

    fn replace(&self, scenario: Scenario) -> Result<Scenario, EcoSmartError> {
        let mut scenarios = self.write()?;
        let slot = scenarios
            .iter_mut()
            .find(|s| s.id == scenario.id)
            .ok_or_else(|| not_found(&scenario.id))?;
        *slot = scenario.clone();
        Ok(scenario)
    }

    fn remove(&self, id: &ScenarioId) -> Result<(), EcoSmartError> {
        let mut scenarios = self.write()?;
        let index = scenarios
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| not_found(id))?;
        scenarios.remove(index);
        Ok(())
    }
}

fn not_found(id: &ScenarioId) -> NotFoundError {
    NotFoundError {
        entity: "Scenario",
        id: id.to_string(),
    }
}

impl ScenarioRepository for InMemoryScenarioRepository {
    fn create(
        &self,
        scenario: Scenario,
    ) -> impl Future<Output = Result<Scenario, EcoSmartError>> + Send {
        let result = self
            .write()
            .map(|mut scenarios| {
                scenarios.push(scenario.clone());
                scenario
            })
            .map_err(EcoSmartError::from);
        async { result }
    }

    fn get_by_id(
        &self,
        id: &ScenarioId,
    ) -> impl Future<Output = Result<Option<Scenario>, EcoSmartError>> + Send {
        let result = self
            .read()
            .map(|scenarios| scenarios.iter().find(|s| &s.id == id).cloned())
            .map_err(EcoSmartError::from);
        async { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Scenario>, EcoSmartError>> + Send {
        let result = self
            .read()
            .map(|scenarios| scenarios.to_vec())
            .map_err(EcoSmartError::from);
        async { result }
    }

    fn update(
        &self,
        scenario: Scenario,
    ) -> impl Future<Output = Result<Scenario, EcoSmartError>> + Send {
        let result = self.replace(scenario);
        async { result }
    }

    fn delete(&self, id: &ScenarioId) -> impl Future<Output = Result<(), EcoSmartError>> + Send {
        let result = self.remove(id);
        async { result }
    }
}

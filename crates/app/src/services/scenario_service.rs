//! Scenario service: create, edit and delete scenario presets.

use ecosmart_domain::error::{EcoSmartError, NotFoundError};
use ecosmart_domain::event::{Event, EventType};
use ecosmart_domain::id::ScenarioId;
use ecosmart_domain::scenario::{Scenario, ScenarioDraft};

use crate::ports::{EventPublisher, ScenarioRepository};

/// Application service for scenario CRUD.
pub struct ScenarioService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: ScenarioRepository, P: EventPublisher> ScenarioService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// List all scenarios.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_scenarios(&self) -> Result<Vec<Scenario>, EcoSmartError> {
        self.repo.get_all().await
    }

    /// Look up a scenario by id.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] when no scenario with `id` exists.
    pub async fn get_scenario(&self, id: &ScenarioId) -> Result<Scenario, EcoSmartError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Scenario",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Create a custom scenario with a generated `custom-…` id.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] for a blank name or an action
    /// brightness above 100.
    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_scenario(&self, draft: ScenarioDraft) -> Result<Scenario, EcoSmartError> {
        let description = format!("Custom scenario with {} actions.", draft.actions.len());
        let mut builder = Scenario::builder()
            .name(draft.name)
            .description(description)
            .actions(draft.actions);
        if let Some(icon) = draft.icon {
            builder = builder.icon(icon);
        }
        let scenario = self.repo.create(builder.build()?).await?;
        tracing::info!(scenario_id = %scenario.id, "scenario created");
        self.emit(EventType::ScenarioCreated, &scenario).await;
        Ok(scenario)
    }

    /// Replace the name, icon and actions of an existing scenario.
    ///
    /// The icon is kept when the draft has none.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] for an unknown scenario and
    /// [`EcoSmartError::Validation`] if the edited scenario is invalid.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_scenario(
        &self,
        id: &ScenarioId,
        draft: ScenarioDraft,
    ) -> Result<Scenario, EcoSmartError> {
        let existing = self.get_scenario(id).await?;
        let description = format!("Updated scenario with {} actions.", draft.actions.len());
        let scenario = Scenario::builder()
            .id(existing.id)
            .name(draft.name)
            .icon(draft.icon.unwrap_or(existing.icon))
            .description(description)
            .actions(draft.actions)
            .build()?;
        let scenario = self.repo.update(scenario).await?;
        tracing::info!("scenario updated");
        self.emit(EventType::ScenarioUpdated, &scenario).await;
        Ok(scenario)
    }

    /// Delete a scenario.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] for an unknown scenario.
    #[tracing::instrument(skip(self))]
    pub async fn delete_scenario(&self, id: &ScenarioId) -> Result<(), EcoSmartError> {
        let scenario = self.get_scenario(id).await?;
        self.repo.delete(id).await?;
        tracing::info!("scenario deleted");
        self.emit(EventType::ScenarioDeleted, &scenario).await;
        Ok(())
    }

    async fn emit(&self, event_type: EventType, scenario: &Scenario) {
        let event = Event::new(
            event_type,
            None,
            serde_json::json!({ "scenario_id": scenario.id, "name": scenario.name }),
        );
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(error = %err, ?event_type, "failed to publish event");
        }
    }
}

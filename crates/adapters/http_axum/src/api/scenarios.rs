//! JSON REST handlers for scenarios.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use ecosmart_domain::id::ScenarioId;
use ecosmart_domain::scenario::{Scenario, ScenarioAction, ScenarioDraft};

use crate::api::zones::{ZoneView, views};
use crate::error::ApiError;
use crate::state::{AppState, Backend};

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Scenario>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/scenarios`
pub async fn list<B: Backend>(
    State(state): State<AppState<B>>,
) -> Result<Json<Vec<Scenario>>, ApiError> {
    Ok(Json(state.scenario_service.list_scenarios().await?))
}

/// `GET /api/scenarios/{id}`
pub async fn get<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<Scenario>, ApiError> {
    let scenario_id: ScenarioId = id.parse()?;
    Ok(Json(state.scenario_service.get_scenario(&scenario_id).await?))
}

/// `POST /api/scenarios`
pub async fn create<B: Backend>(
    State(state): State<AppState<B>>,
    Json(draft): Json<ScenarioDraft>,
) -> Result<CreateResponse, ApiError> {
    let created = state.scenario_service.create_scenario(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/scenarios/{id}`
pub async fn update<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
    Json(draft): Json<ScenarioDraft>,
) -> Result<Json<Scenario>, ApiError> {
    let scenario_id: ScenarioId = id.parse()?;
    let updated = state
        .scenario_service
        .update_scenario(&scenario_id, draft)
        .await?;
    Ok(Json(updated))
}

/// `DELETE /api/scenarios/{id}`
pub async fn delete<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError> {
    let scenario_id: ScenarioId = id.parse()?;
    state.scenario_service.delete_scenario(&scenario_id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `POST /api/scenarios/{id}/activate`
///
/// Responds with every zone after the scenario has been applied.
pub async fn activate<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ZoneView>>, ApiError> {
    let scenario_id: ScenarioId = id.parse()?;
    let scenario = state.scenario_service.get_scenario(&scenario_id).await?;
    let zones = state.zone_service.activate_scenario(&scenario).await?;
    Ok(Json(views(zones)))
}

/// `GET /api/scenarios/snapshot`
///
/// The current device states as actions, ready to post back as a new
/// scenario.
pub async fn snapshot<B: Backend>(
    State(state): State<AppState<B>>,
) -> Result<Json<Vec<ScenarioAction>>, ApiError> {
    Ok(Json(state.zone_service.snapshot().await?))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::test_support::{app, send};

    #[tokio::test]
    async fn should_list_builtin_scenarios() {
        let (status, body) = send(app(), Method::GET, "/api/scenarios", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Good Night", "Movie Night", "Away Mode"]);
    }

    #[tokio::test]
    async fn should_route_snapshot_before_id_lookup() {
        let (status, body) = send(app(), Method::GET, "/api/scenarios/snapshot", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().iter().any(|a| a["device_id"] == "l-lr-main"));
    }

    #[tokio::test]
    async fn should_create_update_and_delete_custom_scenario() {
        let app = app();
        let (status, created) = send(
            app.clone(),
            Method::POST,
            "/api/scenarios",
            Some(json!({
                "name": "Reading",
                "actions": [
                    { "zone_id": "zone-lr", "device_id": "l-lr-floor", "device_kind": "light", "is_on": true }
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(created["id"].as_str().unwrap().starts_with("custom-"));
        assert_eq!(created["description"], "Custom scenario with 1 actions.");

        let uri = format!("/api/scenarios/{}", created["id"].as_str().unwrap());
        let (status, updated) = send(
            app.clone(),
            Method::PUT,
            &uri,
            Some(json!({ "name": "Late Reading", "actions": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Late Reading");
        assert_eq!(updated["description"], "Updated scenario with 0 actions.");

        let (status, body) = send(app.clone(), Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_null());

        let (status, _) = send(app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_blank_scenario_name() {
        let (status, _) = send(
            app(),
            Method::POST,
            "/api/scenarios",
            Some(json!({ "name": "  " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_activate_away_mode() {
        let app = app();
        let (status, zones) =
            send(app.clone(), Method::POST, "/api/scenarios/sc-away/activate", None).await;
        assert_eq!(status, StatusCode::OK);
        let living_room = &zones[0];
        assert!(
            living_room["lights"]
                .as_array()
                .unwrap()
                .iter()
                .all(|l| l["is_on"] == false)
        );

        let (_, meters) = send(app, Method::GET, "/api/meters", None).await;
        let kw = meters[0]["value"].as_f64().unwrap();
        assert!((kw - 0.35).abs() < 1e-9, "got {kw}");
    }

    #[tokio::test]
    async fn should_return_404_when_activating_unknown_scenario() {
        let (status, _) = send(app(), Method::POST, "/api/scenarios/sc-party/activate", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

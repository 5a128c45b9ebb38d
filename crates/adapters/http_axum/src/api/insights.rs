//! Insight and environment handlers.

use axum::Json;
use axum::extract::State;

use ecosmart_domain::environment::EnvironmentReport;
use ecosmart_domain::insight::SmartInsight;

use crate::error::ApiError;
use crate::state::{AppState, Backend};

/// `GET /api/insights`
pub async fn list<B: Backend>(
    State(state): State<AppState<B>>,
) -> Result<Json<Vec<SmartInsight>>, ApiError> {
    Ok(Json(state.insight_service.insights().await?))
}

/// `GET /api/environment`
pub async fn environment<B: Backend>(
    State(state): State<AppState<B>>,
) -> Result<Json<EnvironmentReport>, ApiError> {
    Ok(Json(state.insight_service.environment().await?))
}

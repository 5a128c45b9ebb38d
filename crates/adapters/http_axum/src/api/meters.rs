//! JSON REST handler for meter readings.

use axum::Json;
use axum::extract::State;

use ecosmart_domain::meter::MeterSensor;

use crate::error::ApiError;
use crate::state::{AppState, Backend};

/// `GET /api/meters`
pub async fn list<B: Backend>(
    State(state): State<AppState<B>>,
) -> Result<Json<Vec<MeterSensor>>, ApiError> {
    Ok(Json(state.meter_service.list_meters().await?))
}

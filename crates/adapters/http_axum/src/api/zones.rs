//! JSON REST handlers for zones and their devices.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use ecosmart_domain::id::{DeviceId, ZoneId};
use ecosmart_domain::zone::{AddedDevice, NewDevice, Zone};

use crate::error::ApiError;
use crate::state::{AppState, Backend};

/// Request body for `PUT …/brightness`.
#[derive(Deserialize)]
pub struct BrightnessRequest {
    pub brightness: u16,
}

/// Request body for `PUT /api/zones/{id}/color`.
#[derive(Deserialize)]
pub struct ColorRequest {
    pub color: String,
}

/// A zone as served over HTTP, with its derived alert flag.
#[derive(Debug, Serialize)]
pub struct ZoneView {
    #[serde(flatten)]
    pub zone: Zone,
    pub has_critical_alert: bool,
}

impl From<Zone> for ZoneView {
    fn from(zone: Zone) -> Self {
        Self {
            has_critical_alert: zone.has_critical_alert(),
            zone,
        }
    }
}

pub(crate) fn views(zones: Vec<Zone>) -> Vec<ZoneView> {
    zones.into_iter().map(ZoneView::from).collect()
}

/// Possible responses from the add-device endpoint.
pub enum AddDeviceResponse {
    Created(Json<AddedDevice>),
}

impl IntoResponse for AddDeviceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

fn ids(zone: &str, device: &str) -> Result<(ZoneId, DeviceId), ApiError> {
    Ok((zone.parse::<ZoneId>()?, device.parse::<DeviceId>()?))
}

/// `GET /api/zones`
pub async fn list<B: Backend>(
    State(state): State<AppState<B>>,
) -> Result<Json<Vec<ZoneView>>, ApiError> {
    Ok(Json(views(state.zone_service.list_zones().await?)))
}

/// `GET /api/zones/{id}`
pub async fn get<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<ZoneView>, ApiError> {
    let zone_id: ZoneId = id.parse()?;
    Ok(Json(state.zone_service.get_zone(&zone_id).await?.into()))
}

/// `POST /api/zones/{id}/lights/{light}/toggle`
pub async fn toggle_light<B: Backend>(
    State(state): State<AppState<B>>,
    Path((id, light)): Path<(String, String)>,
) -> Result<Json<ZoneView>, ApiError> {
    let (zone_id, light_id) = ids(&id, &light)?;
    let zone = state.zone_service.toggle_light(&zone_id, &light_id).await?;
    Ok(Json(zone.into()))
}

/// `PUT /api/zones/{id}/lights/{light}/brightness`
pub async fn set_brightness<B: Backend>(
    State(state): State<AppState<B>>,
    Path((id, light)): Path<(String, String)>,
    Json(req): Json<BrightnessRequest>,
) -> Result<Json<ZoneView>, ApiError> {
    let (zone_id, light_id) = ids(&id, &light)?;
    let zone = state
        .zone_service
        .set_brightness(&zone_id, &light_id, req.brightness)
        .await?;
    Ok(Json(zone.into()))
}

/// `DELETE /api/zones/{id}/lights/{light}`
pub async fn remove_light<B: Backend>(
    State(state): State<AppState<B>>,
    Path((id, light)): Path<(String, String)>,
) -> Result<Json<ZoneView>, ApiError> {
    let (zone_id, light_id) = ids(&id, &light)?;
    let zone = state.zone_service.remove_light(&zone_id, &light_id).await?;
    Ok(Json(zone.into()))
}

/// `POST /api/zones/{id}/appliances/{appliance}/toggle`
pub async fn toggle_appliance<B: Backend>(
    State(state): State<AppState<B>>,
    Path((id, appliance)): Path<(String, String)>,
) -> Result<Json<ZoneView>, ApiError> {
    let (zone_id, appliance_id) = ids(&id, &appliance)?;
    let zone = state
        .zone_service
        .toggle_appliance(&zone_id, &appliance_id)
        .await?;
    Ok(Json(zone.into()))
}

/// `DELETE /api/zones/{id}/appliances/{appliance}`
pub async fn remove_appliance<B: Backend>(
    State(state): State<AppState<B>>,
    Path((id, appliance)): Path<(String, String)>,
) -> Result<Json<ZoneView>, ApiError> {
    let (zone_id, appliance_id) = ids(&id, &appliance)?;
    let zone = state
        .zone_service
        .remove_appliance(&zone_id, &appliance_id)
        .await?;
    Ok(Json(zone.into()))
}

/// `POST /api/zones/{id}/off`
pub async fn master_off<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<ZoneView>, ApiError> {
    let zone_id: ZoneId = id.parse()?;
    Ok(Json(state.zone_service.master_off(&zone_id).await?.into()))
}

/// `PUT /api/zones/{id}/color`
pub async fn set_color<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
    Json(req): Json<ColorRequest>,
) -> Result<Json<ZoneView>, ApiError> {
    let zone_id: ZoneId = id.parse()?;
    let zone = state.zone_service.set_color(&zone_id, &req.color).await?;
    Ok(Json(zone.into()))
}

/// `POST /api/zones/{id}/devices`
pub async fn add_device<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
    Json(req): Json<NewDevice>,
) -> Result<AddDeviceResponse, ApiError> {
    let zone_id: ZoneId = id.parse()?;
    let added = state.zone_service.add_device(&zone_id, req).await?;
    Ok(AddDeviceResponse::Created(Json(added)))
}

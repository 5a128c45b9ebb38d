//! Usage history handler.

use axum::Json;
use axum::extract::{Query, State};
use chrono::NaiveDate;
use serde::Deserialize;

use ecosmart_domain::history::UsageRecord;
use ecosmart_domain::resource::ResourceType;

use crate::error::ApiError;
use crate::state::{AppState, Backend};

/// Query string of `GET /api/history`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Resource name, case-insensitive. Electricity when absent.
    pub resource: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// `GET /api/history?resource=water&from=2025-03-01&to=2025-03-07`
pub async fn daily<B: Backend>(
    State(state): State<AppState<B>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<UsageRecord>>, ApiError> {
    let resource: ResourceType = match query.resource.as_deref() {
        Some(name) => name.parse()?,
        None => ResourceType::Electricity,
    };
    let records = state
        .history_service
        .daily_usage(resource, query.from, query.to)
        .await?;
    Ok(Json(records))
}

//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod history;
#[allow(clippy::missing_errors_doc)]
pub mod insights;
#[allow(clippy::missing_errors_doc)]
pub mod meters;
#[allow(clippy::missing_errors_doc)]
pub mod scenarios;
pub mod sse;
#[allow(clippy::missing_errors_doc)]
pub mod zones;

use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::state::{AppState, Backend};

/// Build the `/api` sub-router.
pub fn routes<B: Backend>() -> Router<AppState<B>> {
    Router::new()
        // Zones
        .route("/zones", get(zones::list::<B>))
        .route("/zones/{id}", get(zones::get::<B>))
        .route("/zones/{id}/off", post(zones::master_off::<B>))
        .route("/zones/{id}/color", put(zones::set_color::<B>))
        .route("/zones/{id}/devices", post(zones::add_device::<B>))
        .route(
            "/zones/{id}/lights/{light}/toggle",
            post(zones::toggle_light::<B>),
        )
        .route(
            "/zones/{id}/lights/{light}/brightness",
            put(zones::set_brightness::<B>),
        )
        .route("/zones/{id}/lights/{light}", delete(zones::remove_light::<B>))
        .route(
            "/zones/{id}/appliances/{appliance}/toggle",
            post(zones::toggle_appliance::<B>),
        )
        .route(
            "/zones/{id}/appliances/{appliance}",
            delete(zones::remove_appliance::<B>),
        )
        // Scenarios
        .route(
            "/scenarios",
            get(scenarios::list::<B>).post(scenarios::create::<B>),
        )
        .route("/scenarios/snapshot", get(scenarios::snapshot::<B>))
        .route(
            "/scenarios/{id}",
            get(scenarios::get::<B>)
                .put(scenarios::update::<B>)
                .delete(scenarios::delete::<B>),
        )
        .route("/scenarios/{id}/activate", post(scenarios::activate::<B>))
        // Readings
        .route("/meters", get(meters::list::<B>))
        .route("/insights", get(insights::list::<B>))
        .route("/environment", get(insights::environment::<B>))
        .route("/history", get(history::daily::<B>))
        // Live updates
        .route("/events/stream", get(sse::stream::<B>))
}

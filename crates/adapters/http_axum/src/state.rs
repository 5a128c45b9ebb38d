//! Shared application state for axum handlers.

use std::sync::Arc;

use ecosmart_app::event_bus::InProcessEventBus;
use ecosmart_app::ports::{
    IndoorClimate, MeterRepository, ScenarioRepository, UsageHistory, WeatherProvider,
    ZoneRepository,
};
use ecosmart_app::services::history_service::HistoryService;
use ecosmart_app::services::insight_service::InsightService;
use ecosmart_app::services::meter_service::MeterService;
use ecosmart_app::services::scenario_service::ScenarioService;
use ecosmart_app::services::zone_service::ZoneService;

/// Event publisher shared by every service and the SSE stream.
pub type Bus = Arc<InProcessEventBus>;

/// The set of port implementations the server runs on.
///
/// Bundling them as associated types keeps handler signatures to a single
/// generic parameter while still dispatching statically.
pub trait Backend: Send + Sync + 'static {
    type Zones: ZoneRepository + Send + Sync + 'static;
    type Scenarios: ScenarioRepository + Send + Sync + 'static;
    type Meters: MeterRepository + Send + Sync + 'static;
    type Weather: WeatherProvider + Send + Sync + 'static;
    type Climate: IndoorClimate + Send + Sync + 'static;
    type History: UsageHistory + Send + Sync + 'static;
}

pub type Zones<B> = ZoneService<<B as Backend>::Zones, <B as Backend>::Meters, Bus>;
pub type Scenarios<B> = ScenarioService<<B as Backend>::Scenarios, Bus>;
pub type Meters<B> = MeterService<<B as Backend>::Meters, Bus>;
pub type Insights<B> =
    InsightService<<B as Backend>::Meters, <B as Backend>::Weather, <B as Backend>::Climate>;
pub type History<B> = HistoryService<<B as Backend>::History>;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the backend types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<B: Backend> {
    pub zone_service: Arc<Zones<B>>,
    pub scenario_service: Arc<Scenarios<B>>,
    pub meter_service: Arc<Meters<B>>,
    pub insight_service: Arc<Insights<B>>,
    pub history_service: Arc<History<B>>,
    /// Source of the SSE stream.
    pub event_bus: Bus,
}

impl<B: Backend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            zone_service: Arc::clone(&self.zone_service),
            scenario_service: Arc::clone(&self.scenario_service),
            meter_service: Arc::clone(&self.meter_service),
            insight_service: Arc::clone(&self.insight_service),
            history_service: Arc::clone(&self.history_service),
            event_bus: Arc::clone(&self.event_bus),
        }
    }
}

impl<B: Backend> AppState<B> {
    /// Create the state from pre-wrapped services.
    ///
    /// Services are taken as `Arc`s so they can be shared with background
    /// tasks before the HTTP state is built.
    pub fn from_arcs(
        zone_service: Arc<Zones<B>>,
        scenario_service: Arc<Scenarios<B>>,
        meter_service: Arc<Meters<B>>,
        insight_service: Arc<Insights<B>>,
        history_service: Arc<History<B>>,
        event_bus: Bus,
    ) -> Self {
        Self {
            zone_service,
            scenario_service,
            meter_service,
            insight_service,
            history_service,
            event_bus,
        }
    }
}

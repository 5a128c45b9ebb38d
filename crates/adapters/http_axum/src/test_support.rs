//! Seeded in-memory backend for handler tests.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ecosmart_adapter_memory::{
    InMemoryMeterRepository, InMemoryScenarioRepository, InMemoryZoneRepository,
};
use ecosmart_adapter_virtual::{SimulatedHistory, VirtualClimate, seed};
use ecosmart_app::event_bus::InProcessEventBus;
use ecosmart_app::ports::WeatherProvider;
use ecosmart_app::services::history_service::HistoryService;
use ecosmart_app::services::insight_service::InsightService;
use ecosmart_app::services::meter_service::MeterService;
use ecosmart_app::services::scenario_service::ScenarioService;
use ecosmart_app::services::zone_service::ZoneService;
use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::insight::OutdoorConditions;

use crate::state::{AppState, Backend};

pub struct StubWeather(pub Option<OutdoorConditions>);

impl WeatherProvider for StubWeather {
    fn current(&self) -> impl Future<Output = Result<OutdoorConditions, EcoSmartError>> + Send {
        let result = self
            .0
            .ok_or_else(|| EcoSmartError::Upstream("weather offline".into()));
        async move { result }
    }
}

pub struct TestBackend;

impl Backend for TestBackend {
    type Zones = InMemoryZoneRepository;
    type Scenarios = InMemoryScenarioRepository;
    type Meters = Arc<InMemoryMeterRepository>;
    type Weather = StubWeather;
    type Climate = VirtualClimate;
    type History = SimulatedHistory;
}

pub fn polluted_cold_day() -> OutdoorConditions {
    OutdoorConditions {
        temp: -5.0,
        humidity: 70.0,
        aqi: 120.0,
        pm25: 80.0,
    }
}

pub fn seeded_state(weather: Option<OutdoorConditions>) -> AppState<TestBackend> {
    let bus = Arc::new(InProcessEventBus::new(64));
    let meters = Arc::new(InMemoryMeterRepository::new(seed::meters().unwrap()));
    let zones = ZoneService::new(
        InMemoryZoneRepository::new(seed::house_zones().unwrap()),
        Arc::clone(&meters),
        Arc::clone(&bus),
    );
    let scenarios = ScenarioService::new(
        InMemoryScenarioRepository::new(seed::scenarios().unwrap()),
        Arc::clone(&bus),
    );
    let meter_service = MeterService::new(Arc::clone(&meters), Arc::clone(&bus));
    let insights = InsightService::new(meters, StubWeather(weather), VirtualClimate::default());
    AppState::from_arcs(
        Arc::new(zones),
        Arc::new(scenarios),
        Arc::new(meter_service),
        Arc::new(insights),
        Arc::new(HistoryService::new(SimulatedHistory)),
        bus,
    )
}

pub fn app() -> Router {
    crate::router::build(seeded_state(Some(polluted_cold_day())))
}

/// Send one request and decode the body.
///
/// Empty bodies come back as `Value::Null` and non-JSON bodies as a string.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

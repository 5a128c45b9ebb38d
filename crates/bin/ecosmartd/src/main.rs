//! # ecosmartd: ecosmart daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars) and initialise logging
//! - Seed the in-memory repositories with the demo house
//! - Construct application services, injecting adapters via port traits
//! - Run the meter simulation in the background
//! - Build the axum router, bind to a TCP port and serve
//! - Shut down gracefully on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;
mod weather;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use ecosmart_adapter_http_axum::state::{AppState, Backend, Meters};
use ecosmart_adapter_memory::{
    InMemoryMeterRepository, InMemoryScenarioRepository, InMemoryZoneRepository,
};
use ecosmart_adapter_virtual::{MeterSimulator, SimulatedHistory, VirtualClimate, seed};
use ecosmart_app::event_bus::InProcessEventBus;
use ecosmart_app::services::history_service::HistoryService;
use ecosmart_app::services::insight_service::InsightService;
use ecosmart_app::services::meter_service::MeterService;
use ecosmart_app::services::scenario_service::ScenarioService;
use ecosmart_app::services::zone_service::ZoneService;

use crate::config::Config;
use crate::weather::Outdoor;

/// Capacity of the broadcast channel feeding SSE clients.
const EVENT_BUS_CAPACITY: usize = 256;

/// The demo house: in-memory state, simulated sensors, live weather.
struct DemoHouse;

impl Backend for DemoHouse {
    type Zones = InMemoryZoneRepository;
    type Scenarios = InMemoryScenarioRepository;
    type Meters = Arc<InMemoryMeterRepository>;
    type Weather = Outdoor;
    type Climate = VirtualClimate;
    type History = SimulatedHistory;
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).context("parsing log filter")?,
        )
        .init();

    // Repositories
    let zones = InMemoryZoneRepository::new(seed::house_zones()?);
    let scenarios = InMemoryScenarioRepository::new(seed::scenarios()?);
    let meters = Arc::new(InMemoryMeterRepository::new(seed::meters()?));

    // Sensors
    let climate = VirtualClimate::new((&config.indoor).into());
    let outdoor = Outdoor::from_config(&config.weather).context("building weather client")?;

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(EVENT_BUS_CAPACITY));

    // Services
    let zone_service = Arc::new(ZoneService::new(
        zones,
        Arc::clone(&meters),
        Arc::clone(&event_bus),
    ));
    let meter_service = Arc::new(MeterService::new(
        Arc::clone(&meters),
        Arc::clone(&event_bus),
    ));
    let scenario_service = Arc::new(ScenarioService::new(scenarios, Arc::clone(&event_bus)));
    let insight_service = Arc::new(InsightService::new(meters, outdoor, climate));
    let history_service = Arc::new(HistoryService::new(SimulatedHistory));

    // The electricity meter follows the seeded devices from the start.
    let kw = zone_service.refresh_power().await?;
    tracing::info!(kw, "initial house load computed");

    let simulation = config.simulation.enabled.then(|| {
        let interval = Duration::from_secs(config.simulation.interval_secs);
        tokio::spawn(simulate(Arc::clone(&meter_service), interval))
    });

    // HTTP
    let state = AppState::<DemoHouse>::from_arcs(
        zone_service,
        scenario_service,
        meter_service,
        insight_service,
        history_service,
        event_bus,
    );
    let app = ecosmart_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(%bind_addr, "ecosmartd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = simulation {
        handle.abort();
    }
    tracing::info!("ecosmartd stopped");
    Ok(())
}

/// Advance the simulated meters forever, one step per `interval`.
async fn simulate(meters: Arc<Meters<DemoHouse>>, interval: Duration) {
    let mut simulator = MeterSimulator::from_os();
    let mut ticker = tokio::time::interval(interval);
    // The first tick completes immediately.
    ticker.tick().await;
    tracing::info!(?interval, "meter simulation started");

    loop {
        ticker.tick().await;
        let current = match meters.list_meters().await {
            Ok(current) => current,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read meters for simulation");
                continue;
            }
        };
        if let Err(err) = meters.apply_readings(simulator.step(&current)).await {
            tracing::warn!(error = %err, "failed to apply simulated readings");
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

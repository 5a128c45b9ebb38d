//! # ecosmart-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ZoneRepository`, `ScenarioRepository`, `MeterRepository`: in-process state
//!   - `WeatherProvider`: outdoor weather and air quality
//!   - `IndoorClimate`: indoor climate snapshot
//!   - `UsageHistory`: daily consumption per resource
//!   - `EventPublisher`: fan-out of domain events
//! - Host the pure cores:
//!   - [`insight_engine`]: rule-based advice from indoor, outdoor and power readings
//!   - [`power`]: whole-house power draw from zone device states
//!   - [`scenario_applier`]: apply a scenario's actions to every zone
//! - Define **driving/inbound ports** as use-case services generic over the ports
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `ecosmart-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod insight_engine;
pub mod ports;
pub mod power;
pub mod scenario_applier;
pub mod services;

//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod history_service;
pub mod insight_service;
pub mod meter_service;
pub mod scenario_service;
pub mod zone_service;

#[cfg(test)]
pub(crate) mod fakes;

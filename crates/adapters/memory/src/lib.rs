//! # ecosmart-adapter-memory
//!
//! In-process storage for the house state.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `ecosmart-app::ports::storage`
//! - Keep insertion order so zones, scenarios and meters list the way they
//!   were seeded
//! - Surface a poisoned lock as an upstream error instead of panicking
//!
//! Nothing is written to disk; a restart brings back the seed data.
//!
//! ## Dependency rule
//! Depends on `ecosmart-app` (for port traits) and `ecosmart-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod meter_repo;
mod scenario_repo;
mod zone_repo;

pub use error::StoreError;
pub use meter_repo::InMemoryMeterRepository;
pub use scenario_repo::InMemoryScenarioRepository;
pub use zone_repo::InMemoryZoneRepository;

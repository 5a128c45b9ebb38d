//! # ecosmart-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a JSON API over zones, scenarios, meters, insights and usage
//!   history (`/api/zones`, `/api/scenarios`, …)
//! - Stream domain events to browsers as Server-Sent Events
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map [`ecosmart_domain::error::EcoSmartError`] into status codes
//!
//! ## Dependency rule
//! Depends on `ecosmart-app` (for port traits and services) and
//! `ecosmart-domain` (for the types serialised in responses). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

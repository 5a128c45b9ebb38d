//! # ecosmart-domain
//!
//! Pure domain model for the ecosmart home energy monitor.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Resources** (electricity, water, gas, heat) and their tariffs
//! - Define **Meters** (whole-house consumption readings with status classification)
//! - Define **Zones** (rooms holding lights, appliances and local sensors)
//! - Define **Scenarios** (named presets of device actions)
//! - Define **Insights** and environment classification (air quality, CO₂)
//! - Define **Events** (records of what changed)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod environment;
pub mod event;
pub mod history;
pub mod insight;
pub mod meter;
pub mod resource;
pub mod scenario;
pub mod zone;

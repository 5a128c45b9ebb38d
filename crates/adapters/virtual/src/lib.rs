//! # ecosmart-adapter-virtual
//!
//! Simulated house used in place of real hardware.
//!
//! ## Provided pieces
//!
//! | Piece | Role |
//! |-------|------|
//! | [`seed`] | The demo house: five zones, three scenarios, four meters |
//! | [`VirtualClimate`] | Indoor climate port backed by a fixed snapshot |
//! | [`MeterSimulator`] | Random upward drift of the water, gas and heat meters |
//! | [`SimulatedHistory`] | Daily usage history generated on demand |
//!
//! ## Dependency rule
//!
//! Depends on `ecosmart-app` (port traits) and `ecosmart-domain` only.

mod climate;
mod history;
pub mod seed;
mod simulator;

pub use climate::VirtualClimate;
pub use history::SimulatedHistory;
pub use simulator::MeterSimulator;

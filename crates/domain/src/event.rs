//! Event: an immutable record of something that happened in the house.
//!
//! Events are produced when devices change state, scenarios are activated
//! or edited, and when meter readings are refreshed.

use serde::{Deserialize, Serialize};

use crate::id::{EventId, ZoneId};
use crate::time::{Timestamp, now};

/// What kind of change an [`Event`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    LightToggled,
    BrightnessChanged,
    ApplianceToggled,
    ZoneSwitchedOff,
    ZoneColorChanged,
    DeviceAdded,
    DeviceRemoved,
    ScenarioActivated,
    ScenarioCreated,
    ScenarioUpdated,
    ScenarioDeleted,
    PowerUsageChanged,
    MetersUpdated,
}

impl EventType {
    /// Wire name, as serialised.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LightToggled => "light_toggled",
            Self::BrightnessChanged => "brightness_changed",
            Self::ApplianceToggled => "appliance_toggled",
            Self::ZoneSwitchedOff => "zone_switched_off",
            Self::ZoneColorChanged => "zone_color_changed",
            Self::DeviceAdded => "device_added",
            Self::DeviceRemoved => "device_removed",
            Self::ScenarioActivated => "scenario_activated",
            Self::ScenarioCreated => "scenario_created",
            Self::ScenarioUpdated => "scenario_updated",
            Self::ScenarioDeleted => "scenario_deleted",
            Self::PowerUsageChanged => "power_usage_changed",
            Self::MetersUpdated => "meters_updated",
        }
    }
}

/// A change notification, fanned out to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    /// The zone concerned, when the change is local to one zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ZoneId>,
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    #[must_use]
    pub fn new(event_type: EventType, zone_id: Option<ZoneId>, data: serde_json::Value) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            zone_id,
            data,
            timestamp: now(),
        }
    }
}

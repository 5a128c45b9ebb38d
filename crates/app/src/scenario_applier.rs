//! Scenario application: compute the zones that result from a scenario.
//!
//! Only the devices named by an action change. When several actions target
//! the same device, the first one in the scenario wins.

use ecosmart_domain::scenario::{DeviceKind, ScenarioAction};
use ecosmart_domain::zone::{MAX_BRIGHTNESS, Zone};

/// Return a copy of `zones` with every matching action applied.
#[must_use]
pub fn apply(actions: &[ScenarioAction], zones: &[Zone]) -> Vec<Zone> {
    zones
        .iter()
        .cloned()
        .map(|mut zone| {
            apply_to_zone(actions, &mut zone);
            zone
        })
        .collect()
}

/// Apply the actions addressed to `zone` in place.
pub fn apply_to_zone(actions: &[ScenarioAction], zone: &mut Zone) {
    let zone_id = zone.id.clone();
    let local: Vec<&ScenarioAction> = actions.iter().filter(|a| a.zone_id == zone_id).collect();
    if local.is_empty() {
        return;
    }

    for light in &mut zone.lights {
        if let Some(action) = local
            .iter()
            .find(|a| a.targets(&zone_id, &light.id, DeviceKind::Light))
        {
            light.is_on = action.is_on;
            if let Some(brightness) = action.brightness {
                light.brightness = brightness.min(MAX_BRIGHTNESS);
            }
        }
    }

    for appliance in &mut zone.appliances {
        if let Some(action) = local
            .iter()
            .find(|a| a.targets(&zone_id, &appliance.id, DeviceKind::Appliance))
        {
            appliance.is_on = action.is_on;
        }
    }
}

/// Actions that do not address any existing device.
#[must_use]
pub fn unmatched<'a>(actions: &'a [ScenarioAction], zones: &[Zone]) -> Vec<&'a ScenarioAction> {
    actions
        .iter()
        .filter(|action| {
            zones.iter().filter(|z| z.id == action.zone_id).all(|zone| {
                match action.device_kind {
                    DeviceKind::Light => zone.light(&action.device_id).is_none(),
                    DeviceKind::Appliance => zone.appliance(&action.device_id).is_none(),
                }
            })
        })
        .collect()
}

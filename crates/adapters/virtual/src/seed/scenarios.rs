//! The three built-in scenarios.

use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::scenario::{Scenario, ScenarioAction};

fn lights_off(zone: &str, ids: &[&str]) -> Vec<ScenarioAction> {
    ids.iter()
        .map(|id| ScenarioAction::light(zone, *id, false))
        .collect()
}

fn appliances_off(zone: &str, ids: &[&str]) -> Vec<ScenarioAction> {
    ids.iter()
        .map(|id| ScenarioAction::appliance(zone, *id, false))
        .collect()
}

fn good_night() -> Result<Scenario, EcoSmartError> {
    Scenario::builder()
        .id("sc-good-night")
        .name("Good Night")
        .icon("Moon")
        .description("Turn off all main lights, activate bedroom humidifier, dim bedside lamps.")
        .actions(lights_off("zone-lr", &["l-lr-main", "l-lr-tv", "l-lr-floor"]))
        .actions(appliances_off("zone-lr", &["a-lr-ac", "a-lr-tv"]))
        .actions(lights_off("zone-kt", &["l-kt-spot", "l-kt-cab", "l-kt-tbl"]))
        .actions(appliances_off("zone-kt", &["a-kt-kettle"]))
        .actions(lights_off("zone-mb", &["l-mb-main", "l-mb-ward"]))
        .action(ScenarioAction::light("zone-mb", "l-mb-bed-l", true).with_brightness(20))
        .action(ScenarioAction::light("zone-mb", "l-mb-bed-r", true).with_brightness(20))
        .action(ScenarioAction::appliance("zone-mb", "a-mb-humid", true))
        .actions(lights_off("zone-bath", &["l-ba-main", "l-ba-mir"]))
        .action(ScenarioAction::light("zone-out", "l-out-porch", true))
        .action(ScenarioAction::light("zone-out", "l-out-path", false))
        .action(ScenarioAction::light("zone-out", "l-out-flood", true))
        .build()
}

fn movie_night() -> Result<Scenario, EcoSmartError> {
    Scenario::builder()
        .id("sc-movie")
        .name("Movie Night")
        .icon("Clapperboard")
        .description("Dim living room lights, turn on TV accent light, set AC to comfort.")
        .action(ScenarioAction::light("zone-lr", "l-lr-main", false))
        .action(ScenarioAction::light("zone-lr", "l-lr-tv", true).with_brightness(100))
        .action(ScenarioAction::light("zone-lr", "l-lr-floor", true).with_brightness(30))
        .action(ScenarioAction::appliance("zone-lr", "a-lr-tv", true))
        .action(ScenarioAction::appliance("zone-lr", "a-lr-ac", true))
        .action(ScenarioAction::light("zone-kt", "l-kt-spot", false))
        .action(ScenarioAction::light("zone-kt", "l-kt-cab", true).with_brightness(30))
        .action(ScenarioAction::light("zone-kt", "l-kt-tbl", false))
        .action(ScenarioAction::light("zone-mb", "l-mb-main", false))
        .action(ScenarioAction::light("zone-bath", "l-ba-main", false))
        .build()
}

fn away_mode() -> Result<Scenario, EcoSmartError> {
    Scenario::builder()
        .id("sc-away")
        .name("Away Mode")
        .icon("Shield")
        .description("Turn off all non-essential devices.")
        .actions(lights_off("zone-lr", &["l-lr-main", "l-lr-tv", "l-lr-floor"]))
        .actions(appliances_off("zone-lr", &["a-lr-ac", "a-lr-tv"]))
        .actions(lights_off("zone-kt", &["l-kt-spot", "l-kt-cab", "l-kt-tbl"]))
        .actions(appliances_off("zone-kt", &["a-kt-kettle"]))
        .actions(lights_off(
            "zone-mb",
            &["l-mb-main", "l-mb-bed-l", "l-mb-bed-r", "l-mb-ward"],
        ))
        .actions(appliances_off("zone-mb", &["a-mb-humid"]))
        .actions(lights_off("zone-bath", &["l-ba-main", "l-ba-mir"]))
        .actions(lights_off("zone-out", &["l-out-porch", "l-out-path"]))
        .action(ScenarioAction::light("zone-out", "l-out-flood", true))
        .build()
}

/// Good Night, Movie Night and Away Mode.
///
/// # Errors
///
/// Returns [`EcoSmartError::Validation`] if a seed entry breaks a domain
/// invariant.
pub fn scenarios() -> Result<Vec<Scenario>, EcoSmartError> {
    Ok(vec![good_night()?, movie_night()?, away_mode()?])
}

//! Seed data for the demo house.

mod scenarios;
mod zones;

pub use scenarios::scenarios;
pub use zones::house_zones;

use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::meter::{MeterSensor, SensorStatus, Trend};
use ecosmart_domain::resource::ResourceType;

/// One meter per resource, with its initial reading.
///
/// # Errors
///
/// Returns [`EcoSmartError::Validation`] if a seed entry breaks a domain
/// invariant.
pub fn meters() -> Result<Vec<MeterSensor>, EcoSmartError> {
    Ok(vec![
        MeterSensor::builder()
            .id("elec-01")
            .resource(ResourceType::Electricity)
            .value(2.45)
            .trend(Trend::Stable)
            .threshold(4.0)
            .build()?,
        MeterSensor::builder()
            .id("water-01")
            .resource(ResourceType::Water)
            .value(0.32)
            .trend(Trend::Up)
            .threshold(0.5)
            .build()?,
        MeterSensor::builder()
            .id("gas-01")
            .resource(ResourceType::Gas)
            .value(1.15)
            .trend(Trend::Down)
            .status(SensorStatus::Warning)
            .threshold(1.2)
            .build()?,
        MeterSensor::builder()
            .id("heat-01")
            .resource(ResourceType::Heat)
            .value(0.04)
            .trend(Trend::Stable)
            .threshold(0.1)
            .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecosmart_app::{power, scenario_applier};
    use ecosmart_domain::id::{DeviceId, ZoneId};

    #[test]
    fn should_seed_five_zones_in_display_order() {
        let zones = house_zones().unwrap();
        let ids: Vec<&str> = zones.iter().map(|z| z.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["zone-lr", "zone-kt", "zone-mb", "zone-bath", "zone-out"]
        );
        assert!(zones.iter().all(|z| !z.has_critical_alert()));
    }

    #[test]
    fn should_seed_meters_with_units() {
        let meters = meters().unwrap();
        let units: Vec<&str> = meters.iter().map(|m| m.unit.as_str()).collect();
        assert_eq!(units, vec!["kW", "m³", "m³", "Gcal"]);
        assert_eq!(meters[2].status, SensorStatus::Warning);
        assert_eq!(meters[1].status, SensorStatus::Normal);
    }

    #[test]
    fn should_compute_seed_house_load() {
        // 150 base
        // living room: 48 + 12 + 1200
        // kitchen: 40 + 9 + 150
        // bedroom: 2.4 + 45
        // garden: 15 + 30
        let kw = power::total_kw(&house_zones().unwrap());
        assert!((kw - 1.701).abs() < 1e-9, "got {kw}");
    }

    #[test]
    fn should_target_only_existing_devices() {
        let zones = house_zones().unwrap();
        for scenario in scenarios().unwrap() {
            assert!(
                scenario_applier::unmatched(&scenario.actions, &zones).is_empty(),
                "{} targets unknown devices",
                scenario.name
            );
        }
    }

    #[test]
    fn should_leave_fridge_running_in_away_mode() {
        let zones = house_zones().unwrap();
        let away = scenarios()
            .unwrap()
            .into_iter()
            .find(|s| s.id.as_str() == "sc-away")
            .unwrap();
        let after = scenario_applier::apply(&away.actions, &zones);

        let kitchen = after
            .iter()
            .find(|z| z.id == ZoneId::new("zone-kt"))
            .unwrap();
        let fridge = kitchen.appliance(&DeviceId::new("a-kt-fridge")).unwrap();
        assert!(fridge.is_on);
        // 150 base + 150 fridge + 50 flood
        assert!((power::total_kw(&after) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn should_dim_bedside_lamps_for_good_night() {
        let zones = house_zones().unwrap();
        let good_night = scenarios().unwrap().remove(0);
        let after = scenario_applier::apply(&good_night.actions, &zones);
        let bedroom = &after[2];
        let left = bedroom.light(&DeviceId::new("l-mb-bed-l")).unwrap();
        assert!(left.is_on);
        assert_eq!(left.brightness, 20);
    }
}

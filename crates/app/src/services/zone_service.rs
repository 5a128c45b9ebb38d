//! Zone service: device control inside zones and scenario activation.
//!
//! Every mutation is a single atomic step on the zone store, then the
//! whole-house load is recomputed and pushed to the electricity meter.

use ecosmart_domain::error::{EcoSmartError, NotFoundError};
use ecosmart_domain::event::{Event, EventType};
use ecosmart_domain::id::{DeviceId, ZoneId};
use ecosmart_domain::resource::ResourceType;
use ecosmart_domain::scenario::{Scenario, ScenarioAction};
use ecosmart_domain::zone::{AddedDevice, NewDevice, Zone};

use tokio::sync::Mutex;

use crate::ports::{EventPublisher, MeterRepository, ZoneRepository};
use crate::{power, scenario_applier};

/// Application service for zone and device control.
pub struct ZoneService<ZR, MR, P> {
    zones: ZR,
    meters: MR,
    publisher: P,
    /// Held while the load is read and recorded, so the last write wins
    /// with the latest zones.
    power: Mutex<()>,
}

impl<ZR, MR, P> ZoneService<ZR, MR, P>
where
    ZR: ZoneRepository,
    MR: MeterRepository,
    P: EventPublisher,
{
    /// Create a new service backed by the given repositories and publisher.
    pub fn new(zones: ZR, meters: MR, publisher: P) -> Self {
        Self {
            zones,
            meters,
            publisher,
            power: Mutex::new(()),
        }
    }

    /// List all zones.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_zones(&self) -> Result<Vec<Zone>, EcoSmartError> {
        self.zones.get_all().await
    }

    /// Look up a zone by id.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] when no zone with `id` exists.
    pub async fn get_zone(&self, id: &ZoneId) -> Result<Zone, EcoSmartError> {
        self.zones.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Zone",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Flip a light on or off.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] for an unknown zone or light.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_light(
        &self,
        zone_id: &ZoneId,
        light_id: &DeviceId,
    ) -> Result<Zone, EcoSmartError> {
        let (zone, is_on) = self.mutate(zone_id, |z| z.toggle_light(light_id)).await?;
        tracing::info!(is_on, "light toggled");
        self.emit(
            EventType::LightToggled,
            Some(zone_id),
            serde_json::json!({ "device_id": light_id, "is_on": is_on }),
        )
        .await;
        Ok(zone)
    }

    /// Set a light's brightness, 0 to 100.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] above 100 and
    /// [`EcoSmartError::NotFound`] for an unknown zone or light.
    #[tracing::instrument(skip(self))]
    pub async fn set_brightness(
        &self,
        zone_id: &ZoneId,
        light_id: &DeviceId,
        brightness: u16,
    ) -> Result<Zone, EcoSmartError> {
        let (zone, ()) = self
            .mutate(zone_id, |z| z.set_brightness(light_id, brightness))
            .await?;
        self.emit(
            EventType::BrightnessChanged,
            Some(zone_id),
            serde_json::json!({ "device_id": light_id, "brightness": brightness }),
        )
        .await;
        Ok(zone)
    }

    /// Flip an appliance on or off.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] for an unknown zone or appliance.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_appliance(
        &self,
        zone_id: &ZoneId,
        appliance_id: &DeviceId,
    ) -> Result<Zone, EcoSmartError> {
        let (zone, is_on) = self
            .mutate(zone_id, |z| z.toggle_appliance(appliance_id))
            .await?;
        tracing::info!(is_on, "appliance toggled");
        self.emit(
            EventType::ApplianceToggled,
            Some(zone_id),
            serde_json::json!({ "device_id": appliance_id, "is_on": is_on }),
        )
        .await;
        Ok(zone)
    }

    /// Switch off every light and appliance of a zone.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] for an unknown zone.
    #[tracing::instrument(skip(self))]
    pub async fn master_off(&self, zone_id: &ZoneId) -> Result<Zone, EcoSmartError> {
        let (zone, ()) = self
            .mutate(zone_id, |z| {
                z.master_off();
                Ok(())
            })
            .await?;
        tracing::info!("zone switched off");
        self.emit(EventType::ZoneSwitchedOff, Some(zone_id), serde_json::json!({}))
            .await;
        Ok(zone)
    }

    /// Change the zone theme color.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] for a color that is not
    /// `#rrggbb`, or [`EcoSmartError::NotFound`] for an unknown zone.
    #[tracing::instrument(skip(self))]
    pub async fn set_color(&self, zone_id: &ZoneId, color: &str) -> Result<Zone, EcoSmartError> {
        let (zone, ()) = self
            .mutate(zone_id, |z| z.set_accent_color(color))
            .await?;
        self.emit(
            EventType::ZoneColorChanged,
            Some(zone_id),
            serde_json::json!({ "accent_color": zone.accent_color }),
        )
        .await;
        Ok(zone)
    }

    /// Add a light or appliance to a zone.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] for a blank name or invalid
    /// power draw, or [`EcoSmartError::NotFound`] for an unknown zone.
    #[tracing::instrument(skip(self, request))]
    pub async fn add_device(
        &self,
        zone_id: &ZoneId,
        request: NewDevice,
    ) -> Result<AddedDevice, EcoSmartError> {
        let (_, added) = self.mutate(zone_id, |z| z.add_device(request)).await?;
        tracing::info!(device_id = %added.id(), "device added");
        self.emit(
            EventType::DeviceAdded,
            Some(zone_id),
            serde_json::json!({ "device_id": added.id() }),
        )
        .await;
        Ok(added)
    }

    /// Remove a light from a zone.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] for an unknown zone or light.
    #[tracing::instrument(skip(self))]
    pub async fn remove_light(
        &self,
        zone_id: &ZoneId,
        light_id: &DeviceId,
    ) -> Result<Zone, EcoSmartError> {
        let (zone, _) = self.mutate(zone_id, |z| z.remove_light(light_id)).await?;
        self.device_removed(zone_id, light_id).await;
        Ok(zone)
    }

    /// Remove an appliance from a zone.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::NotFound`] for an unknown zone or appliance.
    #[tracing::instrument(skip(self))]
    pub async fn remove_appliance(
        &self,
        zone_id: &ZoneId,
        appliance_id: &DeviceId,
    ) -> Result<Zone, EcoSmartError> {
        let (zone, _) = self
            .mutate(zone_id, |z| z.remove_appliance(appliance_id))
            .await?;
        self.device_removed(zone_id, appliance_id).await;
        Ok(zone)
    }

    /// Apply a scenario to every zone at once.
    ///
    /// Actions addressing unknown zones or devices are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self, scenario), fields(scenario_id = %scenario.id))]
    pub async fn activate_scenario(&self, scenario: &Scenario) -> Result<Vec<Zone>, EcoSmartError> {
        let (updated, unmatched) = self
            .zones
            .modify_all(|zones| {
                let unmatched: Vec<String> = scenario_applier::unmatched(&scenario.actions, zones)
                    .into_iter()
                    .map(ToString::to_string)
                    .collect();
                let next = scenario_applier::apply(&scenario.actions, zones);
                *zones = next;
                unmatched
            })
            .await?;
        for action in unmatched {
            tracing::warn!(%action, "scenario action targets no device");
        }

        let kw = self.refresh_power().await?;
        tracing::info!(name = %scenario.name, kw, "scenario activated");

        self.emit(
            EventType::ScenarioActivated,
            None,
            serde_json::json!({ "scenario_id": scenario.id, "name": scenario.name }),
        )
        .await;
        Ok(updated)
    }

    /// The current state of every device, as scenario actions.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn snapshot(&self) -> Result<Vec<ScenarioAction>, EcoSmartError> {
        let zones = self.zones.get_all().await?;
        Ok(Scenario::snapshot(&zones))
    }

    /// Recompute the whole-house load and record it on the electricity meter.
    ///
    /// Returns the load in kW. A house without an electricity meter only
    /// gets the computation.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn refresh_power(&self) -> Result<f64, EcoSmartError> {
        let _guard = self.power.lock().await;
        let zones = self.zones.get_all().await?;
        let kw = power::total_kw(&zones);

        let Some(mut meter) = self.meters.get_by_resource(ResourceType::Electricity).await? else {
            tracing::debug!(kw, "no electricity meter to update");
            return Ok(kw);
        };
        power::refresh_electricity(&mut meter, kw);
        let meter = self.meters.update(meter).await?;
        tracing::debug!(kw, status = ?meter.status, "power usage refreshed");

        self.emit(
            EventType::PowerUsageChanged,
            None,
            serde_json::json!({ "kw": kw, "trend": meter.trend, "status": meter.status }),
        )
        .await;
        Ok(kw)
    }

    async fn mutate<T>(
        &self,
        zone_id: &ZoneId,
        change: impl FnOnce(&mut Zone) -> Result<T, EcoSmartError> + Send,
    ) -> Result<(Zone, T), EcoSmartError>
    where
        T: Send,
    {
        let (zone, outcome) = self.zones.modify(zone_id, change).await?;
        self.refresh_power().await?;
        Ok((zone, outcome))
    }

    async fn device_removed(&self, zone_id: &ZoneId, device_id: &DeviceId) {
        tracing::info!(%device_id, "device removed");
        self.emit(
            EventType::DeviceRemoved,
            Some(zone_id),
            serde_json::json!({ "device_id": device_id }),
        )
        .await;
    }

    async fn emit(&self, event_type: EventType, zone_id: Option<&ZoneId>, data: serde_json::Value) {
        let event = Event::new(event_type, zone_id.cloned(), data);
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(error = %err, ?event_type, "failed to publish event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{
        FakeMeters, FakeZones, RecordingPublisher, YieldingZones, living_room, meters,
    };
    use ecosmart_domain::zone::ZoneLight;
    use ecosmart_domain::error::ValidationError;
    use ecosmart_domain::meter::Trend;
    use std::sync::Arc;

    type Service = ZoneService<Arc<FakeZones>, Arc<FakeMeters>, Arc<RecordingPublisher>>;

    struct Fixture {
        service: Service,
        zones: Arc<FakeZones>,
        meters: Arc<FakeMeters>,
        events: Arc<RecordingPublisher>,
    }

    fn fixture() -> Fixture {
        let zones = Arc::new(FakeZones::with(vec![living_room()]));
        let meters = Arc::new(FakeMeters::with(meters()));
        let events = Arc::new(RecordingPublisher::default());
        Fixture {
            service: ZoneService::new(Arc::clone(&zones), Arc::clone(&meters), Arc::clone(&events)),
            zones,
            meters,
            events,
        }
    }

    fn lr() -> ZoneId {
        ZoneId::new("zone-lr")
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_zone() {
        let fx = fixture();
        let result = fx.service.get_zone(&ZoneId::new("zone-x")).await;
        assert!(matches!(result, Err(EcoSmartError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_toggle_light_and_refresh_power() {
        let fx = fixture();
        let zone = fx
            .service
            .toggle_light(&lr(), &DeviceId::new("l-lr-main"))
            .await
            .unwrap();

        assert!(!zone.lights[0].is_on);
        assert!(!fx.zones.store.lock().unwrap()[0].lights[0].is_on);
        // 150 base + 1200 AC
        assert_eq!(fx.meters.value_of(ResourceType::Electricity), Some(1.35));
        assert_eq!(
            fx.events.types(),
            vec![EventType::PowerUsageChanged, EventType::LightToggled]
        );
    }

    #[tokio::test]
    async fn should_reject_brightness_above_hundred() {
        let fx = fixture();
        let result = fx
            .service
            .set_brightness(&lr(), &DeviceId::new("l-lr-main"), 150)
            .await;
        assert!(matches!(
            result,
            Err(EcoSmartError::Validation(
                ValidationError::BrightnessOutOfRange(150)
            ))
        ));
        assert!(fx.events.types().is_empty());
    }

    #[tokio::test]
    async fn should_set_brightness_and_scale_power() {
        let fx = fixture();
        fx.service
            .set_brightness(&lr(), &DeviceId::new("l-lr-main"), 50)
            .await
            .unwrap();
        // 150 + 30 + 1200
        assert_eq!(fx.meters.value_of(ResourceType::Electricity), Some(1.38));
    }

    #[tokio::test]
    async fn should_not_touch_store_when_light_is_unknown() {
        let fx = fixture();
        let result = fx
            .service
            .toggle_light(&lr(), &DeviceId::new("l-missing"))
            .await;
        assert!(matches!(result, Err(EcoSmartError::NotFound(_))));
        assert_eq!(fx.meters.value_of(ResourceType::Electricity), Some(2.45));
    }

    #[tokio::test]
    async fn should_switch_everything_off_with_master_off() {
        let fx = fixture();
        let zone = fx.service.master_off(&lr()).await.unwrap();
        assert!(zone.lights.iter().all(|l| !l.is_on));
        assert!(zone.appliances.iter().all(|a| !a.is_on));
        assert_eq!(fx.meters.value_of(ResourceType::Electricity), Some(0.15));
        let meter = fx.meters.store.lock().unwrap()[0].clone();
        assert_eq!(meter.trend, Trend::Down);
    }

    #[tokio::test]
    async fn should_add_and_remove_devices() {
        let fx = fixture();
        let added = fx
            .service
            .add_device(
                &lr(),
                NewDevice::Appliance {
                    name: "Heater".to_string(),
                    power_draw: 800.0,
                    icon: None,
                },
            )
            .await
            .unwrap();
        let AddedDevice::Appliance(appliance) = &added else {
            panic!("expected an appliance");
        };
        assert!(!appliance.is_on);
        assert_eq!(fx.service.get_zone(&lr()).await.unwrap().appliances.len(), 2);

        let zone = fx
            .service
            .remove_appliance(&lr(), &appliance.id)
            .await
            .unwrap();
        assert_eq!(zone.appliances.len(), 1);
        assert!(fx.events.types().contains(&EventType::DeviceRemoved));
    }

    #[tokio::test]
    async fn should_reject_invalid_color() {
        let fx = fixture();
        let result = fx.service.set_color(&lr(), "purple").await;
        assert!(matches!(
            result,
            Err(EcoSmartError::Validation(ValidationError::InvalidColor(_)))
        ));
    }

    #[tokio::test]
    async fn should_activate_scenario_across_zones() {
        let fx = fixture();
        let scenario = Scenario::builder()
            .id("sc-movie")
            .name("Movie Night")
            .action(ScenarioAction::light("zone-lr", "l-lr-main", false))
            .action(ScenarioAction::appliance("zone-lr", "a-lr-ac", true))
            .action(ScenarioAction::light("zone-gone", "l-x", true))
            .build()
            .unwrap();

        let zones = fx.service.activate_scenario(&scenario).await.unwrap();
        assert!(!zones[0].lights[0].is_on);
        assert!(zones[0].appliances[0].is_on);
        assert_eq!(fx.meters.value_of(ResourceType::Electricity), Some(1.35));
        assert_eq!(
            fx.events.types().last(),
            Some(&EventType::ScenarioActivated)
        );
    }

    #[tokio::test]
    async fn should_snapshot_current_device_states() {
        let fx = fixture();
        let actions = fx.service.snapshot().await.unwrap();
        assert_eq!(
            actions,
            vec![
                ScenarioAction::light("zone-lr", "l-lr-main", true).with_brightness(80),
                ScenarioAction::appliance("zone-lr", "a-lr-ac", true),
            ]
        );
    }

    #[tokio::test]
    async fn should_compute_power_without_electricity_meter() {
        let zones = Arc::new(FakeZones::with(vec![living_room()]));
        let service = ZoneService::new(
            zones,
            Arc::new(FakeMeters::default()),
            Arc::new(RecordingPublisher::default()),
        );
        // 150 + 48 + 1200
        assert_eq!(service.refresh_power().await.unwrap(), 1.398);
    }

    fn dark_hallway() -> Zone {
        let light = |id: &str| {
            ZoneLight::builder()
                .id(id)
                .name(id)
                .power_draw(10.0)
                .build()
                .unwrap()
        };
        Zone::builder()
            .id("zone-hw")
            .name("Hallway")
            .light(light("l-hw-a"))
            .light(light("l-hw-b"))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_keep_both_concurrent_toggles_in_one_zone() {
        let zones = Arc::new(YieldingZones(FakeZones::with(vec![dark_hallway()])));
        let meters = Arc::new(FakeMeters::with(meters()));
        let service = ZoneService::new(
            Arc::clone(&zones),
            Arc::clone(&meters),
            Arc::new(RecordingPublisher::default()),
        );
        let hw = ZoneId::new("zone-hw");
        let (a, b) = (DeviceId::new("l-hw-a"), DeviceId::new("l-hw-b"));

        let (first, second) = tokio::join!(
            service.toggle_light(&hw, &a),
            service.toggle_light(&hw, &b)
        );
        first.unwrap();
        second.unwrap();

        let zone = service.get_zone(&hw).await.unwrap();
        let states: Vec<bool> = zone.lights.iter().map(|l| l.is_on).collect();
        assert_eq!(states, vec![true, true]);
        // 150 base + 2 x 10 W
        assert_eq!(meters.value_of(ResourceType::Electricity), Some(0.17));
    }

    #[tokio::test]
    async fn should_keep_toggle_racing_scenario_activation() {
        let zones = Arc::new(YieldingZones(FakeZones::with(vec![
            living_room(),
            dark_hallway(),
        ])));
        let service = ZoneService::new(
            zones,
            Arc::new(FakeMeters::with(meters())),
            Arc::new(RecordingPublisher::default()),
        );
        let scenario = Scenario::builder()
            .id("sc-away")
            .name("Away")
            .action(ScenarioAction::appliance("zone-lr", "a-lr-ac", false))
            .build()
            .unwrap();
        let hw = ZoneId::new("zone-hw");
        let hw_light = DeviceId::new("l-hw-a");

        let (activated, toggled) = tokio::join!(
            service.activate_scenario(&scenario),
            service.toggle_light(&hw, &hw_light)
        );
        activated.unwrap();
        toggled.unwrap();

        let all = service.list_zones().await.unwrap();
        assert!(!all[0].appliances[0].is_on);
        assert!(all[1].lights[0].is_on);
    }
}

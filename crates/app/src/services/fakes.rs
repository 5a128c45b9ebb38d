//! In-memory port stubs shared by the service tests.

use std::future::Future;
use std::sync::Mutex;

use ecosmart_domain::error::{EcoSmartError, NotFoundError};
use ecosmart_domain::event::{Event, EventType};
use ecosmart_domain::history::{DateRange, UsageRecord};
use ecosmart_domain::id::{ScenarioId, ZoneId};
use ecosmart_domain::insight::{IndoorState, OutdoorConditions};
use ecosmart_domain::meter::MeterSensor;
use ecosmart_domain::resource::ResourceType;
use ecosmart_domain::scenario::Scenario;
use ecosmart_domain::zone::{Zone, ZoneAppliance, ZoneLight};

use crate::ports::{
    EventPublisher, IndoorClimate, MeterRepository, ScenarioRepository, UsageHistory,
    WeatherProvider, ZoneRepository,
};

fn missing(entity: &'static str, id: &impl ToString) -> EcoSmartError {
    NotFoundError {
        entity,
        id: id.to_string(),
    }
    .into()
}

#[derive(Default)]
pub struct FakeZones {
    pub store: Mutex<Vec<Zone>>,
}

impl FakeZones {
    pub fn with(zones: Vec<Zone>) -> Self {
        Self {
            store: Mutex::new(zones),
        }
    }
}

impl ZoneRepository for FakeZones {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Zone>, EcoSmartError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: &ZoneId,
    ) -> impl Future<Output = Result<Option<Zone>, EcoSmartError>> + Send {
        let result = self
            .store
            .lock()
            .unwrap()
            .iter()
            .find(|z| &z.id == id)
            .cloned();
        async { Ok(result) }
    }

    fn modify<T, F>(
        &self,
        id: &ZoneId,
        change: F,
    ) -> impl Future<Output = Result<(Zone, T), EcoSmartError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Zone) -> Result<T, EcoSmartError> + Send,
    {
        let mut store = self.store.lock().unwrap();
        let result = match store.iter_mut().find(|z| &z.id == id) {
            Some(slot) => {
                let mut draft = slot.clone();
                change(&mut draft).map(|outcome| {
                    *slot = draft.clone();
                    (draft, outcome)
                })
            }
            None => Err(missing("Zone", id)),
        };
        async { result }
    }

    fn modify_all<T, F>(
        &self,
        change: F,
    ) -> impl Future<Output = Result<(Vec<Zone>, T), EcoSmartError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Vec<Zone>) -> T + Send,
    {
        let mut store = self.store.lock().unwrap();
        let outcome = change(&mut *store);
        let result = Ok((store.clone(), outcome));
        async { result }
    }
}

/// Zone store whose calls suspend before touching the data, like a remote
/// store would.
#[derive(Default)]
pub struct YieldingZones(pub FakeZones);

impl ZoneRepository for YieldingZones {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Zone>, EcoSmartError>> + Send {
        async {
            tokio::task::yield_now().await;
            self.0.get_all().await
        }
    }

    fn get_by_id(
        &self,
        id: &ZoneId,
    ) -> impl Future<Output = Result<Option<Zone>, EcoSmartError>> + Send {
        async move {
            tokio::task::yield_now().await;
            self.0.get_by_id(id).await
        }
    }

    fn modify<T, F>(
        &self,
        id: &ZoneId,
        change: F,
    ) -> impl Future<Output = Result<(Zone, T), EcoSmartError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Zone) -> Result<T, EcoSmartError> + Send,
    {
        async move {
            tokio::task::yield_now().await;
            self.0.modify(id, change).await
        }
    }

    fn modify_all<T, F>(
        &self,
        change: F,
    ) -> impl Future<Output = Result<(Vec<Zone>, T), EcoSmartError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Vec<Zone>) -> T + Send,
    {
        async move {
            tokio::task::yield_now().await;
            self.0.modify_all(change).await
        }
    }
}

#[derive(Default)]
pub struct FakeScenarios {
    pub store: Mutex<Vec<Scenario>>,
}

impl FakeScenarios {
    pub fn with(scenarios: Vec<Scenario>) -> Self {
        Self {
            store: Mutex::new(scenarios),
        }
    }
}

impl ScenarioRepository for FakeScenarios {
    fn create(
        &self,
        scenario: Scenario,
    ) -> impl Future<Output = Result<Scenario, EcoSmartError>> + Send {
        self.store.lock().unwrap().push(scenario.clone());
        async { Ok(scenario) }
    }

    fn get_by_id(
        &self,
        id: &ScenarioId,
    ) -> impl Future<Output = Result<Option<Scenario>, EcoSmartError>> + Send {
        let result = self
            .store
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.id == id)
            .cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Scenario>, EcoSmartError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn update(
        &self,
        scenario: Scenario,
    ) -> impl Future<Output = Result<Scenario, EcoSmartError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = match store.iter_mut().find(|s| s.id == scenario.id) {
            Some(slot) => {
                *slot = scenario.clone();
                Ok(scenario)
            }
            None => Err(missing("Scenario", &scenario.id)),
        };
        async { result }
    }

    fn delete(&self, id: &ScenarioId) -> impl Future<Output = Result<(), EcoSmartError>> + Send {
        self.store.lock().unwrap().retain(|s| &s.id != id);
        async { Ok(()) }
    }
}

#[derive(Default)]
pub struct FakeMeters {
    pub store: Mutex<Vec<MeterSensor>>,
}

impl FakeMeters {
    pub fn with(meters: Vec<MeterSensor>) -> Self {
        Self {
            store: Mutex::new(meters),
        }
    }

    pub fn value_of(&self, resource: ResourceType) -> Option<f64> {
        self.store
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.resource == resource)
            .map(|m| m.value)
    }
}

impl MeterRepository for FakeMeters {
    fn get_all(&self) -> impl Future<Output = Result<Vec<MeterSensor>, EcoSmartError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn get_by_resource(
        &self,
        resource: ResourceType,
    ) -> impl Future<Output = Result<Option<MeterSensor>, EcoSmartError>> + Send {
        let result = self
            .store
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.resource == resource)
            .cloned();
        async { Ok(result) }
    }

    fn update(
        &self,
        meter: MeterSensor,
    ) -> impl Future<Output = Result<MeterSensor, EcoSmartError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = match store.iter_mut().find(|m| m.id == meter.id) {
            Some(slot) => {
                *slot = meter.clone();
                Ok(meter)
            }
            None => Err(missing("Meter", &meter.id)),
        };
        async { result }
    }
}

#[derive(Default)]
pub struct RecordingPublisher {
    pub events: Mutex<Vec<Event>>,
}

impl RecordingPublisher {
    pub fn types(&self) -> Vec<EventType> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.event_type)
            .collect()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), EcoSmartError>> + Send {
        self.events.lock().unwrap().push(event);
        async { Ok(()) }
    }
}

/// Weather stub; `None` simulates an unreachable API.
pub struct FixedWeather(pub Option<OutdoorConditions>);

impl WeatherProvider for FixedWeather {
    fn current(&self) -> impl Future<Output = Result<OutdoorConditions, EcoSmartError>> + Send {
        let result = self
            .0
            .ok_or_else(|| EcoSmartError::Upstream("weather offline".into()));
        async { result }
    }
}

pub struct FixedClimate(pub IndoorState);

impl IndoorClimate for FixedClimate {
    fn current(&self) -> impl Future<Output = Result<IndoorState, EcoSmartError>> + Send {
        let result = self.0;
        async move { Ok(result) }
    }
}

/// History stub returning one flat record per day.
pub struct FlatHistory;

impl UsageHistory for FlatHistory {
    fn daily_usage(
        &self,
        resource: ResourceType,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<UsageRecord>, EcoSmartError>> + Send {
        let records = range
            .days()
            .map(|date| UsageRecord {
                date,
                value: 1.0,
                unit: resource.usage_unit().to_string(),
                cost: resource.cost(1.0),
            })
            .collect();
        async { Ok(records) }
    }
}

pub fn living_room() -> Zone {
    Zone::builder()
        .id("zone-lr")
        .name("Living Room")
        .light(
            ZoneLight::builder()
                .id("l-lr-main")
                .name("Main Chandelier")
                .on(true)
                .brightness(80)
                .dimmable(true)
                .power_draw(60.0)
                .build()
                .unwrap(),
        )
        .appliance(
            ZoneAppliance::builder()
                .id("a-lr-ac")
                .name("Air Conditioner")
                .icon("Fan")
                .on(true)
                .power_draw(1200.0)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

pub fn meters() -> Vec<MeterSensor> {
    vec![
        MeterSensor::builder()
            .id("elec-01")
            .resource(ResourceType::Electricity)
            .value(2.45)
            .threshold(4.0)
            .build()
            .unwrap(),
        MeterSensor::builder()
            .id("water-01")
            .resource(ResourceType::Water)
            .value(0.32)
            .threshold(0.5)
            .build()
            .unwrap(),
    ]
}

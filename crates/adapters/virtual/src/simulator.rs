//! Meter drift simulation.
//!
//! Water, gas and heat creep upwards in small random steps. Electricity is
//! left alone because it follows the state of the zone devices.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ecosmart_domain::meter::{MeterSensor, SensorStatus, Trend};
use ecosmart_domain::resource::ResourceType;
use ecosmart_domain::time::round_to;

/// Chance that a meter moves during one step.
pub const DRIFT_PROBABILITY: f64 = 0.3;
/// Largest increase applied in one step.
pub const MAX_DRIFT: f64 = 0.005;

/// Produces the next simulated readings from the current ones.
pub struct MeterSimulator<R> {
    rng: R,
}

impl MeterSimulator<StdRng> {
    /// Simulator seeded from the operating system.
    #[must_use]
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> MeterSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Advance every meter by one step.
    pub fn step(&mut self, meters: &[MeterSensor]) -> Vec<MeterSensor> {
        meters.iter().map(|meter| self.drift(meter)).collect()
    }

    fn drift(&mut self, meter: &MeterSensor) -> MeterSensor {
        let mut next = meter.clone();
        if meter.resource == ResourceType::Electricity {
            return next;
        }

        if self.rng.random::<f64>() < DRIFT_PROBABILITY {
            next.value = round_to(meter.value + self.rng.random_range(0.0..MAX_DRIFT), 3);
            next.trend = Trend::Up;
        } else {
            next.trend = Trend::Stable;
        }
        next.status = SensorStatus::classify(next.value, next.threshold);
        next
    }
}

//! Power aggregation: whole-house electrical load from zone device states.

use ecosmart_domain::meter::MeterSensor;
use ecosmart_domain::time::round_to;
use ecosmart_domain::zone::Zone;

/// Always-on consumption (router, fridge electronics, standby), in watts.
pub const BASE_LOAD_WATTS: f64 = 150.0;

/// Base load plus every light and appliance that is on, in watts.
#[must_use]
pub fn total_watts(zones: &[Zone]) -> f64 {
    BASE_LOAD_WATTS + zones.iter().map(Zone::power_watts).sum::<f64>()
}

/// [`total_watts`] in kilowatts, rounded to three decimals.
#[must_use]
pub fn total_kw(zones: &[Zone]) -> f64 {
    round_to(total_watts(zones) / 1000.0, 3)
}

/// Record a new load on the electricity meter.
///
/// Trend is taken against the previous reading and status is reclassified
/// against the meter threshold.
pub fn refresh_electricity(meter: &mut MeterSensor, kw: f64) {
    meter.record(kw);
}

//! Generated daily usage history.

use std::future::Future;

use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;

use ecosmart_app::ports::UsageHistory;
use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::history::{DateRange, UsageRecord};
use ecosmart_domain::resource::ResourceType;
use ecosmart_domain::time::round_to;

/// Extra consumption on Saturdays and Sundays.
pub const WEEKEND_FACTOR: f64 = 1.2;

/// Typical daily usage and the width of its random spread.
fn profile(resource: ResourceType) -> (f64, f64) {
    match resource {
        ResourceType::Electricity => (12.0, 5.0),
        ResourceType::Water => (0.35, 0.1),
        ResourceType::Gas => (1.2, 0.4),
        ResourceType::Heat => (0.05, 0.02),
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Usage history made up on every request.
#[derive(Debug, Default)]
pub struct SimulatedHistory;

impl SimulatedHistory {
    /// One record per day of `range` drawn from `rng`.
    pub fn generate(
        resource: ResourceType,
        range: DateRange,
        rng: &mut impl Rng,
    ) -> Vec<UsageRecord> {
        let (base, variance) = profile(resource);
        range
            .days()
            .map(|date| {
                let factor = if is_weekend(date) { WEEKEND_FACTOR } else { 1.0 };
                let noise = (rng.random::<f64>() - 0.5) * variance;
                let raw = (base * factor + noise).max(0.0);
                UsageRecord {
                    date,
                    value: round_to(raw, 2),
                    unit: resource.usage_unit().to_string(),
                    cost: round_to(resource.cost(raw), 2),
                }
            })
            .collect()
    }
}

impl UsageHistory for SimulatedHistory {
    fn daily_usage(
        &self,
        resource: ResourceType,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<UsageRecord>, EcoSmartError>> + Send {
        let records = Self::generate(resource, range, &mut rand::rng());
        tracing::debug!(%resource, days = records.len(), "usage history generated");
        async { Ok(records) }
    }
}

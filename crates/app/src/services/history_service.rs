//! History service: daily usage queries with a default window.

use chrono::NaiveDate;

use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::history::{DateRange, UsageRecord};
use ecosmart_domain::resource::ResourceType;
use ecosmart_domain::time::today;

use crate::ports::UsageHistory;

/// Days covered when a query gives no start date.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

pub struct HistoryService<H> {
    history: H,
}

impl<H: UsageHistory> HistoryService<H> {
    pub fn new(history: H) -> Self {
        Self { history }
    }

    /// Daily usage of `resource` between `from` and `to`, both inclusive.
    ///
    /// `to` defaults to today and `from` to [`DEFAULT_WINDOW_DAYS`] days
    /// ending at `to`.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] for a reversed or overly long
    /// range.
    pub async fn daily_usage(
        &self,
        resource: ResourceType,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<UsageRecord>, EcoSmartError> {
        let to = to.unwrap_or_else(today);
        let range = match from {
            Some(from) => DateRange::new(from, to)?,
            None => DateRange::ending_at(to, DEFAULT_WINDOW_DAYS)?,
        };
        tracing::debug!(%resource, from = %range.from(), to = %range.to(), "usage history requested");
        self.history.daily_usage(resource, range).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::FlatHistory;
    use ecosmart_domain::error::ValidationError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn should_default_to_last_seven_days() {
        let svc = HistoryService::new(FlatHistory);
        let records = svc
            .daily_usage(ResourceType::Water, None, Some(date(2025, 3, 9)))
            .await
            .unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[0].date, date(2025, 3, 3));
        assert_eq!(records[0].unit, "m³");
    }

    #[tokio::test]
    async fn should_reject_reversed_range() {
        let svc = HistoryService::new(FlatHistory);
        let result = svc
            .daily_usage(
                ResourceType::Gas,
                Some(date(2025, 3, 9)),
                Some(date(2025, 3, 1)),
            )
            .await;
        assert!(matches!(
            result,
            Err(EcoSmartError::Validation(ValidationError::InvalidDateRange))
        ));
    }
}

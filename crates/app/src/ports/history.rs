//! History port: daily consumption per resource.

use std::future::Future;
use std::sync::Arc;

use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::history::{DateRange, UsageRecord};
use ecosmart_domain::resource::ResourceType;

/// Provides daily usage records.
pub trait UsageHistory {
    /// One record per day of `range`, oldest first.
    fn daily_usage(
        &self,
        resource: ResourceType,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<UsageRecord>, EcoSmartError>> + Send;
}

impl<T: UsageHistory + Send + Sync> UsageHistory for Arc<T> {
    fn daily_usage(
        &self,
        resource: ResourceType,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<UsageRecord>, EcoSmartError>> + Send {
        (**self).daily_usage(resource, range)
    }
}

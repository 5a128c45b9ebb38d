//! Event bus port: publish/subscribe for domain events.

use std::future::Future;

use ecosmart_domain::error::EcoSmartError;
use ecosmart_domain::event::Event;

/// Publishes domain events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), EcoSmartError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), EcoSmartError>> + Send {
        (**self).publish(event)
    }
}

//! Store-specific error type.

use ecosmart_domain::error::EcoSmartError;

/// Errors originating from the in-process store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock of a collection.
    #[error("{0} store lock poisoned")]
    Poisoned(&'static str),
}

impl From<StoreError> for EcoSmartError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "in-memory store unavailable");
        Self::Upstream(Box::new(err))
    }
}

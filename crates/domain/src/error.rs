//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`EcoSmartError`]
//! via `#[from]` (or an explicit `From` impl for boxed adapter errors).

/// Top-level error shared by every port and service.
#[derive(Debug, thiserror::Error)]
pub enum EcoSmartError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A failure in an adapter (weather API, in-process store, …).
    #[error("upstream error")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("identifier must not be empty")]
    EmptyId,

    #[error("brightness {0} is outside 0..=100")]
    BrightnessOutOfRange(u16),

    #[error("power draw must be a finite, non-negative number of watts")]
    InvalidPowerDraw,

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("threshold must be a finite, positive number")]
    InvalidThreshold,

    #[error("start date must not be after end date")]
    InvalidDateRange,

    #[error("date range of {0} days exceeds the maximum")]
    DateRangeTooLong(i64),

    #[error("unknown resource {0:?}")]
    UnknownResource(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

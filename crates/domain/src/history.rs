//! Usage history: daily consumption totals and their cost.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Longest range a single history query may span, in days.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Consumption of one resource on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub date: NaiveDate,
    pub value: f64,
    pub unit: String,
    /// Estimated cost in KZT.
    pub cost: f64,
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Build an inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDateRange`] when `from > to` and
    /// [`ValidationError::DateRangeTooLong`] beyond [`MAX_RANGE_DAYS`].
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, ValidationError> {
        if from > to {
            return Err(ValidationError::InvalidDateRange);
        }
        let days = (to - from).num_days() + 1;
        if days > MAX_RANGE_DAYS {
            return Err(ValidationError::DateRangeTooLong(days));
        }
        Ok(Self { from, to })
    }

    /// The `days` days ending at `to` (inclusive).
    ///
    /// # Errors
    ///
    /// Same as [`DateRange::new`], plus [`ValidationError::InvalidDateRange`]
    /// when the range would start before the earliest representable date.
    pub fn ending_at(to: NaiveDate, days: u32) -> Result<Self, ValidationError> {
        let from = to
            .checked_sub_days(Days::new(u64::from(days.max(1)) - 1))
            .ok_or(ValidationError::InvalidDateRange)?;
        Self::new(from, to)
    }

    #[must_use]
    pub fn from(&self) -> NaiveDate {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Every day of the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }
}

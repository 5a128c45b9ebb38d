//! Meter: a whole-house consumption reading for one resource.

use serde::{Deserialize, Serialize};

use crate::error::{EcoSmartError, ValidationError};
use crate::id::MeterId;
use crate::resource::ResourceType;
use crate::time::round_to;

/// Fraction of the threshold above which a reading becomes a warning.
pub const WARNING_RATIO: f64 = 0.9;

/// Direction of the latest change of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    /// Compare two consecutive readings.
    #[must_use]
    pub fn between(previous: f64, current: f64) -> Self {
        if current > previous {
            Self::Up
        } else if current < previous {
            Self::Down
        } else {
            Self::Stable
        }
    }
}

/// Health classification shared by meters and zone sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl SensorStatus {
    /// Classify `value` against its limit.
    ///
    /// Anything above the threshold is critical, anything above
    /// [`WARNING_RATIO`] of it is a warning.
    #[must_use]
    pub fn classify(value: f64, threshold: f64) -> Self {
        if value > threshold {
            Self::Critical
        } else if value > threshold * WARNING_RATIO {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Live reading of a house meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterSensor {
    pub id: MeterId,
    pub resource: ResourceType,
    pub value: f64,
    pub unit: String,
    pub trend: Trend,
    pub status: SensorStatus,
    /// Limit before the reading turns critical.
    pub threshold: f64,
}

impl MeterSensor {
    /// Create a builder for constructing a [`MeterSensor`].
    #[must_use]
    pub fn builder() -> MeterSensorBuilder {
        MeterSensorBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] when the id is empty or the
    /// threshold is not a positive finite number.
    pub fn validate(&self) -> Result<(), EcoSmartError> {
        if self.id.as_str().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ValidationError::InvalidThreshold.into());
        }
        Ok(())
    }

    /// Record a new reading, updating trend and status.
    ///
    /// The value is rounded to three decimals before comparison.
    pub fn record(&mut self, value: f64) {
        let value = round_to(value, 3);
        self.trend = Trend::between(self.value, value);
        self.value = value;
        self.status = SensorStatus::classify(value, self.threshold);
    }
}

/// Step-by-step builder for [`MeterSensor`].
#[derive(Debug, Default)]
pub struct MeterSensorBuilder {
    id: Option<MeterId>,
    resource: Option<ResourceType>,
    value: f64,
    trend: Trend,
    status: Option<SensorStatus>,
    threshold: Option<f64>,
}

impl MeterSensorBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<MeterId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn resource(mut self, resource: ResourceType) -> Self {
        self.resource = Some(resource);
        self
    }

    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = trend;
        self
    }

    /// Override the status; otherwise it is classified from the value.
    #[must_use]
    pub fn status(mut self, status: SensorStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Consume the builder, validate, and return a [`MeterSensor`].
    ///
    /// # Errors
    ///
    /// Returns [`EcoSmartError::Validation`] if the id or threshold is invalid.
    pub fn build(self) -> Result<MeterSensor, EcoSmartError> {
        let resource = self.resource.unwrap_or(ResourceType::Electricity);
        let threshold = self.threshold.unwrap_or(0.0);
        let meter = MeterSensor {
            id: self.id.unwrap_or_else(|| MeterId::new("")),
            resource,
            value: self.value,
            unit: resource.meter_unit().to_string(),
            trend: self.trend,
            status: self
                .status
                .unwrap_or_else(|| SensorStatus::classify(self.value, threshold)),
            threshold,
        };
        meter.validate()?;
        Ok(meter)
    }
}

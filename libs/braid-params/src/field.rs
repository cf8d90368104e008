//! # Parameter Fields
//!
//! Per-field metadata: wire name, valid range, UI step, unit and default.

use config::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five tunable braid parameters.
///
/// # Example
///
/// ```rust
/// use braid_params::ParamField;
///
/// assert_eq!(ParamField::StrandCount.key(), "strandCount");
/// assert_eq!(ParamField::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamField {
    Radius,
    Length,
    StrandCount,
    AngleDeg,
    Tension,
}

impl ParamField {
    /// All fields in canonical order.
    pub const ALL: [ParamField; 5] = [
        ParamField::Radius,
        ParamField::Length,
        ParamField::StrandCount,
        ParamField::AngleDeg,
        ParamField::Tension,
    ];

    /// Name used in JSON payloads and share-link queries.
    pub fn key(self) -> &'static str {
        match self {
            ParamField::Radius => "radius",
            ParamField::Length => "length",
            ParamField::StrandCount => "strandCount",
            ParamField::AngleDeg => "angleDeg",
            ParamField::Tension => "tension",
        }
    }

    /// Looks a field up by its wire name.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Human-readable label for input widgets.
    pub fn label(self) -> &'static str {
        match self {
            ParamField::Radius => "Radius",
            ParamField::Length => "Length",
            ParamField::StrandCount => "Strand count",
            ParamField::AngleDeg => "Braid angle",
            ParamField::Tension => "Tension",
        }
    }

    /// Inclusive lower bound.
    pub fn min(self) -> f64 {
        match self {
            ParamField::Radius => RADIUS_MIN,
            ParamField::Length => LENGTH_MIN,
            ParamField::StrandCount => f64::from(STRAND_COUNT_MIN),
            ParamField::AngleDeg => ANGLE_DEG_MIN,
            ParamField::Tension => TENSION_MIN,
        }
    }

    /// Inclusive upper bound.
    pub fn max(self) -> f64 {
        match self {
            ParamField::Radius => RADIUS_MAX,
            ParamField::Length => LENGTH_MAX,
            ParamField::StrandCount => f64::from(STRAND_COUNT_MAX),
            ParamField::AngleDeg => ANGLE_DEG_MAX,
            ParamField::Tension => TENSION_MAX,
        }
    }

    /// UI increment.
    pub fn step(self) -> f64 {
        match self {
            ParamField::Radius => RADIUS_STEP,
            ParamField::Length => LENGTH_STEP,
            ParamField::StrandCount => STRAND_COUNT_STEP,
            ParamField::AngleDeg => ANGLE_DEG_STEP,
            ParamField::Tension => TENSION_STEP,
        }
    }

    /// Display unit, if the field has one.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            ParamField::Radius | ParamField::Length => Some("mm"),
            ParamField::AngleDeg => Some("°"),
            ParamField::StrandCount | ParamField::Tension => None,
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            ParamField::Radius => DEFAULT_RADIUS,
            ParamField::Length => DEFAULT_LENGTH,
            ParamField::StrandCount => f64::from(DEFAULT_STRAND_COUNT),
            ParamField::AngleDeg => DEFAULT_ANGLE_DEG,
            ParamField::Tension => DEFAULT_TENSION,
        }
    }

    /// Returns true when `value` lies inside the inclusive range.
    pub fn contains(self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// Applies clamp-on-write: non-finite input becomes the default, the
    /// strand count is rounded, then the value is clamped into range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use braid_params::ParamField;
    ///
    /// assert_eq!(ParamField::StrandCount.sanitize(0.0), 6.0);
    /// assert_eq!(ParamField::StrandCount.sanitize(24.6), 25.0);
    /// assert_eq!(ParamField::Tension.sanitize(f64::NAN), 0.55);
    /// ```
    pub fn sanitize(self, value: f64) -> f64 {
        let value = if value.is_finite() {
            value
        } else {
            self.default_value()
        };
        let value = match self {
            ParamField::StrandCount => value.round(),
            _ => value,
        };
        clamp_to_range(value, self.min(), self.max())
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Serializable description of a field, used to build input widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: Option<String>,
    pub default: f64,
}

impl From<ParamField> for FieldSpec {
    fn from(field: ParamField) -> Self {
        Self {
            key: field.key().to_string(),
            label: field.label().to_string(),
            min: field.min(),
            max: field.max(),
            step: field.step(),
            unit: field.unit().map(str::to_string),
            default: field.default_value(),
        }
    }
}

/// Returns widget descriptions for every field, in canonical order.
pub fn field_specs() -> Vec<FieldSpec> {
    ParamField::ALL.into_iter().map(FieldSpec::from).collect()
}

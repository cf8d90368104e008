//! # Braid Parameters
//!
//! The validated parameter value consumed by the geometry generator and the
//! constraint evaluator, plus its loose counterpart produced by UI input.

use crate::error::ParamError;
use crate::field::ParamField;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Loose parameter input as it arrives from a form, JSON body or share link.
///
/// Fields are plain `f64` and may hold anything, including NaN or a
/// fractional strand count. Missing JSON keys take their defaults and
/// unknown keys are ignored; this is the input of the clamping path only.
///
/// # Example
///
/// ```rust
/// use braid_params::RawBraidParams;
///
/// let raw = RawBraidParams { strand_count: 0.0, ..RawBraidParams::default() };
/// let params = raw.sanitize();
/// assert_eq!(params.strand_count(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBraidParams {
    pub radius: f64,
    pub length: f64,
    pub strand_count: f64,
    pub angle_deg: f64,
    pub tension: f64,
}

impl Default for RawBraidParams {
    fn default() -> Self {
        Self {
            radius: ParamField::Radius.default_value(),
            length: ParamField::Length.default_value(),
            strand_count: ParamField::StrandCount.default_value(),
            angle_deg: ParamField::AngleDeg.default_value(),
            tension: ParamField::Tension.default_value(),
        }
    }
}

impl RawBraidParams {
    /// Returns the raw value stored for `field`.
    pub fn get(&self, field: ParamField) -> f64 {
        match field {
            ParamField::Radius => self.radius,
            ParamField::Length => self.length,
            ParamField::StrandCount => self.strand_count,
            ParamField::AngleDeg => self.angle_deg,
            ParamField::Tension => self.tension,
        }
    }

    pub(crate) fn set(&mut self, field: ParamField, value: f64) {
        match field {
            ParamField::Radius => self.radius = value,
            ParamField::Length => self.length = value,
            ParamField::StrandCount => self.strand_count = value,
            ParamField::AngleDeg => self.angle_deg = value,
            ParamField::Tension => self.tension = value,
        }
    }

    /// Clamp-on-write sanitation. Never fails.
    pub fn sanitize(&self) -> BraidParams {
        let mut clean = *self;
        for field in ParamField::ALL {
            let value = self.get(field);
            let sanitized = field.sanitize(value);
            if sanitized != value {
                warn!(%field, value, sanitized, "parameter adjusted into valid range");
            }
            clean.set(field, sanitized);
        }
        BraidParams {
            radius: clean.radius,
            length: clean.length,
            strand_count: clean.strand_count as u32,
            angle_deg: clean.angle_deg,
            tension: clean.tension,
        }
    }
}

/// Exact wire shape of a complete parameter set.
///
/// Every key is required and unknown keys are rejected, so a misspelled
/// field fails instead of silently taking its default. Values are not yet
/// range-checked; convert with [`BraidParams::try_from`].
///
/// # Example
///
/// ```rust
/// use braid_params::BraidParamsPayload;
///
/// assert!(serde_json::from_str::<BraidParamsPayload>(r#"{"radius":12}"#).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BraidParamsPayload {
    pub radius: f64,
    pub length: f64,
    pub strand_count: f64,
    pub angle_deg: f64,
    pub tension: f64,
}

impl From<BraidParamsPayload> for RawBraidParams {
    fn from(payload: BraidParamsPayload) -> Self {
        Self {
            radius: payload.radius,
            length: payload.length,
            strand_count: payload.strand_count,
            angle_deg: payload.angle_deg,
            tension: payload.tension,
        }
    }
}

/// A validated braid parameter set.
///
/// Every field is guaranteed to be finite and inside its declared range, so
/// consumers never see a zero strand count or a braid angle near 90°.
/// Deserialization goes through [`BraidParamsPayload`]: all five keys are
/// required and validated.
///
/// # Example
///
/// ```rust
/// use braid_params::BraidParams;
///
/// let params = BraidParams::new(12.0, 120.0, 24, 55.0, 0.55).unwrap();
/// assert_eq!(params, BraidParams::default());
/// assert!(BraidParams::new(12.0, 120.0, 0, 55.0, 0.55).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BraidParamsPayload")]
pub struct BraidParams {
    radius: f64,
    length: f64,
    strand_count: u32,
    angle_deg: f64,
    tension: f64,
}

impl BraidParams {
    /// Strict constructor. Rejects non-finite and out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns the first offending field in canonical order.
    pub fn new(
        radius: f64,
        length: f64,
        strand_count: u32,
        angle_deg: f64,
        tension: f64,
    ) -> Result<Self, ParamError> {
        Self::try_from(RawBraidParams {
            radius,
            length,
            strand_count: f64::from(strand_count),
            angle_deg,
            tension,
        })
    }

    /// Clamp-on-write constructor; equivalent to [`RawBraidParams::sanitize`].
    pub fn clamped(raw: RawBraidParams) -> Self {
        raw.sanitize()
    }

    /// Returns a copy with one field replaced, sanitized the same way a UI
    /// input widget would.
    ///
    /// # Example
    ///
    /// ```rust
    /// use braid_params::{BraidParams, ParamField};
    ///
    /// let params = BraidParams::default().with(ParamField::AngleDeg, 120.0);
    /// assert_eq!(params.angle_deg(), 85.0);
    /// ```
    pub fn with(&self, field: ParamField, value: f64) -> Self {
        let mut raw = self.to_raw();
        raw.set(field, value);
        raw.sanitize()
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn strand_count(&self) -> u32 {
        self.strand_count
    }

    #[inline]
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    #[inline]
    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// Returns the value of `field` as `f64`.
    pub fn get(&self, field: ParamField) -> f64 {
        self.to_raw().get(field)
    }

    /// Widens back into the loose representation.
    pub fn to_raw(&self) -> RawBraidParams {
        RawBraidParams {
            radius: self.radius,
            length: self.length,
            strand_count: f64::from(self.strand_count),
            angle_deg: self.angle_deg,
            tension: self.tension,
        }
    }
}

impl Default for BraidParams {
    fn default() -> Self {
        RawBraidParams::default().sanitize()
    }
}

impl TryFrom<RawBraidParams> for BraidParams {
    type Error = ParamError;

    fn try_from(raw: RawBraidParams) -> Result<Self, Self::Error> {
        for field in ParamField::ALL {
            let value = raw.get(field);
            if !value.is_finite() {
                return Err(ParamError::NonFinite { field, value });
            }
            if !field.contains(value) {
                return Err(ParamError::out_of_range(field, value));
            }
        }
        if raw.strand_count.fract() != 0.0 {
            return Err(ParamError::FractionalStrandCount {
                value: raw.strand_count,
            });
        }

        Ok(Self {
            radius: raw.radius,
            length: raw.length,
            strand_count: raw.strand_count as u32,
            angle_deg: raw.angle_deg,
            tension: raw.tension,
        })
    }
}

impl TryFrom<BraidParamsPayload> for BraidParams {
    type Error = ParamError;

    fn try_from(payload: BraidParamsPayload) -> Result<Self, Self::Error> {
        Self::try_from(RawBraidParams::from(payload))
    }
}

impl From<BraidParams> for RawBraidParams {
    fn from(params: BraidParams) -> Self {
        params.to_raw()
    }
}

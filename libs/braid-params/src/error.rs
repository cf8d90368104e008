//! # Parameter Errors
//!
//! Error types for strict parameter construction.

use crate::field::ParamField;
use thiserror::Error;

/// Errors raised when a parameter set fails strict validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// NaN or infinite input
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: ParamField, value: f64 },

    /// Value outside the inclusive valid range
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: ParamField,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Strand count with a fractional part
    #[error("strandCount must be a whole number, got {value}")]
    FractionalStrandCount { value: f64 },
}

impl ParamError {
    /// Creates an out-of-range error carrying the field's bounds.
    pub fn out_of_range(field: ParamField, value: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min: field.min(),
            max: field.max(),
        }
    }

    /// Returns the field the error refers to.
    pub fn field(&self) -> ParamField {
        match self {
            ParamError::NonFinite { field, .. } | ParamError::OutOfRange { field, .. } => *field,
            ParamError::FractionalStrandCount { .. } => ParamField::StrandCount,
        }
    }
}

//! # Export Payload
//!
//! Clipboard export of the current parameters and their assessment.

use braid_constraints::ConstraintResult;
use braid_params::BraidParams;
use serde::{Deserialize, Serialize};

/// Note attached to every export.
pub const EXPORT_NOTE: &str = "Concept export: not real machine instructions.";

/// Snapshot of a parameter set and its constraint result.
///
/// Serializes as `{ params, result, exportedAt, note }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub params: BraidParams,
    pub result: ConstraintResult,
    /// ISO-8601 timestamp supplied by the host
    pub exported_at: String,
    pub note: String,
}

impl ExportPayload {
    /// Evaluates `params` and wraps the outcome.
    pub fn new(params: BraidParams, exported_at: impl Into<String>) -> Self {
        Self {
            params,
            result: braid_constraints::evaluate_constraints(&params),
            exported_at: exported_at.into(),
            note: EXPORT_NOTE.to_string(),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

//! # Constraint Result
//!
//! Score plus categorized messages, in the shape the diagnostics panel and
//! JSON exports consume.

use crate::finding::{Finding, Severity};
use crate::score::{manufacturability_score, ScoreBand};
use serde::{Deserialize, Serialize};

/// Outcome of a constraint evaluation.
///
/// Within `warnings` and within `errors`, messages keep the fixed check
/// order. Serializes as `{ "manufacturabilityScore", "warnings", "errors" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintResult {
    pub manufacturability_score: u8,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConstraintResult {
    /// Splits ordered findings by severity and scores them.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();
        for finding in findings {
            match finding.severity {
                Severity::Error => errors.push(finding.message),
                Severity::Warning => warnings.push(finding.message),
            }
        }
        Self {
            manufacturability_score: manufacturability_score(errors.len(), warnings.len()),
            warnings,
            errors,
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.manufacturability_score)
    }

    /// Returns true when no check produced a message.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }
}

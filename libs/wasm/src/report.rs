//! WASM-compatible constraint report types.
//!
//! This module provides JavaScript-compatible wrappers for constraint results.

use braid_constraints::{ConstraintResult, ScoreBand};
use wasm_bindgen::prelude::*;

/// Score band for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Green,
    Caution,
    Risk,
    Fail,
}

impl From<ScoreBand> for Band {
    fn from(band: ScoreBand) -> Self {
        match band {
            ScoreBand::Green => Band::Green,
            ScoreBand::Caution => Band::Caution,
            ScoreBand::Risk => Band::Risk,
            ScoreBand::Fail => Band::Fail,
        }
    }
}

/// A manufacturability report for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const report = evaluate_constraints(JSON.stringify(params));
/// // console.log(report.score, report.band_label());
/// // report.errors().forEach((msg) => console.error(msg));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct ConstraintReport {
    result: ConstraintResult,
}

#[wasm_bindgen]
impl ConstraintReport {
    /// Returns the manufacturability score (0-100).
    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u8 {
        self.result.manufacturability_score
    }

    /// Returns the status band of the score.
    #[wasm_bindgen(getter)]
    pub fn band(&self) -> Band {
        self.result.band().into()
    }

    /// Returns the status band label ("Green", "Caution", "Risk", "Fail").
    pub fn band_label(&self) -> String {
        self.result.band().label().to_string()
    }

    /// Returns warning messages in check order.
    pub fn warnings(&self) -> Vec<String> {
        self.result.warnings.clone()
    }

    /// Returns error messages in check order.
    pub fn errors(&self) -> Vec<String> {
        self.result.errors.clone()
    }

    /// Serializes the report as `{ manufacturabilityScore, warnings, errors }`.
    ///
    /// Plain JSON can be posted between the worker and main thread, which
    /// wasm-bindgen wrappers cannot.
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.result).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl ConstraintReport {
    /// Returns the underlying result.
    pub fn result(&self) -> &ConstraintResult {
        &self.result
    }
}

impl From<ConstraintResult> for ConstraintReport {
    fn from(result: ConstraintResult) -> Self {
        Self { result }
    }
}

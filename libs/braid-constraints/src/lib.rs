//! # Braid Constraints
//!
//! Heuristic manufacturability assessment for braid parameter sets.
//!
//! ## Architecture
//!
//! ```text
//! BraidParams → run_checks (density, angle, tension, radius) → Vec<Finding>
//!             → ConstraintResult { manufacturabilityScore, warnings, errors }
//! ```
//!
//! The evaluator is independent of `braid-geometry`: the preview model
//! never shows the collisions this crate warns about.
//!
//! ## Usage
//!
//! ```rust
//! use braid_constraints::{evaluate_constraints, ScoreBand};
//! use braid_params::BraidParams;
//!
//! let params = BraidParams::new(3.0, 50.0, 60, 30.0, 0.8).unwrap();
//! let result = evaluate_constraints(&params);
//! assert_eq!(result.manufacturability_score, 72);
//! assert_eq!(result.band(), ScoreBand::Caution);
//! ```

pub mod checks;
pub mod evaluator;
pub mod finding;
pub mod result;
pub mod score;

pub use evaluator::evaluate_constraints;
pub use finding::{CheckKind, Finding, Severity};
pub use result::ConstraintResult;
pub use score::{manufacturability_score, ScoreBand};

#[cfg(test)]
mod tests;

//! # Constraint Evaluator
//!
//! Pure, stateless evaluation of a parameter set. Every call recomputes the
//! result from scratch.

use crate::checks::run_checks;
use crate::result::ConstraintResult;
use braid_params::BraidParams;
use tracing::{debug, instrument};

/// Evaluates the manufacturability checks for `params`.
///
/// # Example
///
/// ```rust
/// use braid_constraints::evaluate_constraints;
/// use braid_params::BraidParams;
///
/// let result = evaluate_constraints(&BraidParams::default());
/// assert_eq!(result.manufacturability_score, 100);
/// assert!(result.errors.is_empty() && result.warnings.is_empty());
/// ```
#[instrument(
    skip_all,
    fields(
        radius = params.radius(),
        strands = params.strand_count(),
        angle_deg = params.angle_deg(),
        tension = params.tension(),
    )
)]
pub fn evaluate_constraints(params: &BraidParams) -> ConstraintResult {
    let findings = run_checks(
        params.radius(),
        params.strand_count(),
        params.angle_deg(),
        params.tension(),
    );
    let result = ConstraintResult::from_findings(findings);

    debug!(
        score = result.manufacturability_score,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "evaluated braid constraints"
    );
    result
}

//! # Constraint Checks
//!
//! The four manufacturability checks. Each takes the raw scalars it
//! inspects rather than a whole parameter set, so every branch can be
//! exercised directly, including ones a clamped parameter set cannot reach.
//!
//! Comparison operators are part of the contract: `<` for the density,
//! low-angle and radius thresholds, `>` for the extreme-angle and tension
//! thresholds.

use crate::finding::{CheckKind, Finding};
use config::constants::{
    DENSITY_ERROR_SPACING, DENSITY_WARNING_SPACING, EXTREME_ANGLE_ERROR_DEG,
    LOW_ANGLE_WARNING_DEG, SMALL_RADIUS_WARNING, TENSION_ERROR, TENSION_WARNING,
};
use std::f64::consts::PI;

/// Spacing below the error threshold.
pub const DENSITY_ERROR: &str = "Strand density too high — collision risk.";
/// Spacing below the warning threshold.
pub const DENSITY_WARNING: &str = "Strand spacing tight — potential friction increase.";
/// Braid angle under the low-angle threshold.
pub const LOW_ANGLE_WARNING: &str = "Low braid angle — reduced torsional stability.";
/// Braid angle over the extreme-angle threshold.
pub const EXTREME_ANGLE_ERROR: &str = "Extreme braid angle — manufacturability risk.";
/// Tension over the error threshold.
pub const TENSION_ERROR_MESSAGE: &str = "Excessive tension — deformation likely.";
/// Tension over the warning threshold.
pub const TENSION_WARNING_MESSAGE: &str = "High tension — monitor stress zones.";
/// Radius under the small-radius threshold.
pub const SMALL_RADIUS: &str = "Small radius — bending stiffness may increase.";

/// Circumferential distance (mm) between neighbouring strands.
///
/// # Example
///
/// ```rust
/// use braid_constraints::checks::strand_spacing;
///
/// let spacing = strand_spacing(12.0, 24);
/// assert!((spacing - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn strand_spacing(radius: f64, strand_count: u32) -> f64 {
    let circumference = 2.0 * PI * radius;
    circumference / f64::from(strand_count)
}

/// Collision / friction proxy based on strand spacing.
pub fn check_strand_density(radius: f64, strand_count: u32) -> Option<Finding> {
    let spacing = strand_spacing(radius, strand_count);
    if spacing < DENSITY_ERROR_SPACING {
        Some(Finding::error(CheckKind::StrandDensity, DENSITY_ERROR))
    } else if spacing < DENSITY_WARNING_SPACING {
        Some(Finding::warning(CheckKind::StrandDensity, DENSITY_WARNING))
    } else {
        None
    }
}

/// Braid angle bounds. Both sides are tested independently.
pub fn check_braid_angle(angle_deg: f64) -> Vec<Finding> {
    let mut findings = Vec::new();
    if angle_deg < LOW_ANGLE_WARNING_DEG {
        findings.push(Finding::warning(CheckKind::BraidAngle, LOW_ANGLE_WARNING));
    }
    if angle_deg > EXTREME_ANGLE_ERROR_DEG {
        findings.push(Finding::error(CheckKind::BraidAngle, EXTREME_ANGLE_ERROR));
    }
    findings
}

/// Winding tension; the error band takes precedence over the warning band.
pub fn check_tension(tension: f64) -> Option<Finding> {
    if tension > TENSION_ERROR {
        Some(Finding::error(CheckKind::Tension, TENSION_ERROR_MESSAGE))
    } else if tension > TENSION_WARNING {
        Some(Finding::warning(CheckKind::Tension, TENSION_WARNING_MESSAGE))
    } else {
        None
    }
}

/// Unreachable through a clamped parameter set, whose radius floor equals
/// the threshold.
pub fn check_radius(radius: f64) -> Option<Finding> {
    (radius < SMALL_RADIUS_WARNING).then(|| Finding::warning(CheckKind::Radius, SMALL_RADIUS))
}

/// Runs every check in evaluation order on raw scalars.
pub fn run_checks(radius: f64, strand_count: u32, angle_deg: f64, tension: f64) -> Vec<Finding> {
    let mut findings = Vec::with_capacity(4);
    findings.extend(check_strand_density(radius, strand_count));
    findings.extend(check_braid_angle(angle_deg));
    findings.extend(check_tension(tension));
    findings.extend(check_radius(radius));
    findings
}

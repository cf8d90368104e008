//! Tests for the manufacturability checks and scoring.

use super::*;
use crate::checks::*;
use braid_params::{BraidParams, ParamField};

fn params(radius: f64, length: f64, strand_count: u32, angle_deg: f64, tension: f64) -> BraidParams {
    BraidParams::new(radius, length, strand_count, angle_deg, tension).expect("valid params")
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn defaults_are_clean() {
    let result = evaluate_constraints(&BraidParams::default());
    assert!(result.is_clean());
    assert_eq!(result.manufacturability_score, 100);
    assert_eq!(result.band(), ScoreBand::Green);
}

#[test]
fn dense_and_hot_braid() {
    let result = evaluate_constraints(&params(3.0, 50.0, 60, 30.0, 0.8));
    assert_eq!(result.errors, vec![DENSITY_ERROR.to_string()]);
    assert_eq!(result.warnings, vec![TENSION_WARNING_MESSAGE.to_string()]);
    assert_eq!(result.manufacturability_score, 72);
}

#[test]
fn extreme_angle_is_an_error() {
    let result = evaluate_constraints(&BraidParams::default().with(ParamField::AngleDeg, 80.0));
    assert_eq!(result.errors, vec![EXTREME_ANGLE_ERROR.to_string()]);
    assert!(result.warnings.is_empty());
    assert_eq!(result.manufacturability_score, 80);
}

#[test]
fn every_check_firing_orders_messages() {
    // spacing 2π·2/72 ≈ 0.17, angle 80, tension 0.95 → three errors.
    let result = evaluate_constraints(&params(2.0, 100.0, 72, 80.0, 0.95));
    assert_eq!(
        result.errors,
        vec![
            DENSITY_ERROR.to_string(),
            EXTREME_ANGLE_ERROR.to_string(),
            TENSION_ERROR_MESSAGE.to_string(),
        ]
    );
    assert!(result.warnings.is_empty());
    assert_eq!(result.manufacturability_score, 40);
    assert_eq!(result.band(), ScoreBand::Risk);
}

#[test]
fn warnings_keep_check_order() {
    // spacing 2π·5/14 ≈ 2.24 (tight), angle 15 (low), tension 0.8 (high).
    let result = evaluate_constraints(&params(5.0, 100.0, 14, 15.0, 0.8));
    assert_eq!(
        result.warnings,
        vec![
            DENSITY_WARNING.to_string(),
            LOW_ANGLE_WARNING.to_string(),
            TENSION_WARNING_MESSAGE.to_string(),
        ]
    );
    assert_eq!(result.manufacturability_score, 76);
}

#[test]
fn messages_use_em_dash() {
    assert!(DENSITY_ERROR.contains('\u{2014}'));
    assert_eq!(DENSITY_ERROR, "Strand density too high \u{2014} collision risk.");
}

// =============================================================================
// INDIVIDUAL CHECKS
// =============================================================================

#[test]
fn density_bands() {
    // 2π·2/72 ≈ 0.17
    assert_eq!(check_strand_density(2.0, 72).map(|f| f.severity), Some(Severity::Error));
    // 2π·5/14 ≈ 2.24
    assert_eq!(check_strand_density(5.0, 14).map(|f| f.severity), Some(Severity::Warning));
    // 2π·12/24 ≈ 3.14
    assert_eq!(check_strand_density(12.0, 24), None);
    assert_eq!(check_strand_density(40.0, 6), None);
}

#[test]
fn density_spacing_around_thresholds() {
    // spacing = 2π·r/6, so r = 6·s/2π gives spacing s.
    let radius_for = |spacing: f64| 6.0 * spacing / (2.0 * std::f64::consts::PI);
    assert_eq!(check_strand_density(radius_for(1.49), 6).map(|f| f.severity), Some(Severity::Error));
    assert_eq!(check_strand_density(radius_for(1.51), 6).map(|f| f.severity), Some(Severity::Warning));
    assert_eq!(check_strand_density(radius_for(2.49), 6).map(|f| f.severity), Some(Severity::Warning));
    assert_eq!(check_strand_density(radius_for(2.51), 6), None);
}

#[test]
fn angle_boundaries() {
    assert!(check_braid_angle(20.0).is_empty());
    assert!(check_braid_angle(75.0).is_empty());
    assert_eq!(check_braid_angle(19.99)[0].message, LOW_ANGLE_WARNING);
    assert_eq!(check_braid_angle(75.01)[0].message, EXTREME_ANGLE_ERROR);
    assert_eq!(check_braid_angle(75.01)[0].check, CheckKind::BraidAngle);
}

#[test]
fn tension_boundaries() {
    assert_eq!(check_tension(0.75), None);
    assert_eq!(check_tension(0.9).map(|f| f.severity), Some(Severity::Warning));
    assert_eq!(check_tension(0.91).map(|f| f.severity), Some(Severity::Error));
    assert_eq!(check_tension(1.0).map(|f| f.message), Some(TENSION_ERROR_MESSAGE.to_string()));
}

/// The radius warning is only reachable with raw input below the range floor.
#[test]
fn radius_warning_below_floor_only() {
    assert_eq!(check_radius(2.0), None);
    let finding = check_radius(1.5).expect("below threshold");
    assert_eq!(finding.message, SMALL_RADIUS);
    assert!(!finding.is_error());

    let findings = run_checks(1.5, 6, 55.0, 0.5);
    assert_eq!(findings.last().map(|f| f.check), Some(CheckKind::Radius));
}

#[test]
fn raw_checks_run_in_fixed_order() {
    let findings = run_checks(1.0, 72, 80.0, 0.95);
    let order: Vec<CheckKind> = findings.iter().map(|f| f.check).collect();
    assert_eq!(
        order,
        vec![
            CheckKind::StrandDensity,
            CheckKind::BraidAngle,
            CheckKind::Tension,
            CheckKind::Radius,
        ]
    );
    let result = ConstraintResult::from_findings(findings);
    assert_eq!(result.errors.len(), 3);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.manufacturability_score, 32);
    assert_eq!(result.band(), ScoreBand::Fail);
}

// =============================================================================
// SCORING
// =============================================================================

#[test]
fn score_formula() {
    assert_eq!(manufacturability_score(0, 0), 100);
    assert_eq!(manufacturability_score(0, 1), 92);
    assert_eq!(manufacturability_score(2, 2), 44);
    assert_eq!(manufacturability_score(5, 0), 0);
    assert_eq!(manufacturability_score(10, 10), 0);
    assert_eq!(manufacturability_score(usize::MAX, usize::MAX), 0);
}

#[test]
fn score_bands() {
    assert_eq!(ScoreBand::from_score(85), ScoreBand::Green);
    assert_eq!(ScoreBand::from_score(84), ScoreBand::Caution);
    assert_eq!(ScoreBand::from_score(60), ScoreBand::Caution);
    assert_eq!(ScoreBand::from_score(59), ScoreBand::Risk);
    assert_eq!(ScoreBand::from_score(35), ScoreBand::Risk);
    assert_eq!(ScoreBand::from_score(0), ScoreBand::Fail);
    assert_eq!(ScoreBand::Caution.to_string(), "Caution");
}

// =============================================================================
// SERIALIZATION
// =============================================================================

#[test]
fn result_serializes_with_wire_names() {
    let result = evaluate_constraints(&params(3.0, 50.0, 60, 30.0, 0.8));
    let json = serde_json::to_value(&result).expect("serializes");
    assert_eq!(json["manufacturabilityScore"], 72);
    assert_eq!(json["errors"][0], DENSITY_ERROR);
    assert_eq!(json["warnings"][0], TENSION_WARNING_MESSAGE);
}

#[test]
fn evaluation_is_deterministic() {
    let p = params(4.0, 200.0, 30, 18.0, 0.78);
    assert_eq!(evaluate_constraints(&p), evaluate_constraints(&p));
}

//! # Tests for Config Constants
//!
//! Unit tests verifying the consistency of ranges, defaults and thresholds.

use crate::constants::*;

// =============================================================================
// RANGE TESTS
// =============================================================================

#[test]
fn test_ranges_are_ordered() {
    assert!(RADIUS_MIN < RADIUS_MAX);
    assert!(LENGTH_MIN < LENGTH_MAX);
    assert!(STRAND_COUNT_MIN < STRAND_COUNT_MAX);
    assert!(ANGLE_DEG_MIN < ANGLE_DEG_MAX);
    assert!(TENSION_MIN < TENSION_MAX);
}

#[test]
fn test_angle_range_avoids_tangent_singularity() {
    assert!(ANGLE_DEG_MAX < 90.0);
    assert!(ANGLE_DEG_MAX.to_radians().tan().is_finite());
}

#[test]
fn test_strand_count_minimum_is_nonzero() {
    assert!(STRAND_COUNT_MIN > 0, "strand offsets divide by the count");
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_defaults_within_ranges() {
    assert!((RADIUS_MIN..=RADIUS_MAX).contains(&DEFAULT_RADIUS));
    assert!((LENGTH_MIN..=LENGTH_MAX).contains(&DEFAULT_LENGTH));
    assert!((STRAND_COUNT_MIN..=STRAND_COUNT_MAX).contains(&DEFAULT_STRAND_COUNT));
    assert!((ANGLE_DEG_MIN..=ANGLE_DEG_MAX).contains(&DEFAULT_ANGLE_DEG));
    assert!((TENSION_MIN..=TENSION_MAX).contains(&DEFAULT_TENSION));
}

// =============================================================================
// THRESHOLD TESTS
// =============================================================================

#[test]
fn test_warning_thresholds_are_milder_than_errors() {
    assert!(DENSITY_WARNING_SPACING > DENSITY_ERROR_SPACING);
    assert!(TENSION_WARNING < TENSION_ERROR);
    assert!(LOW_ANGLE_WARNING_DEG < EXTREME_ANGLE_ERROR_DEG);
}

#[test]
fn test_small_radius_threshold_matches_range_floor() {
    // A clamped radius can never fall below the warning threshold.
    assert_eq!(SMALL_RADIUS_WARNING, RADIUS_MIN);
}

#[test]
fn test_sampling_resolution() {
    assert_eq!(STRAND_SEGMENTS, 200);
    assert_eq!(POINTS_PER_STRAND, 201);
}

// =============================================================================
// SCORING TESTS
// =============================================================================

#[test]
fn test_score_bands_descend() {
    assert!(GREEN_SCORE_MIN > CAUTION_SCORE_MIN);
    assert!(CAUTION_SCORE_MIN > RISK_SCORE_MIN);
    assert!(GREEN_SCORE_MIN <= MAX_SCORE);
}

#[test]
fn test_errors_cost_more_than_warnings() {
    assert!(ERROR_PENALTY > WARNING_PENALTY);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_clamp_to_range() {
    assert_eq!(clamp_to_range(5.0, RADIUS_MIN, RADIUS_MAX), 5.0);
    assert_eq!(clamp_to_range(0.0, RADIUS_MIN, RADIUS_MAX), RADIUS_MIN);
    assert_eq!(clamp_to_range(f64::INFINITY, RADIUS_MIN, RADIUS_MAX), RADIUS_MAX);
    assert_eq!(clamp_to_range(f64::NEG_INFINITY, RADIUS_MIN, RADIUS_MAX), RADIUS_MIN);
}

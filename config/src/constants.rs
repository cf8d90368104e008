//! # Configuration Constants
//!
//! Centralized constants for the braid preflight pipeline.
//!
//! ## Categories
//!
//! - **Ranges**: Valid bounds and UI step sizes for every parameter
//! - **Defaults**: The initial parameter set
//! - **Sampling**: Display resolution of generated strands
//! - **Thresholds**: Manufacturability check cut-offs
//! - **Scoring**: Penalty weights and score bands

// =============================================================================
// RANGE CONSTANTS
// =============================================================================

/// Minimum tube radius in millimetres.
pub const RADIUS_MIN: f64 = 2.0;

/// Maximum tube radius in millimetres.
pub const RADIUS_MAX: f64 = 40.0;

/// UI increment for the radius input.
pub const RADIUS_STEP: f64 = 0.5;

/// Minimum axial length in millimetres.
pub const LENGTH_MIN: f64 = 20.0;

/// Maximum axial length in millimetres.
pub const LENGTH_MAX: f64 = 300.0;

/// UI increment for the length input.
pub const LENGTH_STEP: f64 = 5.0;

/// Minimum number of strands.
///
/// Also the value a zero or negative strand count is clamped to, which keeps
/// the angular offset `2π·s/n` away from a division by zero.
///
/// # Example
///
/// ```rust
/// use config::constants::STRAND_COUNT_MIN;
/// assert!(STRAND_COUNT_MIN > 0);
/// ```
pub const STRAND_COUNT_MIN: u32 = 6;

/// Maximum number of strands.
pub const STRAND_COUNT_MAX: u32 = 72;

/// UI increment for the strand count input.
pub const STRAND_COUNT_STEP: f64 = 1.0;

/// Minimum braid angle in degrees.
pub const ANGLE_DEG_MIN: f64 = 10.0;

/// Maximum braid angle in degrees.
///
/// Kept well below 90° so `tan(angle)` stays finite.
///
/// # Example
///
/// ```rust
/// use config::constants::ANGLE_DEG_MAX;
/// assert!(ANGLE_DEG_MAX.to_radians().tan().is_finite());
/// ```
pub const ANGLE_DEG_MAX: f64 = 85.0;

/// UI increment for the braid angle input.
pub const ANGLE_DEG_STEP: f64 = 1.0;

/// Minimum normalized tension.
pub const TENSION_MIN: f64 = 0.0;

/// Maximum normalized tension.
pub const TENSION_MAX: f64 = 1.0;

/// UI increment for the tension input.
pub const TENSION_STEP: f64 = 0.01;

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Default tube radius (mm).
pub const DEFAULT_RADIUS: f64 = 12.0;

/// Default axial length (mm).
pub const DEFAULT_LENGTH: f64 = 120.0;

/// Default strand count.
pub const DEFAULT_STRAND_COUNT: u32 = 24;

/// Default braid angle (degrees).
pub const DEFAULT_ANGLE_DEG: f64 = 55.0;

/// Default normalized tension.
pub const DEFAULT_TENSION: f64 = 0.55;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Number of axial segments each strand polyline is sampled with.
///
/// This is a display resolution, independent of the braid length.
///
/// # Example
///
/// ```rust
/// use config::constants::{POINTS_PER_STRAND, STRAND_SEGMENTS};
/// assert_eq!(POINTS_PER_STRAND, STRAND_SEGMENTS + 1);
/// ```
pub const STRAND_SEGMENTS: usize = 200;

/// Number of points in every generated strand.
pub const POINTS_PER_STRAND: usize = STRAND_SEGMENTS + 1;

// =============================================================================
// THRESHOLD CONSTANTS
// =============================================================================

/// Strand spacing (mm) below which collisions are reported as an error.
pub const DENSITY_ERROR_SPACING: f64 = 1.5;

/// Strand spacing (mm) below which friction is reported as a warning.
pub const DENSITY_WARNING_SPACING: f64 = 2.5;

/// Braid angle (degrees) below which torsional stability is a concern.
pub const LOW_ANGLE_WARNING_DEG: f64 = 20.0;

/// Braid angle (degrees) above which the braid is reported as unmanufacturable.
pub const EXTREME_ANGLE_ERROR_DEG: f64 = 75.0;

/// Tension above which deformation is reported as an error.
pub const TENSION_ERROR: f64 = 0.9;

/// Tension above which stress zones are reported as a warning.
pub const TENSION_WARNING: f64 = 0.75;

/// Radius (mm) below which bending stiffness is reported as a warning.
///
/// Equal to [`RADIUS_MIN`], so a clamped parameter set never triggers it.
pub const SMALL_RADIUS_WARNING: f64 = 2.0;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Score of a parameter set with no findings.
pub const MAX_SCORE: u8 = 100;

/// Points deducted per error.
pub const ERROR_PENALTY: u32 = 20;

/// Points deducted per warning.
pub const WARNING_PENALTY: u32 = 8;

/// Lowest score still rated "Green".
pub const GREEN_SCORE_MIN: u8 = 85;

/// Lowest score still rated "Caution".
pub const CAUTION_SCORE_MIN: u8 = 60;

/// Lowest score still rated "Risk"; anything below is "Fail".
pub const RISK_SCORE_MIN: u8 = 35;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics. A NaN input collapses to `min`.
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_to_range;
///
/// assert_eq!(clamp_to_range(-1.0, 0.0, 1.0), 0.0);
/// assert_eq!(clamp_to_range(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp_to_range(f64::NAN, 0.0, 1.0), 0.0);
/// ```
#[inline]
pub fn clamp_to_range(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

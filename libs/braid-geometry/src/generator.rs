//! # Helical Strand Generator
//!
//! Maps a parameter set to one helix per strand on a cylinder of the braid
//! radius. The model is a visual approximation: strands never interact, so
//! they never collide even when the constraint evaluator reports a
//! collision risk.

use crate::point::BraidPoint;
use crate::strand::Strand;
use braid_params::BraidParams;
use config::constants::{POINTS_PER_STRAND, STRAND_SEGMENTS};
use glam::DVec3;
use std::f64::consts::TAU;
use tracing::{debug, instrument};

/// Generates the strand polylines for `params`.
///
/// Each strand starts at angular offset `2π·s/strandCount` and advances its
/// phase linearly by `tan(angle)·length` radians over the full length,
/// sampled at [`STRAND_SEGMENTS`] segments regardless of the braid length.
///
/// # Arguments
///
/// * `params` - Validated braid parameters
///
/// # Returns
///
/// `strandCount` strands of [`POINTS_PER_STRAND`] points each, in strand
/// index order.
///
/// # Example
///
/// ```rust
/// use braid_geometry::generate_geometry;
/// use braid_params::BraidParams;
///
/// let strands = generate_geometry(&BraidParams::default());
/// assert_eq!(strands.len(), 24);
/// assert_eq!(strands[0].len(), 201);
/// assert_eq!(strands[0].first().unwrap().z, 0.0);
/// ```
#[instrument(
    skip_all,
    fields(
        radius = params.radius(),
        length = params.length(),
        strands = params.strand_count(),
        angle_deg = params.angle_deg(),
    )
)]
pub fn generate_geometry(params: &BraidParams) -> Vec<Strand> {
    let radius = params.radius();
    let length = params.length();
    let strand_count = params.strand_count();
    let turns = phase_advance(params.angle_deg(), length);

    let strands: Vec<Strand> = (0..strand_count)
        .map(|s| {
            let offset = strand_offset(s, strand_count);
            (0..=STRAND_SEGMENTS)
                .map(|i| {
                    let t = i as f64 / STRAND_SEGMENTS as f64;
                    let theta = offset + turns * t;
                    let position =
                        DVec3::new(radius * theta.cos(), radius * theta.sin(), t * length);
                    BraidPoint::from(position)
                })
                .collect::<Strand>()
        })
        .collect();

    debug!(
        turns,
        points = strands.len() * POINTS_PER_STRAND,
        "generated braid geometry"
    );
    strands
}

/// Total phase (radians) a strand accumulates over the braid length.
///
/// # Example
///
/// ```rust
/// use braid_geometry::generator::phase_advance;
///
/// assert!((phase_advance(45.0, 100.0) - 100.0).abs() < 1e-9);
/// ```
#[inline]
pub fn phase_advance(angle_deg: f64, length: f64) -> f64 {
    let angle_rad = angle_deg * std::f64::consts::PI / 180.0;
    angle_rad.tan() * length
}

/// Angular offset of strand `index` at `z = 0`.
#[inline]
pub fn strand_offset(index: u32, strand_count: u32) -> f64 {
    TAU * f64::from(index) / f64::from(strand_count)
}

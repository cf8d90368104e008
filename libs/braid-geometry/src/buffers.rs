//! # Render Buffers
//!
//! GPU-friendly views of generated strands. All geometry is computed in f64;
//! conversion to f32 happens only here, at the rendering boundary.

use crate::strand::Strand;
use glam::DVec3;

/// Flattens strands into `[x, y, z, x, y, z, ...]` in strand order.
///
/// # Example
///
/// ```rust
/// use braid_geometry::{generate_geometry, vertex_buffer};
/// use braid_params::BraidParams;
///
/// let strands = generate_geometry(&BraidParams::default());
/// assert_eq!(vertex_buffer(&strands).len(), 24 * 201 * 3);
/// ```
pub fn vertex_buffer(strands: &[Strand]) -> Vec<f32> {
    let total: usize = strands.iter().map(Strand::len).sum();
    let mut buffer = Vec::with_capacity(total * 3);
    for point in strands.iter().flat_map(Strand::iter) {
        buffer.extend_from_slice(&[point.x as f32, point.y as f32, point.z as f32]);
    }
    buffer
}

/// Index pairs drawing each strand as connected line segments.
///
/// Consecutive points of the same strand are joined; strands are never
/// joined to each other. Indices past `u32::MAX` saturate, which only
/// happens far outside the parameter ranges.
///
/// # Example
///
/// ```rust
/// use braid_geometry::line_indices;
///
/// assert_eq!(line_indices(2, 3), vec![0, 1, 1, 2, 3, 4, 4, 5]);
/// ```
pub fn line_indices(strand_count: usize, points_per_strand: usize) -> Vec<u32> {
    let segments = points_per_strand.saturating_sub(1);
    let mut indices = Vec::with_capacity(strand_count * segments * 2);
    for strand in 0..strand_count {
        let base = strand.saturating_mul(points_per_strand);
        for i in 0..segments {
            indices.push(vertex_index(base.saturating_add(i)));
            indices.push(vertex_index(base.saturating_add(i + 1)));
        }
    }
    indices
}

#[inline]
pub(crate) fn vertex_index(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

/// Axis-aligned bounds of all points, or `None` when there are none.
///
/// # Example
///
/// ```rust
/// use braid_geometry::{bounding_box, generate_geometry};
/// use braid_params::BraidParams;
///
/// let strands = generate_geometry(&BraidParams::default());
/// let (min, max) = bounding_box(&strands).unwrap();
/// assert!(max.x <= 12.0 + 1e-9 && min.x >= -12.0 - 1e-9);
/// assert_eq!(max.z, 120.0);
/// ```
pub fn bounding_box(strands: &[Strand]) -> Option<(DVec3, DVec3)> {
    let mut points = strands.iter().flat_map(Strand::iter).map(|p| DVec3::from(*p));
    let first = points.next()?;
    Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
}

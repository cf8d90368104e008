//! Tests for helical strand generation.

use super::*;
use crate::generator::{phase_advance, strand_offset};
use approx::assert_relative_eq;
use std::f64::consts::PI;

fn params(radius: f64, length: f64, strand_count: u32, angle_deg: f64) -> BraidParams {
    BraidParams::new(radius, length, strand_count, angle_deg, 0.5).expect("valid params")
}

#[test]
fn default_params_produce_expected_shape() {
    let strands = generate_geometry(&BraidParams::default());
    assert_eq!(strands.len(), 24);
    for strand in &strands {
        assert_eq!(strand.len(), POINTS_PER_STRAND);
    }
}

#[test]
fn strand_count_matches_extremes() {
    assert_eq!(generate_geometry(&params(2.0, 20.0, 6, 10.0)).len(), 6);
    assert_eq!(generate_geometry(&params(40.0, 300.0, 72, 85.0)).len(), 72);
}

#[test]
fn points_lie_on_cylinder() {
    let strands = generate_geometry(&params(7.5, 80.0, 12, 40.0));
    for point in strands.iter().flat_map(Strand::iter) {
        assert_relative_eq!(point.radial_distance(), 7.5, epsilon = 1e-9);
    }
}

#[test]
fn strands_span_full_length() {
    let strands = generate_geometry(&params(5.0, 137.0, 8, 25.0));
    for strand in &strands {
        assert_eq!(strand.first().map(|p| p.z), Some(0.0));
        assert_relative_eq!(strand.last().map(|p| p.z).unwrap_or_default(), 137.0);
    }
}

#[test]
fn axial_samples_are_evenly_spaced() {
    let strands = generate_geometry(&params(5.0, 100.0, 6, 30.0));
    let points = strands[0].points();
    for (i, point) in points.iter().enumerate() {
        assert_relative_eq!(point.z, i as f64 * 0.5, epsilon = 1e-9);
    }
}

/// Strand `s` starts exactly at angle `2π·s/n`.
#[test]
fn strands_start_at_even_phase_offsets() {
    let radius = 10.0;
    let n = 24;
    let strands = generate_geometry(&params(radius, 120.0, n, 55.0));
    for (s, strand) in strands.iter().enumerate() {
        let offset = 2.0 * PI * s as f64 / f64::from(n);
        assert_eq!(strand_offset(s as u32, n), offset);
        let start = strand.first().copied().unwrap_or(BraidPoint::new(0.0, 0.0, -1.0));
        assert_eq!(start, BraidPoint::new(radius * offset.cos(), radius * offset.sin(), 0.0));
    }
}

#[test]
fn phase_advances_linearly() {
    let p = params(10.0, 60.0, 6, 45.0);
    let turns = phase_advance(45.0, 60.0);
    let strands = generate_geometry(&p);
    let end = strands[0].last().copied().unwrap_or(BraidPoint::new(0.0, 0.0, 0.0));
    assert_relative_eq!(end.x, 10.0 * turns.cos(), epsilon = 1e-9);
    assert_relative_eq!(end.y, 10.0 * turns.sin(), epsilon = 1e-9);
}

#[test]
fn phase_advance_matches_tangent() {
    assert_relative_eq!(phase_advance(55.0, 120.0), (55.0f64).to_radians().tan() * 120.0, epsilon = 1e-9);
    assert!(phase_advance(85.0, 300.0).is_finite());
}

#[test]
fn generation_is_deterministic() {
    let p = BraidParams::default();
    assert_eq!(generate_geometry(&p), generate_geometry(&p));
}

#[test]
fn vertex_buffer_preserves_order() {
    let strands = generate_geometry(&params(3.0, 50.0, 6, 30.0));
    let buffer = vertex_buffer(&strands);
    assert_eq!(buffer.len(), 6 * POINTS_PER_STRAND * 3);

    let second_strand_start = strands[1].points()[0];
    let base = POINTS_PER_STRAND * 3;
    assert_eq!(buffer[base], second_strand_start.x as f32);
    assert_eq!(buffer[base + 1], second_strand_start.y as f32);
    assert_eq!(buffer[base + 2], 0.0);
}

#[test]
fn line_indices_do_not_bridge_strands() {
    let indices = line_indices(24, POINTS_PER_STRAND);
    assert_eq!(indices.len(), 24 * STRAND_SEGMENTS * 2);
    for pair in indices.chunks_exact(2) {
        assert_eq!(pair[1], pair[0] + 1);
        assert_ne!((pair[1] as usize) % POINTS_PER_STRAND, 0);
    }
}

#[test]
fn vertex_index_saturates() {
    use crate::buffers::vertex_index;
    assert_eq!(vertex_index(4_823), 4_823);
    assert_eq!(vertex_index(u32::MAX as usize), u32::MAX);
    assert_eq!(vertex_index(usize::MAX), u32::MAX);
}

#[test]
fn bounding_box_of_empty_is_none() {
    assert!(bounding_box(&[]).is_none());
    assert!(bounding_box(&[Strand::default()]).is_none());
}

#[test]
fn bounding_box_contains_tube() {
    let strands = generate_geometry(&params(12.0, 120.0, 24, 55.0));
    let (min, max) = bounding_box(&strands).expect("non-empty");
    assert_eq!(min.z, 0.0);
    assert_eq!(max.z, 120.0);
    assert!(max.x <= 12.0 && min.x >= -12.0);
    // Strand 0 starts at angle 0, so the box reaches +radius on x.
    assert_relative_eq!(max.x, 12.0);
}

#[test]
fn strands_serialize_as_point_arrays() {
    let strand = Strand::new(vec![BraidPoint::new(1.0, 2.0, 3.0)]);
    let json = serde_json::to_string(&vec![strand]).expect("serializes");
    assert_eq!(json, r#"[[{"x":1.0,"y":2.0,"z":3.0}]]"#);
}

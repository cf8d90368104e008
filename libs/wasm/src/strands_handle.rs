//! # Strands Handle
//!
//! WASM-friendly wrapper for generated strand geometry.

use braid_geometry::{bounding_box, line_indices, vertex_buffer, Strand, POINTS_PER_STRAND};
use wasm_bindgen::prelude::*;

/// Strand polylines flattened for GPU line rendering.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const handle = generate_geometry(JSON.stringify(params));
///
/// const positions = handle.positions();  // Float32Array
/// const indices = handle.indices();      // Uint32Array, line segment pairs
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(positions, 3));
/// geometry.setIndex(new THREE.BufferAttribute(indices, 1));
/// scene.add(new THREE.LineSegments(geometry, material));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct StrandsHandle {
    /// Point positions as [x, y, z, x, y, z, ...], strand after strand
    positions: Vec<f32>,
    /// Axis-aligned bounds as [min_x, min_y, min_z, max_x, max_y, max_z]
    bounds: Vec<f32>,
    strand_count: u32,
}

#[wasm_bindgen]
impl StrandsHandle {
    /// Returns the number of strands.
    #[wasm_bindgen(getter)]
    pub fn strand_count(&self) -> u32 {
        self.strand_count
    }

    /// Returns the number of points in each strand.
    #[wasm_bindgen(getter)]
    pub fn points_per_strand(&self) -> u32 {
        POINTS_PER_STRAND as u32
    }

    /// Returns the point positions as a Float32Array.
    ///
    /// Length: strand_count * points_per_strand * 3
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns line segment index pairs as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        line_indices(self.strand_count as usize, POINTS_PER_STRAND)
    }

    /// Returns the bounds as a Float32Array, empty when there are no points.
    pub fn bounds(&self) -> Vec<f32> {
        self.bounds.clone()
    }
}

impl From<&[Strand]> for StrandsHandle {
    fn from(strands: &[Strand]) -> Self {
        let bounds = bounding_box(strands)
            .map(|(min, max)| {
                vec![
                    min.x as f32,
                    min.y as f32,
                    min.z as f32,
                    max.x as f32,
                    max.y as f32,
                    max.z as f32,
                ]
            })
            .unwrap_or_default();

        Self {
            positions: vertex_buffer(strands),
            bounds,
            strand_count: strands.len() as u32,
        }
    }
}

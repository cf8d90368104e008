//! # Braid Geometry
//!
//! Conceptual helical geometry for braided tubes.
//! Converts a validated [`BraidParams`] into one polyline per strand.
//!
//! ## Architecture
//!
//! ```text
//! braid-params (BraidParams) → braid-geometry (Vec<Strand>) → vertex buffer → renderer
//! ```
//!
//! The generator is pure and stateless: identical parameters always yield
//! identical strands, and calls may run concurrently without coordination.
//!
//! ## Usage
//!
//! ```rust
//! use braid_geometry::{generate_geometry, POINTS_PER_STRAND};
//! use braid_params::BraidParams;
//!
//! let strands = generate_geometry(&BraidParams::default());
//! assert!(strands.iter().all(|s| s.len() == POINTS_PER_STRAND));
//! ```

pub mod buffers;
pub mod generator;
pub mod point;
pub mod strand;

pub use braid_params::BraidParams;
pub use buffers::{bounding_box, line_indices, vertex_buffer};
pub use config::constants::{POINTS_PER_STRAND, STRAND_SEGMENTS};
pub use generator::generate_geometry;
pub use point::BraidPoint;
pub use strand::Strand;

#[cfg(test)]
mod tests;

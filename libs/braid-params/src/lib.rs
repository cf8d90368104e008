//! # Braid Params
//!
//! Validated parameter set for the braid preflight pipeline, and the
//! sanitation boundary that produces it from loose input.
//!
//! ## Architecture
//!
//! ```text
//! UI widgets / share link / JSON → RawBraidParams → sanitize() → BraidParams
//!                                                    try_from() ↗
//! BraidParams → braid-geometry, braid-constraints
//! ```
//!
//! `BraidParams` cannot hold an out-of-range value, so downstream crates
//! stay total without guarding against NaN, zero strands or a 90° angle.
//!
//! ## Usage
//!
//! ```rust
//! use braid_params::{BraidParams, ParamField};
//!
//! let params = BraidParams::from_query_string("radius=3&strandCount=60");
//! assert_eq!(params.radius(), 3.0);
//!
//! let params = params.with(ParamField::StrandCount, 0.0);
//! assert_eq!(params.strand_count(), 6);
//! ```

pub mod error;
pub mod field;
pub mod params;
pub mod query;

pub use error::ParamError;
pub use field::{field_specs, FieldSpec, ParamField};
pub use params::{BraidParams, BraidParamsPayload, RawBraidParams};

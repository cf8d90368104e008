//! # Config Crate
//!
//! Centralized constants for the braid preflight pipeline.
//! Parameter ranges, defaults, sampling resolution, constraint thresholds
//! and scoring weights are defined here so the geometry generator, the
//! constraint evaluator and the WASM facade never disagree.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{RADIUS_MAX, RADIUS_MIN, DEFAULT_RADIUS, clamp_to_range};
//!
//! assert_eq!(clamp_to_range(100.0, RADIUS_MIN, RADIUS_MAX), RADIUS_MAX);
//! assert!(DEFAULT_RADIUS >= RADIUS_MIN && DEFAULT_RADIUS <= RADIUS_MAX);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Fixed Contract**: Thresholds are not runtime-tunable

pub mod constants;

#[cfg(test)]
mod tests;

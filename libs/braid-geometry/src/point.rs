//! # Braid Points
//!
//! Plain `{x, y, z}` coordinates in millimetres.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A point on a strand polyline.
///
/// Serialized as an object with `x`, `y`, `z` keys so renderers can consume
/// it directly. Arithmetic goes through [`DVec3`].
///
/// # Example
///
/// ```rust
/// use braid_geometry::BraidPoint;
/// use glam::DVec3;
///
/// let p = BraidPoint::new(3.0, 4.0, 10.0);
/// assert_eq!(p.radial_distance(), 5.0);
/// assert_eq!(DVec3::from(p), DVec3::new(3.0, 4.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BraidPoint {
    /// X coordinate (mm)
    pub x: f64,
    /// Y coordinate (mm)
    pub y: f64,
    /// Axial coordinate (mm)
    pub z: f64,
}

impl BraidPoint {
    /// Creates a point from its coordinates.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the braid axis.
    #[inline]
    pub fn radial_distance(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Polar angle around the braid axis, in `(-π, π]`.
    #[inline]
    pub fn polar_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl From<DVec3> for BraidPoint {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<BraidPoint> for DVec3 {
    fn from(p: BraidPoint) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

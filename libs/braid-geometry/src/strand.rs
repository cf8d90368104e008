//! # Strands
//!
//! A strand is an ordered polyline running from `z = 0` to `z = length`.

use crate::point::BraidPoint;
use serde::{Deserialize, Serialize};

/// One continuous strand path, drawn as a connected polyline.
///
/// Serializes transparently as an array of points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strand {
    points: Vec<BraidPoint>,
}

impl Strand {
    /// Creates a strand from points already in axial order.
    pub fn new(points: Vec<BraidPoint>) -> Self {
        Self { points }
    }

    /// Returns the points in axial order.
    #[inline]
    pub fn points(&self) -> &[BraidPoint] {
        &self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the strand has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `z = 0`.
    #[inline]
    pub fn first(&self) -> Option<&BraidPoint> {
        self.points.first()
    }

    /// Point at `z = length`.
    #[inline]
    pub fn last(&self) -> Option<&BraidPoint> {
        self.points.last()
    }

    /// Iterates over the points in axial order.
    pub fn iter(&self) -> std::slice::Iter<'_, BraidPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Strand {
    type Item = &'a BraidPoint;
    type IntoIter = std::slice::Iter<'a, BraidPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<BraidPoint> for Strand {
    fn from_iter<I: IntoIterator<Item = BraidPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

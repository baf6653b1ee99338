// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};

/// A location projected onto the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    /// East-west coordinate.
    pub x: f32,
    /// North-south coordinate.
    pub z: f32,
}

impl Point2 {
    /// Creates a point from its two coordinates.
    #[must_use]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

impl From<[f32; 2]> for Point2 {
    fn from([x, z]: [f32; 2]) -> Self {
        Self { x, z }
    }
}

/// Rectangular region given by two opposite corners.
///
/// The corners are stored as supplied; `start` need not be the smaller one.
/// Every query derives the min/max itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Box2 {
    /// First corner as supplied.
    pub start: Point2,
    /// Opposite corner as supplied.
    pub end: Point2,
}

impl Box2 {
    /// Creates a region from two opposite corners in any order.
    #[must_use]
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a region from `[x, z]` corner pairs.
    #[must_use]
    pub fn from_corners(start: [f32; 2], end: [f32; 2]) -> Self {
        Self::new(start.into(), end.into())
    }

    /// The same region with its corners exchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Smallest coordinate on each axis.
    #[must_use]
    pub fn min(&self) -> Point2 {
        Point2::new(self.start.x.min(self.end.x), self.start.z.min(self.end.z))
    }

    /// Largest coordinate on each axis.
    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.start.x.max(self.end.x), self.start.z.max(self.end.z))
    }

    /// Arithmetic midpoint of the two corners. Defined for zero-area regions.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.z + self.end.z) / 2.0,
        )
    }

    /// `true` if `point` lies inside the region, edges included.
    #[must_use]
    pub fn contains(&self, point: Point2) -> bool {
        let lo = self.min();
        let hi = self.max();
        point.x >= lo.x && point.x <= hi.x && point.z >= lo.z && point.z <= hi.z
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Immutable 3D vector in world space.
///
/// * Components are block units in the host world frame: `+Y` is up, `+Z` is
///   forward and `-X` is left.
/// * Values may represent points or directions depending on the caller.
/// * Arithmetic is plain `f32`; no fused multiply-add, so results are
///   identical across targets.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// World up, `(0, 1, 0)`.
    pub const UP: Self = Self::UNIT_Y;

    /// World forward, `(0, 0, 1)`.
    pub const FORWARD: Self = Self::UNIT_Z;

    /// World left, `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    #[must_use]
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    #[must_use]
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Z component.
    #[must_use]
    pub const fn z(self) -> f32 {
        self.data[2]
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// Returns component `idx` (0 = x, 1 = y, 2 = z).
    ///
    /// Out-of-range indices return `0.0`.
    #[must_use]
    pub fn component(self, idx: usize) -> f32 {
        self.data.get(idx).copied().unwrap_or(0.0)
    }

    /// Returns a copy with component `idx` replaced by `value`.
    ///
    /// Out-of-range indices return `self` unchanged.
    #[must_use]
    pub fn with_component(self, idx: usize, value: f32) -> Self {
        let mut data = self.data;
        if let Some(slot) = data.get_mut(idx) {
            *slot = value;
        }
        Self { data }
    }

    /// Scales the vector by a scalar.
    #[must_use]
    pub fn scale(self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }

    /// Dot product with another vector.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Componentwise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x().min(other.x()),
            self.y().min(other.y()),
            self.z().min(other.z()),
        )
    }

    /// Componentwise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x().max(other.x()),
            self.y().max(other.y()),
            self.z().max(other.z()),
        )
    }

    /// `true` if every component of `self` is `<=` the matching one in `other`.
    #[must_use]
    pub fn le_all(self, other: Self) -> bool {
        self.x() <= other.x() && self.y() <= other.y() && self.z() <= other.z()
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

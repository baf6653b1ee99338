// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};
use volume_math::Vec3;

use crate::error::GeomError;
use crate::types::direction::Axis;

/// Host seam for axis-aligned volumes.
///
/// Transforms read bounds through `min`/`max` and build results through
/// `from_bounds`; they never hold on to or edit the input. A host with its
/// own block-volume type implements this and gets every transform for free.
pub trait BoundedVolume: Sized {
    /// Minimum corner.
    fn min(&self) -> Vec3;

    /// Maximum corner.
    fn max(&self) -> Vec3;

    /// Builds a fresh volume from corners. Implementations may reject
    /// inverted bounds.
    fn from_bounds(min: Vec3, max: Vec3) -> Result<Self, GeomError>;

    /// Extent along `axis` (`max - min`).
    fn span(&self, axis: Axis) -> f32 {
        self.max().component(axis.index()) - self.min().component(axis.index())
    }

    /// Extent along X.
    fn span_x(&self) -> f32 {
        self.span(Axis::X)
    }

    /// Extent along Y.
    fn span_y(&self) -> f32 {
        self.span(Axis::Y)
    }

    /// Extent along Z.
    fn span_z(&self) -> f32 {
        self.span(Axis::Z)
    }
}

/// Axis-aligned volume in world space.
///
/// Invariant: `min <= max` componentwise. Construction validates this and
/// every transform preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct AxialVolume {
    min: Vec3,
    max: Vec3,
}

#[derive(Serialize, Deserialize)]
struct RawBounds {
    min: Vec3,
    max: Vec3,
}

impl TryFrom<RawBounds> for AxialVolume {
    type Error = GeomError;

    fn try_from(raw: RawBounds) -> Result<Self, GeomError> {
        Self::new(raw.min, raw.max)
    }
}

impl From<AxialVolume> for RawBounds {
    fn from(volume: AxialVolume) -> Self {
        Self {
            min: volume.min,
            max: volume.max,
        }
    }
}

impl AxialVolume {
    /// Builds a volume from its corners, failing on `min > max` (or NaN).
    #[must_use = "the validated volume is only returned"]
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, GeomError> {
        if !min.le_all(max) {
            return Err(GeomError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds the volume spanned by two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

impl BoundedVolume for AxialVolume {
    fn min(&self) -> Vec3 {
        self.min
    }

    fn max(&self) -> Vec3 {
        self.max
    }

    fn from_bounds(min: Vec3, max: Vec3) -> Result<Self, GeomError> {
        Self::new(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted_bounds() {
        let err = AxialVolume::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 4.0, 1.0));
        assert!(matches!(err, Err(GeomError::InvertedBounds { .. })));
    }

    #[test]
    fn new_rejects_nan_bounds() {
        let err = AxialVolume::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(err.is_err());
    }

    #[test]
    fn spans_are_max_minus_min() {
        let v = AxialVolume::from_corners(Vec3::new(4.0, 10.0, -2.0), Vec3::new(0.0, 1.0, 3.0));
        assert_eq!(v.span_x(), 4.0);
        assert_eq!(v.span_y(), 9.0);
        assert_eq!(v.span_z(), 5.0);
        assert_eq!(v.min().to_array(), [0.0, 1.0, -2.0]);
    }

    #[test]
    fn deserializing_inverted_bounds_fails() {
        let json = r#"{"min":[1.0,0.0,0.0],"max":[0.0,0.0,0.0]}"#;
        assert!(serde_json::from_str::<AxialVolume>(json).is_err());
        let ok = r#"{"min":[0.0,0.0,0.0],"max":[1.0,2.0,3.0]}"#;
        assert!(serde_json::from_str::<AxialVolume>(ok).is_ok());
    }
}

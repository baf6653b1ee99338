// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Volume geometry for block-editor tooling.

This crate provides:
- `PointProbe`: containment, centre and distance-to-enter of a point against
  an unsorted rectangular region, and a bounded random magnitude sampler.
- `VolumeAxisTransform`: yaw-relative direction resolution, clamped growth and
  guarded shrinking of axis-aligned volumes, and ray–plane picking.

Design notes:
- Pure functions over `Copy` values; volumes are rebuilt, never edited.
- The rotation rule, host volume type and random source are traits so hosts
  can inject their own.
- Spans are capped at 32 blocks by default (see `GeomConfig`).
"]

/// Limits and the config storage port.
pub mod config;
/// Error types.
pub mod error;
/// Point probes and magnitude sampling.
pub mod probe;
/// Ray–plane intersection.
pub mod ray;
/// Foundational value types.
pub mod types;

mod axis;

pub use axis::{grow_along_absolute, shrink_along_absolute, VolumeAxisTransform, MAX_AXIAL_LENGTH};
pub use config::{ConfigError, GeomConfig};
pub use error::{GeomError, QuadrantFault};
pub use probe::{MagnitudeRequest, PointProbe, Proximity, RandSource, UniformSource};
pub use ray::{intersect_ray_plane, intersect_ray_plane_with_tolerance};
pub use types::direction::{
    AbsoluteAxis, Axis, AxisPlane, Direction, Rotation, RotationCorrection, Sign, YawQuadrants,
};
pub use types::planar::{Box2, Point2};
pub use types::volume::{AxialVolume, BoundedVolume};
pub use volume_math::Vec3;

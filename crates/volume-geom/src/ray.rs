// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ray–plane intersection for projecting a cursor ray into the world.
//!
//! Planes are given in Hessian form: points `p` with `dot(normal, p) + distance == 0`.

use tracing::trace;
use volume_math::Vec3;

/// Intersects a ray with a plane.
///
/// Returns `None` when the plane is behind the ray origin, or when the ray
/// is parallel to the plane without lying on it. A parallel ray whose
/// origin lies on the plane returns the origin.
///
/// The parallel and on-plane tests use exact float equality. Nearly parallel
/// rays therefore hit very distant points instead of missing; use
/// [`intersect_ray_plane_with_tolerance`] when that matters.
pub fn intersect_ray_plane(
    origin: Vec3,
    direction: Vec3,
    normal: Vec3,
    distance: f32,
) -> Option<Vec3> {
    intersect_ray_plane_with_tolerance(origin, direction, normal, distance, 0.0)
}

/// [`intersect_ray_plane`] with `|x| <= tolerance` in place of `x == 0`.
///
/// A tolerance of `0.0` behaves exactly like [`intersect_ray_plane`] for
/// finite inputs.
pub fn intersect_ray_plane_with_tolerance(
    origin: Vec3,
    direction: Vec3,
    normal: Vec3,
    distance: f32,
    tolerance: f32,
) -> Option<Vec3> {
    let denominator = direction.dot(normal);
    let offset = origin.dot(normal) + distance;
    if denominator.abs() > tolerance {
        let t = -offset / denominator;
        if t < 0.0 {
            trace!(t, "plane is behind the ray");
            return None;
        }
        return Some(origin + direction * t);
    }
    if offset.abs() <= tolerance {
        return Some(origin);
    }
    trace!(offset, "ray is parallel to the plane");
    None
}

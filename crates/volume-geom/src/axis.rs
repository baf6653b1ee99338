// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! View-relative volume resizing.
//!
//! A logical direction is first corrected for the observer's yaw, then mapped
//! to a world axis and sign. Positive directions (`Up`, `Forward`, `Left`)
//! move the `max` bound; negative ones move `min`. Only the resolved axis
//! changes.

use tracing::{debug, warn};
use volume_math::{clamp, Vec3};

use crate::config::{ConfigError, GeomConfig};
use crate::error::{GeomError, QuadrantFault};
use crate::ray::intersect_ray_plane_with_tolerance;
use crate::types::direction::{
    AbsoluteAxis, AxisPlane, Direction, Rotation, RotationCorrection, Sign, YawQuadrants,
};
use crate::types::volume::BoundedVolume;

/// Longest span, in blocks, that growth may produce along any axis.
pub const MAX_AXIAL_LENGTH: f32 = 32.0;

/// Grows `volume` along an already-resolved direction.
///
/// `amount` is capped at `max_axial_length`, then reduced so the span along
/// the axis does not exceed `max_axial_length`. Negative amounts grow by
/// nothing; a span already at the limit is left alone. The limit itself must
/// be finite and positive.
pub fn grow_along_absolute<V: BoundedVolume>(
    volume: &V,
    direction: Direction,
    amount: f32,
    max_axial_length: f32,
) -> Result<V, GeomError> {
    if !amount.is_finite() {
        return Err(GeomError::NonFiniteAmount(amount));
    }
    if !(max_axial_length.is_finite() && max_axial_length > 0.0) {
        return Err(GeomError::InvalidAxialLimit(max_axial_length));
    }
    let AbsoluteAxis { axis, sign } = direction.absolute_axis();
    let span = volume.span(axis);
    let requested = clamp(amount, 0.0, max_axial_length);
    let applied = requested.min((max_axial_length - span).max(0.0));
    if applied < amount {
        debug!(?direction, amount, applied, span, "growth clamped to axial limit");
    }

    let (min, max) = (volume.min(), volume.max());
    if applied <= 0.0 {
        return V::from_bounds(min, max);
    }
    let idx = axis.index();
    let (lo, hi) = (min.component(idx), max.component(idx));
    let (min, max) = match sign {
        Sign::Positive => {
            let upper = upper_within(lo, hi + applied, max_axial_length);
            (min, max.with_component(idx, upper))
        }
        Sign::Negative => {
            let lower = lower_within(hi, lo - applied, max_axial_length);
            (min.with_component(idx, lower), max)
        }
    };
    V::from_bounds(min, max)
}

/// Largest value at or below `target` whose distance above `lo` is within `limit`.
///
/// Only called with `hi - lo < limit`, so the walk stops at or above `hi`.
fn upper_within(lo: f32, target: f32, limit: f32) -> f32 {
    let mut bound = target.min(lo + limit);
    while bound - lo > limit {
        bound = bound.next_down();
    }
    bound
}

/// Mirror of [`upper_within`] for a bound moving below `hi`.
fn lower_within(hi: f32, target: f32, limit: f32) -> f32 {
    let mut bound = target.max(hi - limit);
    while hi - bound > limit {
        bound = bound.next_up();
    }
    bound
}

/// Shrinks `volume` along an already-resolved direction.
///
/// The bound moves inward only while the span stays strictly larger than
/// `amount`; otherwise the volume comes back unchanged. Negative amounts are
/// treated as zero.
pub fn shrink_along_absolute<V: BoundedVolume>(
    volume: &V,
    direction: Direction,
    amount: f32,
) -> Result<V, GeomError> {
    if !amount.is_finite() {
        return Err(GeomError::NonFiniteAmount(amount));
    }
    let AbsoluteAxis { axis, sign } = direction.absolute_axis();
    let amount = amount.max(0.0);
    let span = volume.span(axis);
    let (min, max) = (volume.min(), volume.max());
    if span <= amount {
        debug!(?direction, amount, span, "shrink refused; span too small");
        return V::from_bounds(min, max);
    }

    let idx = axis.index();
    let (min, max) = match sign {
        Sign::Positive => (min, max.with_component(idx, max.component(idx) - amount)),
        Sign::Negative => (min.with_component(idx, min.component(idx) + amount), max),
    };
    V::from_bounds(min, max)
}

/// Resolves observer-relative directions and resizes volumes along them.
///
/// The rotation rule is injected; [`YawQuadrants`] is the host editor's.
#[derive(Debug, Clone)]
pub struct VolumeAxisTransform<R = YawQuadrants> {
    correction: R,
    max_axial_length: f32,
    plane_tolerance: f32,
}

impl VolumeAxisTransform<YawQuadrants> {
    /// Transform using the editor's quadrant rule and default limits.
    pub fn new() -> Self {
        Self::with_correction(YawQuadrants)
    }
}

impl Default for VolumeAxisTransform<YawQuadrants> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RotationCorrection> VolumeAxisTransform<R> {
    /// Transform using a caller-supplied rotation rule and default limits.
    pub fn with_correction(correction: R) -> Self {
        Self {
            correction,
            max_axial_length: MAX_AXIAL_LENGTH,
            plane_tolerance: 0.0,
        }
    }

    /// Applies the limits from `config` after validating it.
    pub fn with_config(mut self, config: &GeomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.max_axial_length = config.max_axial_length;
        self.plane_tolerance = config.plane_tolerance;
        Ok(self)
    }

    /// Longest span growth may produce.
    pub fn max_axial_length(&self) -> f32 {
        self.max_axial_length
    }

    /// Corrects `direction` for an observer at `rotation`.
    pub fn resolve_direction(
        &self,
        rotation: Rotation,
        direction: Direction,
    ) -> Result<Direction, GeomError> {
        self.correction
            .corrected_direction(rotation, direction)
            .inspect_err(|err| warn!(%err, ?direction, "direction resolution failed"))
    }

    /// Picks the vertical working plane the observer is looking into.
    ///
    /// Facing forward or back selects `XY`; facing left or right selects `YZ`.
    pub fn resolve_relative_axis_plane(&self, rotation: Rotation) -> Result<AxisPlane, GeomError> {
        match self.resolve_direction(rotation, Direction::Forward)? {
            Direction::Forward | Direction::Back => Ok(AxisPlane::XY),
            Direction::Right | Direction::Left => Ok(AxisPlane::YZ),
            vertical @ (Direction::Up | Direction::Down) => {
                warn!(?vertical, yaw = rotation.degrees(), "forward resolved to a vertical direction");
                Err(GeomError::InvalidQuadrant {
                    yaw: rotation.degrees(),
                    fault: QuadrantFault::Vertical(vertical),
                })
            }
        }
    }

    /// Normal of [`Self::resolve_relative_axis_plane`].
    pub fn relative_axis_normal(&self, rotation: Rotation) -> Result<Vec3, GeomError> {
        self.resolve_relative_axis_plane(rotation).map(AxisPlane::normal)
    }

    /// Grows `volume` by `amount` toward `direction` as seen from `rotation`.
    ///
    /// See [`grow_along_absolute`] for the clamping rules.
    pub fn grow_along<V: BoundedVolume>(
        &self,
        volume: &V,
        rotation: Rotation,
        direction: Direction,
        amount: f32,
    ) -> Result<V, GeomError> {
        let resolved = self.resolve_direction(rotation, direction)?;
        grow_along_absolute(volume, resolved, amount, self.max_axial_length)
    }

    /// Shrinks `volume` by `amount` from the `direction` side as seen from `rotation`.
    ///
    /// See [`shrink_along_absolute`] for when the shrink is refused.
    pub fn shrink_along<V: BoundedVolume>(
        &self,
        volume: &V,
        rotation: Rotation,
        direction: Direction,
        amount: f32,
    ) -> Result<V, GeomError> {
        let resolved = self.resolve_direction(rotation, direction)?;
        shrink_along_absolute(volume, resolved, amount)
    }

    /// Ray–plane intersection using the configured tolerance (exact by default).
    pub fn intersect_ray_plane(
        &self,
        origin: Vec3,
        direction: Vec3,
        normal: Vec3,
        distance: f32,
    ) -> Option<Vec3> {
        intersect_ray_plane_with_tolerance(origin, direction, normal, distance, self.plane_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::volume::AxialVolume;

    /// Always answers with a fixed direction, whatever it is asked.
    struct Fixed(Direction);

    impl RotationCorrection for Fixed {
        fn corrected_direction(&self, _: Rotation, _: Direction) -> Result<Direction, GeomError> {
            Ok(self.0)
        }
    }

    fn cube(size: f32) -> AxialVolume {
        AxialVolume::from_corners(Vec3::ZERO, Vec3::new(size, size, size))
    }

    #[test]
    fn grow_up_clamps_to_axial_limit() {
        let grown = grow_along_absolute(&cube(10.0), Direction::Up, 25.0, MAX_AXIAL_LENGTH);
        let grown = grown.unwrap_or_else(|_| cube(0.0));
        assert_eq!(grown.max().to_array(), [10.0, 32.0, 10.0]);
        assert_eq!(grown.min(), Vec3::ZERO);
    }

    #[test]
    fn grow_amount_is_capped_before_span_check() {
        let thin = AxialVolume::from_corners(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));
        let grown = grow_along_absolute(&thin, Direction::Down, 100.0, MAX_AXIAL_LENGTH);
        assert_eq!(grown.map(|v| v.min().y()), Ok(-32.0));
    }

    #[test]
    fn grow_at_limit_is_a_no_op() {
        let full = cube(40.0);
        assert_eq!(grow_along_absolute(&full, Direction::Left, 5.0, MAX_AXIAL_LENGTH), Ok(full));
    }

    #[test]
    fn fractional_bounds_never_overshoot_the_limit() {
        let v = AxialVolume::from_corners(
            Vec3::new(0.0, 999.7192, 0.0),
            Vec3::new(1.0, 1028.0564, 1.0),
        );
        for direction in [Direction::Up, Direction::Down] {
            let grown = grow_along_absolute(&v, direction, 32.0, MAX_AXIAL_LENGTH).unwrap_or(v);
            assert!(grown.span_y() <= MAX_AXIAL_LENGTH, "{direction:?}: {}", grown.span_y());
            assert!(grown.span_y() >= v.span_y());
        }
    }

    #[test]
    fn invalid_axial_limit_is_rejected() {
        let v = cube(10.0);
        for limit in [-5.0, 0.0, f32::NAN, f32::INFINITY] {
            for direction in [Direction::Down, Direction::Right, Direction::Up] {
                assert!(matches!(
                    grow_along_absolute(&v, direction, 3.0, limit),
                    Err(GeomError::InvalidAxialLimit(_))
                ));
            }
        }
    }

    #[test]
    fn negative_growth_is_ignored() {
        let v = cube(10.0);
        assert_eq!(grow_along_absolute(&v, Direction::Forward, -4.0, MAX_AXIAL_LENGTH), Ok(v));
        assert_eq!(shrink_along_absolute(&v, Direction::Forward, -4.0), Ok(v));
    }

    #[test]
    fn non_finite_amount_is_rejected() {
        let v = cube(10.0);
        assert!(matches!(
            grow_along_absolute(&v, Direction::Up, f32::NAN, MAX_AXIAL_LENGTH),
            Err(GeomError::NonFiniteAmount(_))
        ));
        assert!(matches!(
            shrink_along_absolute(&v, Direction::Up, f32::INFINITY),
            Err(GeomError::NonFiniteAmount(_))
        ));
    }

    #[test]
    fn shrink_moves_the_matching_bound_inward() {
        let v = cube(10.0);
        let right = shrink_along_absolute(&v, Direction::Right, 3.0).unwrap_or(v);
        assert_eq!(right.min().to_array(), [3.0, 0.0, 0.0]);
        assert_eq!(right.max(), v.max());
        let forward = shrink_along_absolute(&v, Direction::Forward, 3.0).unwrap_or(v);
        assert_eq!(forward.max().to_array(), [10.0, 10.0, 7.0]);
    }

    #[test]
    fn shrink_requires_strictly_larger_span() {
        let v = cube(10.0);
        assert_eq!(shrink_along_absolute(&v, Direction::Down, 10.0), Ok(v));
        let shrunk = shrink_along_absolute(&v, Direction::Down, 9.5).unwrap_or(v);
        assert_eq!(shrunk.span_y(), 0.5);
    }

    #[test]
    fn vertical_forward_resolution_is_an_invalid_quadrant() {
        let transform = VolumeAxisTransform::with_correction(Fixed(Direction::Up));
        assert_eq!(
            transform.resolve_relative_axis_plane(Rotation::from_degrees(0.0)),
            Err(GeomError::InvalidQuadrant {
                yaw: 0.0,
                fault: QuadrantFault::Vertical(Direction::Up),
            })
        );
    }

    #[test]
    fn injected_correction_drives_the_resolved_axis() {
        let transform = VolumeAxisTransform::with_correction(Fixed(Direction::Left));
        let grown = transform.grow_along(&cube(4.0), Rotation::default(), Direction::Up, 2.0);
        assert_eq!(grown.map(|v| v.max().to_array()), Ok([6.0, 4.0, 4.0]));
    }

    #[test]
    fn config_limits_apply() -> Result<(), Box<dyn std::error::Error>> {
        let config = GeomConfig {
            max_axial_length: 12.0,
            ..GeomConfig::default()
        };
        let transform = VolumeAxisTransform::new().with_config(&config)?;
        let grown = transform.grow_along(&cube(10.0), Rotation::default(), Direction::Up, 5.0)?;
        assert_eq!(grown.span_y(), 12.0);
        Ok(())
    }

    #[test]
    fn invalid_config_is_refused() {
        let config = GeomConfig {
            max_axial_length: 0.0,
            ..GeomConfig::default()
        };
        assert!(VolumeAxisTransform::new().with_config(&config).is_err());
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};
use volume_math::Vec3;

use crate::error::{GeomError, QuadrantFault};

/// Observer-relative direction.
///
/// Discriminants follow the host editor's numbering; horizontal directions
/// occupy quadrants `0..=3` clockwise from `Forward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Quadrant 0.
    Forward = 0,
    /// Quadrant 1.
    Right = 1,
    /// Quadrant 2.
    Back = 2,
    /// Quadrant 3.
    Left = 3,
    /// Vertical, unaffected by yaw.
    Up = 4,
    /// Vertical, unaffected by yaw.
    Down = 5,
}

impl Direction {
    /// Every direction, in discriminant order.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Right,
        Self::Back,
        Self::Left,
        Self::Up,
        Self::Down,
    ];

    /// Host numbering of this direction.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Maps a horizontal quadrant index back to its direction.
    pub const fn from_quadrant(quadrant: i64) -> Option<Self> {
        match quadrant {
            0 => Some(Self::Forward),
            1 => Some(Self::Right),
            2 => Some(Self::Back),
            3 => Some(Self::Left),
            _ => None,
        }
    }

    /// `true` for `Up` and `Down`.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// The world axis and sign this direction moves along once resolved.
    ///
    /// `Up` is `+Y`, `Forward` is `+Z` and `Left` is `+X`; their opposites
    /// take the negative sign.
    pub const fn absolute_axis(self) -> AbsoluteAxis {
        let (axis, sign) = match self {
            Self::Up => (Axis::Y, Sign::Positive),
            Self::Down => (Axis::Y, Sign::Negative),
            Self::Forward => (Axis::Z, Sign::Positive),
            Self::Back => (Axis::Z, Sign::Negative),
            Self::Left => (Axis::X, Sign::Positive),
            Self::Right => (Axis::X, Sign::Negative),
        };
        AbsoluteAxis { axis, sign }
    }
}

/// Yaw rotation about the vertical axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rotation(f32);

impl Rotation {
    /// Wraps a yaw angle in degrees. No normalisation is applied.
    pub const fn from_degrees(degrees: f32) -> Self {
        Self(degrees)
    }

    /// Yaw angle in degrees.
    pub const fn degrees(self) -> f32 {
        self.0
    }
}

impl From<f32> for Rotation {
    fn from(degrees: f32) -> Self {
        Self(degrees)
    }
}

/// World axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis (vertical).
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// Component index into a [`Vec3`].
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Which end of an axis a direction points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Moves the `max` bound.
    Positive,
    /// Moves the `min` bound.
    Negative,
}

/// A direction resolved onto a world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsoluteAxis {
    /// Axis the direction moves along.
    pub axis: Axis,
    /// Bound the direction moves.
    pub sign: Sign,
}

/// Working plane selected from the observer's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisPlane {
    /// Horizontal plane, normal up.
    XZ,
    /// Plane facing forward/back, normal forward.
    XY,
    /// Plane facing left/right, normal left.
    YZ,
}

impl AxisPlane {
    /// Fixed world-frame normal of the plane.
    pub const fn normal(self) -> Vec3 {
        match self {
            Self::XZ => Vec3::UP,
            Self::XY => Vec3::FORWARD,
            Self::YZ => Vec3::LEFT,
        }
    }
}

/// Seam for the host's rotation-correction rule.
///
/// Given the observer's yaw and a nominal direction, returns the direction
/// that is actually faced. Implementations must leave `Up`/`Down` alone.
pub trait RotationCorrection {
    /// Corrects `nominal` for an observer at `rotation`.
    fn corrected_direction(
        &self,
        rotation: Rotation,
        nominal: Direction,
    ) -> Result<Direction, GeomError>;
}

impl<T: RotationCorrection + ?Sized> RotationCorrection for &T {
    fn corrected_direction(
        &self,
        rotation: Rotation,
        nominal: Direction,
    ) -> Result<Direction, GeomError> {
        (**self).corrected_direction(rotation, nominal)
    }
}

/// The block editor's quadrant rule.
///
/// Horizontal directions are rotated by
/// `floor(((yaw + 405 + index * 90) % 360) / 90)` where `%` keeps the sign of
/// the dividend. Yaws in the usual `[-180, 180]` range always land in
/// `0..=3`; a yaw low enough to make the shifted angle negative produces a
/// negative quadrant and fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YawQuadrants;

impl RotationCorrection for YawQuadrants {
    fn corrected_direction(
        &self,
        rotation: Rotation,
        nominal: Direction,
    ) -> Result<Direction, GeomError> {
        if nominal.is_vertical() {
            return Ok(nominal);
        }
        let yaw = rotation.degrees();
        if !yaw.is_finite() {
            return Err(GeomError::InvalidQuadrant {
                yaw,
                fault: QuadrantFault::NonFinite,
            });
        }
        let shifted = f64::from(yaw) + 405.0 + f64::from(nominal.index()) * 90.0;
        let quadrant = ((shifted % 360.0) / 90.0).floor() as i64;
        Direction::from_quadrant(quadrant).ok_or(GeomError::InvalidQuadrant {
            yaw,
            fault: QuadrantFault::Index(quadrant),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correct(yaw: f32, nominal: Direction) -> Result<Direction, GeomError> {
        YawQuadrants.corrected_direction(Rotation::from_degrees(yaw), nominal)
    }

    #[test]
    fn facing_south_keeps_nominal_direction() {
        for dir in Direction::ALL {
            assert_eq!(correct(0.0, dir), Ok(dir));
        }
    }

    #[test]
    fn quadrant_boundaries_sit_at_odd_multiples_of_45() {
        assert_eq!(correct(44.9, Direction::Forward), Ok(Direction::Forward));
        assert_eq!(correct(45.0, Direction::Forward), Ok(Direction::Right));
        assert_eq!(correct(135.0, Direction::Forward), Ok(Direction::Back));
        assert_eq!(correct(-45.0, Direction::Forward), Ok(Direction::Forward));
        assert_eq!(correct(-46.0, Direction::Forward), Ok(Direction::Left));
        assert_eq!(correct(180.0, Direction::Right), Ok(Direction::Left));
    }

    #[test]
    fn vertical_directions_ignore_yaw() {
        assert_eq!(correct(123.0, Direction::Up), Ok(Direction::Up));
        assert_eq!(correct(f32::NAN, Direction::Down), Ok(Direction::Down));
    }

    #[test]
    fn yaw_far_below_range_is_an_invalid_quadrant() {
        assert_eq!(
            correct(-500.0, Direction::Forward),
            Err(GeomError::InvalidQuadrant {
                yaw: -500.0,
                fault: QuadrantFault::Index(-2),
            })
        );
    }

    #[test]
    fn non_finite_yaw_is_rejected() {
        assert!(matches!(
            correct(f32::INFINITY, Direction::Left),
            Err(GeomError::InvalidQuadrant {
                fault: QuadrantFault::NonFinite,
                ..
            })
        ));
    }

    #[test]
    fn absolute_axes_follow_host_sign_convention() {
        assert_eq!(
            Direction::Left.absolute_axis(),
            AbsoluteAxis {
                axis: Axis::X,
                sign: Sign::Positive
            }
        );
        assert_eq!(Direction::Back.absolute_axis().axis, Axis::Z);
        assert_eq!(Direction::Down.absolute_axis().sign, Sign::Negative);
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for axis resolution and volume construction.

use core::fmt;

use thiserror::Error;
use volume_math::Vec3;

use crate::types::direction::Direction;

/// What an axis resolution produced instead of a horizontal quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadrantFault {
    /// The yaw mapped to a quadrant index outside `0..=3`.
    Index(i64),
    /// The correction returned a vertical direction where a horizontal one was required.
    Vertical(Direction),
    /// The yaw was NaN or infinite.
    NonFinite,
}

impl fmt::Display for QuadrantFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(idx) => write!(f, "quadrant index {idx}"),
            Self::Vertical(dir) => write!(f, "vertical direction {dir:?}"),
            Self::NonFinite => f.write_str("non-finite yaw"),
        }
    }
}

/// Errors raised by axis resolution and volume construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// Rotation correction did not land in the Forward/Right/Back/Left set.
    #[error("invalid quadrant for yaw {yaw}: {fault}")]
    InvalidQuadrant {
        /// Yaw in degrees that was being resolved.
        yaw: f32,
        /// What the resolution produced.
        fault: QuadrantFault,
    },
    /// Volume bounds have `min > max` on some axis (or contain NaN).
    #[error("inverted volume bounds: min {min:?} > max {max:?}")]
    InvertedBounds {
        /// Offending minimum corner.
        min: Vec3,
        /// Offending maximum corner.
        max: Vec3,
    },
    /// A grow/shrink amount was NaN or infinite.
    #[error("non-finite resize amount: {0}")]
    NonFiniteAmount(f32),
    /// The axial growth limit was not a finite positive length.
    #[error("invalid axial length limit: {0}")]
    InvalidAxialLimit(f32),
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Point containment and proximity against planar regions, plus a bounded
//! random magnitude sampler.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use volume_math::Prng;

use crate::types::planar::{Box2, Point2};

/// Default lower bound of the random magnitude range.
pub const MAGNITUDE_FLOOR: f32 = 100.0;

/// Uniform random source in `[0, 1)`.
pub trait UniformSource {
    /// Next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl UniformSource for Prng {
    fn next_unit(&mut self) -> f64 {
        self.next_f64()
    }
}

/// Adapts any `rand` generator into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RandSource<R>(pub R);

impl RandSource<rand::rngs::ThreadRng> {
    /// Source backed by the thread-local generator.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: RngCore> UniformSource for RandSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Parameters for a bounded random magnitude.
///
/// The range is `[max(percent% of base, floor), base]`. Omitted parameters
/// default to `percent = 1`, `radius_percent = 0` and `floor = 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeRequest {
    base: f32,
    percent: f32,
    radius_percent: f32,
    floor: f32,
}

impl MagnitudeRequest {
    /// Request with the default percentages for `base`.
    pub const fn new(base: f32) -> Self {
        Self {
            base,
            percent: 1.0,
            radius_percent: 0.0,
            floor: MAGNITUDE_FLOOR,
        }
    }

    /// Lower end of the range as a percentage of `base`.
    pub const fn percent(mut self, percent: f32) -> Self {
        self.percent = percent;
        self
    }

    /// Scales the draw by this percentage (capped at 100) when positive.
    pub const fn radius_percent(mut self, radius_percent: f32) -> Self {
        self.radius_percent = radius_percent;
        self
    }

    /// Overrides the absolute lower bound of the range.
    pub const fn floor(mut self, floor: f32) -> Self {
        self.floor = floor;
        self
    }

    /// Inclusive integer bounds `(lo, hi)` the draw is taken from.
    ///
    /// `lo > hi` when the base is below the floor.
    pub fn bounds(&self) -> (f64, f64) {
        let base = f64::from(self.base);
        let min_value = (0.01 * f64::from(self.percent) * base).max(f64::from(self.floor));
        (min_value.ceil(), base.floor())
    }

    /// Draws a magnitude.
    ///
    /// An integer is taken uniformly from [`Self::bounds`]. When that range
    /// is empty it collapses to its upper end, so the result never exceeds
    /// `base`. A positive `radius_percent` then scales the draw by
    /// `min(radius_percent / 100, 1)`, rounding down. Non-finite inputs
    /// saturate (NaN becomes `0`).
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> i64 {
        let (lo, hi) = self.bounds();
        let drawn = if hi.is_nan() || hi < lo {
            hi
        } else {
            let offset = (source.next_unit() * (hi - lo + 1.0)).floor();
            (lo + offset).max(lo).min(hi)
        };
        let value = if self.radius_percent > 0.0 {
            let ratio = (f64::from(self.radius_percent) * 0.01).min(1.0);
            (drawn * ratio).floor()
        } else {
            drawn
        };
        value as i64
    }
}

/// Result of [`PointProbe::proximity`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Proximity {
    /// Whether the point lies in the region.
    pub inside: bool,
    /// Midpoint of the region.
    pub center: Point2,
    /// `0` inside; otherwise the rounded per-axis edge distance (see
    /// [`PointProbe::proximity`]).
    pub distance_to_enter: f32,
}

/// A point on the horizontal plane queried against regions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointProbe {
    point: Point2,
}

impl PointProbe {
    /// Probe at `point`.
    pub const fn new(point: Point2) -> Self {
        Self { point }
    }

    /// The probed point.
    pub const fn point(&self) -> Point2 {
        self.point
    }

    /// `true` if the point lies inside `region`, edges included.
    pub fn contains(&self, region: &Box2) -> bool {
        region.contains(self.point)
    }

    /// Midpoint of `region`.
    pub fn center(region: &Box2) -> Point2 {
        region.center()
    }

    /// Containment, centre and approximate distance to enter `region`.
    ///
    /// Outside the region the distance is `round(sqrt(dx² + dz²))`, where
    /// `dx` is the smaller of the distances to the two corner x-coordinates
    /// and `dz` likewise. This is not the true distance to the region: an
    /// axis on which the point is already within range still contributes.
    pub fn proximity(&self, region: &Box2) -> Proximity {
        let center = region.center();
        let inside = self.contains(region);
        let distance_to_enter = if inside {
            0.0
        } else {
            let p = self.point;
            let dx = (p.x - region.start.x).abs().min((p.x - region.end.x).abs());
            let dz = (p.z - region.start.z).abs().min((p.z - region.end.z).abs());
            dx.hypot(dz).round()
        };
        Proximity {
            inside,
            center,
            distance_to_enter,
        }
    }
}

impl From<Point2> for PointProbe {
    fn from(point: Point2) -> Self {
        Self::new(point)
    }
}

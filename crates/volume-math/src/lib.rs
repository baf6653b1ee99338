// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Value math shared by the volume tooling: an immutable `f32` vector,
//! scalar helpers, and a seedable pseudo-random source.
//!
//! Everything here is a plain `Copy` value. Nothing holds shared state, so
//! every function may be called concurrently from any thread.

mod prng;
mod vec3;

pub use prng::Prng;
pub use vec3::Vec3;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// A reversed range (`min > max`) collapses to `max`, so the call never
/// panics on caller error.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_both_ends() {
        assert_eq!(clamp(40.0, 0.0, 32.0), 32.0);
        assert_eq!(clamp(-3.0, 0.0, 32.0), 0.0);
        assert_eq!(clamp(12.5, 0.0, 32.0), 12.5);
    }

    #[test]
    fn clamp_with_reversed_range_collapses_to_max() {
        assert_eq!(clamp(5.0, 10.0, 2.0), 2.0);
    }
}

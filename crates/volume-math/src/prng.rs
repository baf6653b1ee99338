// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Seedable `xoroshiro128+` generator producing uniform floats in `[0, 1)`.
///
/// * Not cryptographically secure; intended for gameplay sampling only.
/// * Matching seeds yield identical sequences on every supported platform,
///   which keeps sampled magnitudes reproducible in tests.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

impl Prng {
    /// Constructs a PRNG from two 64-bit seeds.
    ///
    /// An all-zero seed is replaced by a fixed non-zero state; xoroshiro never
    /// leaves the zero state otherwise.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state == [0, 0] {
            state[0] = GOLDEN_GAMMA;
        }
        Self { state }
    }

    /// Constructs a PRNG from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(GOLDEN_GAMMA);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let s0 = splitmix64(&mut sm_state);
        let s1 = splitmix64(&mut sm_state);
        Self::from_seed(s0, s1)
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Returns the next float in `[0, 1)`.
    ///
    /// Takes the high 53 bits of the generator output so every representable
    /// step of an `f64` mantissa is equally likely.
    pub fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
        (self.next_u64() >> 11) as f64 * SCALE
    }
}

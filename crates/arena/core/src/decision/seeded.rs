//! Seeded PCG decision stream.

use super::{Decision, DecisionSource};

/// PCG random number generator (Permuted Congruential Generator) driving
/// a contest's decisions.
///
/// Uses the PCG-XSH-RR variant: 32-bit output from 64-bit state. The seed is
/// avalanched once at construction so that neighbouring seeds produce
/// unrelated streams.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same contest
/// - **Small state**: Only 64 bits
/// - **No dependencies**: Single multiply + xorshift + rotate
#[derive(Clone, Debug)]
pub struct SeededDecisions {
    state: u64,
}

impl SeededDecisions {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a stream from a contest seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::mix_seed(seed),
        }
    }

    /// SplitMix64-style avalanche of the raw seed.
    fn mix_seed(seed: u64) -> u64 {
        let mut hash = seed ^ 0x9e3779b97f4a7c15;
        hash ^= hash >> 33;
        hash = hash.wrapping_mul(0xff51afd7ed558ccd);
        hash ^= hash >> 33;
        hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
        hash ^= hash >> 33;
        hash
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }

    /// Next uniform value in `[0, 1)` with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        let bits = ((high << 32) | low) >> 11;
        bits as f64 / (1u64 << 53) as f64
    }
}

impl DecisionSource for SeededDecisions {
    fn check(&mut self, _decision: Decision, probability: f64) -> bool {
        self.next_f64() * 100.0 <= probability
    }

    fn factor(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    fn count(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }
}

//! Random number capability for the simulation
//!
//! Everything random in a run (obstacle shape, spawn spacing) goes through
//! [`RandomSource`], so a run is reproducible from its seed and tests can
//! script exact values.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform randomness
pub trait RandomSource {
    /// Uniform real in `[lo, hi)`. Returns `lo` when the range is empty.
    fn uniform(&mut self, lo: f32, hi: f32) -> f32;

    /// True with probability `p`
    fn chance(&mut self, p: f32) -> bool {
        self.uniform(0.0, 1.0) < p
    }

    /// `floor(uniform(lo, hi))` as a frame count
    fn frames(&mut self, lo: u32, hi: u32) -> u32 {
        self.uniform(lo as f32, hi as f32).floor() as u32
    }
}

impl RandomSource for Pcg32 {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.random_range(lo..hi)
    }
}

/// Create the run RNG from a seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of unit samples in `[0, 1)`, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRng {
    samples: Vec<f32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(samples: impl Into<Vec<f32>>) -> Self {
        let samples = samples.into();
        assert!(!samples.is_empty(), "SequenceRng needs at least one sample");
        Self { samples, cursor: 0 }
    }

    /// Always yields the same unit sample
    pub fn constant(unit: f32) -> Self {
        Self::new(vec![unit])
    }
}

impl RandomSource for SequenceRng {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        let unit = self.samples[self.cursor % self.samples.len()].clamp(0.0, 1.0);
        self.cursor += 1;
        if hi <= lo {
            return lo;
        }
        let value = lo + unit * (hi - lo);
        if value < hi { value } else { float_below(hi) }
    }
}

/// Largest `f32` strictly less than `x` (finite `x`)
fn float_below(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f32::from_bits(1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

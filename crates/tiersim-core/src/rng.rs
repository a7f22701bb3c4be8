//! Deterministic RNG wrapper.
//!
//! # Determinism strategy
//!
//! One master `SimRng` is seeded from the run seed; every randomized model
//! (waypoint movers, the workload generator) receives its own stream via
//! [`SimRng::child`]:
//!
//!   child_seed = next_u64() XOR slot * MIXING_CONSTANT
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive slot numbers uniformly across the seed space.
//! Streams are derived in one fixed order at build time, so a run seed
//! reproduces every movement trace and priority draw exactly, and no two
//! models ever share state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic RNG handle.  `!Sync` by construction — each owning model
/// keeps its own instance.
#[derive(Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a decorrelated child stream for slot `slot`.
    ///
    /// Advances this stream, so successive calls with the same slot still
    /// yield distinct children.
    pub fn child(&mut self, slot: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ slot.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice; `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

//! Random source seam
//!
//! Every random decision in the simulation (drops, spawns, enemy fire) goes
//! through [`RandomSource`]. Runs use a seeded `Pcg32`; tests script exact
//! sequences with [`ScriptedRandom`] to force specific branches.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub trait RandomSource {
    /// Uniform float in [0, 1)
    fn unit(&mut self) -> f64;

    /// Uniform integer in [low, high)
    fn range(&mut self, low: i32, high: i32) -> i32;

    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

impl RandomSource for Pcg32 {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.random_range(low..high)
    }
}

/// Seeded generator for a run
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays fixed sequences of draws.
///
/// When a sequence runs dry the source keeps answering with values that
/// trigger nothing: `unit` yields 0.99 and `range` yields `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    units: VecDeque<f64>,
    ints: VecDeque<i32>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue float draws
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    /// Queue integer draws (clamped into the requested range when drawn)
    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.units.is_empty() && self.ints.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.99)
    }

    fn range(&mut self, low: i32, high: i32) -> i32 {
        match self.ints.pop_front() {
            Some(v) if high > low => v.clamp(low, high - 1),
            _ => low,
        }
    }
}

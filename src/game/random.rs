//! Injectable randomness for food placement
//!
//! The engine never reaches for a global generator. Every operation that needs
//! randomness takes a [`RandomSource`], so tests can pin the outcome with a
//! fixed value or a scripted sequence.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of floats in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// System randomness backed by the thread-local generator
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Reproducible randomness from a 64-bit seed
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Always yields the same value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a scripted list of values
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// An empty list behaves like `FixedRandom(0.0)`
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

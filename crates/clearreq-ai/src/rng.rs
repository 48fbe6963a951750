//! Injectable randomness for confidence jitter and suggestion picks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the pipeline's random draws.
pub trait RandomSource {
    /// Uniform integer in `[low, high]`.
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32;

    /// Uniform index in `[0, len)`. Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

/// Pick one entry from a pool, or `None` if the pool is empty.
pub fn pick<'a>(rng: &mut dyn RandomSource, pool: &[&'a str]) -> Option<&'a str> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.index(pool.len())).copied()
}

/// Thread-local OS-seeded generator; the default for real runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSource;

impl RandomSource for ThreadSource {
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        rand::rng().random_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Deterministic generator for reproducible analyses (`--seed`).
#[derive(Debug, Clone)]
pub struct SeededSource(StdRng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.0.random_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Integer draws are clamped into the requested range; index draws are
/// reduced modulo the pool length. An empty script always yields the lower
/// bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<i64>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<i64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    fn next(&mut self) -> i64 {
        let Some(&v) = self.values.get(self.pos % self.values.len().max(1)) else {
            return 0;
        };
        self.pos += 1;
        v
    }
}

impl RandomSource for ScriptedSource {
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        if self.values.is_empty() {
            return low;
        }
        let v = self.next().clamp(i64::from(low), i64::from(high));
        i32::try_from(v).unwrap_or(low)
    }

    fn index(&mut self, len: usize) -> usize {
        if self.values.is_empty() || len == 0 {
            return 0;
        }
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        usize::try_from(self.next().rem_euclid(len)).unwrap_or(0)
    }
}

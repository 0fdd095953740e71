//! Randomness capability for the keyword score.
//!
//! The keyword engine adds a small random term to every score. It is kept
//! behind a trait so tests and deterministic deployments can pin it.

use rand::Rng;

pub trait JitterSource: Send + Sync {
    /// Returns a value in `[0, max)` for the source's configured `max`.
    fn sample(&self) -> f64;
}

/// Uniformly random jitter in `[0, max)`.
#[derive(Debug, Clone, Copy)]
pub struct RandomJitter {
    max: f64,
}

impl RandomJitter {
    pub fn new(max: f64) -> Self {
        Self { max }
    }
}

impl JitterSource for RandomJitter {
    fn sample(&self) -> f64 {
        if self.max.is_nan() || self.max <= 0.0 {
            return 0.0;
        }
        rand::rng().random_range(0.0..self.max)
    }
}

/// Always zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&self) -> f64 {
        0.0
    }
}

/// Always the same value.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn sample(&self) -> f64 {
        self.0
    }
}

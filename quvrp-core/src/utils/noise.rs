#[cfg(test)]
#[path = "../../tests/unit/utils/noise_test.rs"]
mod noise_test;

use crate::utils::{Float, Random};
use std::sync::Arc;

/// Provides way to apply multiplicative noise to a floating point value:
/// `value = value * (1 + sample_from(range))`.
#[derive(Clone)]
pub struct Noise {
    probability: Float,
    range: (Float, Float),
    random: Arc<dyn Random + Send + Sync>,
}

impl Noise {
    /// Creates a new instance of `Noise` with noise sampled from the given range.
    pub fn new(probability: Float, range: (Float, Float), random: Arc<dyn Random + Send + Sync>) -> Self {
        Self { probability, range, random }
    }

    /// Generates some noise based on the given value.
    pub fn generate(&self, value: Float) -> Float {
        if self.random.is_hit(self.probability) {
            // NOTE if value is zero, then ratio noise has no effect which causes
            // some troubles in edge cases, so fallback to a plain sample
            if value == 0. {
                self.random.uniform_real(self.range.0, self.range.1)
            } else {
                value * (1. + self.random.uniform_real(self.range.0, self.range.1))
            }
        } else {
            value
        }
    }

    /// Returns random generator.
    pub fn random(&self) -> &(dyn Random) {
        self.random.as_ref()
    }
}

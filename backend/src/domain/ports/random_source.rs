//! Driven port supplying randomness to the synthetic data generators.
//!
//! Production wires an entropy-seeded source; tests wire a fixed seed so
//! generated figures are reproducible.

/// Source of uniformly distributed values.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[low, high)`. Returns `low` when the range is empty.
    fn int_in(&self, low: i64, high: i64) -> i64;

    /// Uniform float in `[0, 1)`.
    fn unit(&self) -> f64;
}

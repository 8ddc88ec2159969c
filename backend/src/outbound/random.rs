//! Randomness adapters for the [`RandomSource`] port.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::{SmallRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::domain::ports::RandomSource;

/// Reproducible source seeded from a fixed value.
///
/// # Examples
/// ```
/// use cashflow_backend::domain::ports::RandomSource;
/// use cashflow_backend::outbound::random::SeededRandomSource;
///
/// let a = SeededRandomSource::new(9);
/// let b = SeededRandomSource::new(9);
/// assert_eq!(a.int_in(0, 1_000), b.int_in(0, 1_000));
/// ```
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    /// Create a source whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn int_in(&self, low: i64, high: i64) -> i64 {
        int_in(&mut *lock(&self.rng), low, high)
    }

    fn unit(&self) -> f64 {
        lock(&self.rng).r#gen::<f64>()
    }
}

/// Fast non-reproducible source seeded from OS entropy.
#[derive(Debug)]
pub struct EntropyRandomSource {
    rng: Mutex<SmallRng>,
}

impl EntropyRandomSource {
    /// Create a source seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(SmallRng::from_entropy()),
        }
    }
}

impl Default for EntropyRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandomSource {
    fn int_in(&self, low: i64, high: i64) -> i64 {
        int_in(&mut *lock(&self.rng), low, high)
    }

    fn unit(&self) -> f64 {
        lock(&self.rng).r#gen::<f64>()
    }
}

fn int_in<R: Rng>(rng: &mut R, low: i64, high: i64) -> i64 {
    if low >= high {
        return low;
    }
    rng.gen_range(low..high)
}

// A panic while drawing leaves the generator usable; recover the guard.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

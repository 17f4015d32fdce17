// Random Source Port (for testability)

use crate::domain::RandomSourceError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Uniform random integer source (allows mocking in tests)
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Draw an integer uniformly from `[low, high]` (inclusive on both ends)
    fn next_long(&self, low: i64, high: i64) -> Result<i64, RandomSourceError>;
}

fn check_range(low: i64, high: i64) -> Result<(), RandomSourceError> {
    if low > high {
        return Err(RandomSourceError::new(format!(
            "empty range: low {} > high {}",
            low, high
        )));
    }
    Ok(())
}

/// Thread-local RNG source (production)
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_long(&self, low: i64, high: i64) -> Result<i64, RandomSourceError> {
        check_range(low, high)?;
        Ok(rand::thread_rng().gen_range(low..=high))
    }
}

/// Seeded RNG source
///
/// Same seed, same sequence of draws. Draws are serialized through a mutex
/// so one instance may be shared between threads.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn next_long(&self, low: i64, high: i64) -> Result<i64, RandomSourceError> {
        check_range(low, high)?;
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| RandomSourceError::new("seeded RNG lock poisoned"))?;
        Ok(rng.gen_range(low..=high))
    }
}

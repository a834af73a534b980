//! Random center selection.

use parking_lot::Mutex;

use super::CenterStrategy;
use crate::error::{Error, Result};
use crate::rng_util;

/// Picks `k` observations uniformly at random, without replacement.
///
/// Each observation index is used at most once per call, so duplicate
/// centers only appear when the input itself holds duplicate values.
///
/// # Examples
///
/// ```
/// use kmn::center::{CenterStrategy, RandomCenters};
///
/// // Create with default RNG
/// let strategy = RandomCenters::new();
///
/// // Create with a fixed seed for reproducibility
/// let strategy = RandomCenters::with_seed(42);
/// let centers = strategy.select(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
/// assert_eq!(centers.len(), 2);
/// ```
pub struct RandomCenters {
    rng: Mutex<fastrand::Rng>,
}

impl RandomCenters {
    /// Creates a new random strategy with a default random seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a new random strategy with a fixed seed for reproducibility.
    ///
    /// Using the same seed will produce the same sequence of selections.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Default for RandomCenters {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for RandomCenters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RandomCenters").finish_non_exhaustive()
    }
}

impl CenterStrategy for RandomCenters {
    fn select(&self, values: &[f64], k: usize) -> Result<Vec<f64>> {
        if k > values.len() {
            return Err(Error::NotEnoughValues {
                requested: k,
                available: values.len(),
            });
        }
        let mut rng = self.rng.lock();
        let indices = rng_util::partial_shuffle(values.len(), k, &mut rng);
        Ok(indices.into_iter().map(|i| values[i]).collect())
    }
}

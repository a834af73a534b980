//! K-means center selection on scalar targets.
//!
//! Runs Lloyd's algorithm in one dimension. Every restart is seeded either
//! with k-means++ or with `k` distinct random observations, iterates until
//! the squared centroid shift drops below `tol` times the target variance,
//! and the restart with the lowest inertia wins.

use parking_lot::Mutex;

use super::CenterStrategy;
use crate::error::{Error, Result};
use crate::rng_util;

/// Initialization method for [`KMeans`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KMeansInit {
    /// K-means++ seeding (default).
    #[default]
    PlusPlus,
    /// `k` distinct observations chosen uniformly.
    Random,
}

/// Uses the centroids of a k-means clustering as centers.
///
/// # Defaults
///
/// - `init`: [`KMeansInit::PlusPlus`]
/// - `n_init`: 10 restarts
/// - `max_iter`: 300 iterations per restart
/// - `tol`: `1e-4`
///
/// # Examples
///
/// ```
/// use kmn::center::{CenterStrategy, KMeans};
///
/// let strategy = KMeans::with_seed(1).n_init(4);
/// let mut centers = strategy.select(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], 2).unwrap();
/// centers.sort_by(f64::total_cmp);
///
/// assert!((centers[0] - 3.0).abs() < 1e-9);
/// assert!((centers[1] - 100.0).abs() < 1e-9);
/// ```
pub struct KMeans {
    init: KMeansInit,
    n_init: usize,
    max_iter: usize,
    tol: f64,
    rng: Mutex<fastrand::Rng>,
}

/// Outcome of one Lloyd run.
struct Fit {
    centroids: Vec<f64>,
    inertia: f64,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))] // only reported in debug events
    n_iter: usize,
}

impl KMeans {
    /// Creates a k-means strategy with a default random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Creates a k-means strategy with a fixed seed for reproducibility.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            init: KMeansInit::default(),
            n_init: 10,
            max_iter: 300,
            tol: 1e-4,
            rng: Mutex::new(rng),
        }
    }

    /// Sets the initialization method.
    #[must_use]
    pub fn init(mut self, init: KMeansInit) -> Self {
        self.init = init;
        self
    }

    /// Sets the number of restarts. Values below 1 are treated as 1.
    #[must_use]
    pub fn n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init.max(1);
        self
    }

    /// Sets the iteration cap per restart. Values below 1 are treated as 1.
    #[must_use]
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter.max(1);
        self
    }

    /// Sets the convergence tolerance, relative to the target variance.
    #[must_use]
    pub fn tol(mut self, tol: f64) -> Self {
        self.tol = tol.max(0.0);
        self
    }

    fn seed_centroids(&self, values: &[f64], k: usize, rng: &mut fastrand::Rng) -> Vec<f64> {
        match self.init {
            KMeansInit::PlusPlus => plus_plus(values, k, rng),
            KMeansInit::Random => rng_util::partial_shuffle(values.len(), k, rng)
                .into_iter()
                .map(|i| values[i])
                .collect(),
        }
    }
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for KMeans {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KMeans")
            .field("init", &self.init)
            .field("n_init", &self.n_init)
            .field("max_iter", &self.max_iter)
            .field("tol", &self.tol)
            .finish_non_exhaustive()
    }
}

impl CenterStrategy for KMeans {
    fn select(&self, values: &[f64], k: usize) -> Result<Vec<f64>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        if k > values.len() {
            return Err(Error::NotEnoughValues {
                requested: k,
                available: values.len(),
            });
        }

        let threshold = self.tol * variance(values);
        let mut rng = self.rng.lock();
        let mut best: Option<Fit> = None;
        for _ in 0..self.n_init {
            let seeds = self.seed_centroids(values, k, &mut rng);
            let fit = lloyd(values, seeds, self.max_iter, threshold);
            if best.as_ref().is_none_or(|b| fit.inertia < b.inertia) {
                best = Some(fit);
            }
        }

        let best = best.ok_or(Error::NotEnoughValues {
            requested: k,
            available: values.len(),
        })?;
        trace_debug!(
            k,
            inertia = best.inertia,
            n_iter = best.n_iter,
            "k-means converged"
        );
        Ok(best.centroids)
    }
}

/// K-means++ seeding: each new seed is drawn with probability proportional
/// to its squared distance from the nearest seed so far.
fn plus_plus(values: &[f64], k: usize, rng: &mut fastrand::Rng) -> Vec<f64> {
    let mut centroids = Vec::with_capacity(k);
    let first = values[rng.usize(0..values.len())];
    centroids.push(first);

    let mut d2: Vec<f64> = values.iter().map(|&v| (v - first).powi(2)).collect();
    while centroids.len() < k {
        // d2 has one entry per value, so it is never empty here
        let next = values[rng_util::weighted_index(&d2, rng).unwrap_or(0)];
        centroids.push(next);
        for (d, &v) in d2.iter_mut().zip(values) {
            *d = d.min((v - next).powi(2));
        }
    }
    centroids
}

fn lloyd(values: &[f64], mut centroids: Vec<f64>, max_iter: usize, threshold: f64) -> Fit {
    let k = centroids.len();
    let mut labels = vec![0usize; values.len()];
    let mut n_iter = 0;

    for _ in 0..max_iter {
        n_iter += 1;
        assign(values, &centroids, &mut labels);

        let mut sums = vec![0.0; k];
        let mut counts = vec![0usize; k];
        for (&v, &label) in values.iter().zip(&labels) {
            sums[label] += v;
            counts[label] += 1;
        }

        let mut updated = centroids.clone();
        for j in 0..k {
            if counts[j] > 0 {
                #[allow(clippy::cast_precision_loss)]
                let mean = sums[j] / counts[j] as f64;
                updated[j] = mean;
            }
        }
        relocate_empty(values, &labels, &counts, &mut updated);

        let shift: f64 = centroids
            .iter()
            .zip(&updated)
            .map(|(a, b)| (a - b).powi(2))
            .sum();
        centroids = updated;
        if shift <= threshold {
            break;
        }
    }

    let inertia = assign(values, &centroids, &mut labels);
    Fit {
        centroids,
        inertia,
        n_iter,
    }
}

/// Assigns every value to its nearest centroid and returns the inertia.
///
/// Ties go to the lowest centroid index.
fn assign(values: &[f64], centroids: &[f64], labels: &mut [usize]) -> f64 {
    let mut inertia = 0.0;
    for (label, &v) in labels.iter_mut().zip(values) {
        let mut best = 0;
        let mut best_d2 = f64::INFINITY;
        for (j, &c) in centroids.iter().enumerate() {
            let d2 = (v - c).powi(2);
            if d2 < best_d2 {
                best = j;
                best_d2 = d2;
            }
        }
        *label = best;
        inertia += best_d2;
    }
    inertia
}

/// Moves every empty cluster onto the value farthest from its own centroid.
fn relocate_empty(values: &[f64], labels: &[usize], counts: &[usize], centroids: &mut [f64]) {
    if counts.iter().all(|&c| c > 0) {
        return;
    }
    let mut distances: Vec<f64> = values
        .iter()
        .zip(labels)
        .map(|(&v, &label)| (v - centroids[label]).powi(2))
        .collect();

    for (j, _) in counts.iter().enumerate().filter(|&(_, &c)| c == 0) {
        let Some((far, _)) = distances
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
        else {
            return;
        };
        centroids[j] = values[far];
        distances[far] = f64::NEG_INFINITY;
    }
}

#[allow(clippy::cast_precision_loss)]
fn variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

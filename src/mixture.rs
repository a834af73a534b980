//! Gaussian kernel mixture output layer.
//!
//! The mixture pairs every kernel center with every bandwidth, giving
//! `n_centers * n_scales` Gaussian components laid out center-major:
//! component `i * n_scales + j` is `Normal(locs[i], scales[j])`. The mixing
//! weights come from an external network as unnormalized logits, one per
//! component, and are turned into probabilities with a softmax.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rng_util;
use crate::scales::Scales;

const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

/// Margin, in multiples of the widest bandwidth, added on both sides of the
/// target range by [`KernelMixture::default_grid`].
pub const GRID_MARGIN: f64 = 2.5;

/// A mixture of Gaussian kernels at fixed centers.
///
/// # Examples
///
/// ```
/// use kmn::mixture::KernelMixture;
/// use kmn::scales::Scales;
///
/// let mixture = KernelMixture::new(vec![0.0, 10.0], Scales::default(), (0.0, 10.0)).unwrap();
///
/// // All weight on the first component
/// let logits = [50.0, 0.0];
/// let density = mixture.pdf(&logits, 0.0).unwrap();
/// assert!((density - 0.398_942_280_4).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawKernelMixture")
)]
pub struct KernelMixture {
    locs: Vec<f64>,
    scales: Scales,
    y_min: f64,
    y_max: f64,
}

/// Unchecked field layout accepted on load; converted through [`KernelMixture::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawKernelMixture {
    locs: Vec<f64>,
    scales: Scales,
    y_min: f64,
    y_max: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawKernelMixture> for KernelMixture {
    type Error = Error;

    fn try_from(raw: RawKernelMixture) -> Result<Self> {
        Self::new(raw.locs, raw.scales, (raw.y_min, raw.y_max))
    }
}

impl KernelMixture {
    /// Creates a mixture from kernel centers, bandwidths, and the training
    /// target range used for default density grids.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyCenters` if `locs` is empty.
    /// - `Error::InvalidCenter` if a center is not finite.
    /// - `Error::InvalidRange` if the range is not finite or reversed.
    pub fn new(locs: Vec<f64>, scales: Scales, y_range: (f64, f64)) -> Result<Self> {
        if locs.is_empty() {
            return Err(Error::EmptyCenters);
        }
        if let Some(&bad) = locs.iter().find(|l| !l.is_finite()) {
            return Err(Error::InvalidCenter(bad));
        }
        let (low, high) = y_range;
        if !(low.is_finite() && high.is_finite() && low <= high) {
            return Err(Error::InvalidRange { low, high });
        }
        Ok(Self {
            locs,
            scales,
            y_min: low,
            y_max: high,
        })
    }

    /// The kernel centers.
    #[must_use]
    pub fn locs(&self) -> &[f64] {
        &self.locs
    }

    /// The kernel bandwidths.
    #[must_use]
    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    /// The `(min, max)` of the training targets.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Number of Gaussian components, and so the number of logits expected.
    #[must_use]
    pub fn n_components(&self) -> usize {
        self.locs.len() * self.scales.len()
    }

    /// Iterates over `(loc, scale)` for every component, center-major.
    pub fn components(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.locs
            .iter()
            .flat_map(|&loc| self.scales.values().iter().map(move |&scale| (loc, scale)))
    }

    /// Softmax of `logits`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if `logits` does not have one entry per component.
    pub fn mixing_weights(&self, logits: &[f64]) -> Result<Vec<f64>> {
        let log_weights = self.log_weights(logits)?;
        Ok(log_weights.into_iter().map(f64::exp).collect())
    }

    fn log_weights(&self, logits: &[f64]) -> Result<Vec<f64>> {
        if logits.len() != self.n_components() {
            return Err(Error::DimensionMismatch {
                expected: self.n_components(),
                got: logits.len(),
            });
        }
        let norm = logsumexp(logits);
        Ok(logits.iter().map(|&l| l - norm).collect())
    }

    /// Log density of the mixture at `y`.
    ///
    /// # Errors
    ///
    /// Same as [`KernelMixture::mixing_weights`].
    pub fn log_pdf(&self, logits: &[f64], y: f64) -> Result<f64> {
        let log_weights = self.log_weights(logits)?;
        Ok(self.log_pdf_weighted(&log_weights, y))
    }

    fn log_pdf_weighted(&self, log_weights: &[f64], y: f64) -> f64 {
        let terms: Vec<f64> = self
            .components()
            .zip(log_weights)
            .map(|((loc, scale), &lw)| lw + log_normal(y, loc, scale))
            .collect();
        logsumexp(&terms)
    }

    /// Density of the mixture at `y`.
    ///
    /// # Errors
    ///
    /// Same as [`KernelMixture::mixing_weights`].
    pub fn pdf(&self, logits: &[f64], y: f64) -> Result<f64> {
        self.log_pdf(logits, y).map(f64::exp)
    }

    /// Density of each example's mixture at its own target.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if the batch sizes differ or any
    /// row of logits has the wrong length.
    pub fn likelihoods<L: AsRef<[f64]>>(&self, batch_logits: &[L], ys: &[f64]) -> Result<Vec<f64>> {
        if batch_logits.len() != ys.len() {
            return Err(Error::DimensionMismatch {
                expected: batch_logits.len(),
                got: ys.len(),
            });
        }
        batch_logits
            .iter()
            .zip(ys)
            .map(|(logits, &y)| self.pdf(logits.as_ref(), y))
            .collect()
    }

    /// Mean log likelihood over a batch.
    ///
    /// # Errors
    ///
    /// Same as [`KernelMixture::likelihoods`], plus `Error::EmptyTargets` for an empty batch.
    #[allow(clippy::cast_precision_loss)]
    pub fn score<L: AsRef<[f64]>>(&self, batch_logits: &[L], ys: &[f64]) -> Result<f64> {
        if ys.is_empty() {
            return Err(Error::EmptyTargets);
        }
        if batch_logits.len() != ys.len() {
            return Err(Error::DimensionMismatch {
                expected: batch_logits.len(),
                got: ys.len(),
            });
        }
        let mut total = 0.0;
        for (logits, &y) in batch_logits.iter().zip(ys) {
            total += self.log_pdf(logits.as_ref(), y)?;
        }
        Ok(total / ys.len() as f64)
    }

    /// Evenly spaced grid over the target range, widened by
    /// [`GRID_MARGIN`] times the widest bandwidth on each side.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResolution` if `resolution < 2`.
    pub fn default_grid(&self, resolution: usize) -> Result<Vec<f64>> {
        if resolution < 2 {
            return Err(Error::InvalidResolution(resolution));
        }
        let margin = GRID_MARGIN * self.scales.max();
        Ok(linspace(self.y_min - margin, self.y_max + margin, resolution))
    }

    /// Density at every point of `grid`.
    ///
    /// # Errors
    ///
    /// Same as [`KernelMixture::mixing_weights`].
    pub fn density(&self, logits: &[f64], grid: &[f64]) -> Result<Vec<f64>> {
        let log_weights = self.log_weights(logits)?;
        Ok(grid
            .iter()
            .map(|&y| self.log_pdf_weighted(&log_weights, y).exp())
            .collect())
    }

    /// Draws one value from the mixture.
    ///
    /// Sampling picks a component by its mixing weight, then adds Gaussian
    /// noise with that component's bandwidth to its center.
    ///
    /// # Errors
    ///
    /// Same as [`KernelMixture::mixing_weights`], plus `Error::EmptyCenters`
    /// if there is no component to draw from.
    pub fn sample(&self, logits: &[f64], rng: &mut fastrand::Rng) -> Result<f64> {
        let weights = self.mixing_weights(logits)?;
        self.sample_weighted(&weights, rng)
    }

    /// Draws `n` values from the mixture.
    ///
    /// # Errors
    ///
    /// Same as [`KernelMixture::mixing_weights`].
    pub fn sample_n(&self, logits: &[f64], n: usize, rng: &mut fastrand::Rng) -> Result<Vec<f64>> {
        let weights = self.mixing_weights(logits)?;
        (0..n).map(|_| self.sample_weighted(&weights, rng)).collect()
    }

    fn sample_weighted(&self, weights: &[f64], rng: &mut fastrand::Rng) -> Result<f64> {
        let Some(component) = rng_util::weighted_index(weights, rng) else {
            return Err(Error::EmptyCenters);
        };
        let n_scales = self.scales.len();
        let loc = self.locs[component / n_scales];
        let scale = self.scales.values()[component % n_scales];
        Ok(loc + scale * rng_util::standard_normal(rng))
    }
}

fn log_normal(y: f64, loc: f64, scale: f64) -> f64 {
    let z = (y - loc) / scale;
    -0.5 * z * z - scale.ln() - LN_SQRT_2PI
}

fn logsumexp(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return max;
    }
    max + values.iter().map(|v| (v - max).exp()).sum::<f64>().ln()
}

#[allow(clippy::cast_precision_loss)]
fn linspace(low: f64, high: f64, n: usize) -> Vec<f64> {
    let step = (high - low) / (n - 1) as f64;
    (0..n)
        .map(|i| if i + 1 == n { high } else { low + step * i as f64 })
        .collect()
}

//! Kernel Mixture Network hyperparameters.
//!
//! [`KmnConfig`] collects everything needed to lay out the mixture output
//! layer: how many kernel centers to pick and how, whether to keep the
//! target extremes, and the initial bandwidths. Network architecture and
//! training live outside this crate; a config only turns training targets
//! into a [`KernelMixture`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::center::{CenterSampler, StrategyKind};
use crate::error::{Error, Result};
use crate::mixture::KernelMixture;
use crate::scales::Scales;
use crate::targets;

/// Hyperparameters of a Kernel Mixture Network output layer.
///
/// # Defaults
///
/// - `n_centers`: 20
/// - `center_sampling`: [`StrategyKind::KMeans`]
/// - `keep_edges`: `false`
/// - `init_scales`: `[1.0]`
/// - `train_scales`: `false`
/// - `n_samples`: 10
/// - `seed`: none
///
/// # Examples
///
/// ```
/// use kmn::center::StrategyKind;
/// use kmn::config::KmnConfig;
///
/// let config = KmnConfig::builder()
///     .n_centers(4)
///     .center_sampling(StrategyKind::Agglomerative)
///     .keep_edges(true)
///     .build()
///     .unwrap();
///
/// let targets = [0.0, 0.4, 0.5, 3.1, 3.3, 9.0];
/// let mixture = config.build_mixture(&targets).unwrap();
///
/// assert_eq!(mixture.locs().len(), 4);
/// assert_eq!(mixture.n_components(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KmnConfig {
    n_centers: usize,
    center_sampling: StrategyKind,
    keep_edges: bool,
    init_scales: Scales,
    train_scales: bool,
    n_samples: usize,
    seed: Option<u64>,
}

impl KmnConfig {
    /// Returns a builder with default settings.
    #[must_use]
    pub fn builder() -> KmnConfigBuilder {
        KmnConfigBuilder::new()
    }

    /// Number of kernel centers.
    #[must_use]
    pub fn n_centers(&self) -> usize {
        self.n_centers
    }

    /// Strategy used to pick kernel centers.
    #[must_use]
    pub fn center_sampling(&self) -> StrategyKind {
        self.center_sampling
    }

    /// Whether the target extremes are kept as centers.
    #[must_use]
    pub fn keep_edges(&self) -> bool {
        self.keep_edges
    }

    /// Initial kernel bandwidths.
    #[must_use]
    pub fn init_scales(&self) -> &Scales {
        &self.init_scales
    }

    /// Whether the consuming framework should treat the bandwidths as trainable.
    #[must_use]
    pub fn train_scales(&self) -> bool {
        self.train_scales
    }

    /// Number of samples to draw per prediction.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Seed forwarded to randomized center strategies.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Picks kernel centers from `targets` and lays out the mixture.
    ///
    /// # Errors
    ///
    /// Any error from target validation or center selection.
    pub fn build_mixture(&self, targets: &[f64]) -> Result<KernelMixture> {
        let y_range = targets::min_max(targets)?;
        let sampler =
            CenterSampler::from_kind(self.center_sampling, self.seed).keep_edges(self.keep_edges);
        let locs = sampler.sample(targets, self.n_centers)?;

        let mixture = KernelMixture::new(locs, self.init_scales.clone(), y_range)?;
        trace_info!(
            strategy = self.center_sampling.name(),
            n_centers = mixture.locs().len(),
            n_components = mixture.n_components(),
            "kernel mixture built"
        );
        Ok(mixture)
    }
}

impl Default for KmnConfig {
    fn default() -> Self {
        Self {
            n_centers: 20,
            center_sampling: StrategyKind::KMeans,
            keep_edges: false,
            init_scales: Scales::default(),
            train_scales: false,
            n_samples: 10,
            seed: None,
        }
    }
}

/// Builder for [`KmnConfig`]. Created via [`KmnConfig::builder()`].
#[derive(Clone, Debug)]
pub struct KmnConfigBuilder {
    config: KmnConfig,
}

impl KmnConfigBuilder {
    fn new() -> Self {
        Self {
            config: KmnConfig::default(),
        }
    }

    /// Set the number of kernel centers.
    #[must_use]
    pub fn n_centers(mut self, n_centers: usize) -> Self {
        self.config.n_centers = n_centers;
        self
    }

    /// Set the center selection strategy.
    #[must_use]
    pub fn center_sampling(mut self, kind: StrategyKind) -> Self {
        self.config.center_sampling = kind;
        self
    }

    /// Keep the smallest and largest targets as centers.
    #[must_use]
    pub fn keep_edges(mut self, keep_edges: bool) -> Self {
        self.config.keep_edges = keep_edges;
        self
    }

    /// Set the initial kernel bandwidths.
    #[must_use]
    pub fn init_scales(mut self, scales: Scales) -> Self {
        self.config.init_scales = scales;
        self
    }

    /// Mark the bandwidths as trainable for the consuming framework.
    #[must_use]
    pub fn train_scales(mut self, train_scales: bool) -> Self {
        self.config.train_scales = train_scales;
        self
    }

    /// Set the number of samples drawn per prediction.
    #[must_use]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.config.n_samples = n_samples;
        self
    }

    /// Seed randomized center strategies for reproducible centers.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate and build the config.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidCenterCount` if `n_centers` is zero.
    /// - `Error::EdgeBudget` if `keep_edges` is set with fewer than two centers.
    /// - `Error::InvalidSampleCount` if `n_samples` is zero.
    pub fn build(self) -> Result<KmnConfig> {
        let config = self.config;
        if config.n_centers == 0 {
            return Err(Error::InvalidCenterCount { k: 0 });
        }
        if config.keep_edges && config.n_centers < 2 {
            return Err(Error::EdgeBudget {
                k: config.n_centers,
            });
        }
        if config.n_samples == 0 {
            return Err(Error::InvalidSampleCount);
        }
        Ok(config)
    }
}

//! Kernel center selection.
//!
//! A [`CenterStrategy`] reduces a (possibly large) set of scalar training
//! targets to a handful of representative values. Those values become the
//! fixed means of the Gaussian kernels in a [`KernelMixture`](crate::mixture::KernelMixture).
//!
//! | Strategy | Kind | Returns exactly `k` |
//! |----------|------|---------------------|
//! | [`Identity`] | [`StrategyKind::Identity`] | no, returns every value |
//! | [`RandomCenters`] | [`StrategyKind::Random`] | yes |
//! | [`KMeans`] | [`StrategyKind::KMeans`] | yes |
//! | [`Agglomerative`] | [`StrategyKind::Agglomerative`] | yes |
//! | [`Distance`] | [`StrategyKind::Distance`] | reserved, always fails |
//!
//! Plain functions and closures with the signature
//! `Fn(&[f64], usize) -> Result<Vec<f64>>` are strategies too.
//!
//! # Examples
//!
//! ```
//! use kmn::center::{KMeans, sample_center_points};
//!
//! let targets = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
//! let centers = sample_center_points(&targets, Some(&KMeans::with_seed(7)), 2, false).unwrap();
//! assert_eq!(centers.len(), 2);
//! ```

mod agglomerative;
mod identity;
mod kind;
mod kmeans;
mod random;

pub use agglomerative::Agglomerative;
pub use identity::Identity;
pub use kind::{Distance, StrategyKind};
pub use kmeans::{KMeans, KMeansInit};
pub use random::RandomCenters;

use crate::error::{Error, Result};
use crate::targets;

/// Number of centers used by the name-based entry point when no count is given.
pub const DEFAULT_N_CENTERS: usize = 100;

/// Trait for pluggable kernel center selection strategies.
///
/// Implementations receive the observations to summarize and the requested
/// number of centers. A request for zero centers yields an empty vector for
/// every strategy that honors `k`. The trait requires `Send + Sync` so a
/// strategy can be shared between threads that build models concurrently.
pub trait CenterStrategy: Send + Sync {
    /// Selects centers from `values`.
    ///
    /// # Errors
    ///
    /// Strategy-specific; typically `Error::NotEnoughValues` when `k`
    /// exceeds what `values` can provide.
    fn select(&self, values: &[f64], k: usize) -> Result<Vec<f64>>;
}

impl<F> CenterStrategy for F
where
    F: Fn(&[f64], usize) -> Result<Vec<f64>> + Send + Sync,
{
    fn select(&self, values: &[f64], k: usize) -> Result<Vec<f64>> {
        self(values, k)
    }
}

/// Selects `k` kernel centers from `targets`.
///
/// `strategy` defaults to [`Identity`] when `None`. With `keep_edges`, the
/// minimum and maximum targets always come first in the output and the
/// strategy picks the remaining `k - 2` centers from the values in between.
///
/// # Errors
///
/// - `Error::EmptyTargets` / `Error::NonFiniteTarget` for invalid targets.
/// - `Error::InvalidCenterCount` if `k` is zero.
/// - `Error::EdgeBudget` if `keep_edges` is set and `k < 2`.
/// - `Error::NotEnoughValues` if `keep_edges` is set and there are fewer than two targets.
/// - Any error raised by the strategy itself.
///
/// # Examples
///
/// ```
/// use kmn::center::{Agglomerative, sample_center_points};
///
/// let targets = [10.0, 20.0, 30.0, 40.0, 50.0];
/// let centers = sample_center_points(&targets, Some(&Agglomerative::new()), 4, true).unwrap();
///
/// assert_eq!(centers.len(), 4);
/// assert_eq!(&centers[..2], &[10.0, 50.0]);
/// ```
pub fn sample_center_points(
    targets: &[f64],
    strategy: Option<&dyn CenterStrategy>,
    k: usize,
    keep_edges: bool,
) -> Result<Vec<f64>> {
    targets::validate(targets)?;
    if k == 0 {
        return Err(Error::InvalidCenterCount { k });
    }
    let strategy = strategy.unwrap_or(&Identity);

    if !keep_edges {
        return strategy.select(targets, k);
    }

    if k < 2 {
        return Err(Error::EdgeBudget { k });
    }
    if targets.len() < 2 {
        return Err(Error::NotEnoughValues {
            requested: 2,
            available: targets.len(),
        });
    }

    let sorted = targets::sorted(targets);
    let last = sorted.len() - 1;
    trace_debug!(
        low = sorted[0],
        high = sorted[last],
        budget = k - 2,
        "keeping edge targets as centers"
    );

    let mut centers = Vec::with_capacity(k);
    centers.push(sorted[0]);
    centers.push(sorted[last]);
    centers.extend(strategy.select(&sorted[1..last], k - 2)?);
    Ok(centers)
}

/// Selects kernel centers using a strategy name.
///
/// Names are resolved with [`StrategyKind::from_name`]; `None` selects
/// [`Identity`]. When `k` is `None`, [`DEFAULT_N_CENTERS`] is used.
///
/// # Errors
///
/// `Error::UnknownStrategy` for an unrecognized name, otherwise the same
/// errors as [`sample_center_points`].
#[deprecated(
    since = "0.1.0",
    note = "pass a `CenterStrategy` to `sample_center_points` instead"
)]
pub fn sample_center_points_by_name(
    targets: &[f64],
    name: Option<&str>,
    k: Option<usize>,
    keep_edges: bool,
) -> Result<Vec<f64>> {
    if k.is_some() {
        trace_warn!(k = ?k, "passing k is deprecated, pass a center strategy instead");
    }
    trace_warn!(
        name = name.unwrap_or("<none>"),
        "selecting a center strategy by name is deprecated, pass a center strategy instead"
    );

    let strategy = StrategyKind::from_name(name)?.strategy();
    sample_center_points(
        targets,
        Some(strategy.as_ref()),
        k.unwrap_or(DEFAULT_N_CENTERS),
        keep_edges,
    )
}

/// A reusable pairing of a strategy with the edge-preservation policy.
///
/// # Examples
///
/// ```
/// use kmn::center::{CenterSampler, RandomCenters};
///
/// let sampler = CenterSampler::new(RandomCenters::with_seed(3)).keep_edges(true);
/// let centers = sampler.sample(&[5.0, 1.0, 4.0, 2.0, 3.0], 3).unwrap();
/// assert_eq!(&centers[..2], &[1.0, 5.0]);
/// ```
pub struct CenterSampler {
    strategy: Box<dyn CenterStrategy>,
    keep_edges: bool,
}

impl CenterSampler {
    /// Creates a sampler around `strategy` without edge preservation.
    #[must_use]
    pub fn new(strategy: impl CenterStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
            keep_edges: false,
        }
    }

    /// Creates a sampler for a registered strategy, seeding it when it is random.
    #[must_use]
    pub fn from_kind(kind: StrategyKind, seed: Option<u64>) -> Self {
        let strategy = match seed {
            Some(seed) => kind.seeded_strategy(seed),
            None => kind.strategy(),
        };
        Self {
            strategy,
            keep_edges: false,
        }
    }

    /// Sets whether the minimum and maximum targets are always kept.
    #[must_use]
    pub fn keep_edges(mut self, keep_edges: bool) -> Self {
        self.keep_edges = keep_edges;
        self
    }

    /// Selects `k` centers from `targets`.
    ///
    /// # Errors
    ///
    /// Same as [`sample_center_points`].
    pub fn sample(&self, targets: &[f64], k: usize) -> Result<Vec<f64>> {
        sample_center_points(targets, Some(self.strategy.as_ref()), k, self.keep_edges)
    }
}

impl Default for CenterSampler {
    fn default() -> Self {
        Self::new(Identity)
    }
}

impl core::fmt::Debug for CenterSampler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CenterSampler")
            .field("keep_edges", &self.keep_edges)
            .finish_non_exhaustive()
    }
}

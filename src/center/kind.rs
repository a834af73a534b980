//! Registry of built-in center strategies.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Agglomerative, CenterStrategy, Identity, KMeans, RandomCenters};
use crate::error::{Error, Result};

/// The built-in center selection strategies.
///
/// Each variant maps to one implementation through [`StrategyKind::strategy`].
/// String names are only understood by [`StrategyKind::from_name`] and the
/// [`FromStr`] impl.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StrategyKind {
    /// Every target becomes a center.
    #[default]
    Identity,
    /// Uniform sampling without replacement.
    Random,
    /// Lloyd's k-means centroids.
    KMeans,
    /// Complete-linkage agglomerative cluster means.
    Agglomerative,
    /// Reserved; not implemented.
    Distance,
}

impl StrategyKind {
    /// All registered strategies.
    pub const ALL: [Self; 5] = [
        Self::Identity,
        Self::Random,
        Self::KMeans,
        Self::Agglomerative,
        Self::Distance,
    ];

    /// The registry name of this strategy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Random => "random",
            Self::KMeans => "k_means",
            Self::Agglomerative => "agglomerative",
            Self::Distance => "distance",
        }
    }

    /// Resolves an optional strategy name; `None` means [`StrategyKind::Identity`].
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownStrategy` if the name is not registered.
    pub fn from_name(name: Option<&str>) -> Result<Self> {
        name.map_or(Ok(Self::Identity), str::parse)
    }

    /// Returns the implementation for this strategy with a fresh RNG.
    #[must_use]
    pub fn strategy(self) -> Box<dyn CenterStrategy> {
        trace_debug!(strategy = self.name(), "resolved center strategy");
        match self {
            Self::Identity => Box::new(Identity),
            Self::Random => Box::new(RandomCenters::new()),
            Self::KMeans => Box::new(KMeans::new()),
            Self::Agglomerative => Box::new(Agglomerative::new()),
            Self::Distance => Box::new(Distance),
        }
    }

    /// Returns the implementation for this strategy, seeding any RNG it uses.
    #[must_use]
    pub fn seeded_strategy(self, seed: u64) -> Box<dyn CenterStrategy> {
        match self {
            Self::Random => Box::new(RandomCenters::with_seed(seed)),
            Self::KMeans => Box::new(KMeans::with_seed(seed)),
            other => other.strategy(),
        }
    }

    /// Whether the strategy returns exactly the requested number of centers.
    #[must_use]
    pub fn honors_count(self) -> bool {
        matches!(self, Self::Random | Self::KMeans | Self::Agglomerative)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownStrategy(s.to_owned()))
    }
}

/// Placeholder for distance-based center selection.
///
/// Always fails with `Error::NotImplemented`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Distance;

impl CenterStrategy for Distance {
    fn select(&self, _values: &[f64], _k: usize) -> Result<Vec<f64>> {
        Err(Error::NotImplemented("distance"))
    }
}

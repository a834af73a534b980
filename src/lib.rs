#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Kernel center selection and mixture-density output layers for Kernel
//! Mixture Networks (KMN). A KMN predicts a conditional density as a mixture
//! of Gaussian kernels whose means are fixed values picked from the training
//! targets; a neural network only predicts the mixing weights. This crate
//! picks those centers and evaluates the resulting mixture, leaving the
//! network and its training to whatever framework hosts it.
//!
//! # Getting Started
//!
//! ```
//! use kmn::prelude::*;
//!
//! let targets = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
//! let mut centers = sample_center_points(&targets, Some(&KMeans::with_seed(7)), 2, false).unwrap();
//! centers.sort_by(f64::total_cmp);
//!
//! assert!((centers[0] - 3.0).abs() < 1e-9);
//! assert!((centers[1] - 100.0).abs() < 1e-9);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`CenterStrategy`](center::CenterStrategy) | Reduce scalar targets to `k` kernel centers. |
//! | [`StrategyKind`](center::StrategyKind) | Registry of the built-in strategies. |
//! | [`CenterSampler`](center::CenterSampler) | A strategy plus the edge-preservation policy. |
//! | [`Scales`](scales::Scales) | Kernel bandwidths and their softplus parameterisation. |
//! | [`KernelMixture`](mixture::KernelMixture) | Centers × bandwidths as a Gaussian mixture; density, likelihood, sampling. |
//! | [`KmnConfig`](config::KmnConfig) | Output-layer hyperparameters; builds a mixture from targets. |
//!
//! # Strategy Guide
//!
//! | Strategy | Algorithm | Exactly `k` centers |
//! |----------|-----------|---------------------|
//! | [`Identity`](center::Identity) | every target | no |
//! | [`RandomCenters`](center::RandomCenters) | uniform, without replacement | yes |
//! | [`KMeans`](center::KMeans) | Lloyd's algorithm, k-means++ seeding | yes |
//! | [`Agglomerative`](center::Agglomerative) | complete-linkage cluster means | yes |
//! | [`Distance`](center::Distance) | reserved | — |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`StrategyKind`](center::StrategyKind), [`Scales`](scales::Scales), [`KernelMixture`](mixture::KernelMixture), [`KmnConfig`](config::KmnConfig) | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing), including deprecation warnings | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::warn!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}

pub mod center;
pub mod config;
mod error;
pub mod mixture;
mod rng_util;
pub mod scales;
pub mod targets;

pub use center::{CenterStrategy, StrategyKind, sample_center_points};
pub use config::{KmnConfig, KmnConfigBuilder};
pub use error::{Error, Result};
pub use mixture::KernelMixture;
pub use scales::Scales;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use kmn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::center::{
        Agglomerative, CenterSampler, CenterStrategy, Distance, Identity, KMeans, KMeansInit,
        RandomCenters, StrategyKind, sample_center_points,
    };
    pub use crate::config::{KmnConfig, KmnConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::mixture::KernelMixture;
    pub use crate::scales::Scales;
}

//! Kernel bandwidths and their softplus parameterisation.
//!
//! A network framework optimizes an unconstrained raw value `r` per kernel
//! scale and uses `softplus(r)` as the actual bandwidth, which keeps the
//! bandwidth positive. [`Scales::raw`] produces the raw values that reproduce
//! a set of initial bandwidths exactly.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Returns `ln(1 + e^x)` without overflowing for large `x`.
#[must_use]
pub fn softplus(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}

/// Returns `ln(e^s - 1)`, the inverse of [`softplus`] for `s > 0`.
#[must_use]
pub fn inverse_softplus(s: f64) -> f64 {
    // ln(e^s - 1) = s + ln(1 - e^-s)
    s + (-(-s).exp_m1()).ln()
}

/// Positive kernel bandwidths.
///
/// # Examples
///
/// ```
/// use kmn::scales::Scales;
///
/// let scales = Scales::new(vec![0.5, 2.0]).unwrap();
/// let restored = Scales::from_raw(&scales.raw()).unwrap();
///
/// for (a, b) in scales.values().iter().zip(restored.values()) {
///     assert!((a - b).abs() < 1e-12);
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Scales {
    values: Vec<f64>,
}

impl Scales {
    /// Creates a scale set.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyScales` for an empty vector and
    /// `Error::InvalidScale` for any value that is not positive and finite.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyScales);
        }
        if let Some(&bad) = values.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
            return Err(Error::InvalidScale(bad));
        }
        Ok(Self { values })
    }

    /// Rebuilds scales from raw (pre-softplus) parameters.
    ///
    /// # Errors
    ///
    /// Same as [`Scales::new`]; very negative raw values underflow to zero.
    pub fn from_raw(raw: &[f64]) -> Result<Self> {
        Self::new(raw.iter().map(|&r| softplus(r)).collect())
    }

    /// The bandwidths.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Raw parameters whose softplus gives back these bandwidths.
    #[must_use]
    pub fn raw(&self) -> Vec<f64> {
        self.values.iter().map(|&s| inverse_softplus(s)).collect()
    }

    /// Number of bandwidths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The widest bandwidth.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl Default for Scales {
    fn default() -> Self {
        Self { values: vec![1.0] }
    }
}

impl TryFrom<Vec<f64>> for Scales {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<Scales> for Vec<f64> {
    fn from(scales: Scales) -> Self {
        scales.values
    }
}

use super::CenterStrategy;
use crate::error::Result;

/// Uses every observation as a center, ignoring the requested count.
///
/// This is the strategy applied when none is given.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl CenterStrategy for Identity {
    fn select(&self, values: &[f64], _k: usize) -> Result<Vec<f64>> {
        Ok(values.to_vec())
    }
}

//! Validation and reshaping of training targets.
//!
//! Center selection works on a flat vector of scalar observations. Callers
//! holding column vectors or other rectangular 2-D data flatten it here
//! first; ragged input is rejected rather than silently concatenated.

use crate::error::{Error, Result};

/// Flattens rectangular 2-D input into a single row-major vector.
///
/// # Errors
///
/// Returns `Error::Shape` if any row has a different length than the first.
///
/// # Examples
///
/// ```
/// use kmn::targets::flatten_rows;
///
/// let column = vec![vec![1.0], vec![2.0], vec![3.0]];
/// assert_eq!(flatten_rows(&column).unwrap(), vec![1.0, 2.0, 3.0]);
///
/// let ragged = vec![vec![1.0, 2.0], vec![3.0]];
/// assert!(flatten_rows(&ragged).is_err());
/// ```
pub fn flatten_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<f64>> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let expected = first.as_ref().len();
    let mut flat = Vec::with_capacity(expected * rows.len());
    for (row, values) in rows.iter().enumerate() {
        let values = values.as_ref();
        if values.len() != expected {
            return Err(Error::Shape {
                row,
                expected,
                got: values.len(),
            });
        }
        flat.extend_from_slice(values);
    }
    Ok(flat)
}

/// Checks that `values` is non-empty and contains only finite numbers.
///
/// # Errors
///
/// Returns `Error::EmptyTargets` for an empty slice and
/// `Error::NonFiniteTarget` for the first NaN or infinite value.
pub fn validate(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::EmptyTargets);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFiniteTarget { index, value });
    }
    Ok(())
}

/// Returns the `(min, max)` of the targets.
///
/// # Errors
///
/// Same as [`validate`].
pub fn min_max(values: &[f64]) -> Result<(f64, f64)> {
    validate(values)?;
    Ok(values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        }))
}

/// Returns an ascending copy of `values`.
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

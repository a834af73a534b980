/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// Select `k` distinct indices from `0..n` using a partial Fisher-Yates shuffle.
pub(crate) fn partial_shuffle(n: usize, k: usize, rng: &mut fastrand::Rng) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    let k = k.min(n);
    for i in 0..k {
        let j = rng.usize(i..n);
        indices.swap(i, j);
    }
    indices.truncate(k);
    indices
}

/// Draw a standard normal variate with the Box-Muller transform.
pub(crate) fn standard_normal(rng: &mut fastrand::Rng) -> f64 {
    // 1 - u keeps the argument of ln in (0, 1]
    let u1 = 1.0 - rng.f64();
    let u2 = rng.f64();
    (-2.0 * u1.ln()).sqrt() * (2.0 * core::f64::consts::PI * u2).cos()
}

/// Pick an index with probability proportional to `weights`.
///
/// Falls back to a uniform pick when every weight is zero. Returns `None`
/// for an empty slice.
pub(crate) fn weighted_index(weights: &[f64], rng: &mut fastrand::Rng) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Some(rng.usize(0..weights.len()));
    }
    let mut threshold = f64_range(rng, 0.0, total);
    for (i, &w) in weights.iter().enumerate() {
        if threshold < w {
            return Some(i);
        }
        threshold -= w;
    }
    // Rounding can leave a sliver past the last bucket
    Some(weights.iter().rposition(|&w| w > 0.0).unwrap_or(0))
}

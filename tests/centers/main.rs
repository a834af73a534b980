#![allow(
    clippy::float_cmp,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

mod agglomerative;
mod deprecated;
mod edges;
mod kmeans;
mod random;
mod shape;

/// Sorted copy of `values`.
fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

/// Deterministic, mildly clustered targets.
fn clustered_targets(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..n)
        .map(|i| {
            let base = [0.0, 10.0, 25.0][i % 3];
            base + rng.f64() * 2.0
        })
        .collect()
}

use kmn::center::{Agglomerative, CenterStrategy, sample_center_points};

use crate::clustered_targets;

#[test]
fn test_agglomerative_cluster_means() {
    let targets = [1.0, 1.2, 0.8, 5.0, 5.5, 20.0];
    let centers = sample_center_points(&targets, Some(&Agglomerative::new()), 3, false).unwrap();

    assert_eq!(centers.len(), 3);
    assert!((centers[0] - 1.0).abs() < 1e-12);
    assert!((centers[1] - 5.25).abs() < 1e-12);
    assert!((centers[2] - 20.0).abs() < 1e-12);
}

#[test]
fn test_agglomerative_exact_count_for_many_k() {
    let targets = clustered_targets(150, 4);
    for k in 1..=30 {
        let centers = Agglomerative::new().select(&targets, k).unwrap();
        assert_eq!(centers.len(), k);
    }
}

#[test]
fn test_agglomerative_centers_within_range() {
    let targets = clustered_targets(99, 8);
    let (low, high) = kmn::targets::min_max(&targets).unwrap();
    let centers = Agglomerative::new().select(&targets, 10).unwrap();
    assert!(centers.iter().all(|c| (low..=high).contains(c)));
    assert!(centers.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_agglomerative_three_groups() {
    let targets = clustered_targets(60, 21);
    let centers = Agglomerative::new().select(&targets, 3).unwrap();
    for (center, expected) in centers.iter().zip([1.0, 11.0, 26.0]) {
        assert!((center - expected).abs() < 1.0, "{center} vs {expected}");
    }
}

#[test]
fn test_agglomerative_input_not_mutated() {
    let targets = vec![9.0, 1.0, 5.0, 3.0];
    let copy = targets.clone();
    let _ = Agglomerative::new().select(&targets, 2).unwrap();
    assert_eq!(targets, copy);
}

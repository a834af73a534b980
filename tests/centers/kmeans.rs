use kmn::center::{CenterStrategy, KMeans, KMeansInit, sample_center_points};

use crate::{clustered_targets, sorted};

#[test]
fn test_kmeans_low_cluster_and_outlier() {
    let targets = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
    let centers = sample_center_points(&targets, Some(&KMeans::with_seed(0)), 2, false).unwrap();
    let centers = sorted(&centers);

    assert_eq!(centers.len(), 2);
    assert!(
        (centers[0] - 3.0).abs() < 1e-9,
        "low centroid {}",
        centers[0]
    );
    assert!(
        (centers[1] - 100.0).abs() < 1e-9,
        "outlier centroid {}",
        centers[1]
    );
}

#[test]
fn test_kmeans_recovers_three_clusters() {
    let targets = clustered_targets(300, 5);
    let centers = sorted(&KMeans::with_seed(5).select(&targets, 3).unwrap());

    for (center, expected) in centers.iter().zip([1.0, 11.0, 26.0]) {
        assert!(
            (center - expected).abs() < 0.3,
            "centroid {center} should be close to {expected}"
        );
    }
}

#[test]
fn test_kmeans_exact_count_for_many_k() {
    let targets = clustered_targets(120, 2);
    let strategy = KMeans::with_seed(2).n_init(2);
    for k in 1..=20 {
        let centers = sample_center_points(&targets, Some(&strategy), k, false).unwrap();
        assert_eq!(centers.len(), k);
    }
}

#[test]
fn test_kmeans_degenerate_distinct_count() {
    let targets = [2.0, 2.0, 7.0, 7.0, 7.0, -1.0, 12.0, 12.0];
    let centers = KMeans::with_seed(1).select(&targets, 4).unwrap();
    assert_eq!(sorted(&centers), vec![-1.0, 2.0, 7.0, 12.0]);
}

#[test]
fn test_kmeans_random_init_still_converges() {
    let targets = clustered_targets(90, 13);
    let centers = KMeans::with_seed(13)
        .init(KMeansInit::Random)
        .max_iter(500)
        .tol(0.0)
        .select(&targets, 3)
        .unwrap();
    let centers = sorted(&centers);
    assert!(centers[0] < 3.0 && centers[1] > 9.0 && centers[1] < 13.0 && centers[2] > 24.0);
}

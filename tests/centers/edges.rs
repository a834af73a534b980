use kmn::Error;
use kmn::center::{
    Agglomerative, CenterSampler, CenterStrategy, Identity, KMeans, RandomCenters, StrategyKind,
    sample_center_points,
};

use crate::clustered_targets;

fn counted_strategies() -> Vec<(&'static str, Box<dyn CenterStrategy>)> {
    vec![
        ("random", Box::new(RandomCenters::with_seed(3))),
        ("k_means", Box::new(KMeans::with_seed(3))),
        ("agglomerative", Box::new(Agglomerative::new())),
    ]
}

#[test]
fn test_edges_example_from_five_values() {
    let targets = [10.0, 20.0, 30.0, 40.0, 50.0];
    for (name, strategy) in counted_strategies() {
        let centers = sample_center_points(&targets, Some(strategy.as_ref()), 4, true).unwrap();
        assert_eq!(centers.len(), 4, "{name}");
        assert!(centers.contains(&10.0), "{name}: {centers:?}");
        assert!(centers.contains(&50.0), "{name}: {centers:?}");
        for c in &centers[2..] {
            assert!((20.0..=40.0).contains(c), "{name}: {c} outside interior");
        }
    }
}

#[test]
fn test_edges_always_present() {
    for seed in 0..10 {
        let mut targets = clustered_targets(80, seed);
        targets.push(-50.0);
        targets.insert(17, 75.0);
        for (name, strategy) in counted_strategies() {
            let centers =
                sample_center_points(&targets, Some(strategy.as_ref()), 6, true).unwrap();
            assert_eq!(centers.len(), 6, "{name}");
            assert_eq!(centers[0], -50.0, "{name}");
            assert_eq!(centers[1], 75.0, "{name}");
        }
    }
}

#[test]
fn test_edges_with_identity_returns_all() {
    let targets = [4.0, 9.0, 1.0, 6.0];
    let centers = sample_center_points(&targets, Some(&Identity), 3, true).unwrap();
    // Edges first, then the sorted interior
    assert_eq!(centers, vec![1.0, 9.0, 4.0, 6.0]);
}

#[test]
fn test_edges_without_interior() {
    let centers = sample_center_points(&[8.0, 2.0], Some(&KMeans::with_seed(0)), 2, true).unwrap();
    assert_eq!(centers, vec![2.0, 8.0]);
}

#[test]
fn test_edges_budget_too_small() {
    let err = sample_center_points(&[1.0, 2.0, 3.0], Some(&Agglomerative::new()), 1, true)
        .unwrap_err();
    assert!(matches!(err, Error::EdgeBudget { k: 1 }));
    assert!(err.to_string().contains("keep_edges"));
}

#[test]
fn test_edges_need_two_targets() {
    // A lone target cannot supply distinct minimum and maximum edges
    for k in [2, 3] {
        let err = sample_center_points(&[7.0], Some(&Identity), k, true).unwrap_err();
        assert!(matches!(
            err,
            Error::NotEnoughValues {
                requested: 2,
                available: 1
            }
        ));
    }
    let err = sample_center_points(&[7.0], None, 2, true).unwrap_err();
    assert!(matches!(err, Error::NotEnoughValues { .. }));

    // Without edges the lone target is still a valid center
    let centers = sample_center_points(&[7.0], None, 2, false).unwrap();
    assert_eq!(centers, vec![7.0]);
}

#[test]
fn test_edges_interior_too_small_for_strategy() {
    // Four targets leave two interior values for a budget of three
    let err = sample_center_points(&[1.0, 2.0, 3.0, 4.0], Some(&KMeans::with_seed(0)), 5, true)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::NotEnoughValues {
            requested: 3,
            available: 2
        }
    ));
}

#[test]
fn test_center_sampler_keep_edges_for_every_counted_kind() {
    let targets = clustered_targets(45, 77);
    for kind in StrategyKind::ALL.into_iter().filter(|k| k.honors_count()) {
        let centers = CenterSampler::from_kind(kind, Some(77))
            .keep_edges(true)
            .sample(&targets, 7)
            .unwrap();
        assert_eq!(centers.len(), 7, "{kind}");
    }
}

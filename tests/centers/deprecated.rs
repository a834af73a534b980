#![allow(deprecated)]

use kmn::Error;
use kmn::center::{
    Agglomerative, DEFAULT_N_CENTERS, Identity, sample_center_points, sample_center_points_by_name,
};

#[test]
fn test_unknown_name_is_reported() {
    let err = sample_center_points_by_name(&[1.0, 2.0], Some("bogus"), Some(1), false).unwrap_err();
    assert!(matches!(err, Error::UnknownStrategy(ref name) if name == "bogus"));
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn test_distance_is_not_implemented() {
    for keep_edges in [false, true] {
        let err = sample_center_points_by_name(
            &[1.0, 2.0, 3.0, 4.0],
            Some("distance"),
            Some(3),
            keep_edges,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotImplemented("distance")));
    }
}

#[test]
fn test_no_name_is_identity() {
    let targets = [3.0, 1.0, 2.0];
    let by_name = sample_center_points_by_name(&targets, None, Some(2), false).unwrap();
    let direct = sample_center_points(&targets, Some(&Identity), 2, false).unwrap();
    assert_eq!(by_name, direct);
    assert_eq!(by_name, targets.to_vec());
}

#[test]
fn test_name_and_direct_agree() {
    let targets: Vec<f64> = (0..30).map(|i| f64::from(i * i % 17)).collect();
    let by_name =
        sample_center_points_by_name(&targets, Some("agglomerative"), Some(5), true).unwrap();
    let direct = sample_center_points(&targets, Some(&Agglomerative::new()), 5, true).unwrap();
    assert_eq!(by_name, direct);
}

#[test]
fn test_default_count_applies() {
    let targets: Vec<f64> = (0..250).map(f64::from).collect();
    let centers = sample_center_points_by_name(&targets, Some("random"), None, false).unwrap();
    assert_eq!(centers.len(), DEFAULT_N_CENTERS);
}

#[test]
fn test_zero_k_is_configuration_error() {
    let err = sample_center_points_by_name(&[1.0], Some("k_means"), Some(0), false).unwrap_err();
    assert!(matches!(err, Error::InvalidCenterCount { k: 0 }));
}

use kmn::Error;
use kmn::center::{RandomCenters, sample_center_points};

#[test]
fn test_random_members_without_replacement() {
    // Unique values make index reuse visible as a duplicate value
    let targets: Vec<f64> = (0..40).map(|i| f64::from(i) * 1.25).collect();
    let strategy = RandomCenters::with_seed(99);

    for _ in 0..25 {
        let centers = sample_center_points(&targets, Some(&strategy), 15, false).unwrap();
        assert_eq!(centers.len(), 15);
        assert!(centers.iter().all(|c| targets.contains(c)));

        let mut unique = crate::sorted(&centers);
        unique.dedup();
        assert_eq!(unique.len(), 15, "duplicate index drawn");
    }
}

#[test]
fn test_random_covers_input_uniformly() {
    let targets: Vec<f64> = (0..10).map(f64::from).collect();
    let strategy = RandomCenters::with_seed(1234);
    let mut counts = [0u32; 10];

    let n_rounds = 3000;
    for _ in 0..n_rounds {
        for c in sample_center_points(&targets, Some(&strategy), 3, false).unwrap() {
            counts[c as usize] += 1;
        }
    }

    let expected = f64::from(n_rounds) * 3.0 / 10.0;
    for (value, &count) in counts.iter().enumerate() {
        let diff = (f64::from(count) - expected).abs() / expected;
        assert!(
            diff < 0.1,
            "value {value} picked {count} times, expected ~{expected}"
        );
    }
}

#[test]
fn test_random_more_than_available() {
    let err = sample_center_points(&[1.0, 2.0, 3.0], Some(&RandomCenters::with_seed(0)), 4, false)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::NotEnoughValues {
            requested: 4,
            available: 3
        }
    ));
    assert!(err.to_string().contains('4'));
}

#[test]
fn test_random_same_seed_same_centers() {
    let targets: Vec<f64> = (0..500).map(|i| f64::from(i).sqrt()).collect();
    let a = sample_center_points(&targets, Some(&RandomCenters::with_seed(7)), 12, true).unwrap();
    let b = sample_center_points(&targets, Some(&RandomCenters::with_seed(7)), 12, true).unwrap();
    assert_eq!(a, b);
}

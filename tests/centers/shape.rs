use kmn::Error;
use kmn::center::{KMeans, sample_center_points};
use kmn::targets::flatten_rows;

#[test]
fn test_column_vector_is_flattened() {
    let column: Vec<[f64; 1]> = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0].map(|v| [v]).to_vec();
    let targets = flatten_rows(&column).unwrap();
    let centers = sample_center_points(&targets, Some(&KMeans::with_seed(4)), 2, false).unwrap();
    assert_eq!(centers.len(), 2);
}

#[test]
fn test_ragged_input_is_shape_error() {
    let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
    assert!(matches!(
        flatten_rows(&rows),
        Err(Error::Shape {
            row: 1,
            expected: 3,
            got: 2
        })
    ));
}

#[test]
fn test_empty_after_flatten_is_rejected() {
    let rows: Vec<Vec<f64>> = vec![vec![], vec![]];
    let targets = flatten_rows(&rows).unwrap();
    assert!(matches!(
        sample_center_points(&targets, None, 1, false),
        Err(Error::EmptyTargets)
    ));
}

#[test]
fn test_nan_target_is_rejected() {
    assert!(matches!(
        sample_center_points(&[1.0, f64::NAN, 3.0], None, 1, false),
        Err(Error::NonFiniteTarget { index: 1, .. })
    ));
}

//! End-to-end properties of distance resolution through the public API

use vrplib_distances::{
    from_eilon, from_lower_row, parse_distances, DistanceMatrix, EdgeWeightFormat, EdgeWeightSpec, EdgeWeightType,
    Error,
};

fn coords() -> Vec<[f64; 2]> {
    vec![[0.0, 0.0], [3.0, 4.0], [-2.5, 7.25], [10.0, -1.0], [0.5, 0.5]]
}

fn assert_symmetric_zero_diagonal(m: &DistanceMatrix) {
    for i in 0..m.size() {
        assert_eq!(m.get(i, i), 0.0, "diagonal at {i}");
        for j in 0..m.size() {
            assert_eq!(m.get(i, j), m.get(j, i), "asymmetry at ({i}, {j})");
        }
    }
}

#[test]
fn test_every_constructed_matrix_is_symmetric() {
    let coords = coords();
    for t in ["EUC_2D", "FLOOR_2D", "EXACT_2D"] {
        let m = parse_distances(&[], t, None, Some(&coords[..]), None).unwrap();
        assert_eq!(m.size(), coords.len());
        assert_symmetric_zero_diagonal(&m);
    }

    let triangular = vec![vec![1.0], vec![2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0, 10.0]];
    let m = parse_distances(&triangular, "EXPLICIT", Some("LOWER_ROW"), None, None).unwrap();
    assert_eq!(m.size(), 5);
    assert_symmetric_zero_diagonal(&m);

    let m = parse_distances(&triangular, "EXPLICIT", Some("LOWER_ROW"), None, Some("Eilon")).unwrap();
    assert_eq!(m.size(), 5);
    assert_symmetric_zero_diagonal(&m);
}

#[test]
fn test_euclidean_distance() {
    let coords = [[0.0, 0.0], [3.0, 4.0]];
    let m = parse_distances(&[], "EUC_2D", None, Some(&coords[..]), None).unwrap();
    assert_eq!(m.get(0, 1), 5.0);
    assert_eq!(m.get(1, 0), 5.0);
}

#[test]
fn test_floor_distance() {
    let coords = [[0.0, 0.0], [5.7, 0.0]];
    let m = parse_distances(&[], "FLOOR_2D", None, Some(&coords[..]), None).unwrap();
    assert_eq!(m.get(0, 1), 5.0);
}

#[test]
fn test_exact_distance() {
    let coords = [[0.0, 0.0], [5.0001, 0.0]];
    let m = parse_distances(&[], "EXACT_2D", None, Some(&coords[..]), None).unwrap();
    assert_eq!(m.get(0, 1), 5000.0);
}

#[test]
fn test_full_matrix_passthrough() {
    let data = vec![vec![0.0, 2.0, 3.0], vec![2.0, 0.0, 4.0], vec![3.0, 4.0, 0.0]];
    let m = parse_distances(&data, "EXPLICIT", Some("FULL_MATRIX"), None, None).unwrap();
    assert_eq!(m.into_rows(), data);
}

#[test]
fn test_full_matrix_must_be_square() {
    let data = vec![vec![0.0, 2.0, 3.0], vec![2.0, 0.0, 4.0]];
    let err = parse_distances(&data, "EXPLICIT", Some("FULL_MATRIX"), None, None).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
}

#[test]
fn test_lower_row_expansion() {
    let m = parse_distances(&[vec![1.0], vec![2.0, 3.0]], "EXPLICIT", Some("LOWER_ROW"), None, None).unwrap();
    assert_eq!(m.get(1, 0), 1.0);
    assert_eq!(m.get(2, 0), 2.0);
    assert_eq!(m.get(2, 1), 3.0);
    assert_eq!(m.get(0, 1), 1.0);
    assert_eq!(m.get(0, 2), 2.0);
    assert_eq!(m.get(1, 2), 3.0);
}

#[test]
fn test_eilon_ordering_diverges_from_row_major() {
    let raw = vec![vec![1.0], vec![2.0, 3.0], vec![4.0, 5.0, 6.0]];

    let row_major = parse_distances(&raw, "EXPLICIT", Some("LOWER_ROW"), None, None).unwrap();
    let eilon = parse_distances(&raw, "EXPLICIT", Some("LOWER_ROW"), None, Some("(Eilon et al.)")).unwrap();

    assert_eq!(row_major, from_lower_row(&raw).unwrap());
    assert_eq!(eilon, from_eilon(&raw).unwrap());
    assert_ne!(row_major, eilon);

    // Value 4 is the fourth pair: (3, 0) row-major, (1, 2) lexicographically
    assert_eq!(row_major.get(3, 0), 4.0);
    assert_eq!(eilon.get(1, 2), 4.0);
}

#[test]
fn test_eilon_and_row_major_agree_for_three_nodes() {
    let raw = vec![vec![1.0], vec![2.0, 3.0]];
    assert_eq!(from_lower_row(&raw).unwrap(), from_eilon(&raw).unwrap());
}

#[test]
fn test_rejections() {
    let err = parse_distances(&[], "BOGUS", None, None, None).unwrap_err();
    assert!(matches!(err, Error::UnsupportedSpec { .. }));

    let err = parse_distances(&[], "EUC_2D", None, None, None).unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));

    let err = parse_distances(&[vec![1.0, 2.0, 3.0, 4.0]], "EXPLICIT", Some("LOWER_ROW"), None, Some("Eilon")).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));

    let err = parse_distances(&[vec![1.0]], "EXPLICIT", Some("UPPER_ROW"), None, None).unwrap_err();
    assert!(matches!(err, Error::UnsupportedSpec { field: "EDGE_WEIGHT_FORMAT", .. }));
}

#[test]
fn test_type_is_checked_before_coordinates() {
    // An unknown type wins over the missing coordinates
    let err = parse_distances(&[], "GEO", None, None, None).unwrap_err();
    assert!(matches!(err, Error::UnsupportedSpec { field: "EDGE_WEIGHT_TYPE", .. }));
}

#[test]
fn test_idempotent() {
    let coords = coords();
    let spec = EdgeWeightSpec::new(EdgeWeightType::Euc2d);
    let first = vrplib_distances::resolve(&[], &spec, Some(&coords[..])).unwrap();
    let second = vrplib_distances::resolve(&[], &spec, Some(&coords[..])).unwrap();
    for (a, b) in first.rows().flatten().zip(second.rows().flatten()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }

    let spec = EdgeWeightSpec::new(EdgeWeightType::Explicit)
        .with_format(EdgeWeightFormat::LowerRow)
        .with_comment("Eilon");
    let raw = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    assert_eq!(
        vrplib_distances::resolve(&raw, &spec, None).unwrap(),
        vrplib_distances::resolve(&raw, &spec, None).unwrap()
    );
}

#[test]
fn test_concurrent_calls() {
    let coords = coords();
    let coords = coords.as_slice();
    let expected = parse_distances(&[], "EXACT_2D", None, Some(coords), None).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || parse_distances(&[], "EXACT_2D", None, Some(coords), None).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

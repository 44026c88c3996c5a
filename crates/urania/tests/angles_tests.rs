use urania::angles::{clockwise_distance, normalize, shortest_distance, sign_degree};

#[test]
fn test_normalize_handles_negative_and_large_angles() {
    assert_eq!(normalize(0.0), 0.0);
    assert_eq!(normalize(360.0), 0.0);
    assert!((normalize(-10.0) - 350.0).abs() < 1e-9);
    assert!((normalize(725.0) - 5.0).abs() < 1e-9);
    assert!((normalize(-370.0) - 350.0).abs() < 1e-9);
}

#[test]
fn test_clockwise_distance_is_directional() {
    assert!((clockwise_distance(358.0, 2.0) - 4.0).abs() < 1e-9);
    assert!((clockwise_distance(2.0, 358.0) - 356.0).abs() < 1e-9);
    assert_eq!(clockwise_distance(42.0, 42.0), 0.0);
}

#[test]
fn test_shortest_distance_wraps_around_zero() {
    assert!((shortest_distance(358.0, 2.0) - 4.0).abs() < 1e-9);
    assert!((shortest_distance(2.0, 358.0) - 4.0).abs() < 1e-9);
    assert!((shortest_distance(0.0, 180.0) - 180.0).abs() < 1e-9);
    assert!((shortest_distance(10.0, 250.0) - 120.0).abs() < 1e-9);
}

#[test]
fn test_nan_propagates() {
    assert!(normalize(f64::NAN).is_nan());
    assert!(clockwise_distance(f64::NAN, 10.0).is_nan());
}

#[test]
fn test_sign_degree() {
    assert!((sign_degree(45.5) - 15.5).abs() < 1e-9);
    assert!((sign_degree(359.0) - 29.0).abs() < 1e-9);
}

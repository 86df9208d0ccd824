//! # Spatial Key Tests

use super::*;

#[test]
fn test_grid_key_rounds_to_nearest_cell() {
    assert_eq!(GridKey::from_point(DVec2::new(1.2344, -0.0004)), GridKey::new(1234, 0));
    assert_eq!(GridKey::from_point(DVec2::new(-2.0006, 3.0)), GridKey::new(-2001, 3000));
}

/// Points closer than the rounding threshold inside one cell share a key.
#[test]
fn test_near_points_share_key() {
    let base = DVec2::new(10.0, 10.0);
    for offset in [
        DVec2::new(0.0001, 0.0),
        DVec2::new(-0.0002, 0.0003),
        DVec2::new(0.0004, -0.0004),
    ] {
        assert_eq!(to_grid_key(base), to_grid_key(base + offset));
    }
    assert_ne!(to_grid_key(base), to_grid_key(base + DVec2::new(0.002, 0.0)));
}

#[test]
fn test_grid_key_scaled() {
    let key = GridKey::from_point_scaled(DVec2::new(1.26, 0.74), 10.0);
    assert_eq!(key, GridKey::new(13, 7));
}

#[test]
fn test_grid_key_to_point_is_cell_centre() {
    let key = GridKey::new(2500, -1000);
    assert_eq!(key.to_point(), DVec2::new(2.5, -1.0));
    assert_eq!(GridKey::from_point(key.to_point()), key);
}

#[test]
fn test_grid_key_order_is_x_then_y() {
    assert!(GridKey::new(0, 9) < GridKey::new(1, 0));
    assert!(GridKey::new(1, 0) < GridKey::new(1, 1));
}

#[test]
fn test_line_key_ignores_direction() {
    let a = DVec2::new(3.0, 4.0);
    let b = DVec2::new(3.0, -1.0);
    assert_eq!(LineKey::from_points(a, b), LineKey::from_points(b, a));
    let (first, second) = LineKey::from_points(a, b).endpoints();
    assert!(first <= second);
    assert_eq!(first, GridKey::new(3000, -1000));
}

#[test]
fn test_line_key_degenerate() {
    let key = LineKey::from_points(DVec2::new(1.0, 1.0), DVec2::new(1.0001, 1.0));
    assert!(key.is_degenerate());
    assert!(!LineKey::from_points(DVec2::ZERO, DVec2::X).is_degenerate());
}

#[test]
fn test_grid_key_serializes() {
    let json = serde_json::to_string(&GridKey::new(1, -2)).unwrap();
    assert_eq!(json, r#"{"x":1,"y":-2}"#);
}

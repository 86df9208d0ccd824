//! # Segment Tests
//!
//! Tests for the wall box builder and in-place segment edits.

use super::*;
use approx::assert_abs_diff_eq;

fn straight_segment() -> WallSegment {
    SegmentBuilder::new(3.0)
        .build_between(DVec2::ZERO, DVec2::new(10.0, 0.0), 1.0)
        .unwrap()
}

/// A wall box has 8 layout vertices and 12 triangles.
#[test]
fn test_segment_has_box_topology() {
    let segment = straight_segment();
    assert_eq!(segment.mesh().vertex_count(), 8);
    assert_eq!(segment.mesh().triangle_count(), 12);
    assert!(segment.mesh().validate());
    assert!(segment.is_visible());
    assert_eq!(segment.revision(), 0);
}

/// Floor corners follow the inner/outer, start/end layout.
#[test]
fn test_segment_layout_matches_contract() {
    let segment = straight_segment();
    // Travelling +X, the right-hand perpendicular is -Y, so outer is y = -1.
    assert_eq!(segment.corner(INNER_START_FLOOR), DVec2::new(0.0, 1.0));
    assert_eq!(segment.corner(OUTER_START_FLOOR), DVec2::new(0.0, -1.0));
    assert_eq!(segment.corner(OUTER_END_FLOOR), DVec2::new(10.0, -1.0));
    assert_eq!(segment.corner(INNER_END_FLOOR), DVec2::new(10.0, 1.0));

    for floor in 0..CEILING_OFFSET {
        let below = segment.vertex(floor);
        let above = segment.vertex(floor + CEILING_OFFSET);
        assert_eq!(below.z, 0.0);
        assert_abs_diff_eq!(above.z, 3.0);
        assert_eq!(below.truncate(), above.truncate());
    }
}

/// Every triangle faces away from the box centre.
#[test]
fn test_segment_winding_is_outward() {
    let segment = SegmentBuilder::new(2.5)
        .build_between(DVec2::new(1.0, 2.0), DVec2::new(-3.0, 7.0), 0.4)
        .unwrap();
    let vertices = segment.vertices();
    let centre = vertices.iter().copied().sum::<DVec3>() / 8.0;

    for [a, b, c] in WALL_TRIANGLES {
        let (v0, v1, v2) = (vertices[a as usize], vertices[b as usize], vertices[c as usize]);
        let normal = (v1 - v0).cross(v2 - v0);
        let face_centre = (v0 + v1 + v2) / 3.0;
        assert!(
            normal.dot(face_centre - centre) > 0.0,
            "triangle {:?} faces inward",
            [a, b, c]
        );
    }
}

#[test]
fn test_segment_rejects_zero_length() {
    let result = SegmentBuilder::new(3.0).build_between(DVec2::ONE, DVec2::ONE, 1.0);
    assert!(matches!(result, Err(MeshError::DegenerateGeometry { .. })));
}

#[test]
fn test_segment_rejects_bad_extent() {
    let builder = SegmentBuilder::new(3.0);
    let end = DVec2::new(1.0, 0.0);
    assert!(builder.build(DVec2::ZERO, end, DVec2::ZERO, 1.0).is_err());
    assert!(builder.build_between(DVec2::ZERO, end, 0.0).is_err());
    assert!(SegmentBuilder::new(-1.0).build_between(DVec2::ZERO, end, 1.0).is_err());
}

#[test]
fn test_segment_rejects_non_finite_box() {
    let builder = SegmentBuilder::new(3.0);
    let perpendicular = DVec2::new(0.0, -1.0);
    let result = builder.build(DVec2::new(f64::NAN, 0.0), DVec2::new(1.0, 0.0), perpendicular, 1.0);
    assert!(matches!(result, Err(MeshError::ValidationFailed { .. })));
    let result = builder.build(DVec2::ZERO, DVec2::new(1.0, 0.0), perpendicular, f64::INFINITY);
    assert!(matches!(result, Err(MeshError::ValidationFailed { .. })));
}

/// Setting a corner moves the floor vertex and mirrors it at the ceiling.
#[test]
fn test_set_corner_mirrors_ceiling() {
    let mut segment = straight_segment();
    segment.set_corner(INNER_END_FLOOR, DVec2::new(9.0, 1.0));
    assert!(segment.is_dirty());
    assert_eq!(segment.vertex(3), DVec3::new(9.0, 1.0, 0.0));
    assert_eq!(segment.vertex(7), DVec3::new(9.0, 1.0, 3.0));
    // The mesh only changes once synced.
    assert_eq!(segment.mesh().vertex(3), DVec3::new(10.0, 1.0, 0.0));
    assert!(segment.sync_mesh());
    assert_eq!(segment.mesh().vertex(3), DVec3::new(9.0, 1.0, 0.0));
    assert_eq!(segment.revision(), 1);
    assert!(!segment.sync_mesh());
}

#[test]
fn test_unchanged_corner_is_not_a_rewrite() {
    let mut segment = straight_segment();
    let corner = segment.corner(INNER_END_FLOOR);
    segment.set_corner(INNER_END_FLOOR, corner);
    assert!(!segment.is_dirty());

    // Moved away and back before syncing: nothing to upload.
    segment.set_corner(INNER_END_FLOOR, DVec2::new(9.0, 1.0));
    segment.set_corner(INNER_END_FLOOR, corner);
    assert!(segment.is_dirty());
    assert!(!segment.sync_mesh());
    assert!(!segment.is_dirty());
    assert_eq!(segment.revision(), 0);
}

#[test]
fn test_translate_moves_only_one_side() {
    let mut segment = straight_segment();
    let offset = DVec3::new(0.0, 2.0, 0.0);
    segment.translate_start(offset);
    assert_eq!(segment.corner(INNER_START_FLOOR), DVec2::new(0.0, 3.0));
    assert_eq!(segment.corner(OUTER_START_FLOOR), DVec2::new(0.0, 1.0));
    assert_eq!(segment.vertex(5), DVec3::new(0.0, 1.0, 3.0));
    assert_eq!(segment.corner(INNER_END_FLOOR), DVec2::new(10.0, 1.0));

    segment.translate_end(-offset);
    assert_eq!(segment.corner(OUTER_END_FLOOR), DVec2::new(10.0, -3.0));
}

#[test]
fn test_square_end_restores_box_corners() {
    let mut segment = straight_segment();
    segment.set_corner(INNER_START_FLOOR, DVec2::new(1.0, 1.0));
    segment.square_end(SegmentEnd::Start, DVec2::ZERO, DVec2::new(0.0, -1.0), 1.0);
    assert_eq!(segment.corner(INNER_START_FLOOR), DVec2::new(0.0, 1.0));
    assert_eq!(segment.corner(OUTER_START_FLOOR), DVec2::new(0.0, -1.0));
}

/// Hiding keeps the same mesh and does not count as a rewrite.
#[test]
fn test_visibility_does_not_touch_geometry() {
    let mut segment = straight_segment();
    let before: Vec<DVec3> = segment.mesh().vertices().to_vec();
    segment.set_visible(false);
    assert!(!segment.is_visible());
    segment.set_visible(true);
    assert!(!segment.is_dirty());
    assert_eq!(segment.revision(), 0);
    assert_eq!(segment.mesh().vertices(), before.as_slice());
}

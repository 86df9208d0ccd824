use approx::assert_abs_diff_eq;
use config::constants::WallConfig;
use glam::{DVec2, DVec3};
use wall_mesh::segment::{CEILING_OFFSET, INNER_END_FLOOR, INNER_START_FLOOR, OUTER_END_FLOOR, OUTER_START_FLOOR};
use wall_network::{
    prepare_import, to_grid_key, DrawingUnits, GridKey, PathEvent, PathMerger, RawImport, WallPathManager,
};

fn pts(coords: &[(f64, f64)]) -> Vec<DVec2> {
    coords.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
}

fn manager(thickness: f64) -> WallPathManager {
    WallPathManager::new(WallConfig::new(thickness, 3.0, 1.0).unwrap())
}

fn snapshot(manager: &WallPathManager) -> Vec<[DVec3; 8]> {
    manager
        .path_ids()
        .into_iter()
        .flat_map(|id| manager.segments_for_path(id))
        .map(|(_, segment)| *segment.vertices())
        .collect()
}

#[test]
fn l_corner_meets_in_one_mitre_per_side() {
    let mut m = manager(2.0);
    let id = m.create_path(&pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])).unwrap();
    let segments = m.segments_for_path(id);
    assert_eq!(segments.len(), 2);

    let (a, b) = (segments[0].1, segments[1].1);
    for (end_corner, start_corner) in [(INNER_END_FLOOR, INNER_START_FLOOR), (OUTER_END_FLOOR, OUTER_START_FLOOR)] {
        assert_eq!(a.vertex(end_corner), b.vertex(start_corner));
        assert_eq!(a.vertex(end_corner + CEILING_OFFSET), b.vertex(start_corner + CEILING_OFFSET));
    }
    assert_eq!(a.corner(INNER_END_FLOOR), DVec2::new(9.0, 1.0));
    assert_eq!(a.corner(OUTER_END_FLOOR), DVec2::new(11.0, -1.0));
    assert!(a.mesh().validate() && b.mesh().validate());
}

#[test]
fn closed_rectangle_has_four_mitred_corners() {
    let mut m = manager(0.4);
    let id = m
        .create_path(&pts(&[(0.0, 0.0), (6.0, 0.0), (6.0, 4.0), (0.0, 4.0), (0.0, 0.0)]))
        .unwrap();
    assert_eq!(m.segments_for_path(id).len(), 4);

    for corner in [(0.0, 0.0), (6.0, 0.0), (6.0, 4.0), (0.0, 4.0)] {
        let key = to_grid_key(DVec2::new(corner.0, corner.1));
        assert_eq!(m.intersections_at_point(key).len(), 2, "corner {corner:?}");
        assert!(m.is_point_corrected(key));
    }

    // The closing corner is mitred like the others.
    let segments = m.segments_for_path(id);
    let first = segments[0].1;
    let last = segments[3].1;
    assert_abs_diff_eq!(first.corner(INNER_START_FLOOR).x, last.corner(INNER_END_FLOOR).x, epsilon = 1e-12);
    assert_abs_diff_eq!(first.corner(INNER_START_FLOOR).y, 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(first.corner(OUTER_START_FLOOR).y, -0.2, epsilon = 1e-12);
}

#[test]
fn resolve_is_idempotent_after_edits() {
    let mut m = manager(1.0);
    let id = m
        .create_path(&pts(&[(0.0, 0.0), (5.0, 0.0), (8.0, 3.0), (8.0, 9.0)]))
        .unwrap();
    m.update_path(&pts(&[(0.0, 0.0), (5.0, 1.0), (8.0, 3.0), (7.0, 9.0)]), id);

    let before = snapshot(&m);
    let report = m.fix_all_intersections();
    assert_eq!(report.corners_written, 0);
    assert_eq!(before, snapshot(&m));
}

#[test]
fn segment_count_counts_only_new_lines() {
    let mut m = manager(0.2);
    let paths = [
        pts(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0)]),
        pts(&[(3.0, 3.0), (3.0, 0.0), (6.0, 0.0)]),
        pts(&[(6.0, 0.0), (3.0, 0.0), (0.0, 0.0)]),
    ];
    let expected_new = [2, 1, 0];
    for (points, expected) in paths.iter().zip(expected_new) {
        let before = m.segment_count();
        m.create_path(points).unwrap();
        assert_eq!(m.segment_count() - before, expected);
    }
}

#[test]
fn grid_keys_absorb_float_noise() {
    let a = DVec2::new(12.345_6, -7.000_1);
    let b = a + DVec2::new(1e-7, -1e-7);
    assert_eq!(to_grid_key(a), to_grid_key(b));
    assert_eq!(GridKey::from_point(a), GridKey::new(12346, -7000));
}

#[test]
fn merge_reassembles_split_drawing() {
    let merged = PathMerger::new().merge(vec![
        pts(&[(0.0, 0.0), (5.0, 0.0)]),
        pts(&[(5.0, 0.0), (5.0, 5.0)]),
    ]);
    assert_eq!(merged, vec![pts(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)])]);
}

#[test]
fn disable_then_enable_reuses_geometry() {
    let mut m = manager(2.0);
    let id = m.create_path(&pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])).unwrap();
    let before = snapshot(&m);

    m.disable_path(id);
    assert!(m.segments_for_path(id).iter().all(|(_, s)| !s.is_visible()));
    m.enable_path(id);
    assert!(m.segments_for_path(id).iter().all(|(_, s)| s.is_visible() && s.revision() == 1));
    assert_eq!(before, snapshot(&m));
}

#[test]
fn import_then_edit_round_trip() {
    let raw = RawImport {
        fragments: vec![
            pts(&[(0.0, 0.0), (4000.0, 0.0)]),
            pts(&[(4000.0, 3000.0), (4000.0, 0.0)]),
            pts(&[(0.0, 0.0), (4000.0, 0.0)]),
        ],
        units: DrawingUnits::Millimeters,
    };
    let prepared = prepare_import(raw, 1.0).unwrap();
    assert_eq!(prepared.paths.len(), 1);

    let mut m = manager(0.2);
    let created = m.create_paths(&prepared.paths);
    assert_eq!(created.len(), 1);
    assert_eq!(m.segment_count(), 2);

    let corner = prepared.paths[0][1];
    let mut moved = prepared.paths[0].clone();
    moved[1] = corner + DVec2::new(1.0, 0.0);
    assert!(m.update_path(&moved, created[0]));
    assert!(m.intersections_at_point(to_grid_key(corner)).is_empty());
    assert_eq!(m.intersections_at_point(to_grid_key(moved[1])).len(), 2);

    let events = m.drain_events();
    assert_eq!(events, vec![PathEvent::Created(created[0]), PathEvent::Updated(created[0])]);
}

#[test]
fn removing_a_wall_frees_the_junction() {
    let mut m = manager(2.0);
    let id = m.create_path(&pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])).unwrap();
    let edges = m.graph().path(id).unwrap().edges.clone();

    assert!(m.remove_edge(edges[0]));
    let (_, remaining) = m.segments_for_path(id)[0];
    assert_eq!(remaining.corner(INNER_START_FLOOR), DVec2::new(9.0, 0.0));
    assert_eq!(remaining.corner(OUTER_START_FLOOR), DVec2::new(11.0, 0.0));
    assert_eq!(m.graph().path(id).unwrap().edges, vec![edges[1]]);
}

//! Tests for the WASM-facing helpers.

use super::*;

fn network() -> WallNetwork {
    WallNetwork::new_internal(2.0, 3.0, 1.0).expect("valid config")
}

const L_SHAPE: [f64; 6] = [0.0, 0.0, 10.0, 0.0, 10.0, 10.0];

#[test]
fn flat_coordinates_become_points() {
    let points = points_from_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(points, vec![DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)]);
    assert!(matches!(
        points_from_flat(&[1.0, 2.0, 3.0]),
        Err(BoundaryError::OddCoordinates(3))
    ));
}

#[test]
fn constructor_rejects_bad_config() {
    let err = WallNetwork::new_internal(0.0, 3.0, 1.0).err().expect("zero thickness");
    assert!(matches!(err, BoundaryError::Config(_)));
}

/// Each segment is a closed box: 8 vertices, 12 triangles.
#[test]
fn path_meshes_export_render_buffers() {
    let mut network = network();
    let id = network.create_path_internal(&L_SHAPE).unwrap();
    let meshes = network.path_meshes_internal(id);
    assert_eq!(meshes.len(), 2);

    for mesh in &meshes {
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.vertex_data().len(), 24);
        assert_eq!(mesh.normal_data().len(), 24);
        assert_eq!(mesh.path(), id.raw());
        assert!(mesh.visible());
        assert!(mesh.vertex_data().iter().all(|v| v.is_finite()));
        assert!(mesh.index_data().iter().all(|&i| i < mesh.vertex_count()));
    }
}

#[test]
fn create_path_rejects_unbuildable_points() {
    let mut network = network();
    for coords in [&[1.0, 1.0][..], &[1.0, 1.0, 1.0, 1.0], &[0.0, 0.0, f64::NAN, 1.0]] {
        assert!(matches!(
            network.create_path_internal(coords),
            Err(BoundaryError::Rejected(_))
        ));
    }
    assert!(network.path_ids().is_empty());
    assert_eq!(network.drain_events_json_internal().unwrap(), "[]");
}

#[test]
fn update_path_moves_the_corner() {
    let mut network = network();
    let id = network.create_path_internal(&L_SHAPE).unwrap();
    let before = network.path_meshes_internal(id)[0].revision();

    assert!(network
        .update_path_internal(id, &[0.0, 0.0, 12.0, 0.0, 10.0, 10.0])
        .unwrap());
    let after = &network.path_meshes_internal(id)[0];
    assert!(after.revision() > before);
    assert!(!network.update_path_internal(id, &[0.0, 0.0, 1.0, 1.0]).unwrap());
}

#[test]
fn point_visibility_uses_model_coordinates() {
    let mut network = WallNetwork::new_internal(0.2, 3.0, 2.0).unwrap();
    let id = network.create_path_internal(&[0.0, 0.0, 5.0, 0.0, 5.0, 5.0]).unwrap();

    assert_eq!(network.disable_point(5.0, 0.0), 2);
    assert!(network.path_meshes_internal(id).iter().all(|m| !m.visible()));
    assert_eq!(network.enable_point(5.0, 0.0), 2);
    assert!(network.path_meshes_internal(id).iter().all(|m| m.visible()));
}

#[test]
fn disable_and_enable_path() {
    let mut network = network();
    let id = network.create_path_internal(&L_SHAPE).unwrap();
    assert!(network.disable_path(id.raw()));
    assert!(network.path_meshes(id.raw()).iter().all(|m| !m.visible()));
    assert!(network.enable_path(id.raw()));
    assert!(!network.enable_path(999));
}

#[test]
fn import_fragments_merges_and_centres() {
    let mut network = network();
    let json = "[[[0, 0], [1000, 0]], [[1000, 0], [1000, 1000]]]";
    let summary = network.import_fragments_internal(json, "m").unwrap();
    assert_eq!(summary.paths.len(), 1);
    assert_eq!(summary.offset, -summary.median);
    assert_eq!(network.path_meshes_internal(summary.paths[0]).len(), 2);

    let encoded = serde_json::to_value(&summary).unwrap();
    assert_eq!(encoded["paths"], serde_json::json!([summary.paths[0].raw()]));
}

#[test]
fn import_failures_leave_network_untouched() {
    let mut network = network();
    assert!(matches!(
        network.import_fragments_internal("not json", "m"),
        Err(BoundaryError::Json(_))
    ));
    assert!(matches!(
        network.import_fragments_internal("[[[0, 0], [1, 0]]]", "furlongs"),
        Err(BoundaryError::Network(_))
    ));
    assert!(matches!(
        network.import_fragments_internal("[[[0, 0], [1, 0]]]", "other"),
        Err(BoundaryError::Network(_))
    ));
    assert!(network.path_ids().is_empty());
}

#[test]
fn events_drain_as_json() {
    let mut network = network();
    let id = network.create_path_internal(&L_SHAPE).unwrap();
    network.disable_path(id.raw());

    let json = network.drain_events_json_internal().unwrap();
    let expected = format!(
        r#"[{{"type":"Created","path":{0}}},{{"type":"Disabled","path":{0}}}]"#,
        id.raw()
    );
    assert_eq!(json, expected);
    assert_eq!(network.drain_events_json_internal().unwrap(), "[]");
}

#[test]
fn clear_drops_everything() {
    let mut network = network();
    network.create_path_internal(&L_SHAPE).unwrap();
    network.clear();
    assert!(network.path_ids().is_empty());
    assert_eq!(network.manager().segment_count(), 0);
}

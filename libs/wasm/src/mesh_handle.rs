//! # Mesh Handle
//!
//! WASM-friendly snapshot of one wall segment that can be transferred to
//! JavaScript.

use wall_mesh::WallSegment;
use wall_network::{PathId, SegmentId};
use wasm_bindgen::prelude::*;

/// A copy of a wall segment's render buffers.
///
/// Handles are snapshots: edit the network, then ask for fresh handles and
/// compare [`MeshHandle::revision`] to skip unchanged uploads.
///
/// # Example (JavaScript)
///
/// ```javascript
/// for (const mesh of network.path_meshes(pathId)) {
///   const geometry = new THREE.BufferGeometry();
///   geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
///   geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
///   geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///   object.visible = mesh.visible;
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    segment: u32,
    path: u32,
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Vertex colors as [r, g, b, a, ...]
    colors: Option<Vec<f32>>,
    visible: bool,
    revision: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Segment handle this mesh was taken from.
    #[wasm_bindgen(getter)]
    pub fn segment(&self) -> u32 {
        self.segment
    }

    /// Path that owns the segment.
    #[wasm_bindgen(getter)]
    pub fn path(&self) -> u32 {
        self.path
    }

    /// Whether the segment is currently shown.
    #[wasm_bindgen(getter)]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Geometry revision, bumped on every vertex rewrite.
    #[wasm_bindgen(getter)]
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...], Z up.
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the vertex normals as a Float32Array.
    #[wasm_bindgen]
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }

    /// Returns the vertex colors as a Float32Array, if available.
    ///
    /// Format: [r, g, b, a, r, g, b, a, ...]
    #[wasm_bindgen]
    pub fn colors(&self) -> Option<js_sys::Float32Array> {
        self.colors
            .as_ref()
            .map(|c| js_sys::Float32Array::from(&c[..]))
    }
}

impl MeshHandle {
    /// Copies the render buffers of a segment.
    pub fn from_segment(id: SegmentId, owner: PathId, segment: &WallSegment) -> Self {
        let mesh = segment.mesh();
        Self {
            segment: id.0,
            path: owner.raw(),
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            colors: mesh.colors_f32(),
            visible: segment.is_visible(),
            revision: u32::try_from(segment.revision()).unwrap_or(u32::MAX),
        }
    }

    /// Vertex positions without crossing into JS.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertices
    }

    /// Triangle indices without crossing into JS.
    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex normals without crossing into JS.
    pub fn normal_data(&self) -> &[f32] {
        &self.normals
    }
}

//! # Wall Segment
//!
//! Extrudes one plan segment into a box with a fixed vertex layout.
//!
//! ## Vertex Layout
//!
//! ```text
//!   index  floor  ceiling
//!   inner-start   0      4
//!   outer-start   1      5
//!   outer-end     2      6
//!   inner-end     3      7
//! ```
//!
//! The corner solver relies on this layout and nothing else, so every
//! rebuild or in-place edit must keep it.

#[cfg(test)]
mod tests;

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{DEFAULT_WALL_COLOR, EPSILON};
use glam::{DVec2, DVec3};

/// Floor vertex at the inner side of the start cap.
pub const INNER_START_FLOOR: usize = 0;
/// Floor vertex at the outer side of the start cap.
pub const OUTER_START_FLOOR: usize = 1;
/// Floor vertex at the outer side of the end cap.
pub const OUTER_END_FLOOR: usize = 2;
/// Floor vertex at the inner side of the end cap.
pub const INNER_END_FLOOR: usize = 3;
/// Offset from a floor vertex to the ceiling vertex above it.
pub const CEILING_OFFSET: usize = 4;

/// Triangle indices of the wall box, two per face.
///
/// Counter-clockwise when seen from outside in a right-handed Z-up frame
/// with the perpendicular on the right of the travel direction.
pub const WALL_TRIANGLES: [[u32; 3]; 12] = [
    // Bottom (-Z)
    [0, 2, 1],
    [0, 3, 2],
    // Top (+Z)
    [4, 5, 6],
    [4, 6, 7],
    // Front, start cap
    [0, 5, 4],
    [0, 1, 5],
    // Back, end cap
    [6, 2, 3],
    [3, 7, 6],
    // Left, inner side
    [7, 3, 0],
    [0, 4, 7],
    // Right, outer side
    [6, 5, 1],
    [1, 2, 6],
];

/// Which end of a segment a corner belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentEnd {
    /// The end at the segment's start point.
    Start,
    /// The end at the segment's end point.
    End,
}

/// Which boundary line of the wall a corner lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    /// `point - perpendicular * half_thickness`
    Inner,
    /// `point + perpendicular * half_thickness`
    Outer,
}

/// Returns the floor vertex index for a corner.
///
/// # Examples
/// ```
/// use wall_mesh::segment::{corner_index, SegmentEnd, WallSide};
/// assert_eq!(corner_index(SegmentEnd::Start, WallSide::Inner), 0);
/// assert_eq!(corner_index(SegmentEnd::End, WallSide::Outer), 2);
/// ```
pub const fn corner_index(end: SegmentEnd, side: WallSide) -> usize {
    match (end, side) {
        (SegmentEnd::Start, WallSide::Inner) => INNER_START_FLOOR,
        (SegmentEnd::Start, WallSide::Outer) => OUTER_START_FLOOR,
        (SegmentEnd::End, WallSide::Outer) => OUTER_END_FLOOR,
        (SegmentEnd::End, WallSide::Inner) => INNER_END_FLOOR,
    }
}

/// Unit perpendicular on the right-hand side of `direction`.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use wall_mesh::segment::right_perpendicular;
/// assert_eq!(right_perpendicular(DVec2::X), DVec2::new(0.0, -1.0));
/// ```
#[inline]
pub fn right_perpendicular(direction: DVec2) -> DVec2 {
    DVec2::new(direction.y, -direction.x)
}

/// Lifts a plan point onto the floor plane.
#[inline]
pub fn to_floor(point: DVec2) -> DVec3 {
    point.extend(0.0)
}

/// Generated geometry for one wall edge.
///
/// The vertex array is the working copy; the mesh is refreshed from it by
/// [`WallSegment::sync_mesh`]. Hiding a segment never touches either.
#[derive(Debug, Clone)]
pub struct WallSegment {
    vertices: [DVec3; 8],
    mesh: Mesh,
    height: f64,
    visible: bool,
    dirty: bool,
    revision: u64,
}

impl WallSegment {
    /// Returns the eight layout vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3; 8] {
        &self.vertices
    }

    /// Returns a single layout vertex.
    #[inline]
    pub fn vertex(&self, index: usize) -> DVec3 {
        self.vertices[index]
    }

    /// Returns the rendered mesh.
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Returns the extrusion height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of times the mesh has been rewritten since construction.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns true if vertex edits are waiting for [`WallSegment::sync_mesh`].
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the host should draw this segment.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the segment without touching its geometry.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Moves a floor corner and the ceiling corner above it.
    ///
    /// Only the plan position is used; the floor stays at `z = 0`.
    pub fn set_corner(&mut self, floor_index: usize, point: DVec2) {
        debug_assert!(floor_index < CEILING_OFFSET);
        let floor = to_floor(point);
        if self.vertices[floor_index] == floor {
            return;
        }
        self.vertices[floor_index] = floor;
        self.vertices[floor_index + CEILING_OFFSET] = floor + DVec3::Z * self.height;
        self.dirty = true;
    }

    /// Returns the plan position of a floor corner.
    #[inline]
    pub fn corner(&self, floor_index: usize) -> DVec2 {
        self.vertices[floor_index].truncate()
    }

    /// Resets both corners of one end to the squared box corners of a
    /// centre line through `point` with the given perpendicular.
    pub fn square_end(&mut self, end: SegmentEnd, point: DVec2, perpendicular: DVec2, half_thickness: f64) {
        let offset = perpendicular * half_thickness;
        self.set_corner(corner_index(end, WallSide::Inner), point - offset);
        self.set_corner(corner_index(end, WallSide::Outer), point + offset);
    }

    /// Translates the four start-side vertices (0, 1, 4, 5).
    pub fn translate_start(&mut self, offset: DVec3) {
        for index in [0, 1, 4, 5] {
            self.vertices[index] += offset;
        }
        self.dirty = true;
    }

    /// Translates the four end-side vertices (2, 3, 6, 7).
    pub fn translate_end(&mut self, offset: DVec3) {
        for index in [2, 3, 6, 7] {
            self.vertices[index] += offset;
        }
        self.dirty = true;
    }

    /// Pushes pending vertex edits into the mesh and recomputes normals.
    ///
    /// Edits that cancel out before a sync (squared, then mitred back to the
    /// same corner) leave the mesh and the revision alone. Returns true if
    /// the mesh was rewritten.
    pub fn sync_mesh(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        if self.mesh.vertices() == self.vertices.as_slice() {
            return false;
        }
        // The mesh is built with exactly eight vertices, so this cannot fail.
        let written = self.mesh.write_vertices(&self.vertices);
        debug_assert!(written);
        self.mesh.compute_normals();
        self.revision += 1;
        true
    }
}

/// Builds wall boxes of a fixed height.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use wall_mesh::SegmentBuilder;
///
/// let builder = SegmentBuilder::new(3.0);
/// let perpendicular = DVec2::new(0.0, -1.0);
/// let segment = builder
///     .build(DVec2::ZERO, DVec2::new(4.0, 0.0), perpendicular, 0.5)
///     .unwrap();
/// assert_eq!(segment.vertex(0).y, 0.5);
/// assert_eq!(segment.vertex(4).z, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentBuilder {
    height: f64,
}

impl SegmentBuilder {
    /// Creates a builder extruding to `height`.
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// Returns the extrusion height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Extrudes `start → end` into an 8-vertex box.
    ///
    /// Floor corners are `start`/`end` offset by `±perpendicular * half_thickness`;
    /// ceiling corners sit `height` above them.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegenerateGeometry`] when `start == end`, the
    /// perpendicular is zero, or thickness/height are not positive, and
    /// [`MeshError::ValidationFailed`] when a face of the box collapses or a
    /// corner is not finite.
    pub fn build(
        &self,
        start: DVec2,
        end: DVec2,
        perpendicular: DVec2,
        half_thickness: f64,
    ) -> Result<WallSegment, MeshError> {
        if start.distance(end) < EPSILON {
            return Err(MeshError::degenerate(format!(
                "segment start equals end at {start}"
            )));
        }
        if perpendicular.length() < EPSILON {
            return Err(MeshError::degenerate("perpendicular has zero length"));
        }
        if !(half_thickness > 0.0) || !(self.height > 0.0) {
            return Err(MeshError::degenerate(format!(
                "half thickness {half_thickness} and height {} must be positive",
                self.height
            )));
        }

        let offset = perpendicular * half_thickness;
        let up = DVec3::Z * self.height;

        let p0 = to_floor(start - offset);
        let p1 = to_floor(start + offset);
        let p2 = to_floor(end + offset);
        let p3 = to_floor(end - offset);
        let vertices = [p0, p1, p2, p3, p0 + up, p1 + up, p2 + up, p3 + up];

        let mut mesh = Mesh::with_capacity(8, WALL_TRIANGLES.len());
        for v in vertices {
            mesh.add_vertex(v);
        }
        for [a, b, c] in WALL_TRIANGLES {
            mesh.add_triangle(a, b, c);
        }
        if !mesh.validate() {
            return Err(MeshError::validation(format!(
                "wall box from {start} to {end} has a collapsed or non-finite face"
            )));
        }
        mesh.set_uniform_color(DEFAULT_WALL_COLOR);
        mesh.compute_normals();

        Ok(WallSegment {
            vertices,
            mesh,
            height: self.height,
            visible: true,
            dirty: false,
            revision: 0,
        })
    }

    /// Builds a segment, deriving the right-hand perpendicular from the
    /// travel direction.
    pub fn build_between(&self, start: DVec2, end: DVec2, half_thickness: f64) -> Result<WallSegment, MeshError> {
        let direction = (end - start).normalize_or_zero();
        self.build(start, end, right_perpendicular(direction), half_thickness)
    }
}

//! # Wall Graph
//!
//! Topology-only bookkeeping for wall networks: vertices, undirected edges
//! between them, and paths as ordered edge lists. No mesh state lives here,
//! so one graph can back any rendering strategy.
//!
//! Entities live in id-indexed tables; edges hold vertex handles and vertices
//! hold the handles of their connected edges. Removal walks those handle
//! lists, so there are no owning cycles.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//! use wall_network::graph::WallGraph;
//!
//! let mut graph = WallGraph::new();
//! let a = graph.create_vertex(DVec2::ZERO);
//! let b = graph.create_vertex(DVec2::new(4.0, 0.0));
//! let edge = graph.create_edge(a, b).unwrap();
//! assert_eq!(graph.find_edge(b, a), Some(edge));
//!
//! graph.remove_vertex(a);
//! assert!(graph.edge(edge).is_none());
//! ```


use crate::error::{NetworkError, NetworkResult};
use crate::ids::{EdgeId, PathId, VertexId};
use glam::DVec2;
use std::collections::{BTreeMap, HashSet};

/// Default edge color for editor overlays (RGBA).
const DEFAULT_EDGE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

/// A graph vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Handle of this vertex
    pub id: VertexId,
    /// Plan position
    pub position: DVec2,
    /// Whether the vertex is shown and editable
    pub active: bool,
    /// Handles of edges touching this vertex, without duplicates
    connected_edges: Vec<EdgeId>,
}

impl Vertex {
    fn new(id: VertexId, position: DVec2) -> Self {
        Self {
            id,
            position,
            active: true,
            connected_edges: Vec::new(),
        }
    }

    /// Returns the handles of edges touching this vertex.
    pub fn connected_edges(&self) -> &[EdgeId] {
        &self.connected_edges
    }

    fn attach(&mut self, edge: EdgeId) {
        if !self.connected_edges.contains(&edge) {
            self.connected_edges.push(edge);
        }
    }

    fn detach(&mut self, edge: EdgeId) {
        self.connected_edges.retain(|e| *e != edge);
    }
}

/// An undirected edge between two existing vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Handle of this edge
    pub id: EdgeId,
    /// Vertex the edge was drawn from
    pub start: VertexId,
    /// Vertex the edge was drawn to
    pub end: VertexId,
    /// Whether the edge is shown
    pub active: bool,
    /// Overlay color (presentation only)
    pub color: [f32; 4],
    /// Overlay line thickness (presentation only)
    pub thickness: f64,
}

impl Edge {
    /// True if the edge joins `a` and `b` in either direction.
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }

    /// True if `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.start == vertex || self.end == vertex
    }
}

/// An ordered list of edges in traversal order.
///
/// Connectivity between consecutive edges is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Identifier of this path
    pub id: PathId,
    /// Edges in traversal order
    pub edges: Vec<EdgeId>,
}

impl Path {
    fn new(id: PathId) -> Self {
        Self {
            id,
            edges: Vec::new(),
        }
    }
}

/// Arena of vertices, edges and paths.
#[derive(Debug, Clone, Default)]
pub struct WallGraph {
    vertices: BTreeMap<VertexId, Vertex>,
    edges: BTreeMap<EdgeId, Edge>,
    paths: BTreeMap<PathId, Path>,
    next_vertex: u32,
    next_edge: u32,
    next_path: u32,
}

impl WallGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // CREATION
    // =========================================================================

    /// Creates a vertex and returns its handle.
    pub fn create_vertex(&mut self, position: DVec2) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.vertices.insert(id, Vertex::new(id, position));
        id
    }

    /// Creates an edge between two existing vertices.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownVertex`] if either handle is unknown.
    pub fn create_edge(&mut self, start: VertexId, end: VertexId) -> NetworkResult<EdgeId> {
        for vertex in [start, end] {
            if !self.vertices.contains_key(&vertex) {
                return Err(NetworkError::UnknownVertex(vertex));
            }
        }

        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.edges.insert(
            id,
            Edge {
                id,
                start,
                end,
                active: true,
                color: DEFAULT_EDGE_COLOR,
                thickness: 1.0,
            },
        );
        for vertex in [start, end] {
            if let Some(v) = self.vertices.get_mut(&vertex) {
                v.attach(id);
            }
        }
        Ok(id)
    }

    /// Creates an empty path and returns its id.
    pub fn create_path(&mut self) -> PathId {
        let id = PathId(self.next_path);
        self.next_path += 1;
        self.paths.insert(id, Path::new(id));
        id
    }

    /// Creates an empty path under an id chosen by the caller.
    ///
    /// Later automatic ids skip past it.
    ///
    /// # Errors
    ///
    /// Fails if the id is taken or is `u32::MAX`.
    pub fn create_path_with_id(&mut self, id: PathId) -> NetworkResult<()> {
        if id.0 == u32::MAX {
            return Err(NetworkError::ReservedPathId(id));
        }
        if self.paths.contains_key(&id) {
            return Err(NetworkError::PathExists(id));
        }
        self.paths.insert(id, Path::new(id));
        self.next_path = self.next_path.max(id.0 + 1);
        Ok(())
    }

    /// Appends an edge to a path.
    ///
    /// # Errors
    ///
    /// Fails if the path or the edge is unknown.
    pub fn add_edge_to_path(&mut self, path: PathId, edge: EdgeId) -> NetworkResult<()> {
        if !self.edges.contains_key(&edge) {
            return Err(NetworkError::UnknownEdge(edge));
        }
        let path = self
            .paths
            .get_mut(&path)
            .ok_or(NetworkError::UnknownPath(path))?;
        path.edges.push(edge);
        Ok(())
    }

    // =========================================================================
    // REMOVAL
    // =========================================================================

    /// Removes a vertex after removing every edge connected to it.
    ///
    /// Returns the removed edge handles. Unknown handles are a no-op.
    pub fn remove_vertex(&mut self, id: VertexId) -> Vec<EdgeId> {
        let Some(connected) = self.vertices.get(&id).map(|v| v.connected_edges.clone()) else {
            return Vec::new();
        };
        for edge in &connected {
            self.remove_edge(*edge);
        }
        self.vertices.remove(&id);
        connected
    }

    /// Removes an edge, detaching it from both endpoints and every path.
    ///
    /// Idempotent: returns false if the edge was already gone.
    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        let Some(edge) = self.edges.remove(&id) else {
            return false;
        };
        for vertex in [edge.start, edge.end] {
            if let Some(v) = self.vertices.get_mut(&vertex) {
                v.detach(id);
            }
        }
        for path in self.paths.values_mut() {
            path.edges.retain(|e| *e != id);
        }
        true
    }

    /// Removes a path without touching its edges.
    pub fn remove_path(&mut self, id: PathId) -> bool {
        self.paths.remove(&id).is_some()
    }

    /// Drops every entity and resets all id counters to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Undirected lookup of the edge joining `a` and `b`.
    ///
    /// Only scans the connected-edge list of `a`.
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let vertex = self.vertices.get(&a)?;
        vertex
            .connected_edges
            .iter()
            .copied()
            .find(|e| self.edges.get(e).is_some_and(|edge| edge.connects(a, b)))
    }

    /// Returns a vertex by handle.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Returns an edge by handle.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Returns a mutable edge by handle.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(&id)
    }

    /// Returns a path by id.
    pub fn path(&self, id: PathId) -> Option<&Path> {
        self.paths.get(&id)
    }

    /// Iterates vertices in id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Iterates edges in id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Iterates paths in id order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.values()
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Moves a vertex.
    pub fn set_vertex_position(&mut self, id: VertexId, position: DVec2) -> NetworkResult<()> {
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(NetworkError::UnknownVertex(id))?;
        vertex.position = position;
        Ok(())
    }

    /// Sets the active flag of a vertex and of every edge touching it.
    pub fn set_vertex_active(&mut self, id: VertexId, active: bool) -> NetworkResult<()> {
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(NetworkError::UnknownVertex(id))?;
        vertex.active = active;
        for edge in vertex.connected_edges.clone() {
            if let Some(e) = self.edges.get_mut(&edge) {
                e.active = active;
            }
        }
        Ok(())
    }

    /// Plan length of an edge.
    pub fn edge_length(&self, id: EdgeId) -> Option<f64> {
        let (a, b) = self.edge_positions(id)?;
        Some(a.distance(b))
    }

    /// Plan midpoint of an edge.
    pub fn edge_midpoint(&self, id: EdgeId) -> Option<DVec2> {
        let (a, b) = self.edge_positions(id)?;
        Some((a + b) * 0.5)
    }

    fn edge_positions(&self, id: EdgeId) -> Option<(DVec2, DVec2)> {
        let edge = self.edges.get(&id)?;
        let a = self.vertices.get(&edge.start)?.position;
        let b = self.vertices.get(&edge.end)?.position;
        Some((a, b))
    }

    /// Points of a path: the first edge's start, then each edge's end that
    /// has not been visited yet.
    ///
    /// An empty or unknown path yields no points.
    pub fn path_points(&self, id: PathId) -> Vec<DVec2> {
        let Some(path) = self.paths.get(&id) else {
            return Vec::new();
        };
        let Some(first) = path.edges.first().and_then(|e| self.edges.get(e)) else {
            return Vec::new();
        };

        let mut visited = HashSet::new();
        let mut points = Vec::with_capacity(path.edges.len() + 1);
        if let Some(start) = self.vertices.get(&first.start) {
            points.push(start.position);
            visited.insert(first.start);
        }
        for edge in path.edges.iter().filter_map(|e| self.edges.get(e)) {
            if visited.insert(edge.end) {
                if let Some(end) = self.vertices.get(&edge.end) {
                    points.push(end.position);
                }
            }
        }
        points
    }

    /// Ids of paths that reference `edge`.
    pub fn paths_containing_edge(&self, edge: EdgeId) -> Vec<PathId> {
        self.paths
            .values()
            .filter(|p| p.edges.contains(&edge))
            .map(|p| p.id)
            .collect()
    }

    /// Ids of paths that reference any edge touching `vertex`, each once.
    pub fn paths_touching_vertex(&self, vertex: VertexId) -> Vec<PathId> {
        let Some(v) = self.vertices.get(&vertex) else {
            return Vec::new();
        };
        self.paths
            .values()
            .filter(|p| p.edges.iter().any(|e| v.connected_edges.contains(e)))
            .map(|p| p.id)
            .collect()
    }
}

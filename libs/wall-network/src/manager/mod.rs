//! # Wall Path Manager
//!
//! Orchestrates the wall network: turns point sequences into wall segments,
//! keeps the per-point registries in sync with edits, and runs the corner
//! solver after every topology change.
//!
//! ## Ownership
//!
//! A segment is owned by the path that first requested its line. Another
//! path drawing the same line (in either direction) reuses the segment
//! through the shared graph edge but does not own it, so only the owner moves
//! it on update and hides it on disable.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::WallConfig;
//! use glam::DVec2;
//! use wall_network::WallPathManager;
//!
//! let config = WallConfig::new(2.0, 3.0, 1.0).unwrap();
//! let mut manager = WallPathManager::new(config);
//! let path = manager
//!     .create_path(&[DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(10.0, 10.0)])
//!     .unwrap();
//! assert_eq!(manager.segments_for_path(path).len(), 2);
//! ```

mod events;

pub use events::PathEvent;

use crate::error::{NetworkError, NetworkResult};
use crate::graph::WallGraph;
use crate::ids::{EdgeId, PathId, SegmentId, VertexId};
use crate::import::merge_scaled;
use crate::intersection::{IntersectionRecord, IntersectionRegistry, IntersectionResolver, ResolveReport};
use crate::spatial::{GridKey, LineKey};
use config::constants::WallConfig;
use glam::DVec2;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use wall_mesh::segment::{right_perpendicular, to_floor};
use wall_mesh::{SegmentBuilder, WallSegment};

#[derive(Debug, Clone)]
struct SegmentEntry {
    segment: WallSegment,
    owner: PathId,
    edge: EdgeId,
    /// Scaled start point
    start: DVec2,
    /// Scaled end point
    end: DVec2,
}

impl SegmentEntry {
    fn direction(&self) -> DVec2 {
        (self.end - self.start).normalize_or_zero()
    }

    fn line_key(&self) -> LineKey {
        LineKey::from_points(self.start, self.end)
    }
}

/// An owned segment between points `index` and `index + 1` of a path.
#[derive(Debug, Clone, Copy)]
struct Span {
    index: usize,
    segment: SegmentId,
}

#[derive(Debug, Clone, Default)]
struct PathRecord {
    /// Points as supplied, before magnification
    points: Vec<DVec2>,
    /// Graph vertex of each point
    vertices: Vec<VertexId>,
    spans: Vec<Span>,
}

/// What to do with one consecutive point pair of a new path.
enum PairPlan {
    Build {
        line: LineKey,
        start: DVec2,
        end: DVec2,
        segment: WallSegment,
    },
    Shared(SegmentId),
    Repeat,
    Skip,
}

fn check_finite(points: &[DVec2]) -> NetworkResult<()> {
    match points.iter().find(|p| !p.is_finite()) {
        Some(point) => Err(NetworkError::NonFinitePoint(*point)),
        None => Ok(()),
    }
}

/// Owner of all wall paths, segments and registries.
#[derive(Debug, Clone)]
pub struct WallPathManager {
    config: WallConfig,
    builder: SegmentBuilder,
    graph: WallGraph,
    paths: BTreeMap<PathId, PathRecord>,
    segments: BTreeMap<SegmentId, SegmentEntry>,
    next_segment: u32,
    generated_lines: HashMap<LineKey, SegmentId>,
    segments_by_point: HashMap<GridKey, Vec<SegmentId>>,
    segment_by_edge: HashMap<EdgeId, SegmentId>,
    vertex_by_key: HashMap<GridKey, VertexId>,
    intersections: IntersectionRegistry,
    resolver: IntersectionResolver,
    events: Vec<PathEvent>,
}

impl Default for WallPathManager {
    fn default() -> Self {
        Self::new(WallConfig::default())
    }
}

impl WallPathManager {
    /// Creates an empty manager.
    pub fn new(config: WallConfig) -> Self {
        Self {
            config,
            builder: SegmentBuilder::new(config.wall_height),
            graph: WallGraph::new(),
            paths: BTreeMap::new(),
            segments: BTreeMap::new(),
            next_segment: 0,
            generated_lines: HashMap::new(),
            segments_by_point: HashMap::new(),
            segment_by_edge: HashMap::new(),
            vertex_by_key: HashMap::new(),
            intersections: IntersectionRegistry::new(),
            resolver: IntersectionResolver::new(),
            events: Vec::new(),
        }
    }

    // =========================================================================
    // CREATION
    // =========================================================================

    /// Creates a path and resolves its corners.
    ///
    /// Returns `None` for fewer than two points or when a segment cannot be
    /// built; nothing is registered in that case.
    pub fn create_path(&mut self, points: &[DVec2]) -> Option<PathId> {
        let id = self.create_unresolved(points, None)?;
        self.fix_all_intersections();
        Some(id)
    }

    /// Creates a path under an id chosen by the host.
    ///
    /// Returns `None` if the id is already taken.
    pub fn create_path_with_id(&mut self, points: &[DVec2], id: PathId) -> Option<PathId> {
        let id = self.create_unresolved(points, Some(id))?;
        self.fix_all_intersections();
        Some(id)
    }

    /// Creates several paths and resolves corners once at the end.
    pub fn create_paths(&mut self, paths: &[Vec<DVec2>]) -> Vec<PathId> {
        let created: Vec<PathId> = paths
            .iter()
            .filter_map(|points| self.create_unresolved(points, None))
            .collect();
        self.fix_all_intersections();
        created
    }

    /// Scales raw drawing fragments into model units, merges them into
    /// continuous runs and creates one path per run.
    pub fn create_paths_from_merged_fragments(&mut self, fragments: Vec<Vec<DVec2>>, unit_scale: f64) -> Vec<PathId> {
        if !(unit_scale.is_finite() && unit_scale > 0.0) {
            log::warn!("ignoring import with unit scale {unit_scale}");
            return Vec::new();
        }
        let fragment_count = fragments.len();
        let merged = merge_scaled(fragments, unit_scale);
        log::info!("merged {} fragments into {} paths", fragment_count, merged.len());
        self.create_paths(&merged)
    }

    fn create_unresolved(&mut self, points: &[DVec2], requested: Option<PathId>) -> Option<PathId> {
        if points.len() < 2 {
            log::debug!("ignoring path with {} points", points.len());
            return None;
        }
        match self.insert_path(points, requested) {
            Ok(id) => {
                self.events.push(PathEvent::Created(id));
                Some(id)
            }
            Err(err) => {
                log::warn!("path rejected: {err}");
                None
            }
        }
    }

    /// Plans every pair, builds all new segments, then registers them.
    fn insert_path(&mut self, points: &[DVec2], requested: Option<PathId>) -> NetworkResult<PathId> {
        if let Some(id) = requested {
            if self.paths.contains_key(&id) || self.graph.path(id).is_some() {
                return Err(NetworkError::PathExists(id));
            }
        }

        let magnification = self.config.magnification;
        let half_thickness = self.config.half_thickness();
        let scaled: Vec<DVec2> = points.iter().map(|p| *p * magnification).collect();
        check_finite(&scaled)?;

        let mut seen = HashSet::new();
        let mut plans = Vec::with_capacity(scaled.len() - 1);
        for pair in scaled.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            let line = LineKey::from_points(start, end);
            let plan = if line.is_degenerate() {
                log::warn!("skipping zero-length segment at {start}");
                PairPlan::Skip
            } else if let Some(existing) = self.generated_lines.get(&line) {
                log::debug!("line {start} -> {end} already generated as {existing}");
                PairPlan::Shared(*existing)
            } else if !seen.insert(line) {
                PairPlan::Repeat
            } else {
                let segment = self.builder.build_between(start, end, half_thickness)?;
                PairPlan::Build {
                    line,
                    start,
                    end,
                    segment,
                }
            };
            plans.push(plan);
        }
        if plans.iter().all(|plan| matches!(plan, PairPlan::Skip)) {
            return Err(NetworkError::DegenerateSegment {
                start: scaled[0],
                end: scaled[scaled.len() - 1],
            });
        }

        let id = match requested {
            Some(id) => {
                self.graph.create_path_with_id(id)?;
                id
            }
            None => self.graph.create_path(),
        };

        let vertices: Vec<VertexId> = points
            .iter()
            .zip(&scaled)
            .map(|(raw, s)| self.vertex_at(GridKey::from_point(*s), *raw))
            .collect();

        let mut spans = Vec::new();
        for (index, plan) in plans.into_iter().enumerate() {
            let (a, b) = (vertices[index], vertices[index + 1]);
            let edge = match plan {
                PairPlan::Skip => continue,
                PairPlan::Shared(segment) => match self.segments.get(&segment) {
                    Some(entry) => entry.edge,
                    None => continue,
                },
                PairPlan::Repeat => match self.graph.find_edge(a, b) {
                    Some(edge) => edge,
                    None => continue,
                },
                PairPlan::Build {
                    line,
                    start,
                    end,
                    segment,
                } => {
                    let edge = match self
                        .graph
                        .find_edge(a, b)
                        .filter(|e| !self.segment_by_edge.contains_key(e))
                    {
                        Some(edge) => edge,
                        None => self.graph.create_edge(a, b)?,
                    };
                    let segment = self.register_segment(id, edge, line, start, end, segment);
                    spans.push(Span { index, segment });
                    edge
                }
            };
            self.graph.add_edge_to_path(id, edge)?;
        }

        log::debug!("created {id} with {} owned segments", spans.len());
        self.paths.insert(
            id,
            PathRecord {
                points: points.to_vec(),
                vertices,
                spans,
            },
        );
        Ok(id)
    }

    fn vertex_at(&mut self, key: GridKey, position: DVec2) -> VertexId {
        if let Some(vertex) = self.vertex_by_key.get(&key) {
            return *vertex;
        }
        let vertex = self.graph.create_vertex(position);
        self.vertex_by_key.insert(key, vertex);
        vertex
    }

    fn register_segment(
        &mut self,
        owner: PathId,
        edge: EdgeId,
        line: LineKey,
        start: DVec2,
        end: DVec2,
        segment: WallSegment,
    ) -> SegmentId {
        let id = SegmentId(self.next_segment);
        self.next_segment += 1;

        let direction = (end - start).normalize_or_zero();
        let perpendicular = right_perpendicular(direction);
        let half_thickness = self.config.half_thickness();

        for (is_start, point) in [(true, start), (false, end)] {
            let key = GridKey::from_point(point);
            self.segments_by_point.entry(key).or_default().push(id);
            self.intersections.insert(
                key,
                IntersectionRecord {
                    point,
                    direction,
                    perpendicular,
                    half_thickness,
                    segment: id,
                    is_start,
                },
            );
            // A new endpoint joins the bucket, so its corners need solving again.
            self.resolver.invalidate(key);
        }

        self.generated_lines.insert(line, id);
        self.segment_by_edge.insert(edge, id);
        self.segments.insert(
            id,
            SegmentEntry {
                segment,
                owner,
                edge,
                start,
                end,
            },
        );
        id
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    /// Moves the points of a path and re-solves its corners.
    ///
    /// The point count must match the stored path. Each owned segment is
    /// translated end by end, its endpoint records follow it into their new
    /// buckets, and every touched bucket is squared off before the solver
    /// runs again. Returns false (and changes nothing) on invalid input.
    pub fn update_path(&mut self, points: &[DVec2], path: PathId) -> bool {
        if points.len() < 2 {
            log::debug!("ignoring update of {path} with {} points", points.len());
            return false;
        }
        match self.try_update_path(points, path) {
            Ok(()) => {
                self.events.push(PathEvent::Updated(path));
                true
            }
            Err(err) => {
                log::warn!("update rejected: {err}");
                false
            }
        }
    }

    fn try_update_path(&mut self, points: &[DVec2], path: PathId) -> NetworkResult<()> {
        let record = self.paths.get(&path).ok_or(NetworkError::UnknownPath(path))?;
        if record.points.len() != points.len() {
            return Err(NetworkError::PointCountMismatch {
                path,
                expected: record.points.len(),
                actual: points.len(),
            });
        }

        let magnification = self.config.magnification;
        let scaled: Vec<DVec2> = points.iter().map(|p| *p * magnification).collect();
        check_finite(&scaled)?;
        let moves: Vec<(SegmentId, DVec2, DVec2)> = record
            .spans
            .iter()
            .map(|span| (span.segment, scaled[span.index], scaled[span.index + 1]))
            .collect();
        if let Some((_, start, end)) = moves
            .iter()
            .find(|(_, start, end)| GridKey::from_point(*start) == GridKey::from_point(*end))
        {
            return Err(NetworkError::DegenerateSegment {
                start: *start,
                end: *end,
            });
        }

        let mut touched = BTreeSet::new();
        for (segment, start, end) in moves {
            self.move_segment(segment, start, end, &mut touched);
        }

        let moved_vertices: Vec<(VertexId, DVec2)> = match self.paths.get_mut(&path) {
            Some(record) => {
                let moved = record
                    .points
                    .iter()
                    .zip(points)
                    .zip(&record.vertices)
                    .filter(|((old, new), _)| old != new)
                    .map(|((_, new), vertex)| (*vertex, *new))
                    .collect();
                record.points = points.to_vec();
                moved
            }
            None => Vec::new(),
        };
        for (vertex, position) in moved_vertices {
            // A junction shared with another path only moves through `move_vertex`.
            if self.vertex_shared(vertex, path) {
                log::debug!("{vertex} is shared, keeping its graph position");
                continue;
            }
            self.relocate_vertex(vertex, position);
        }

        for key in touched {
            self.square_bucket(key);
        }
        self.resolver.reset();
        self.fix_all_intersections();
        Ok(())
    }

    fn move_segment(&mut self, id: SegmentId, start: DVec2, end: DVec2, touched: &mut BTreeSet<GridKey>) {
        let Some(entry) = self.segments.get_mut(&id) else {
            return;
        };
        let (old_start, old_end) = (entry.start, entry.end);
        if old_start == start && old_end == end {
            return;
        }
        let old_line = entry.line_key();

        entry.segment.translate_start(to_floor(start - old_start));
        entry.segment.translate_end(to_floor(end - old_end));
        entry.start = start;
        entry.end = end;
        let direction = entry.direction();
        let perpendicular = right_perpendicular(direction);

        let new_line = LineKey::from_points(start, end);
        if new_line != old_line {
            if self.generated_lines.get(&old_line) == Some(&id) {
                self.generated_lines.remove(&old_line);
            }
            self.generated_lines.entry(new_line).or_insert(id);
        }

        for (is_start, old_point, new_point) in [(true, old_start, start), (false, old_end, end)] {
            let old_key = GridKey::from_point(old_point);
            let new_key = GridKey::from_point(new_point);
            touched.insert(old_key);
            touched.insert(new_key);

            if old_key == new_key {
                if let Some(record) = self.intersections.record_mut(old_key, id, is_start) {
                    record.point = new_point;
                    record.direction = direction;
                    record.perpendicular = perpendicular;
                }
                continue;
            }

            if let Some(mut record) = self.intersections.take_record(old_key, id, is_start) {
                record.point = new_point;
                record.direction = direction;
                record.perpendicular = perpendicular;
                self.intersections.insert(new_key, record);
            }
            self.resolver.invalidate(old_key);

            if let Some(list) = self.segments_by_point.get_mut(&old_key) {
                list.retain(|s| *s != id);
                if list.is_empty() {
                    self.segments_by_point.remove(&old_key);
                }
            }
            self.segments_by_point.entry(new_key).or_default().push(id);
        }
    }

    fn vertex_shared(&self, vertex: VertexId, path: PathId) -> bool {
        self.paths
            .iter()
            .any(|(id, record)| *id != path && record.vertices.contains(&vertex))
    }

    fn relocate_vertex(&mut self, vertex: VertexId, position: DVec2) {
        let Some(old) = self.graph.vertex(vertex).map(|v| v.position) else {
            return;
        };
        if self.graph.set_vertex_position(vertex, position).is_err() {
            return;
        }
        let magnification = self.config.magnification;
        let old_key = GridKey::from_point(old * magnification);
        let new_key = GridKey::from_point(position * magnification);
        if old_key != new_key {
            if self.vertex_by_key.get(&old_key) == Some(&vertex) {
                self.vertex_by_key.remove(&old_key);
            }
            self.vertex_by_key.entry(new_key).or_insert(vertex);
        }
    }

    /// Resets every corner in a bucket to its squared box position.
    fn square_bucket(&mut self, key: GridKey) {
        for record in self.intersections.bucket(key) {
            if let Some(entry) = self.segments.get_mut(&record.segment) {
                entry
                    .segment
                    .square_end(record.end(), record.point, record.perpendicular, record.half_thickness);
            }
        }
        self.resolver.invalidate(key);
    }

    /// Moves one graph vertex and updates every path that passes through it.
    ///
    /// Returns the paths that were updated.
    pub fn move_vertex(&mut self, vertex: VertexId, position: DVec2) -> Vec<PathId> {
        let affected: Vec<(PathId, Vec<DVec2>)> = self
            .paths
            .iter()
            .filter(|(_, record)| record.vertices.contains(&vertex))
            .map(|(id, record)| {
                let points = record
                    .points
                    .iter()
                    .zip(&record.vertices)
                    .map(|(p, v)| if *v == vertex { position } else { *p })
                    .collect();
                (*id, points)
            })
            .collect();
        if affected.is_empty() {
            log::warn!("no path passes through {vertex}");
            return Vec::new();
        }
        self.relocate_vertex(vertex, position);
        affected
            .into_iter()
            .filter_map(|(id, points)| self.update_path(&points, id).then_some(id))
            .collect()
    }

    // =========================================================================
    // VISIBILITY
    // =========================================================================

    /// Hides every segment owned by a path.
    pub fn disable_path(&mut self, path: PathId) -> bool {
        self.set_path_visible(path, false)
    }

    /// Shows every segment owned by a path again.
    pub fn enable_path(&mut self, path: PathId) -> bool {
        self.set_path_visible(path, true)
    }

    fn set_path_visible(&mut self, path: PathId, visible: bool) -> bool {
        let Some(record) = self.paths.get(&path) else {
            log::warn!("cannot change visibility of unknown {path}");
            return false;
        };
        for span in &record.spans {
            if let Some(entry) = self.segments.get_mut(&span.segment) {
                entry.segment.set_visible(visible);
            }
        }
        self.events.push(if visible {
            PathEvent::Enabled(path)
        } else {
            PathEvent::Disabled(path)
        });
        true
    }

    /// Hides every segment with an endpoint in the bucket.
    ///
    /// Returns how many segments were hidden.
    pub fn disable_point(&mut self, key: GridKey) -> usize {
        self.set_point_visible(key, false)
    }

    /// Shows every segment with an endpoint in the bucket.
    pub fn enable_point(&mut self, key: GridKey) -> usize {
        self.set_point_visible(key, true)
    }

    fn set_point_visible(&mut self, key: GridKey, visible: bool) -> usize {
        let records = self.intersections.bucket(key);
        if records.is_empty() {
            log::warn!("no walls found at point {key}");
            return 0;
        }
        let mut changed = 0;
        for record in records {
            if let Some(entry) = self.segments.get_mut(&record.segment) {
                entry.segment.set_visible(visible);
                changed += 1;
            }
        }
        changed
    }

    /// Marks a vertex and its edges inactive and hides every path through it.
    ///
    /// Returns the hidden paths.
    pub fn deactivate_vertex(&mut self, vertex: VertexId) -> Vec<PathId> {
        if let Err(err) = self.graph.set_vertex_active(vertex, false) {
            log::warn!("cannot deactivate vertex: {err}");
            return Vec::new();
        }
        let paths = self.graph.paths_touching_vertex(vertex);
        for path in &paths {
            self.disable_path(*path);
        }
        paths
    }

    // =========================================================================
    // REMOVAL
    // =========================================================================

    /// Removes an edge and destroys its segment.
    ///
    /// Corners left behind at the segment's endpoints are squared off and
    /// solved again. A path that loses its last edge is dropped.
    pub fn remove_edge(&mut self, edge: EdgeId) -> bool {
        if self.graph.edge(edge).is_none() {
            log::warn!("cannot remove unknown {edge}");
            return false;
        }
        let affected = self.graph.paths_containing_edge(edge);
        if let Some(segment) = self.segment_by_edge.remove(&edge) {
            self.destroy_segment(segment);
        }
        self.graph.remove_edge(edge);
        self.fix_all_intersections();
        for path in affected {
            self.after_edge_loss(path);
        }
        true
    }

    /// Removes a vertex together with every edge and segment touching it.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> bool {
        let Some(edges) = self.graph.vertex(vertex).map(|v| v.connected_edges().to_vec()) else {
            log::warn!("cannot remove unknown {vertex}");
            return false;
        };
        let mut affected = BTreeSet::new();
        for edge in edges {
            affected.extend(self.graph.paths_containing_edge(edge));
            if let Some(segment) = self.segment_by_edge.remove(&edge) {
                self.destroy_segment(segment);
            }
        }
        self.graph.remove_vertex(vertex);
        self.vertex_by_key.retain(|_, v| *v != vertex);
        self.fix_all_intersections();
        for path in affected {
            self.after_edge_loss(path);
        }
        true
    }

    fn destroy_segment(&mut self, id: SegmentId) {
        let Some(entry) = self.segments.remove(&id) else {
            return;
        };
        let line = entry.line_key();
        if self.generated_lines.get(&line) == Some(&id) {
            self.generated_lines.remove(&line);
        }
        for key in self.intersections.remove_segment(id) {
            if let Some(list) = self.segments_by_point.get_mut(&key) {
                list.retain(|s| *s != id);
                if list.is_empty() {
                    self.segments_by_point.remove(&key);
                }
            }
            self.square_bucket(key);
        }
        if let Some(record) = self.paths.get_mut(&entry.owner) {
            record.spans.retain(|span| span.segment != id);
        }
        log::debug!("destroyed {id} of {}", entry.owner);
    }

    fn after_edge_loss(&mut self, path: PathId) {
        let empty = self.graph.path(path).map_or(true, |p| p.edges.is_empty());
        if empty {
            self.paths.remove(&path);
            self.graph.remove_path(path);
            self.events.push(PathEvent::Removed(path));
        } else {
            self.events.push(PathEvent::Updated(path));
        }
    }

    /// Drops every path, segment and registry entry and resets all ids.
    pub fn clear(&mut self) {
        *self = Self::new(self.config);
    }

    // =========================================================================
    // CORNERS
    // =========================================================================

    /// Solves every bucket not yet corrected and pushes changed corners into
    /// the segment meshes.
    pub fn fix_all_intersections(&mut self) -> ResolveReport {
        let segments = &mut self.segments;
        let report = self
            .resolver
            .fix_all(&self.intersections, |write| match segments.get_mut(&write.segment) {
                Some(entry) => {
                    entry.segment.set_corner(write.floor_index, write.point);
                    true
                }
                None => false,
            });
        for entry in self.segments.values_mut() {
            entry.segment.sync_mesh();
        }
        report
    }

    /// True if the bucket has been solved since it last changed.
    pub fn is_point_corrected(&self, key: GridKey) -> bool {
        self.resolver.is_corrected(key)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Segments owned by a path, in path order.
    pub fn segments_for_path(&self, path: PathId) -> Vec<(SegmentId, &WallSegment)> {
        let Some(record) = self.paths.get(&path) else {
            return Vec::new();
        };
        record
            .spans
            .iter()
            .filter_map(|span| self.segments.get(&span.segment).map(|e| (span.segment, &e.segment)))
            .collect()
    }

    /// Returns a segment by handle.
    pub fn segment(&self, id: SegmentId) -> Option<&WallSegment> {
        self.segments.get(&id).map(|e| &e.segment)
    }

    /// Path that owns a segment.
    pub fn segment_owner(&self, id: SegmentId) -> Option<PathId> {
        self.segments.get(&id).map(|e| e.owner)
    }

    /// Segment generated for a graph edge.
    pub fn segment_for_edge(&self, edge: EdgeId) -> Option<SegmentId> {
        self.segment_by_edge.get(&edge).copied()
    }

    /// Segments with an endpoint in the bucket.
    pub fn segments_at_point(&self, key: GridKey) -> &[SegmentId] {
        self.segments_by_point.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Endpoint records in the bucket, in insertion order.
    pub fn intersections_at_point(&self, key: GridKey) -> &[IntersectionRecord] {
        self.intersections.bucket(key)
    }

    /// Points of a path as last supplied.
    pub fn path_points(&self, path: PathId) -> Option<&[DVec2]> {
        self.paths.get(&path).map(|r| r.points.as_slice())
    }

    /// Ids of all live paths in ascending order.
    pub fn path_ids(&self) -> Vec<PathId> {
        self.paths.keys().copied().collect()
    }

    /// Number of live segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Topology mirror of all paths.
    pub fn graph(&self) -> &WallGraph {
        &self.graph
    }

    /// Active configuration.
    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    /// Takes all events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<PathEvent> {
        std::mem::take(&mut self.events)
    }
}

//! # Intersection Resolver
//!
//! Replaces the squared-off box corners where wall segments meet with true
//! mitred corners.
//!
//! Every segment endpoint is stored as an [`IntersectionRecord`] in the grid
//! bucket of its quantized position. For each bucket holding two or more
//! records, every unordered pair is intersected twice: once along the inner
//! boundary lines and once along the outer boundary lines. The intersection
//! points are written back into the corners of both segments.
//!
//! ## Pipeline
//!
//! ```text
//! registry ─► pending buckets ─► solve (parallel) ─► apply (in order) ─► corrected set
//! ```
//!
//! Buckets write disjoint corners, so solving them in parallel cannot change
//! the result. Within one bucket, pairs are applied in record insertion
//! order; at junctions of three or more walls later pairs overwrite corners
//! set by earlier ones.


use crate::ids::SegmentId;
use crate::spatial::GridKey;
use config::constants::PARALLEL_EPSILON;
use glam::DVec2;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use wall_mesh::segment::{corner_index, SegmentEnd, WallSide};

/// One segment endpoint as seen by the corner solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionRecord {
    /// Scaled endpoint position
    pub point: DVec2,
    /// Unit direction from the segment's start to its end
    pub direction: DVec2,
    /// Unit right-hand perpendicular of `direction`
    pub perpendicular: DVec2,
    /// Half the wall thickness
    pub half_thickness: f64,
    /// Segment this endpoint belongs to
    pub segment: SegmentId,
    /// True for the start endpoint, false for the end endpoint
    pub is_start: bool,
}

impl IntersectionRecord {
    /// Origin of the inner boundary ray.
    #[inline]
    pub fn inner_origin(&self) -> DVec2 {
        self.point - self.perpendicular * self.half_thickness
    }

    /// Origin of the outer boundary ray.
    #[inline]
    pub fn outer_origin(&self) -> DVec2 {
        self.point + self.perpendicular * self.half_thickness
    }

    /// Which end of the segment this record describes.
    #[inline]
    pub fn end(&self) -> SegmentEnd {
        if self.is_start {
            SegmentEnd::Start
        } else {
            SegmentEnd::End
        }
    }

    /// Floor vertex index this record controls on the given side.
    #[inline]
    pub fn corner(&self, side: WallSide) -> usize {
        corner_index(self.end(), side)
    }
}

/// Endpoint records grouped by grid bucket.
///
/// Records keep their insertion order inside a bucket. Empty buckets are
/// dropped as soon as their last record leaves.
#[derive(Debug, Clone, Default)]
pub struct IntersectionRegistry {
    buckets: HashMap<GridKey, Vec<IntersectionRecord>>,
}

impl IntersectionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to a bucket.
    pub fn insert(&mut self, key: GridKey, record: IntersectionRecord) {
        self.buckets.entry(key).or_default().push(record);
    }

    /// Returns the records in a bucket, empty if the bucket does not exist.
    pub fn bucket(&self, key: GridKey) -> &[IntersectionRecord] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mutable access to one record.
    pub fn record_mut(
        &mut self,
        key: GridKey,
        segment: SegmentId,
        is_start: bool,
    ) -> Option<&mut IntersectionRecord> {
        self.buckets
            .get_mut(&key)?
            .iter_mut()
            .find(|r| r.segment == segment && r.is_start == is_start)
    }

    /// Removes one record from a bucket and returns it.
    pub fn take_record(&mut self, key: GridKey, segment: SegmentId, is_start: bool) -> Option<IntersectionRecord> {
        let records = self.buckets.get_mut(&key)?;
        let position = records
            .iter()
            .position(|r| r.segment == segment && r.is_start == is_start)?;
        let record = records.remove(position);
        if records.is_empty() {
            self.buckets.remove(&key);
        }
        Some(record)
    }

    /// Removes every record of a segment and returns the buckets it touched.
    pub fn remove_segment(&mut self, segment: SegmentId) -> Vec<GridKey> {
        let keys = self.keys_for_segment(segment);
        for key in &keys {
            if let Some(records) = self.buckets.get_mut(key) {
                records.retain(|r| r.segment != segment);
                if records.is_empty() {
                    self.buckets.remove(key);
                }
            }
        }
        keys
    }

    /// Buckets holding at least one record of `segment`, sorted.
    pub fn keys_for_segment(&self, segment: SegmentId) -> Vec<GridKey> {
        let mut keys: Vec<GridKey> = self
            .buckets
            .iter()
            .filter(|(_, records)| records.iter().any(|r| r.segment == segment))
            .map(|(key, _)| *key)
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Iterates over all non-empty buckets in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&GridKey, &[IntersectionRecord])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of non-empty buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}

/// Intersects two rays in the plan.
///
/// Returns `None` when the directions are parallel, i.e. the magnitude of
/// their cross product is below [`PARALLEL_EPSILON`]. Both directions are
/// treated as infinite lines, so the result may lie behind either origin.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use wall_network::intersection::intersect_rays;
///
/// let hit = intersect_rays(DVec2::new(0.0, 1.0), DVec2::X, DVec2::new(9.0, 0.0), DVec2::Y);
/// assert_eq!(hit, Some(DVec2::new(9.0, 1.0)));
/// assert_eq!(intersect_rays(DVec2::ZERO, DVec2::X, DVec2::Y, DVec2::X), None);
/// ```
pub fn intersect_rays(origin_a: DVec2, dir_a: DVec2, origin_b: DVec2, dir_b: DVec2) -> Option<DVec2> {
    let d1 = dir_a.normalize_or_zero();
    let d2 = dir_b.normalize_or_zero();
    let cross = d1.perp_dot(d2);
    if cross.abs() < PARALLEL_EPSILON {
        return None;
    }
    let delta = origin_b - origin_a;
    let t = delta.perp_dot(d2) / cross;
    Some(origin_a + d1 * t)
}

/// A corrected corner position for one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerWrite {
    /// Segment to modify
    pub segment: SegmentId,
    /// Floor vertex index (0..4); the ceiling vertex follows it
    pub floor_index: usize,
    /// New plan position of the corner
    pub point: DVec2,
}

/// Summary of one resolver pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Buckets solved in this pass
    pub buckets_corrected: usize,
    /// Corner writes applied, counting overwrites
    pub corners_written: usize,
    /// Boundary pairs skipped because they were parallel
    pub parallel_skips: usize,
}

#[derive(Debug, Default)]
struct BucketSolution {
    writes: Vec<CornerWrite>,
    parallel_skips: usize,
}

/// Computes the corner writes of one bucket in pair order.
fn solve_bucket(records: &[IntersectionRecord]) -> BucketSolution {
    let mut solution = BucketSolution::default();

    for (i, a) in records.iter().enumerate() {
        for b in &records[i + 1..] {
            for side in [WallSide::Inner, WallSide::Outer] {
                let (origin_a, origin_b) = match side {
                    WallSide::Inner => (a.inner_origin(), b.inner_origin()),
                    WallSide::Outer => (a.outer_origin(), b.outer_origin()),
                };
                match intersect_rays(origin_a, a.direction, origin_b, b.direction) {
                    Some(point) => {
                        for record in [a, b] {
                            solution.writes.push(CornerWrite {
                                segment: record.segment,
                                floor_index: record.corner(side),
                                point,
                            });
                        }
                    }
                    None => solution.parallel_skips += 1,
                }
            }
        }
    }

    solution
}

/// Tracks which buckets already carry mitred corners and solves the rest.
#[derive(Debug, Clone, Default)]
pub struct IntersectionResolver {
    corrected: HashSet<GridKey>,
}

impl IntersectionResolver {
    /// Creates a resolver with no corrected buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the bucket was solved and not invalidated since.
    pub fn is_corrected(&self, key: GridKey) -> bool {
        self.corrected.contains(&key)
    }

    /// Forces the bucket to be solved again on the next pass.
    pub fn invalidate(&mut self, key: GridKey) {
        self.corrected.remove(&key);
    }

    /// Forgets every corrected bucket.
    pub fn reset(&mut self) {
        self.corrected.clear();
    }

    /// Number of buckets currently marked corrected.
    pub fn corrected_count(&self) -> usize {
        self.corrected.len()
    }

    /// Solves every uncorrected bucket with two or more records.
    ///
    /// `apply` receives the writes of each bucket in pair order and returns
    /// false when the target segment no longer exists. Buckets are visited in
    /// key order.
    pub fn fix_all<F>(&mut self, registry: &IntersectionRegistry, mut apply: F) -> ResolveReport
    where
        F: FnMut(&CornerWrite) -> bool,
    {
        let mut pending: Vec<GridKey> = registry
            .iter()
            .filter(|(key, records)| records.len() >= 2 && !self.corrected.contains(*key))
            .map(|(key, _)| *key)
            .collect();
        pending.sort_unstable();

        let solutions: Vec<BucketSolution> = pending
            .par_iter()
            .map(|key| solve_bucket(registry.bucket(*key)))
            .collect();

        let mut report = ResolveReport::default();
        for (key, solution) in pending.into_iter().zip(solutions) {
            for write in &solution.writes {
                if apply(write) {
                    report.corners_written += 1;
                } else {
                    log::warn!("corner write for missing segment {} at {}", write.segment, key);
                }
            }
            report.parallel_skips += solution.parallel_skips;
            report.buckets_corrected += 1;
            self.corrected.insert(key);
        }

        if report.buckets_corrected > 0 {
            log::debug!(
                "resolved {} buckets: {} corners written, {} parallel skips",
                report.buckets_corrected,
                report.corners_written,
                report.parallel_skips
            );
        }
        report
    }
}

//! # Wall Network
//!
//! Turns 2D polylines into a watertight network of 3D wall boxes.
//!
//! ## Architecture
//!
//! ```text
//! points ─► WallPathManager ─┬─► WallGraph            (topology)
//!                            ├─► SegmentBuilder       (8-vertex boxes, wall-mesh)
//!                            ├─► IntersectionRegistry (endpoints by grid key)
//!                            └─► IntersectionResolver (mitred corners)
//!
//! drawing fragments ─► PathMerger ─► WallPathManager
//! ```
//!
//! Endpoints are matched through [`spatial::GridKey`], so points that differ
//! only by float noise meet in one bucket. Segments are deduplicated by
//! [`spatial::LineKey`] regardless of direction.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::WallConfig;
//! use glam::DVec2;
//! use wall_network::{GridKey, WallPathManager};
//!
//! let mut manager = WallPathManager::new(WallConfig::new(2.0, 3.0, 1.0).unwrap());
//! let corner = DVec2::new(10.0, 0.0);
//! manager.create_path(&[DVec2::ZERO, corner, DVec2::new(10.0, 10.0)]);
//!
//! assert_eq!(manager.intersections_at_point(GridKey::from_point(corner)).len(), 2);
//! assert!(manager.is_point_corrected(GridKey::from_point(corner)));
//! ```

pub mod error;
pub mod graph;
pub mod ids;
pub mod import;
pub mod intersection;
pub mod manager;
pub mod merge;
pub mod spatial;

pub use error::{NetworkError, NetworkResult};
pub use graph::WallGraph;
pub use ids::{EdgeId, PathId, SegmentId, VertexId};
pub use import::{geometric_median, prepare_import, DrawingUnits, PreparedImport, RawImport};
pub use intersection::{IntersectionRecord, IntersectionRegistry, IntersectionResolver, ResolveReport};
pub use manager::{PathEvent, WallPathManager};
pub use merge::PathMerger;
pub use spatial::{to_grid_key, GridKey, LineKey};

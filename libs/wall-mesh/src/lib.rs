//! # Wall Mesh
//!
//! Browser-safe mesh generation for wall segments.
//! Extrudes a 2D plan segment into an 8-vertex box with a fixed vertex
//! layout that the corner solver in `wall-network` rewrites in place.
//!
//! ## Architecture
//!
//! ```text
//! plan segment (DVec2 start/end) → SegmentBuilder → WallSegment (8 vertices + Mesh)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use wall_mesh::SegmentBuilder;
//!
//! let builder = SegmentBuilder::new(3.0);
//! let segment = builder
//!     .build_between(DVec2::ZERO, DVec2::new(10.0, 0.0), 1.0)
//!     .unwrap();
//! assert_eq!(segment.mesh().vertex_count(), 8);
//! assert_eq!(segment.mesh().triangle_count(), 12);
//! ```

pub mod error;
pub mod mesh;
pub mod segment;

pub use error::MeshError;
pub use mesh::Mesh;
pub use segment::{SegmentBuilder, WallSegment};

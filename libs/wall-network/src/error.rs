//! # Error Types
//!
//! Error types for wall network operations.
//!
//! ## Error Policy
//!
//! - Graph operations on unknown handles fail explicitly
//! - The path manager logs and ignores bad input instead of propagating it
//! - Import failures only abort the load that produced them

use crate::ids::{EdgeId, PathId, VertexId};
use config::constants::ConfigError;
use thiserror::Error;
use wall_mesh::MeshError;

/// Errors that can occur during wall network operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// A vertex handle that is not in the graph.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(VertexId),

    /// An edge handle that is not in the graph.
    #[error("Unknown edge: {0}")]
    UnknownEdge(EdgeId),

    /// A path id that was never created or has been removed.
    #[error("Unknown path: {0}")]
    UnknownPath(PathId),

    /// A caller-assigned path id is already in use.
    #[error("Path already exists: {0}")]
    PathExists(PathId),

    /// `u32::MAX` is kept free so automatic ids never wrap.
    #[error("Path id {0} is reserved")]
    ReservedPathId(PathId),

    /// A point with a NaN or infinite coordinate.
    #[error("Non-finite point {0}")]
    NonFinitePoint(glam::DVec2),

    /// Both endpoints of a segment fall into the same grid bucket.
    #[error("Degenerate segment between {start} and {end}")]
    DegenerateSegment {
        /// Scaled start point
        start: glam::DVec2,
        /// Scaled end point
        end: glam::DVec2,
    },

    /// Update input does not line up with the stored path.
    #[error("Path {path} has {expected} points, update supplied {actual}")]
    PointCountMismatch {
        /// Path being updated
        path: PathId,
        /// Stored point count
        expected: usize,
        /// Supplied point count
        actual: usize,
    },

    /// Segment mesh generation failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Invalid runtime configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A drawing import could not be turned into wall paths.
    #[error("Import failed: {message}")]
    Import {
        /// What went wrong
        message: String,
    },
}

impl NetworkError {
    /// Creates an import error.
    pub fn import(message: impl Into<String>) -> Self {
        Self::Import {
            message: message.into(),
        }
    }
}

/// Result type alias for wall network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;

//! # Spatial Keys
//!
//! Quantizes plan points to integer grid keys so that endpoints produced by
//! independent edits compare equal when they are within a fraction of a grid
//! cell, and builds direction-independent keys for segments.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//! use wall_network::spatial::{GridKey, LineKey};
//!
//! let a = GridKey::from_point(DVec2::new(1.0, 2.0));
//! let b = GridKey::from_point(DVec2::new(1.0001, 1.9999));
//! assert_eq!(a, b);
//!
//! let forward = LineKey::from_points(DVec2::ZERO, DVec2::new(5.0, 0.0));
//! let backward = LineKey::from_points(DVec2::new(5.0, 0.0), DVec2::ZERO);
//! assert_eq!(forward, backward);
//! ```

#[cfg(test)]
mod tests;

use config::constants::GRID_SCALE;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer grid cell of a quantized plan point.
///
/// Ordering is lexicographic on `x`, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridKey {
    /// Rounded `x * scale`
    pub x: i64,
    /// Rounded `y * scale`
    pub y: i64,
}

impl GridKey {
    /// Creates a key from raw grid coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Quantizes a point with the default [`GRID_SCALE`].
    #[inline]
    pub fn from_point(point: DVec2) -> Self {
        Self::from_point_scaled(point, GRID_SCALE)
    }

    /// Quantizes a point with an explicit scale.
    ///
    /// Rounds half away from zero, so the key is symmetric around the origin.
    #[inline]
    pub fn from_point_scaled(point: DVec2, scale: f64) -> Self {
        Self {
            x: (point.x * scale).round() as i64,
            y: (point.y * scale).round() as i64,
        }
    }

    /// Returns the centre of the cell in plan coordinates.
    #[inline]
    pub fn to_point(self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64) / GRID_SCALE
    }
}

impl fmt::Display for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Quantizes a point with the default grid scale.
#[inline]
pub fn to_grid_key(point: DVec2) -> GridKey {
    GridKey::from_point(point)
}

/// Unordered pair of grid keys identifying a segment regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineKey {
    a: GridKey,
    b: GridKey,
}

impl LineKey {
    /// Creates a key with the endpoints sorted so that `a <= b`.
    pub fn new(a: GridKey, b: GridKey) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Quantizes both points and builds the key.
    pub fn from_points(a: DVec2, b: DVec2) -> Self {
        Self::new(GridKey::from_point(a), GridKey::from_point(b))
    }

    /// Returns the sorted endpoints.
    #[inline]
    pub fn endpoints(&self) -> (GridKey, GridKey) {
        (self.a, self.b)
    }

    /// True if both endpoints share one grid cell.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

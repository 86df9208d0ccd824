//! Centralized configuration values shared across the wall network pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance for zero-length checks on segment directions.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

/// Multiplier applied to plan coordinates before rounding them to a grid key.
///
/// Endpoints closer than half a grid cell (`0.5 / GRID_SCALE`) in both axes
/// collapse to the same key when they share a cell.
///
/// # Examples
/// ```
/// use config::constants::GRID_SCALE;
/// let cell = 1.0 / GRID_SCALE;
/// assert!(cell <= 1.0e-3);
/// ```
pub const GRID_SCALE: f64 = 1000.0;

/// Threshold on the cross product of two unit directions below which the
/// offset lines are treated as parallel and no mitre is computed.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_EPSILON;
/// let cross: f64 = 0.0;
/// assert!(cross.abs() < PARALLEL_EPSILON);
/// ```
pub const PARALLEL_EPSILON: f64 = 1.0e-4;

// =============================================================================
// WALL DEFAULTS
// =============================================================================

/// Default wall height in working units.
pub const DEFAULT_WALL_HEIGHT: f64 = 3.0;

/// Default wall thickness in working units.
pub const DEFAULT_WALL_THICKNESS: f64 = 0.2;

/// Default magnification applied to incoming plan coordinates.
pub const DEFAULT_MAGNIFICATION: f64 = 1.0;

/// Flat material color used for wall meshes (RGBA).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_WALL_COLOR;
/// assert_eq!(DEFAULT_WALL_COLOR[3], 1.0);
/// ```
pub const DEFAULT_WALL_COLOR: [f32; 4] = [0.85, 0.85, 0.82, 1.0];

// =============================================================================
// IMPORT CONSTANTS
// =============================================================================

/// Iteration cap for the geometric median used to centre imported drawings.
pub const MEDIAN_MAX_ITERATIONS: usize = 100;

/// Convergence tolerance for the geometric median.
///
/// # Examples
/// ```
/// use config::constants::MEDIAN_TOLERANCE;
/// assert!(MEDIAN_TOLERANCE > 0.0);
/// ```
pub const MEDIAN_TOLERANCE: f64 = 1.0e-4;

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Dimensions applied to every generated wall.
///
/// # Examples
/// ```
/// use config::constants::WallConfig;
/// let config = WallConfig::default();
/// assert!(config.wall_height > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallConfig {
    /// Full wall thickness; each side is offset by half of it.
    pub wall_thickness: f64,
    /// Extrusion height along +Z.
    pub wall_height: f64,
    /// Uniform scale applied to incoming plan coordinates.
    pub magnification: f64,
}

impl WallConfig {
    /// Builds a configuration, rejecting non-positive or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, WallConfig};
    /// let cfg = WallConfig::new(2.0, 3.0, 0.5).expect("valid config");
    /// assert_eq!(cfg.magnification, 0.5);
    /// assert_eq!(
    ///     WallConfig::new(0.0, 3.0, 1.0).unwrap_err(),
    ///     ConfigError::InvalidThickness(0.0)
    /// );
    /// ```
    pub fn new(wall_thickness: f64, wall_height: f64, magnification: f64) -> Result<Self, ConfigError> {
        if !is_positive(wall_thickness) {
            return Err(ConfigError::InvalidThickness(wall_thickness));
        }
        if !is_positive(wall_height) {
            return Err(ConfigError::InvalidHeight(wall_height));
        }
        if !is_positive(magnification) {
            return Err(ConfigError::InvalidMagnification(magnification));
        }
        Ok(Self {
            wall_thickness,
            wall_height,
            magnification,
        })
    }

    /// Half of the wall thickness, the offset of each boundary line.
    #[inline]
    pub fn half_thickness(&self) -> f64 {
        self.wall_thickness / 2.0
    }
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            wall_thickness: DEFAULT_WALL_THICKNESS,
            wall_height: DEFAULT_WALL_HEIGHT,
            magnification: DEFAULT_MAGNIFICATION,
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the wall thickness is zero, negative or not finite.
    InvalidThickness(f64),
    /// Raised when the wall height is zero, negative or not finite.
    InvalidHeight(f64),
    /// Raised when the magnification is zero, negative or not finite.
    InvalidMagnification(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThickness(value) => {
                write!(f, "wall_thickness must be positive: {value}")
            }
            ConfigError::InvalidHeight(value) => {
                write!(f, "wall_height must be positive: {value}")
            }
            ConfigError::InvalidMagnification(value) => {
                write!(f, "magnification must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;

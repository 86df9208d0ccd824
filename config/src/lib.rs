//! # Config Crate
//!
//! Centralized configuration constants for the wall network pipeline.
//! Quantization scales, solver tolerances and wall dimensions are defined
//! here so the mesh and network crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{WallConfig, GRID_SCALE, PARALLEL_EPSILON};
//!
//! // Grid keys are coordinates multiplied by GRID_SCALE and rounded.
//! let key_x = (2.5_f64 * GRID_SCALE).round() as i64;
//! assert_eq!(key_x, 2500);
//!
//! // Rays whose unit directions cross below this are treated as parallel.
//! assert!(PARALLEL_EPSILON < 1e-3);
//!
//! let cfg = WallConfig::new(0.2, 3.0, 1.0).unwrap();
//! assert_eq!(cfg.half_thickness(), 0.1);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated**: Runtime configuration is checked on construction

pub mod constants;

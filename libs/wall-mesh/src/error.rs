//! # Mesh Errors
//!
//! Error types for wall mesh generation.

use thiserror::Error;

/// Errors that can occur during wall mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Zero-length segment, zero perpendicular or non-positive extent.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// The extruded box has a collapsed or non-finite face.
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("start == end");
        assert!(err.to_string().contains("Degenerate"));
        assert!(err.to_string().contains("start == end"));
        assert!(MeshError::validation("NaN corner").to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}

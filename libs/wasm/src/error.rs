//! Errors raised at the JS boundary before they are flattened into strings.

use config::constants::ConfigError;
use thiserror::Error;
use wall_network::NetworkError;

/// Failure of a host-facing call.
#[derive(Error, Debug)]
pub enum BoundaryError {
    /// Flat coordinate buffers must hold x/y pairs.
    #[error("Coordinate buffer has odd length {0}")]
    OddCoordinates(usize),

    /// The manager refused the points, see the log for the reason.
    #[error("Path rejected: {0}")]
    Rejected(&'static str),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for boundary calls.
pub type BoundaryResult<T> = Result<T, BoundaryError>;

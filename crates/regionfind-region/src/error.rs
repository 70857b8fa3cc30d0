//! Error types for regionfind-region

use thiserror::Error;

/// Errors that can occur during region finding
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] regionfind_core::Error),

    /// Image without pixels
    #[error("invalid image: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

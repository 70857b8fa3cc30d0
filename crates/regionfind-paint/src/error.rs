//! Error types for regionfind-paint

use thiserror::Error;

/// Errors that can occur while driving a paint session
#[derive(Debug, Error)]
pub enum PaintError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] regionfind_core::Error),

    /// Region finding error
    #[error("region error: {0}")]
    Region(#[from] regionfind_region::RegionError),

    /// Image I/O error
    #[error("I/O error: {0}")]
    Io(#[from] regionfind_io::IoError),

    /// An operation needed a frame before one was processed
    #[error("no frame has been processed yet")]
    NoFrame,

    /// Nothing to recolor: no region pass has run yet
    #[error("no regions have been found yet")]
    NoRegions,

    /// Frame size differs from the canvas
    #[error("frame is {}x{}, canvas is {}x{}", actual.0, actual.1, expected.0, expected.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type for paint operations
pub type PaintResult<T> = Result<T, PaintError>;

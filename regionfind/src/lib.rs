//! regionfind - Color region growing for Rust
//!
//! Finds connected regions of pixels whose color is within a threshold of
//! a target color, keeps the most recent result for largest-region
//! queries, recolors regions for display, and drives a paint session that
//! follows the largest region across frames.
//!
//! # Example
//!
//! ```
//! use regionfind::{Color, Image};
//! use regionfind::region::{RegionOptions, find_regions};
//!
//! let image = Image::new_filled(16, 16, Color::new(10, 200, 10)).unwrap();
//! let regions = find_regions(&image, Color::GREEN, &RegionOptions::new(60, 50)).unwrap();
//! assert_eq!(regions.largest().unwrap().len(), 256);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use regionfind_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use regionfind_io as io;
pub use regionfind_paint as paint;
pub use regionfind_region as region;

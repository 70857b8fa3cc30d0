//! regionfind-region - Color region growing
//!
//! This crate finds connected regions of pixels whose color is close to a
//! target color:
//!
//! - **Color matching** - Per-channel threshold test ([`colors_match`])
//! - **Region growing** - Breadth-first flood fill from every unclaimed
//!   match ([`find_regions`])
//! - **Region store** - Most recent result and largest-region query
//!   ([`RegionFinder`], [`RegionSet::largest`])
//! - **Visualization** - Random color per region ([`recolor`])
//!
//! # Examples
//!
//! ## Finding regions
//!
//! ```
//! use regionfind_core::{Color, Image};
//! use regionfind_region::{RegionOptions, find_regions};
//!
//! let mut image = Image::new_filled(20, 20, Color::BLACK).unwrap().to_mut();
//! for y in 2..10 {
//!     for x in 2..10 {
//!         image.set_color(x, y, Color::new(250, 10, 10)).unwrap();
//!     }
//! }
//! let image: Image = image.into();
//!
//! let regions = find_regions(&image, Color::RED, &RegionOptions::default()).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions.largest().unwrap().len(), 64);
//! ```
//!
//! ## Keeping the latest result
//!
//! ```
//! use regionfind_core::{Color, Image};
//! use regionfind_region::{RegionFinder, RegionOptions};
//!
//! let image = Image::new_filled(10, 10, Color::BLUE).unwrap();
//! let mut finder = RegionFinder::new(RegionOptions::new(20, 10));
//! assert!(finder.largest_region().is_none());
//!
//! finder.find_regions(&image, Color::BLUE).unwrap();
//! assert_eq!(finder.largest_region().unwrap().len(), 100);
//! ```
//!
//! ## Recoloring
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use regionfind_core::{Color, Image};
//! use regionfind_region::{RegionOptions, find_regions, recolor_with_rng};
//!
//! let image = Image::new_filled(8, 8, Color::WHITE).unwrap();
//! let regions = find_regions(&image, Color::WHITE, &RegionOptions::new(20, 0)).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let out = recolor_with_rng(&image, &regions, &mut rng).unwrap();
//! assert_eq!(out.dimensions(), (8, 8));
//! ```

pub mod error;
pub mod finder;
pub mod grow;
pub mod mask;
pub mod matcher;
pub mod recolor;
pub mod region;

pub use error::{RegionError, RegionResult};
pub use finder::RegionFinder;
pub use grow::{
    ConnectivityType, DEFAULT_MIN_SIZE, RegionOptions, ScanIter, ScanOrder, find_regions,
};
pub use mask::VisitedMask;
pub use matcher::{DEFAULT_THRESHOLD, colors_match};
pub use recolor::{random_color, recolor, recolor_with_rng};
pub use region::{Bounds, Region, RegionSet};

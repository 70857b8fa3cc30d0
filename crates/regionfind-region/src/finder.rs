//! Region store
//!
//! [`RegionFinder`] runs [`find_regions`] with fixed options and keeps the
//! result of the most recent pass for later queries.

use crate::error::RegionResult;
use crate::grow::{RegionOptions, find_regions};
use crate::region::{Region, RegionSet};
use regionfind_core::{Color, Image};

/// Finder holding the regions of the most recent pass
#[derive(Debug, Clone, Default)]
pub struct RegionFinder {
    options: RegionOptions,
    regions: Option<RegionSet>,
}

impl RegionFinder {
    /// Create a finder with the given options and no stored regions.
    pub fn new(options: RegionOptions) -> Self {
        Self {
            options,
            regions: None,
        }
    }

    pub fn options(&self) -> &RegionOptions {
        &self.options
    }

    /// Replace the options used by later passes. Stored regions are kept.
    pub fn set_options(&mut self, options: RegionOptions) {
        self.options = options;
    }

    /// Run a pass over `image` and store the result, replacing any
    /// earlier one.
    ///
    /// On error the previously stored regions are left untouched.
    pub fn find_regions(&mut self, image: &Image, target: Color) -> RegionResult<&RegionSet> {
        let set = find_regions(image, target, &self.options)?;
        Ok(self.regions.insert(set))
    }

    /// Regions of the most recent pass, `None` before the first pass.
    pub fn regions(&self) -> Option<&RegionSet> {
        self.regions.as_ref()
    }

    /// Largest region of the most recent pass.
    ///
    /// Returns `None` before the first pass or when it found nothing.
    pub fn largest_region(&self) -> Option<&Region> {
        self.regions.as_ref()?.largest()
    }

    /// Forget the stored regions.
    pub fn clear(&mut self) {
        self.regions = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_before_find() {
        let finder = RegionFinder::default();
        assert!(finder.regions().is_none());
        assert!(finder.largest_region().is_none());
    }

    #[test]
    fn test_find_replaces_previous() {
        let mut finder = RegionFinder::new(RegionOptions::new(10, 0));
        let red = Image::new_filled(4, 4, Color::RED).unwrap();

        let found = finder.find_regions(&red, Color::RED).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(finder.largest_region().unwrap().len(), 16);

        finder.find_regions(&red, Color::BLUE).unwrap();
        assert!(finder.regions().unwrap().is_empty());
        assert!(finder.largest_region().is_none());

        finder.clear();
        assert!(finder.regions().is_none());
    }

    #[test]
    fn test_set_options_keeps_regions() {
        let mut finder = RegionFinder::new(RegionOptions::new(10, 0));
        let red = Image::new_filled(2, 2, Color::RED).unwrap();
        finder.find_regions(&red, Color::RED).unwrap();
        finder.set_options(RegionOptions::new(10, 100));
        assert_eq!(finder.options().min_size, 100);
        assert_eq!(finder.largest_region().unwrap().len(), 4);
    }
}

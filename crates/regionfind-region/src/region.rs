//! Regions and region sets
//!
//! A [`Region`] is the list of pixels claimed by one flood fill, in
//! discovery order. A [`RegionSet`] holds the regions kept by one
//! `find_regions` pass, in scan order.

use regionfind_core::Point;

/// Axis-aligned bounding box of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Pixels of one connected, color-matching region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    points: Vec<Point>,
}

impl Region {
    /// Create a region from points in discovery order.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The pixel the flood fill started from.
    pub fn seed(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Pixels in discovery order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Smallest box covering every pixel, `None` for an empty region.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.seed()?;
        let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        Some(Bounds {
            x: x0,
            y: y0,
            w: x1 - x0 + 1,
            h: y1 - y0 + 1,
        })
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Regions found by one pass, in scan order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap regions already in scan order.
    pub fn from_regions(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Total number of pixels across all regions.
    pub fn pixel_count(&self) -> usize {
        self.regions.iter().map(Region::len).sum()
    }

    /// The region with the most pixels.
    ///
    /// Ties go to the region discovered first. Returns `None` for an
    /// empty set.
    pub fn largest(&self) -> Option<&Region> {
        let mut best: Option<&Region> = None;
        for region in &self.regions {
            if best.is_none_or(|b| region.len() > b.len()) {
                best = Some(region);
            }
        }
        best
    }

    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

impl IntoIterator for RegionSet {
    type Item = Region;
    type IntoIter = std::vec::IntoIter<Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(y: u32, len: u32) -> Region {
        Region::from_points((0..len).map(|x| Point::new(x, y)).collect())
    }

    #[test]
    fn test_largest_empty() {
        assert!(RegionSet::new().largest().is_none());
    }

    #[test]
    fn test_largest_single() {
        let set = RegionSet::from_regions(vec![line(0, 3)]);
        assert_eq!(set.largest(), Some(&line(0, 3)));
    }

    #[test]
    fn test_largest_strict_max() {
        let set = RegionSet::from_regions(vec![line(0, 3), line(1, 7), line(2, 5)]);
        assert_eq!(set.largest().unwrap().len(), 7);
        assert_eq!(set.largest().unwrap().seed(), Some(Point::new(0, 1)));
    }

    #[test]
    fn test_largest_tie_prefers_first() {
        let set = RegionSet::from_regions(vec![line(0, 2), line(1, 6), line(2, 6)]);
        assert_eq!(set.largest().unwrap().seed(), Some(Point::new(0, 1)));
    }

    #[test]
    fn test_bounds() {
        let region = Region::from_points(vec![
            Point::new(4, 2),
            Point::new(5, 3),
            Point::new(3, 3),
            Point::new(4, 4),
        ]);
        let b = region.bounds().unwrap();
        assert_eq!(
            b,
            Bounds {
                x: 3,
                y: 2,
                w: 3,
                h: 3
            }
        );
        assert!(Region::default().bounds().is_none());
    }

    #[test]
    fn test_pixel_count() {
        let set = RegionSet::from_regions(vec![line(0, 2), line(1, 6)]);
        assert_eq!(set.pixel_count(), 8);
        assert_eq!(set.iter().count(), 2);
        assert_eq!(set.into_regions().len(), 2);
    }
}

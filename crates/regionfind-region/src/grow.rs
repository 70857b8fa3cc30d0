//! Region growing
//!
//! Scans an image for pixels that match a target color and grows each
//! unclaimed match into a connected region with a breadth-first flood
//! fill. Regions at or below the minimum size are dropped, but their
//! pixels stay claimed for the rest of the pass.

use crate::error::{RegionError, RegionResult};
use crate::mask::VisitedMask;
use crate::matcher::{DEFAULT_THRESHOLD, colors_match};
use crate::region::{Region, RegionSet};
use regionfind_core::{Color, Image, Point};
use std::collections::VecDeque;

/// Default minimum region size. Kept regions are strictly larger.
pub const DEFAULT_MIN_SIZE: usize = 50;

/// Connectivity type for region growing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

/// Order in which seed pixels are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// x in the outer loop, y in the inner loop
    #[default]
    ColumnMajor,
    /// y in the outer loop, x in the inner loop
    RowMajor,
}

impl ScanOrder {
    /// Iterate every coordinate of a `width` x `height` grid in this order.
    pub fn points(self, width: u32, height: u32) -> ScanIter {
        ScanIter {
            order: self,
            width,
            height,
            outer: 0,
            inner: 0,
        }
    }
}

/// Iterator over grid coordinates in a [`ScanOrder`]
#[derive(Debug, Clone)]
pub struct ScanIter {
    order: ScanOrder,
    width: u32,
    height: u32,
    outer: u32,
    inner: u32,
}

impl Iterator for ScanIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let (outer_len, inner_len) = match self.order {
            ScanOrder::ColumnMajor => (self.width, self.height),
            ScanOrder::RowMajor => (self.height, self.width),
        };
        if inner_len == 0 || self.outer >= outer_len {
            return None;
        }
        let p = match self.order {
            ScanOrder::ColumnMajor => Point::new(self.outer, self.inner),
            ScanOrder::RowMajor => Point::new(self.inner, self.outer),
        };
        self.inner += 1;
        if self.inner == inner_len {
            self.inner = 0;
            self.outer += 1;
        }
        Some(p)
    }
}

/// Options for region growing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionOptions {
    /// Per-channel color threshold (strict)
    pub threshold: u32,
    /// Regions must have more pixels than this to be kept
    pub min_size: usize,
    /// Neighborhood used while growing
    pub connectivity: ConnectivityType,
    /// Seed scan order; decides the order of the returned regions
    pub scan_order: ScanOrder,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_size: DEFAULT_MIN_SIZE,
            connectivity: ConnectivityType::default(),
            scan_order: ScanOrder::default(),
        }
    }
}

impl RegionOptions {
    /// Create options with the given threshold and minimum size
    pub fn new(threshold: u32, min_size: usize) -> Self {
        Self {
            threshold,
            min_size,
            ..Self::default()
        }
    }

    /// Build options from signed values, as typed by a user.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if either value is
    /// negative or too large.
    pub fn from_signed(threshold: i64, min_size: i64) -> RegionResult<Self> {
        let threshold = u32::try_from(threshold).map_err(|_| {
            RegionError::InvalidParameters(format!("threshold out of range: {threshold}"))
        })?;
        let min_size = usize::try_from(min_size).map_err(|_| {
            RegionError::InvalidParameters(format!("minimum region size out of range: {min_size}"))
        })?;
        Ok(Self::new(threshold, min_size))
    }

    /// Set the color threshold
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the minimum region size
    pub fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Set the scan order
    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }
}

/// Find every region of pixels matching `target`.
///
/// Each pixel belongs to at most one region. Regions come back in the
/// order their seeds were reached by the scan, and each region lists its
/// pixels in flood-fill discovery order starting with the seed.
///
/// # Arguments
///
/// * `image` - Input image
/// * `target` - Color to look for
/// * `options` - Threshold, minimum size, connectivity and scan order
///
/// # Errors
///
/// Returns [`RegionError::InvalidImage`] if the image has no pixels.
///
/// # Examples
///
/// ```
/// use regionfind_core::{Color, Image};
/// use regionfind_region::{RegionOptions, find_regions};
///
/// let image = Image::new_filled(3, 3, Color::RED).unwrap();
/// let options = RegionOptions::new(10, 0);
/// let regions = find_regions(&image, Color::RED, &options).unwrap();
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions.largest().unwrap().len(), 9);
/// ```
pub fn find_regions(
    image: &Image,
    target: Color,
    options: &RegionOptions,
) -> RegionResult<RegionSet> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(RegionError::InvalidImage { width, height });
    }

    let mut visited = VisitedMask::new(width, height);
    let mut queue = VecDeque::new();
    let mut regions = Vec::new();
    let mut discarded = 0usize;

    for seed in options.scan_order.points(width, height) {
        if visited.is_set(seed.x, seed.y) {
            continue;
        }
        if !colors_match(target, image.color_unchecked(seed.x, seed.y), options.threshold) {
            continue;
        }

        let region = grow_region(image, target, seed, options, &mut visited, &mut queue);
        if region.len() > options.min_size {
            regions.push(region);
        } else {
            log::trace!(
                "discarding region at {seed} with {} pixels (minimum {})",
                region.len(),
                options.min_size
            );
            discarded += 1;
        }
    }

    let set = RegionSet::from_regions(regions);
    log::debug!(
        "found {} regions ({} pixels) matching {target} in {width}x{height} image, \
         {discarded} discarded, {} pixels claimed",
        set.len(),
        set.pixel_count(),
        visited.count(),
    );
    Ok(set)
}

/// Flood fill from `seed`, claiming pixels in `visited`.
fn grow_region(
    image: &Image,
    target: Color,
    seed: Point,
    options: &RegionOptions,
    visited: &mut VisitedMask,
    queue: &mut VecDeque<(u32, u32)>,
) -> Region {
    let width = image.width();
    let height = image.height();
    let mut points = Vec::new();

    queue.clear();
    queue.push_back((seed.x, seed.y));

    while let Some((x, y)) = queue.pop_front() {
        // A pixel can be queued more than once before it is claimed
        if !visited.set(x, y) {
            continue;
        }
        points.push(Point::new(x, y));

        let x0 = x.saturating_sub(1);
        let x1 = (x + 1).min(width - 1);
        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(height - 1);

        for ny in y0..=y1 {
            for nx in x0..=x1 {
                if nx == x && ny == y {
                    continue;
                }
                if options.connectivity == ConnectivityType::FourWay && nx != x && ny != y {
                    continue;
                }
                if visited.is_set(nx, ny) {
                    continue;
                }
                if colors_match(target, image.color_unchecked(nx, ny), options.threshold) {
                    queue.push_back((nx, ny));
                }
            }
        }
    }

    Region::from_points(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u32, height: u32, on: &[(u32, u32)]) -> Image {
        let mut image = Image::new_filled(width, height, Color::BLACK)
            .unwrap()
            .to_mut();
        for &(x, y) in on {
            image.set_color(x, y, Color::WHITE).unwrap();
        }
        image.into()
    }

    #[test]
    fn test_scan_orders() {
        let col: Vec<_> = ScanOrder::ColumnMajor.points(2, 3).collect();
        assert_eq!(
            col,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2)
            ]
        );
        let row: Vec<_> = ScanOrder::RowMajor.points(2, 3).collect();
        assert_eq!(row.len(), 6);
        assert_eq!(row[1], Point::new(1, 0));
        assert_eq!(ScanOrder::RowMajor.points(0, 3).count(), 0);
    }

    #[test]
    fn test_defaults() {
        let opts = RegionOptions::default();
        assert_eq!(opts.threshold, 20);
        assert_eq!(opts.min_size, 50);
        assert_eq!(opts.connectivity, ConnectivityType::EightWay);
        assert_eq!(opts.scan_order, ScanOrder::ColumnMajor);
    }

    #[test]
    fn test_from_signed_rejects_negative() {
        assert!(matches!(
            RegionOptions::from_signed(-1, 10),
            Err(RegionError::InvalidParameters(_))
        ));
        assert!(matches!(
            RegionOptions::from_signed(10, -5),
            Err(RegionError::InvalidParameters(_))
        ));
        let opts = RegionOptions::from_signed(0, 0).unwrap();
        assert_eq!((opts.threshold, opts.min_size), (0, 0));
    }

    #[test]
    fn test_uniform_3x3() {
        let image = Image::new_filled(3, 3, Color::new(12, 34, 56)).unwrap();
        let regions =
            find_regions(&image, Color::new(12, 34, 56), &RegionOptions::new(10, 0)).unwrap();
        assert_eq!(regions.len(), 1);
        let region = regions.get(0).unwrap();
        assert_eq!(region.len(), 9);
        assert_eq!(region.seed(), Some(Point::new(0, 0)));
    }

    #[test]
    fn test_diagonal_connectivity() {
        let image = frame(3, 3, &[(0, 0), (1, 1), (2, 2)]);
        let eight = find_regions(&image, Color::WHITE, &RegionOptions::new(10, 0)).unwrap();
        assert_eq!(eight.len(), 1);
        assert_eq!(eight.largest().unwrap().len(), 3);

        let opts = RegionOptions::new(10, 0).with_connectivity(ConnectivityType::FourWay);
        let four = find_regions(&image, Color::WHITE, &opts).unwrap();
        assert_eq!(four.len(), 3);
        assert!(four.iter().all(|r| r.len() == 1));
    }

    #[test]
    fn test_min_size_is_strict() {
        let image = frame(4, 1, &[(0, 0), (1, 0), (3, 0)]);
        let regions = find_regions(&image, Color::WHITE, &RegionOptions::new(10, 1)).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions.largest().unwrap().len(), 2);

        let regions = find_regions(&image, Color::WHITE, &RegionOptions::new(10, 2)).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_no_match() {
        let image = Image::new_filled(5, 5, Color::BLACK).unwrap();
        let regions = find_regions(&image, Color::WHITE, &RegionOptions::new(10, 0)).unwrap();
        assert!(regions.is_empty());
        assert!(regions.largest().is_none());
    }

    #[test]
    fn test_region_order_follows_scan() {
        // Two single pixels: (2, 0) comes first row-major, (0, 2) first column-major
        let image = frame(3, 3, &[(2, 0), (0, 2)]);
        let col = find_regions(&image, Color::WHITE, &RegionOptions::new(10, 0)).unwrap();
        assert_eq!(col.get(0).unwrap().seed(), Some(Point::new(0, 2)));

        let opts = RegionOptions::new(10, 0).with_scan_order(ScanOrder::RowMajor);
        let row = find_regions(&image, Color::WHITE, &opts).unwrap();
        assert_eq!(row.get(0).unwrap().seed(), Some(Point::new(2, 0)));
    }

    #[test]
    fn test_discovery_order_is_breadth_first() {
        let image = Image::new_filled(5, 1, Color::WHITE).unwrap();
        let regions = find_regions(&image, Color::WHITE, &RegionOptions::new(10, 0)).unwrap();
        let xs: Vec<u32> = regions.get(0).unwrap().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4]);
    }
}

//! Pixel coordinates

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Integer pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance; 1 for 8-adjacent points.
    pub fn chessboard_distance(self, other: Point) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Check whether `other` is one of the 8 neighbors of this point.
    pub fn is_adjacent8(self, other: Point) -> bool {
        self.chessboard_distance(other) == 1
    }

    /// Check whether `other` is one of the 4 edge neighbors of this point.
    pub fn is_adjacent4(self, other: Point) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Parse `X,Y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| Error::InvalidParameter(format!("point needs 'X,Y', got '{s}'")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|e| Error::InvalidParameter(format!("bad point '{s}': {e}")))
        };
        Ok(Self::new(parse(x)?, parse(y)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency() {
        let p = Point::new(5, 5);
        assert!(p.is_adjacent8(Point::new(6, 6)));
        assert!(p.is_adjacent8(Point::new(5, 4)));
        assert!(!p.is_adjacent8(p));
        assert!(!p.is_adjacent8(Point::new(7, 5)));
        assert!(p.is_adjacent4(Point::new(4, 5)));
        assert!(!p.is_adjacent4(Point::new(4, 4)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("3, 4".parse::<Point>().unwrap(), Point::new(3, 4));
        assert!("3".parse::<Point>().is_err());
        assert!("-1,2".parse::<Point>().is_err());
    }
}

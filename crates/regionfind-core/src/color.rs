//! 8-bit RGB color

use crate::pixel;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// RGB color with 8 bits per channel
///
/// Alpha is a property of the stored pixel, not of the color, so it
/// never takes part in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    /// Build a color from the low 24 bits of `value` (`0xRRGGBB`).
    pub const fn from_rgb24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Pack as `0xRRGGBB`.
    pub const fn to_rgb24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Color channels of a packed RGBA pixel word.
    #[inline]
    pub fn from_pixel(value: u32) -> Self {
        Self {
            r: pixel::red(value),
            g: pixel::green(value),
            b: pixel::blue(value),
        }
    }

    /// Opaque RGBA pixel word.
    #[inline]
    pub fn to_pixel(self) -> u32 {
        pixel::compose_rgb(self.r, self.g, self.b)
    }

    /// Largest absolute per-channel difference to `other`.
    pub fn max_channel_diff(self, other: Color) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse `R,G,B` decimal triples or `#RRGGBB` hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(Error::InvalidParameter(format!("bad hex color: {s}")));
            }
            let value = u32::from_str_radix(hex, 16)
                .map_err(|_| Error::InvalidParameter(format!("bad hex color: {s}")))?;
            return Ok(Self::from_rgb24(value));
        }

        let channels = s
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::InvalidParameter(format!("bad color '{s}': {e}")))?;
        match channels.as_slice() {
            &[r, g, b] => Ok(Self::new(r, g, b)),
            _ => Err(Error::InvalidParameter(format!(
                "color needs three channels, got '{s}'"
            ))),
        }
    }
}

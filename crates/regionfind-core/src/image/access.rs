//! Pixel access functions
//!
//! Checked accessors return `None` / [`Error::OutOfBounds`] outside the
//! image; the `_unchecked` variants panic instead.

use super::{Image, ImageMut};
use crate::color::Color;
use crate::error::{Error, Result};
use crate::pixel;

impl Image {
    /// Get the RGBA word at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.contains(x, y)
            .then(|| self.inner.data[self.inner.index(x, y)])
    }

    /// Get the RGBA word without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get the color at (x, y), ignoring alpha.
    pub fn get_color(&self, x: u32, y: u32) -> Option<Color> {
        self.get_pixel(x, y).map(Color::from_pixel)
    }

    /// Get the color without bounds checking.
    #[inline]
    pub fn color_unchecked(&self, x: u32, y: u32) -> Color {
        Color::from_pixel(self.get_pixel_unchecked(x, y))
    }

    /// Get RGBA values at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(pixel::extract_rgba)
    }
}

impl ImageMut {
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.contains(x, y)
            .then(|| self.inner.data[self.inner.index(x, y)])
    }

    pub fn get_color(&self, x: u32, y: u32) -> Option<Color> {
        self.get_pixel(x, y).map(Color::from_pixel)
    }

    /// Set the RGBA word at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set the RGBA word without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Write an opaque `color` at (x, y).
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.set_pixel(x, y, color.to_pixel())
    }

    /// Write an RGBA pixel at (x, y).
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(x, y, pixel::compose_rgba(r, g, b, a))
    }
}

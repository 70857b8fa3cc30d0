//! Image - the RGBA raster container
//!
//! # Pixel layout
//!
//! - One 32-bit word per pixel, rows stored top to bottom
//! - Color order is RGBA (red in MSB), see [`crate::pixel`]
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `ImageMut` via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::pixel;
use std::sync::Arc;

/// Internal image data
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImageData {
    width: u32,
    height: u32,
    /// Row-major RGBA words, `width * height` long
    data: Vec<u32>,
}

impl ImageData {
    fn filled(width: u32, height: u32, value: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![value; pixel_count(width, height)],
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

#[inline]
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Immutable, shareable RGBA image
///
/// # Examples
///
/// ```
/// use regionfind_core::{Color, Image};
///
/// let image = Image::new_filled(64, 48, Color::WHITE).unwrap();
/// assert_eq!(image.width(), 64);
/// assert_eq!(image.get_color(10, 10), Some(Color::WHITE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with every pixel transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ImageData::filled(width, height, 0)?),
        })
    }

    /// Create a new image with every pixel set to an opaque `color`.
    pub fn new_filled(width: u32, height: u32, color: Color) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ImageData::filled(width, height, color.to_pixel())?),
        })
    }

    /// Build an opaque image from interleaved `R G B` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `bytes` is not exactly
    /// `width * height * 3` long.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        Self::from_interleaved(width, height, bytes, 3)
    }

    /// Build an image from interleaved `R G B A` bytes.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        Self::from_interleaved(width, height, bytes, 4)
    }

    fn from_interleaved(width: u32, height: u32, bytes: &[u8], channels: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = pixel_count(width, height) * channels;
        if bytes.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }

        let data = bytes
            .chunks_exact(channels)
            .map(|c| {
                let a = if channels == 4 { c[3] } else { pixel::OPAQUE };
                pixel::compose_rgba(c[0], c[1], c[2], a)
            })
            .collect();

        Ok(Self {
            inner: Arc::new(ImageData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Check whether `(x, y)` lies inside the image.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.inner.width && y < self.inner.height
    }

    /// Get raw access to the pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixel words of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = self.inner.index(0, y);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Interleaved `R G B A` bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.inner.data.len() * 4);
        for &p in &self.inner.data {
            let (r, g, b, a) = pixel::extract_rgba(p);
            out.extend_from_slice(&[r, g, b, a]);
        }
        out
    }

    /// Create a deep copy of this image.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Self {
            inner: Arc::new(ImageData::clone(&self.inner)),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: ImageData::clone(&self.inner),
        }
    }
}

/// Mutable image
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Image`] using `Into<Image>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.inner.width && y < self.inner.height
    }

    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: u32) {
        self.inner.data.fill(value);
    }
}

impl From<ImageMut> for Image {
    fn from(image: ImageMut) -> Self {
        Image {
            inner: Arc::new(image.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Image::new(0, 10),
            Err(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        ));
        assert!(Image::new(10, 0).is_err());
        assert!(Image::new_filled(0, 0, Color::RED).is_err());
    }

    #[test]
    fn test_new_is_transparent_black() {
        let image = Image::new(3, 2).unwrap();
        assert_eq!(image.data().len(), 6);
        assert!(image.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_from_rgb_bytes() {
        let bytes = [1, 2, 3, 4, 5, 6];
        let image = Image::from_rgb_bytes(2, 1, &bytes).unwrap();
        assert_eq!(image.get_color(0, 0), Some(Color::new(1, 2, 3)));
        assert_eq!(image.get_color(1, 0), Some(Color::new(4, 5, 6)));
        assert_eq!(image.get_rgba(1, 0), Some((4, 5, 6, 255)));
    }

    #[test]
    fn test_from_bytes_length_checked() {
        assert!(matches!(
            Image::from_rgb_bytes(2, 2, &[0; 11]),
            Err(Error::BufferLength {
                expected: 12,
                actual: 11
            })
        ));
        assert!(Image::from_rgba_bytes(1, 1, &[0; 3]).is_err());
    }

    #[test]
    fn test_rgba_bytes_roundtrip() {
        let bytes: Vec<u8> = (0..24).collect();
        let image = Image::from_rgba_bytes(3, 2, &bytes).unwrap();
        assert_eq!(image.to_rgba_bytes(), bytes);
    }

    #[test]
    fn test_try_into_mut_shared() {
        let image = Image::new(2, 2).unwrap();
        let shared = image.clone();
        assert_eq!(image.ref_count(), 2);
        let image = image.try_into_mut().unwrap_err();
        drop(shared);
        assert!(image.try_into_mut().is_ok());
    }

    #[test]
    fn test_to_mut_leaves_source_untouched() {
        let image = Image::new_filled(2, 2, Color::BLUE).unwrap();
        let mut copy = image.to_mut();
        copy.set_color(0, 0, Color::RED).unwrap();
        let copy: Image = copy.into();
        assert_eq!(image.get_color(0, 0), Some(Color::BLUE));
        assert_eq!(copy.get_color(0, 0), Some(Color::RED));
        assert!(image.sizes_equal(&copy));
    }

    #[test]
    fn test_row_data() {
        let mut image = Image::new(3, 2).unwrap().to_mut();
        image.set_pixel(1, 1, 42).unwrap();
        let image: Image = image.into();
        assert_eq!(image.row_data(1), &[0, 42, 0]);
    }
}

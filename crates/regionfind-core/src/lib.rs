//! regionfind-core - Basic data structures for region growing
//!
//! This crate provides the fundamental data structures shared by the
//! regionfind crates:
//!
//! - [`Image`] / [`ImageMut`] - RGBA raster container (immutable / mutable)
//! - [`Color`] - 8-bit RGB color
//! - [`Point`] - Pixel coordinate
//! - [`pixel`] - Packing helpers for 32-bit RGBA pixel words

pub mod color;
pub mod error;
pub mod image;
pub mod point;

pub use color::Color;
pub use error::{Error, Result};
pub use image::{Image, ImageMut};
pub use point::Point;

/// Channel helpers for 32-bit RGBA pixel words.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod pixel {
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Alpha value of a fully opaque pixel.
    pub const OPAQUE: u8 = 255;

    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque 32-bit pixel.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, OPAQUE)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

}

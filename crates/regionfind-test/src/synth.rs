//! Synthetic test frames
//!
//! Frames are painted from a background color plus axis-aligned
//! blocks, so every expected region can be computed by hand.

use crate::error::TestResult;
use regionfind_core::{Color, Image, Point};

/// An axis-aligned block of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub color: Color,
}

impl Block {
    pub const fn new(x: u32, y: u32, w: u32, h: u32, color: Color) -> Self {
        Self { x, y, w, h, color }
    }

    /// Number of pixels covered.
    pub fn area(&self) -> usize {
        self.w as usize * self.h as usize
    }

    /// Every point of the block in row-major order.
    pub fn points(&self) -> Vec<Point> {
        (self.y..self.y + self.h)
            .flat_map(|y| (self.x..self.x + self.w).map(move |x| Point::new(x, y)))
            .collect()
    }
}

/// A frame filled with one color.
pub fn uniform(width: u32, height: u32, color: Color) -> TestResult<Image> {
    Ok(Image::new_filled(width, height, color)?)
}

/// A frame of `background` with `blocks` painted in order; later blocks
/// overwrite earlier ones and are clipped to the frame.
pub fn blocks(width: u32, height: u32, background: Color, blocks: &[Block]) -> TestResult<Image> {
    let mut image = Image::new_filled(width, height, background)?.to_mut();
    for block in blocks {
        for p in block.points() {
            if image.contains(p.x, p.y) {
                image.set_color(p.x, p.y, block.color)?;
            }
        }
    }
    Ok(image.into())
}

/// A frame where the color at (x, y) is `base` shifted by `step * (x + y)`
/// on the red channel, saturating at 255.
pub fn diagonal_gradient(width: u32, height: u32, base: Color, step: u8) -> TestResult<Image> {
    let mut image = Image::new(width, height)?.to_mut();
    for y in 0..height {
        for x in 0..width {
            let shift = (x + y).saturating_mul(step as u32).min(255) as u8;
            let color = Color::new(base.r.saturating_add(shift), base.g, base.b);
            image.set_color(x, y, color)?;
        }
    }
    Ok(image.into())
}

/// A frame with `color` on the pixels where `(x + y)` is even and
/// `other` elsewhere.
pub fn checkerboard(width: u32, height: u32, color: Color, other: Color) -> TestResult<Image> {
    let mut image = Image::new_filled(width, height, other)?.to_mut();
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 2 == 0 {
                image.set_color(x, y, color)?;
            }
        }
    }
    Ok(image.into())
}

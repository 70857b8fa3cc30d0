//! Paint session
//!
//! A [`PaintSession`] receives frames from a source, tracks the largest
//! region matching a picked target color, and lays the paint color down
//! on a canvas wherever that region is. Keys switch between the live
//! frame, a recolored view of the regions, and the canvas.

use crate::error::{PaintError, PaintResult};
use crate::options::{DisplayMode, PaintOptions};
use rand::Rng;
use regionfind_core::{Color, Image, ImageMut};
use regionfind_io::ImageFormat;
use regionfind_region::{RegionFinder, recolor_with_rng};
use std::path::Path;

/// Effect of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// The display mode changed
    Display(DisplayMode),
    /// The canvas was cleared
    Clear,
    /// The caller should save the recolored view
    SaveRecolored,
    /// The brush was toggled; holds the new state
    Brush(bool),
    /// The key has no binding
    Unknown(char),
}

/// State of one painting session
#[derive(Debug)]
pub struct PaintSession {
    options: PaintOptions,
    finder: RegionFinder,
    canvas: ImageMut,
    frame: Option<Image>,
    /// Frame the finder's regions were found on
    searched: Option<Image>,
    target: Option<Color>,
    brush: bool,
    mode: DisplayMode,
}

impl PaintSession {
    /// Create a session with a blank, fully transparent canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(width: u32, height: u32, options: PaintOptions) -> PaintResult<Self> {
        let canvas = Image::new(width, height)?.to_mut();
        Ok(Self {
            finder: RegionFinder::new(options.region.clone()),
            canvas,
            frame: None,
            searched: None,
            target: None,
            brush: options.brush,
            mode: options.display_mode,
            options,
        })
    }

    pub fn options(&self) -> &PaintOptions {
        &self.options
    }

    /// Canvas dimensions, which every frame must match.
    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    pub fn target(&self) -> Option<Color> {
        self.target
    }

    /// Set the target color directly.
    pub fn set_target(&mut self, color: Color) {
        log::info!("target color set to {color}");
        self.target = Some(color);
    }

    pub fn brush_enabled(&self) -> bool {
        self.brush
    }

    pub fn set_brush(&mut self, enabled: bool) {
        self.brush = enabled;
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// The latest frame, if any.
    pub fn frame(&self) -> Option<&Image> {
        self.frame.as_ref()
    }

    /// Region finder holding the latest pass.
    pub fn finder(&self) -> &RegionFinder {
        &self.finder
    }

    /// Take a new frame.
    ///
    /// With a target set and the brush on, runs a region pass and paints
    /// the largest region onto the canvas. Returns the number of pixels
    /// painted.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::DimensionMismatch`] if the frame size differs
    /// from the canvas; the session is left unchanged.
    pub fn process_frame(&mut self, frame: Image) -> PaintResult<usize> {
        let expected = self.canvas.dimensions();
        let actual = frame.dimensions();
        if expected != actual {
            return Err(PaintError::DimensionMismatch { expected, actual });
        }

        let frame = self.frame.insert(frame);
        let Some(target) = self.target else {
            return Ok(0);
        };
        if !self.brush {
            return Ok(0);
        }

        self.finder.find_regions(frame, target)?;
        self.searched = Some(frame.clone());

        let Some(region) = self.finder.largest_region() else {
            return Ok(0);
        };
        for p in region {
            self.canvas.set_color(p.x, p.y, self.options.paint_color)?;
        }
        log::debug!("painted {} pixels seeded at {:?}", region.len(), region.seed());
        Ok(region.len())
    }

    /// Use the color of the current frame at (x, y) as the target.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::NoFrame`] before the first frame, or an
    /// out-of-bounds error if (x, y) is outside the frame.
    pub fn pick_target(&mut self, x: u32, y: u32) -> PaintResult<Color> {
        let frame = self.frame.as_ref().ok_or(PaintError::NoFrame)?;
        let color = frame
            .get_color(x, y)
            .ok_or(regionfind_core::Error::OutOfBounds {
                x,
                y,
                width: frame.width(),
                height: frame.height(),
            })?;
        self.set_target(color);
        Ok(color)
    }

    /// Apply a key press.
    ///
    /// `w`, `r` and `p` select the display mode, `c` clears the canvas,
    /// `s` toggles the brush and `o` asks the caller to save the
    /// recolored view. Other keys are reported back as unknown.
    pub fn handle_key(&mut self, key: char) -> KeyCommand {
        if let Some(mode) = DisplayMode::from_key(key) {
            self.mode = mode;
            return KeyCommand::Display(mode);
        }
        match key {
            'c' => {
                self.clear_painting();
                KeyCommand::Clear
            }
            'o' => KeyCommand::SaveRecolored,
            's' => {
                self.brush = !self.brush;
                log::info!(
                    "painting turned {}",
                    if self.brush { "on" } else { "off" }
                );
                KeyCommand::Brush(self.brush)
            }
            _ => {
                log::warn!("unexpected key {key:?}");
                KeyCommand::Unknown(key)
            }
        }
    }

    /// Reset the canvas to fully transparent.
    pub fn clear_painting(&mut self) {
        self.canvas.fill(0);
    }

    /// The canvas as an image.
    pub fn painting(&self) -> Image {
        self.canvas.clone().into()
    }

    /// Recolored view of the latest region pass, with a random color per
    /// region. `None` before the first pass.
    pub fn recolored(&self) -> PaintResult<Option<Image>> {
        self.recolored_with_rng(&mut rand::rng())
    }

    /// Same as [`recolored`](Self::recolored) with colors drawn from `rng`.
    pub fn recolored_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> PaintResult<Option<Image>> {
        let (Some(image), Some(regions)) = (self.searched.as_ref(), self.finder.regions()) else {
            return Ok(None);
        };
        Ok(Some(recolor_with_rng(image, regions, rng)?))
    }

    /// The image for the current display mode.
    ///
    /// Live mode yields the latest frame, recolored mode the recolored
    /// view and painting mode the canvas. Live and recolored are `None`
    /// until there is something to show.
    pub fn view(&self) -> PaintResult<Option<Image>> {
        match self.mode {
            DisplayMode::Live => Ok(self.frame.clone()),
            DisplayMode::Recolored => self.recolored(),
            DisplayMode::Painting => Ok(Some(self.painting())),
        }
    }

    /// Write the recolored view to `path`, in the format its extension
    /// names.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::NoRegions`] before the first region pass.
    pub fn save_recolored<P: AsRef<Path>>(&self, path: P) -> PaintResult<()> {
        let image = self.recolored()?.ok_or(PaintError::NoRegions)?;
        save(&image, path.as_ref())
    }

    /// Write the canvas to `path`, in the format its extension names.
    pub fn save_painting<P: AsRef<Path>>(&self, path: P) -> PaintResult<()> {
        save(&self.painting(), path.as_ref())
    }
}

fn save(image: &Image, path: &Path) -> PaintResult<()> {
    let format = ImageFormat::from_path(path)?;
    regionfind_io::write_image(image, path, format)?;
    log::info!("saved {}", path.display());
    Ok(())
}

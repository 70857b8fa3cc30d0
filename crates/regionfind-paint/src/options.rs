//! Paint session options

use regionfind_core::Color;
use regionfind_region::RegionOptions;
use std::fmt;

/// What a session shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// The latest frame as captured
    #[default]
    Live,
    /// The frame of the latest region pass with every region recolored
    Recolored,
    /// The painting canvas
    Painting,
}

impl DisplayMode {
    /// Map a key press to a mode: `w` live, `r` recolored, `p` painting.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::Live),
            'r' => Some(Self::Recolored),
            'p' => Some(Self::Painting),
            _ => None,
        }
    }

    /// Key that selects this mode.
    pub fn key(self) -> char {
        match self {
            Self::Live => 'w',
            Self::Recolored => 'r',
            Self::Painting => 'p',
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Live => "live",
            Self::Recolored => "recolored",
            Self::Painting => "painting",
        };
        f.write_str(name)
    }
}

/// Options for a paint session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintOptions {
    /// Color laid down by the brush
    pub paint_color: Color,
    /// Options for each region pass
    pub region: RegionOptions,
    /// Initial display mode
    pub display_mode: DisplayMode,
    /// Whether the brush starts enabled
    pub brush: bool,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            paint_color: Color::BLUE,
            region: RegionOptions::default(),
            display_mode: DisplayMode::default(),
            brush: true,
        }
    }
}

impl PaintOptions {
    /// Set the brush color
    pub fn with_paint_color(mut self, color: Color) -> Self {
        self.paint_color = color;
        self
    }

    /// Set the region options
    pub fn with_region_options(mut self, region: RegionOptions) -> Self {
        self.region = region;
        self
    }

    /// Set the initial display mode
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    /// Set whether the brush starts enabled
    pub fn with_brush(mut self, enabled: bool) -> Self {
        self.brush = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_keys() {
        for mode in [DisplayMode::Live, DisplayMode::Recolored, DisplayMode::Painting] {
            assert_eq!(DisplayMode::from_key(mode.key()), Some(mode));
        }
        assert_eq!(DisplayMode::from_key('x'), None);
    }

    #[test]
    fn test_defaults() {
        let opts = PaintOptions::default();
        assert_eq!(opts.paint_color, Color::BLUE);
        assert_eq!(opts.display_mode, DisplayMode::Live);
        assert!(opts.brush);
        assert_eq!(opts.region, RegionOptions::default());
    }
}

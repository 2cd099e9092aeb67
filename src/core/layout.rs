use crate::core::constants::*;
use glam::Vec2;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Where and how large the display text is drawn for a given viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextLayout {
    pub font_px: f32,
    /// Distance between sample points on both axes.
    pub gap: u32,
    /// Center of the text (horizontal center, vertical middle).
    pub origin: Vec2,
    /// Width of the initial scatter square around each anchor.
    pub spread: f32,
}

impl TextLayout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let w = viewport.width as f32;
        let h = viewport.height as f32;
        let font_px = (w * FONT_SCALE_OF_WIDTH).min(FONT_PX_MAX);
        let gap = ((font_px / GAP_DIVISOR).floor() as u32).max(GAP_MIN_PX);
        Self {
            font_px,
            gap,
            origin: Vec2::new(w / 2.0, h * TEXT_Y_FRACTION),
            spread: font_px * SCATTER_OF_FONT,
        }
    }

    /// CSS font shorthand for the 2D context.
    pub fn font_css(&self) -> String {
        format!("{} {}px {}", FONT_WEIGHT, self.font_px, FONT_FAMILY)
    }
}

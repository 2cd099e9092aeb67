use crate::core::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// Pointer position in canvas pixels, or the off-canvas sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const OFF_CANVAS: Pointer = Pointer {
        x: POINTER_OFF_CANVAS,
        y: POINTER_OFF_CANVAS,
    };

    pub fn at(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn is_off_canvas(&self) -> bool {
        *self == Self::OFF_CANVAS
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::OFF_CANVAS
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub anchor: Vec2,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub opacity: f32,
    pub glow: bool,
}

impl Particle {
    /// New particle at rest, scattered within a `spread`-wide square around
    /// its anchor, with randomized size, color and glow.
    pub fn spawn<R: Rng + ?Sized>(anchor: Vec2, spread: f32, rng: &mut R) -> Self {
        let offset = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * spread;
        Self {
            anchor,
            pos: anchor + offset,
            vel: Vec2::ZERO,
            radius: RADIUS_MIN + rng.gen::<f32>() * RADIUS_SPAN,
            hue: HUE_MIN + rng.gen::<f32>() * HUE_SPAN,
            saturation: SATURATION_MIN + rng.gen::<f32>() * SATURATION_SPAN,
            lightness: LIGHTNESS_MIN + rng.gen::<f32>() * LIGHTNESS_SPAN,
            opacity: OPACITY_MIN + rng.gen::<f32>() * OPACITY_SPAN,
            glow: rng.gen_bool(GLOW_PROBABILITY),
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Distance from the anchor.
    #[inline]
    pub fn displacement(&self) -> f32 {
        (self.pos - self.anchor).length()
    }
}

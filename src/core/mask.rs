use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    #[error("pixel buffer has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// RGBA raster read back from the scratch canvas. Only alpha is consulted.
#[derive(Clone, Debug)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl AlphaMask {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, MaskError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(MaskError::LengthMismatch {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// A fully transparent mask.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4 + 3;
        self.rgba[i]
    }

    /// Grid points (row-major, starting at the origin) whose alpha is above
    /// `threshold`. A zero gap is treated as one.
    pub fn sample_anchors(&self, gap: u32, threshold: u8) -> Vec<Vec2> {
        let step = gap.max(1) as usize;
        let mut anchors = Vec::new();
        for y in (0..self.height).step_by(step) {
            for x in (0..self.width).step_by(step) {
                if self.alpha_at(x, y) > threshold {
                    anchors.push(Vec2::new(x as f32, y as f32));
                }
            }
        }
        anchors
    }
}

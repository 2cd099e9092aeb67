use crate::core::constants::*;
use crate::core::particle::Particle;
use glam::Vec2;
use std::fmt;

/// CSS `hsla()` color. Saturation and lightness are percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1},{:.1}%,{:.1}%,{:.3})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Hsla,
}

/// Everything needed to draw one particle for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Hsla,
    pub glow: Option<Glow>,
}

/// Lightness and saturation after speed brightening, clamped to their maxima.
#[inline]
pub fn brightened(particle: &Particle) -> (f32, f32) {
    let speed = particle.speed();
    let lightness = (particle.lightness + speed * LIGHTNESS_PER_SPEED).min(LIGHTNESS_MAX);
    let saturation = (particle.saturation + speed * SATURATION_PER_SPEED).min(SATURATION_MAX);
    (lightness, saturation)
}

pub fn dot_style(particle: &Particle) -> DotStyle {
    let speed = particle.speed();
    let (lightness, saturation) = brightened(particle);
    let fill = Hsla {
        hue: particle.hue,
        saturation,
        lightness,
        alpha: particle.opacity,
    };
    if particle.glow {
        DotStyle {
            center: particle.pos,
            radius: particle.radius * GLOW_RADIUS_SCALE,
            fill,
            glow: Some(Glow {
                blur: GLOW_BLUR_BASE + speed * GLOW_BLUR_PER_SPEED,
                color: Hsla {
                    alpha: GLOW_SHADOW_ALPHA,
                    ..fill
                },
            }),
        }
    } else {
        DotStyle {
            center: particle.pos,
            radius: particle.radius,
            fill,
            glow: None,
        }
    }
}

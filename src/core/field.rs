use crate::core::constants::*;
use crate::core::layout::{TextLayout, Viewport};
use crate::core::mask::AlphaMask;
use crate::core::particle::{Particle, Pointer};
use glam::Vec2;
use rand::prelude::*;

/// Force constants for the per-frame step.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub spring: f32,
    pub damping: f32,
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub jitter: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            spring: SPRING,
            damping: DAMPING,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            jitter: JITTER,
        }
    }
}

/// The set of text particles and the viewport they were built for.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub params: FieldParams,
    viewport: Viewport,
}

impl ParticleField {
    pub fn new(params: FieldParams) -> Self {
        Self {
            particles: Vec::new(),
            params,
            viewport: Viewport::default(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Replace every particle with one per inked grid cell of `mask`.
    /// Returns the new particle count.
    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        mask: &AlphaMask,
        layout: &TextLayout,
        rng: &mut R,
    ) -> usize {
        let anchors = mask.sample_anchors(layout.gap, ALPHA_THRESHOLD);
        self.particles = anchors
            .into_iter()
            .map(|a| Particle::spawn(a, layout.spread, rng))
            .collect();
        self.viewport = Viewport::new(mask.width(), mask.height());
        log::debug!(
            "[field] rebuilt {} particles for {}x{} (font {:.1}px, gap {})",
            self.particles.len(),
            mask.width(),
            mask.height(),
            layout.font_px,
            layout.gap
        );
        self.particles.len()
    }

    /// Drop every particle. Used when a build pass fails partway, so nothing
    /// from the previous viewport keeps animating.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.viewport = Viewport::default();
    }

    /// Advance every particle by one frame.
    pub fn step<R: Rng + ?Sized>(&mut self, pointer: Pointer, rng: &mut R) {
        let p = &self.params;
        let mouse = pointer.position();
        for particle in &mut self.particles {
            particle.vel += (particle.anchor - particle.pos) * p.spring;

            let away = particle.pos - mouse;
            let dist = away.length();
            if dist < p.repel_radius && dist > 0.0 {
                let force = (p.repel_radius - dist) / p.repel_radius * p.repel_strength;
                particle.vel += away / dist * force;
            }

            particle.vel += Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * p.jitter;
            particle.vel *= p.damping;
            particle.pos += particle.vel;
        }
    }

    /// Largest anchor distance across the field; zero when empty.
    pub fn max_displacement(&self) -> f32 {
        self.particles
            .iter()
            .map(Particle::displacement)
            .fold(0.0, f32::max)
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(FieldParams::default())
    }
}

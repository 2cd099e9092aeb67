// Host-side tests for sampling, the build pass and the per-frame step.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod field {
        include!("../src/core/field.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod mask {
        include!("../src/core/mask.rs");
    }
    pub mod particle {
        include!("../src/core/particle.rs");
    }
}

use crate::core::constants::*;
use crate::core::field::{FieldParams, ParticleField};
use crate::core::layout::{TextLayout, Viewport};
use crate::core::mask::{AlphaMask, MaskError};
use crate::core::particle::{Particle, Pointer};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Transparent `w`x`h` RGBA buffer with opaque rectangles painted in.
fn mask_with_rects(w: u32, h: u32, rects: &[(u32, u32, u32, u32)]) -> AlphaMask {
    let mut rgba = vec![0u8; (w * h * 4) as usize];
    for &(x0, y0, rw, rh) in rects {
        for y in y0..(y0 + rh).min(h) {
            for x in x0..(x0 + rw).min(w) {
                let i = ((y * w + x) * 4) as usize;
                rgba[i..i + 4].copy_from_slice(&[255, 255, 255, 255]);
            }
        }
    }
    AlphaMask::from_rgba(w, h, rgba).unwrap()
}

/// A "word" in the top strip of a viewport, roughly where the text lands.
fn word_mask(viewport: Viewport) -> AlphaMask {
    let layout = TextLayout::for_viewport(viewport);
    let cx = layout.origin.x as u32;
    let cy = layout.origin.y as u32;
    let half = (layout.font_px / 2.0) as u32;
    mask_with_rects(
        viewport.width,
        viewport.height,
        &[
            (cx - 4 * half, cy - half, half, 2 * half),
            (cx - 2 * half, cy - half, 3 * half, half / 2),
            (cx + 2 * half, cy - half, half, 2 * half),
        ],
    )
}

fn count_inked_cells(mask: &AlphaMask, gap: u32) -> usize {
    let mut n = 0;
    for y in (0..mask.height()).step_by(gap as usize) {
        for x in (0..mask.width()).step_by(gap as usize) {
            if mask.alpha_at(x, y) > ALPHA_THRESHOLD {
                n += 1;
            }
        }
    }
    n
}

fn no_jitter() -> FieldParams {
    FieldParams {
        jitter: 0.0,
        ..FieldParams::default()
    }
}

fn resting(at: Vec2) -> Particle {
    Particle {
        anchor: at,
        pos: at,
        vel: Vec2::ZERO,
        radius: 1.0,
        hue: 200.0,
        saturation: 80.0,
        lightness: 80.0,
        opacity: 0.8,
        glow: false,
    }
}

#[test]
fn mask_rejects_wrong_buffer_length() {
    let err = AlphaMask::from_rgba(4, 4, vec![0; 10]).unwrap_err();
    assert_eq!(
        err,
        MaskError::LengthMismatch {
            width: 4,
            height: 4,
            expected: 64,
            actual: 10
        }
    );
}

#[test]
fn sampling_walks_the_grid_from_origin() {
    // 6x6 ink block sampled every 3px: cells (0,0) (3,0) (0,3) (3,3)
    let mask = mask_with_rects(10, 10, &[(0, 0, 6, 6)]);
    let anchors = mask.sample_anchors(3, ALPHA_THRESHOLD);
    assert_eq!(
        anchors,
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, 3.0),
            Vec2::new(3.0, 3.0),
        ]
    );
}

#[test]
fn sampling_threshold_is_strict() {
    let mut rgba = vec![0u8; 2 * 1 * 4];
    rgba[3] = 128;
    rgba[7] = 129;
    let mask = AlphaMask::from_rgba(2, 1, rgba).unwrap();
    let anchors = mask.sample_anchors(1, ALPHA_THRESHOLD);
    assert_eq!(anchors, vec![Vec2::new(1.0, 0.0)]);
}

#[test]
fn empty_mask_builds_empty_field() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = ParticleField::default();
    let layout = TextLayout::for_viewport(Viewport::new(0, 0));
    assert_eq!(field.rebuild(&AlphaMask::empty(0, 0), &layout, &mut rng), 0);
    assert!(field.is_empty());

    let vp = Viewport::new(320, 200);
    let layout = TextLayout::for_viewport(vp);
    assert_eq!(field.rebuild(&AlphaMask::empty(320, 200), &layout, &mut rng), 0);
    // stepping nothing is fine
    field.step(Pointer::at(10.0, 10.0), &mut rng);
    assert_eq!(field.max_displacement(), 0.0);
}

#[test]
fn particle_count_matches_inked_cells() {
    let vp = Viewport::new(1280, 720);
    let layout = TextLayout::for_viewport(vp);
    let mask = word_mask(vp);
    let mut rng = StdRng::seed_from_u64(42);
    let mut field = ParticleField::default();
    let n = field.rebuild(&mask, &layout, &mut rng);
    assert!(n > 0);
    assert_eq!(n, count_inked_cells(&mask, layout.gap));
    assert_eq!(field.len(), n);
    assert_eq!(field.viewport(), vp);
}

#[test]
fn same_seed_builds_identical_field() {
    let vp = Viewport::new(800, 600);
    let layout = TextLayout::for_viewport(vp);
    let mask = word_mask(vp);
    let mut a = ParticleField::default();
    let mut b = ParticleField::default();
    a.rebuild(&mask, &layout, &mut StdRng::seed_from_u64(9));
    b.rebuild(&mask, &layout, &mut StdRng::seed_from_u64(9));
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.glow, pb.glow);
        assert_eq!(pa.hue, pb.hue);
    }
}

#[test]
fn anchors_do_not_depend_on_seed() {
    let vp = Viewport::new(1024, 768);
    let layout = TextLayout::for_viewport(vp);
    let mask = word_mask(vp);
    let mut field = ParticleField::default();

    field.rebuild(&mask, &layout, &mut StdRng::seed_from_u64(1));
    let first: Vec<Vec2> = field.particles.iter().map(|p| p.anchor).collect();
    let first_pos: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();

    field.rebuild(&mask, &layout, &mut StdRng::seed_from_u64(2));
    let second: Vec<Vec2> = field.particles.iter().map(|p| p.anchor).collect();
    let second_pos: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();

    assert_eq!(first, second);
    assert_ne!(first_pos, second_pos, "scatter should vary with the seed");
}

#[test]
fn resize_replaces_every_particle() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = ParticleField::default();

    let small = Viewport::new(200, 100);
    let small_mask = mask_with_rects(200, 100, &[(0, 0, 30, 30)]);
    field.rebuild(&small_mask, &TextLayout::for_viewport(small), &mut rng);
    let before: Vec<Vec2> = field.particles.iter().map(|p| p.anchor).collect();
    assert!(!before.is_empty());

    let large = Viewport::new(800, 400);
    let large_mask = mask_with_rects(800, 400, &[(400, 200, 60, 60)]);
    field.rebuild(&large_mask, &TextLayout::for_viewport(large), &mut rng);

    assert_eq!(field.viewport(), large);
    assert!(!field.is_empty());
    for p in &field.particles {
        assert!(!before.contains(&p.anchor));
        assert!(p.anchor.x >= 400.0 && p.anchor.y >= 200.0);
    }
}

#[test]
fn failed_rebuild_leaves_no_stale_particles() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut field = ParticleField::default();
    let vp = Viewport::new(640, 480);
    field.rebuild(&word_mask(vp), &TextLayout::for_viewport(vp), &mut rng);
    assert!(!field.is_empty());

    // the raster for the new viewport never arrives
    field.clear();
    assert!(field.is_empty());
    assert_eq!(field.viewport(), Viewport::default());
    field.step(Pointer::at(100.0, 40.0), &mut rng);
    assert_eq!(field.max_displacement(), 0.0);
}

#[test]
fn spawned_attributes_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(11);
    let spread = 40.0;
    let mut glows = 0;
    let n = 10_000;
    for _ in 0..n {
        let p = Particle::spawn(Vec2::new(100.0, 100.0), spread, &mut rng);
        assert!((p.pos - p.anchor).x.abs() <= spread / 2.0);
        assert!((p.pos - p.anchor).y.abs() <= spread / 2.0);
        assert_eq!(p.vel, Vec2::ZERO);
        assert!(p.radius >= 0.4 && p.radius < 2.0);
        assert!(p.hue >= 196.0 && p.hue <= 226.0);
        assert!(p.saturation >= 60.0 && p.saturation <= 100.0);
        assert!(p.lightness >= 72.0 && p.lightness <= 98.0);
        assert!(p.opacity >= 0.65 && p.opacity <= 1.0);
        if p.glow {
            glows += 1;
        }
    }
    let frac = glows as f64 / n as f64;
    assert!((0.12..0.18).contains(&frac), "glow fraction {frac}");
}

#[test]
fn particles_settle_on_anchors_without_pointer() {
    let vp = Viewport::new(1280, 720);
    let layout = TextLayout::for_viewport(vp);
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = ParticleField::new(no_jitter());
    field.rebuild(&word_mask(vp), &layout, &mut rng);
    let start = field.max_displacement();
    assert!(start > 1.0);
    for _ in 0..200 {
        field.step(Pointer::OFF_CANVAS, &mut rng);
    }
    assert!(field.max_displacement() < 1e-3);
}

#[test]
fn jitter_keeps_settled_particles_close() {
    let vp = Viewport::new(1280, 720);
    let layout = TextLayout::for_viewport(vp);
    let mut rng = StdRng::seed_from_u64(6);
    let mut field = ParticleField::default();
    field.rebuild(&word_mask(vp), &layout, &mut rng);
    for _ in 0..300 {
        field.step(Pointer::default(), &mut rng);
    }
    let settled = field.max_displacement();
    assert!(settled < 1.0, "displacement {settled}");
}

#[test]
fn pointer_inside_radius_pushes_particle_away() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut field = ParticleField::new(no_jitter());
    field.particles = vec![resting(Vec2::new(50.0, 50.0))];

    field.step(Pointer::at(40.0, 50.0), &mut rng);
    let p = &field.particles[0];
    // force = (100 - 10) / 100 * 6.5, then damped by 0.8
    let expected = 0.9 * REPEL_STRENGTH * DAMPING;
    assert!((p.vel.x - expected).abs() < 1e-4, "vel {:?}", p.vel);
    assert!(p.vel.y.abs() < 1e-6);
    assert!(p.pos.x > 50.0);
}

#[test]
fn pointer_keeps_pushing_while_inside_radius() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut field = ParticleField::new(no_jitter());
    field.particles = vec![resting(Vec2::new(50.0, 50.0))];
    let pointer = Pointer::at(45.0, 50.0);
    for _ in 0..5 {
        let before = field.particles[0].vel.x;
        let spring = (50.0 - field.particles[0].pos.x) * SPRING;
        field.step(pointer, &mut rng);
        let p = &field.particles[0];
        let d = p.pos.x - p.vel.x - pointer.x;
        if d < REPEL_RADIUS {
            // what remains after undoing damping and spring is the repulsion
            let repel = p.vel.x / DAMPING - before - spring;
            assert!(repel > 0.0);
        }
    }
}

#[test]
fn pointer_exactly_on_particle_adds_nothing() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut field = ParticleField::new(no_jitter());
    field.particles = vec![resting(Vec2::new(50.0, 50.0))];
    field.step(Pointer::at(50.0, 50.0), &mut rng);
    let p = &field.particles[0];
    assert!(p.vel.is_finite() && p.pos.is_finite());
    assert_eq!(p.vel, Vec2::ZERO);
}

#[test]
fn pointer_outside_radius_has_no_effect() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut field = ParticleField::new(no_jitter());
    field.particles = vec![resting(Vec2::new(50.0, 50.0))];
    field.step(Pointer::at(50.0 + REPEL_RADIUS, 50.0), &mut rng);
    assert_eq!(field.particles[0].vel, Vec2::ZERO);
}

#[test]
fn pointer_defaults_off_canvas() {
    let p = Pointer::default();
    assert!(p.is_off_canvas());
    assert_eq!(p.position(), Vec2::splat(POINTER_OFF_CANVAS));
    assert!(!Pointer::at(0.0, 0.0).is_off_canvas());
}

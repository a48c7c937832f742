//! Drifting particle field drawn behind the page content.
//!
//! Everything here is platform independent; the canvas wiring lives in
//! `effects::particles` and only reads positions back out of the field.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl Particle {
    /// Move by `frames` worth of velocity, wrapping past the margin.
    pub fn advance(&mut self, bounds: Vec2, frames: f32) {
        self.pos += self.vel * frames;
        self.pos.x = wrap_axis(self.pos.x, bounds.x);
        self.pos.y = wrap_axis(self.pos.y, bounds.y);
    }

    /// CSS fill colour for this particle.
    pub fn fill_style(&self) -> String {
        let (r, g, b) = PARTICLE_RGB;
        format!("rgba({},{},{},{})", r, g, b, self.alpha)
    }
}

// Leaving one edge re-enters just outside the opposite edge.
#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    let m = PARTICLE_WRAP_MARGIN;
    if v < -m {
        extent + m
    } else if v > extent + m {
        -m
    } else {
        v
    }
}

/// Convert an elapsed wall-clock time into 60 Hz frame units.
#[inline]
pub fn frames_for(dt_sec: f32) -> f32 {
    (dt_sec / FRAME_SEC).clamp(0.0, MAX_FRAMES_PER_STEP)
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    bounds: Vec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(count: usize, width: f32, height: f32) -> Self {
        Self::with_rng(count, width, height, StdRng::from_entropy())
    }

    pub fn with_seed(count: usize, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(count, width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, width: f32, height: f32, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(count),
            bounds: Vec2::new(width.max(0.0), height.max(0.0)),
            rng,
        };
        for _ in 0..count {
            let p = field.spawn();
            field.particles.push(p);
        }
        field
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Track a new viewport size. Existing particles keep their positions and
    /// fold back inside on their next step, unless the field was spawned on a
    /// zero-sized canvas, in which case they are respread over the new area.
    pub fn resize(&mut self, width: f32, height: f32) {
        let was_empty = self.is_empty_area();
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        if was_empty && !self.is_empty_area() {
            self.reset();
        }
    }

    fn is_empty_area(&self) -> bool {
        self.bounds.x <= 0.0 || self.bounds.y <= 0.0
    }

    /// Re-randomize every particle within the current bounds.
    pub fn reset(&mut self) {
        for i in 0..self.particles.len() {
            let p = self.spawn();
            self.particles[i] = p;
        }
    }

    pub fn step(&mut self, frames: f32) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.advance(bounds, frames);
        }
    }

    fn spawn(&mut self) -> Particle {
        let rng = &mut self.rng;
        Particle {
            pos: Vec2::new(
                uniform(rng, 0.0, self.bounds.x),
                uniform(rng, 0.0, self.bounds.y),
            ),
            vel: Vec2::new(
                uniform(rng, -PARTICLE_VX_MAX, PARTICLE_VX_MAX),
                uniform(rng, -PARTICLE_VY_MAX, PARTICLE_VY_MAX),
            ),
            radius: uniform(rng, PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MAX),
            alpha: uniform(rng, PARTICLE_ALPHA_MIN, PARTICLE_ALPHA_MAX),
        }
    }
}

// Half-open [min, max); a degenerate range (zero-sized canvas) yields min.
#[inline]
fn uniform(rng: &mut StdRng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

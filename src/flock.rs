/*
 * Flock Module
 *
 * This module owns the particle collection and drives the per-frame update
 * and render passes. The flock is created once with a fixed population;
 * particles never spawn or die afterwards (resizing only happens through an
 * explicit reset from the UI).
 */

use nannou::prelude::*;
use rand::Rng;

use crate::links::RingStyle;
use crate::params::SimulationParams;
use crate::particle::Particle;
use crate::render::RenderTarget;

// Simulation-area bounds, queried from the host each frame so the flock
// tracks window resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

pub struct Flock {
    pub particles: Vec<Particle>,
}

impl Flock {
    // Create a flock of `count` particles at uniform random positions
    pub fn new(count: usize, bounds: Bounds, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| {
                let x = rng.gen_range(0.0..bounds.width);
                let y = rng.gen_range(0.0..bounds.height);
                Particle::new(x, y, rng)
            })
            .collect();

        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // Advance the simulation by one frame. Forces are computed against a
    // snapshot of the frame-start state, so the result is independent of
    // the order particles are stored in.
    pub fn update(&mut self, bounds: Bounds, rng: &mut impl Rng) {
        let snapshot = self.particles.clone();

        for particle in &mut self.particles {
            particle.step(&snapshot, bounds, rng);
        }
    }

    // Emit the frame's geometry: each particle's ring outlines plus the
    // connector arcs and tie lines to sufficiently close particles.
    pub fn render(&self, style: RingStyle, target: &mut impl RenderTarget) {
        for particle in &self.particles {
            particle.draw(&self.particles, style, target);
        }
    }

    // Re-apply tunable parameters to every particle after a UI change
    pub fn apply_params(&mut self, params: &SimulationParams) {
        for particle in &mut self.particles {
            particle.perception_range = params.perception_range;
            particle.max_speed = params.max_speed;
            particle.max_force = params.max_force;
            particle.boundary_margin = params.boundary_margin;
        }
    }

    // Rebuild the flock at the requested population
    pub fn reset(&mut self, params: &SimulationParams, bounds: Bounds, rng: &mut impl Rng) {
        *self = Flock::new(params.num_particles, bounds, rng);
        self.apply_params(params);
    }
}

/*
 * Particle Module
 *
 * This module defines the Particle struct and its steering behaviors.
 * Each particle follows five rules:
 * 1. Separation: steer away from crowded neighbors
 * 2. Alignment: steer towards the average heading of neighbors
 * 3. Cohesion: steer towards the average position of nearby neighbors
 * 4. Wander: a randomized forward-biased exploratory force
 * 5. Boundary avoidance: steer back inside the simulation area
 */

use nannou::prelude::*;
use rand::Rng;

use crate::flock::Bounds;
use crate::links::{self, RingStyle};
use crate::render::RenderTarget;
use crate::{BOUNDARY_MARGIN, MAX_FORCE, MAX_SPEED, PERCEPTION_RANGE, VELOCITY_DAMPING};

#[derive(Clone)]
pub struct Particle {
    pub position: Point2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub perception_range: f32,
    pub max_force: f32,
    pub max_speed: f32,
    pub boundary_margin: f32,
    // Fixed at creation, only used for rendering
    pub hue: f32,
}

// Clamp a vector's magnitude to `max`
fn limit(v: Vec2, max: f32) -> Vec2 {
    if v.length() > max {
        v.normalize() * max
    } else {
        v
    }
}

impl Particle {
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        // Random initial velocity
        let vx = rng.gen_range(-1.0..1.0);
        let vy = rng.gen_range(-1.0..1.0);

        Self {
            position: pt2(x, y),
            velocity: vec2(vx, vy),
            acceleration: Vec2::ZERO,
            perception_range: PERCEPTION_RANGE,
            max_force: MAX_FORCE,
            max_speed: MAX_SPEED,
            boundary_margin: BOUNDARY_MARGIN,
            hue: rng.gen_range(0.0..1.0),
        }
    }

    // Apply a force to the particle
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    // Calculate separation force (steer away from neighbors within range).
    // Co-located particles are skipped by the zero-distance check, which also
    // excludes the particle itself from the full-collection scan.
    pub fn separate(&self, others: &[Particle]) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for other in others {
            let offset = self.position - other.position;
            let d = offset.length();
            if d > 0.0 && d < self.perception_range {
                // Unit vector pointing away from the neighbor
                sum += offset / d;
                count += 1;
            }
        }

        if count == 0 {
            return Vec2::ZERO;
        }

        let desired = limit(sum / count as f32 * self.max_speed, self.max_speed);
        limit(desired - self.velocity, self.max_force)
    }

    // Calculate alignment force (steer towards the average heading of neighbors)
    pub fn align(&self, others: &[Particle]) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for other in others {
            let d = self.position.distance(other.position);
            if d > 0.0 && d < self.perception_range {
                sum += other.velocity;
                count += 1;
            }
        }

        if count == 0 {
            return Vec2::ZERO;
        }

        let desired = limit(sum / count as f32 * self.max_speed, self.max_speed);
        limit(desired - self.velocity, self.max_force)
    }

    // Calculate cohesion force (seek the centroid of close neighbors).
    // Uses half the perception range, so cohesion only kicks in for the
    // tighter cluster around the particle.
    pub fn cohesion(&self, others: &[Particle]) -> Vec2 {
        let range = self.perception_range * 0.5;

        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for other in others {
            let d = self.position.distance(other.position);
            if d > 0.0 && d < range {
                sum += other.position;
                count += 1;
            }
        }

        if count == 0 {
            return Vec2::ZERO;
        }

        self.seek(sum / count as f32)
    }

    // Steer towards a target, slowing down on approach within the perception
    // range so the particle arrives instead of overshooting.
    pub fn seek(&self, target: Point2) -> Vec2 {
        let offset = target - self.position;
        let distance = offset.length();

        // A zero-distance target has no direction; leave desired at zero
        // rather than normalizing into NaN.
        let desired = if distance > 0.0 {
            let speed = if distance < self.perception_range {
                map_range(distance, 0.0, self.perception_range, 0.0, self.max_speed)
            } else {
                self.max_speed
            };
            offset / distance * speed
        } else {
            Vec2::ZERO
        };

        limit(desired - self.velocity, self.max_force)
    }

    // Wander force: project a point one perception range ahead along the
    // current heading, displace it by half a range at a random angle, and
    // seek the displaced point. Only meaningful while moving.
    pub fn wander(&self, rng: &mut impl Rng) -> Vec2 {
        if self.velocity.length() <= 0.0 {
            return Vec2::ZERO;
        }

        let future = self.position + self.velocity.normalize() * self.perception_range;
        let angle = deg_to_rad(rng.gen_range(0.0..360.0));
        let target = future + vec2(angle.cos(), angle.sin()) * (self.perception_range * 0.5);

        self.seek(target)
    }

    // Boundary correction: inside the margin of an edge, push back at full
    // speed along the violated axis while preserving the other axis's
    // current velocity. The combined correction is clamped to max_force.
    pub fn boundary(&self, bounds: Bounds) -> Vec2 {
        let mut correction = Vec2::ZERO;

        if self.position.x < self.boundary_margin {
            correction += vec2(self.max_speed, self.velocity.y);
        } else if self.position.x > bounds.width - self.boundary_margin {
            correction += vec2(-self.max_speed, self.velocity.y);
        }

        if self.position.y < self.boundary_margin {
            correction += vec2(self.velocity.x, self.max_speed);
        } else if self.position.y > bounds.height - self.boundary_margin {
            correction += vec2(self.velocity.x, -self.max_speed);
        }

        limit(correction, self.max_force)
    }

    // Run one simulation frame for this particle. `others` is the
    // frame-start snapshot of the whole flock, so every particle steers
    // against the same consistent state.
    pub fn step(&mut self, others: &[Particle], bounds: Bounds, rng: &mut impl Rng) {
        let separate = self.separate(others);
        self.apply_force(separate);

        let align = self.align(others);
        self.apply_force(align);

        let cohesion = self.cohesion(others);
        self.apply_force(cohesion);

        let wander = self.wander(rng);
        self.apply_force(wander);

        let correction = self.boundary(bounds);
        self.apply_force(correction);

        self.integrate();
    }

    // Integrate accumulated forces into velocity and position, then reset
    // the accumulator and apply frame damping.
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration;
        if self.velocity.length() > self.max_speed {
            self.velocity = self.velocity.normalize() * self.max_speed;
        }
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
        self.velocity *= VELOCITY_DAMPING;
    }

    // Emit this particle's geometry: the two concentric ring outlines, and
    // for every sufficiently close particle a connector band plus tie line.
    // Co-located pairs are skipped, mirroring the steering neighbor checks.
    pub fn draw(&self, others: &[Particle], style: RingStyle, target: &mut impl RenderTarget) {
        let outer = links::ring_outline(self.position, style.radius);
        target.open_polygon(self.hue, &outer);

        let inner = links::ring_outline(self.position, style.radius - style.thickness);
        target.open_polygon(self.hue, &inner);

        if !style.draw_links {
            return;
        }

        for other in others {
            if let Some(link) = links::link_between(self.position, other.position, style) {
                target.filled_polygon(self.hue, &link.band);
                target.line_segment(self.hue, link.tie.0, link.tie.1);
            }
        }
    }
}

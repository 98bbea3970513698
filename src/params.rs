/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the particle flock. These parameters can be
 * modified through the UI; change detection lives here so the app module
 * only has to ask whether anything moved.
 */

use crate::links::RingStyle;
use crate::{
    BOUNDARY_MARGIN, LINK_THRESHOLD, MAX_FORCE, MAX_SPEED, NUM_PARTICLES, PERCEPTION_RANGE,
    RING_RADIUS, RING_THICKNESS,
};

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_particles: usize,
    pub perception_range: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub boundary_margin: f32,
    pub ring_radius: f32,
    pub ring_thickness: f32,
    pub link_threshold: f32,
    pub draw_links: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_particles: usize,
    perception_range: f32,
    max_speed: f32,
    max_force: f32,
    boundary_margin: f32,
    ring_radius: f32,
    ring_thickness: f32,
    link_threshold: f32,
    draw_links: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_particles: NUM_PARTICLES,
            perception_range: PERCEPTION_RANGE,
            max_speed: MAX_SPEED,
            max_force: MAX_FORCE,
            boundary_margin: BOUNDARY_MARGIN,
            ring_radius: RING_RADIUS,
            ring_thickness: RING_THICKNESS,
            link_threshold: LINK_THRESHOLD,
            draw_links: true,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Bundle the ring/link dimensions for the geometry generator
    pub fn ring_style(&self) -> RingStyle {
        RingStyle {
            radius: self.ring_radius,
            thickness: self.ring_thickness,
            threshold: self.link_threshold,
            draw_links: self.draw_links,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_particles: self.num_particles,
            perception_range: self.perception_range,
            max_speed: self.max_speed,
            max_force: self.max_force,
            boundary_margin: self.boundary_margin,
            ring_radius: self.ring_radius,
            ring_thickness: self.ring_thickness,
            link_threshold: self.link_threshold,
            draw_links: self.draw_links,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check whether anything changed since the last snapshot.
    // Returns (num_particles_changed, any_ui_changed).
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut num_particles_changed = false;
        let mut ui_changed = false;

        if let Some(prev) = &self.previous_values {
            if self.num_particles != prev.num_particles {
                num_particles_changed = true;
                ui_changed = true;
            }

            if self.perception_range != prev.perception_range
                || self.max_speed != prev.max_speed
                || self.max_force != prev.max_force
                || self.boundary_margin != prev.boundary_margin
                || self.ring_radius != prev.ring_radius
                || self.ring_thickness != prev.ring_thickness
                || self.link_threshold != prev.link_threshold
                || self.draw_links != prev.draw_links
                || self.pause_simulation != prev.pause_simulation
            {
                ui_changed = true;
            }
        }

        (num_particles_changed, ui_changed)
    }

    // Parameter ranges for UI sliders
    pub fn get_num_particles_range() -> std::ops::RangeInclusive<usize> {
        2..=200
    }

    pub fn get_perception_range_range() -> std::ops::RangeInclusive<f32> {
        10.0..=120.0
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        1.0..=12.0
    }

    pub fn get_max_force_range() -> std::ops::RangeInclusive<f32> {
        0.1..=3.0
    }

    pub fn get_ring_radius_range() -> std::ops::RangeInclusive<f32> {
        5.0..=40.0
    }

    pub fn get_ring_thickness_range() -> std::ops::RangeInclusive<f32> {
        1.0..=16.0
    }

    pub fn get_link_threshold_range() -> std::ops::RangeInclusive<f32> {
        20.0..=200.0
    }
}

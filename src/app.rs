/*
 * Application Module
 *
 * This module defines the main application model and update logic for the
 * particle flock. The window, frame pacing and egui integration live here;
 * the simulation itself only sees Bounds, an RNG and a RenderTarget.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::flock::{Bounds, Flock};
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui;

pub const WINDOW_SIZE: u32 = 720;

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub egui: Egui,
    // Seeded explicitly so a run can be reproduced; the simulation core
    // never touches a global RNG.
    pub rng: StdRng,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Particle Flock")
        .size(WINDOW_SIZE, WINDOW_SIZE)
        .view(renderer::view)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let params = SimulationParams::default();
    let mut rng = StdRng::from_entropy();

    let bounds = Bounds::new(WINDOW_SIZE as f32, WINDOW_SIZE as f32);
    let flock = Flock::new(params.num_particles, bounds, &mut rng);

    Model {
        flock,
        params,
        egui,
        rng,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, _update: Update) {
    // Bounds follow the window so resizing reshapes the simulation area
    let rect = app.window_rect();
    let bounds = Bounds::new(rect.w(), rect.h());

    let (should_reset, num_particles_changed, ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params);

    if should_reset || num_particles_changed {
        model.flock.reset(&model.params, bounds, &mut model.rng);
    } else if ui_changed {
        model.flock.apply_params(&model.params);
    }

    if !model.params.pause_simulation {
        model.flock.update(bounds, &mut model.rng);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

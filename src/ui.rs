/*
 * UI Module
 *
 * This module contains the nannou_egui control window for adjusting
 * simulation parameters at runtime. Parameter change detection is handled
 * by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::params::SimulationParams;

// Update the UI. Returns whether the flock should be reset, whether the
// particle count changed, and whether any parameter changed at all.
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams) -> (bool, bool, bool) {
    let mut should_reset = false;

    // Snapshot current values so we can detect slider movement afterwards
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.num_particles,
                        SimulationParams::get_num_particles_range(),
                    )
                    .text("Particles"),
                );

                if ui.button("Reset Flock").clicked() {
                    should_reset = true;
                }

                ui.add(
                    egui::Slider::new(
                        &mut params.perception_range,
                        SimulationParams::get_perception_range_range(),
                    )
                    .text("Perception Range"),
                );
                ui.add(
                    egui::Slider::new(&mut params.max_speed, SimulationParams::get_max_speed_range())
                        .text("Max Speed"),
                );
                ui.add(
                    egui::Slider::new(&mut params.max_force, SimulationParams::get_max_force_range())
                        .text("Max Force"),
                );
            });

            ui.collapsing("Rings & Links", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.ring_radius,
                        SimulationParams::get_ring_radius_range(),
                    )
                    .text("Ring Radius"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.ring_thickness,
                        SimulationParams::get_ring_thickness_range(),
                    )
                    .text("Ring Thickness"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.link_threshold,
                        SimulationParams::get_link_threshold_range(),
                    )
                    .text("Link Threshold"),
                );
                ui.checkbox(&mut params.draw_links, "Draw Links");
            });

            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    let (num_particles_changed, ui_changed) = params.detect_changes();

    (should_reset, num_particles_changed, ui_changed)
}

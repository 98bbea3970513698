/*
 * Renderer Module
 *
 * nannou view for the particle flock. Clears to black, switches to
 * additive blending so overlapping links glow, and hands the simulation
 * a DrawTarget to emit its geometry into.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::render::DrawTarget;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    // The simulation works in top-left-origin area coordinates; shift the
    // centered nannou frame to match.
    let rect = app.window_rect();
    let draw = draw
        .color_blend(BLEND_ADD)
        .x_y(-rect.w() / 2.0, -rect.h() / 2.0);

    let mut target = DrawTarget::new(&draw);
    model.flock.render(model.params.ring_style(), &mut target);

    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI on top
    model.egui.draw_to_frame(&frame).unwrap();
}

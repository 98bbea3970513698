/*
 * Render Target Module
 *
 * The simulation core never draws; it emits already-computed geometry
 * through the RenderTarget trait. DrawTarget is the nannou-backed
 * implementation used by the host app; tests substitute a recording
 * implementation instead.
 */

use nannou::prelude::*;

pub trait RenderTarget {
    // Closed outline, no fill
    fn open_polygon(&mut self, hue: f32, vertices: &[Point2]);
    // Filled region from a single vertex run (inner run then reversed outer)
    fn filled_polygon(&mut self, hue: f32, vertices: &[Point2]);
    fn line_segment(&mut self, hue: f32, a: Point2, b: Point2);
}

// nannou Draw adapter. The caller is expected to have applied blend mode
// and coordinate translation to the Draw before wrapping it.
pub struct DrawTarget<'a> {
    draw: &'a Draw,
    stroke_weight: f32,
}

impl<'a> DrawTarget<'a> {
    pub fn new(draw: &'a Draw) -> Self {
        Self {
            draw,
            stroke_weight: 2.0,
        }
    }
}

impl RenderTarget for DrawTarget<'_> {
    fn open_polygon(&mut self, hue: f32, vertices: &[Point2]) {
        self.draw
            .polyline()
            .weight(self.stroke_weight)
            .points_closed(vertices.iter().cloned())
            .color(hsv(hue, 1.0, 1.0));
    }

    fn filled_polygon(&mut self, hue: f32, vertices: &[Point2]) {
        self.draw
            .polygon()
            .points(vertices.iter().cloned())
            .color(hsv(hue, 1.0, 1.0));
    }

    fn line_segment(&mut self, hue: f32, a: Point2, b: Point2) {
        self.draw
            .line()
            .start(a)
            .end(b)
            .weight(self.stroke_weight)
            .color(hsv(hue, 1.0, 1.0));
    }
}

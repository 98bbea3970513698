/*
 * Links Module
 *
 * Proximity geometry for the renderer: each particle is drawn as two
 * concentric ring outlines, and every pair of particles closer than a
 * threshold is joined by a filled arc band on the ring plus a tie line
 * between the two ring edges. All functions here are pure geometry; the
 * caller hands the resulting vertex runs to a RenderTarget.
 */

use nannou::prelude::*;

use crate::{LINK_THRESHOLD, RING_RADIUS, RING_STEP_DEG, RING_THICKNESS};

// Ring and link dimensions, adjustable from the UI
#[derive(Clone, Copy, Debug)]
pub struct RingStyle {
    pub radius: f32,
    pub thickness: f32,
    pub threshold: f32,
    pub draw_links: bool,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            radius: RING_RADIUS,
            thickness: RING_THICKNESS,
            threshold: LINK_THRESHOLD,
            draw_links: true,
        }
    }
}

// Connector geometry between two nearby particles, seen from one of them
pub struct Link {
    // Inner-radius vertex run followed by the reversed outer run, ready to
    // be drawn as one filled shape
    pub band: Vec<Point2>,
    // Line from this ring's edge to the far side of the other ring
    pub tie: (Point2, Point2),
}

fn unit(rad: f32) -> Vec2 {
    vec2(rad.cos(), rad.sin())
}

// Closed ring outline sampled every RING_STEP_DEG degrees
pub fn ring_outline(center: Point2, radius: f32) -> Vec<Point2> {
    (0..360)
        .step_by(RING_STEP_DEG)
        .map(|deg| center + unit(deg_to_rad(deg as f32)) * radius)
        .collect()
}

// Full arc width in degrees for a pair at `distance`: inverted linear map
// from [radius, threshold] to [360, 0], so touching rings close into a full
// circle and pairs at the threshold get a sliver. Deliberately unclamped
// below `radius`, matching the rest of the mapping.
pub fn arc_width(distance: f32, style: RingStyle) -> f32 {
    // A non-positive [radius, threshold] span would blow the map up to
    // infinity; treat it as having no arc at all.
    if style.threshold <= style.radius {
        return 0.0;
    }
    map_range(distance, style.radius, style.threshold, 360.0, 0.0)
}

// Connector geometry from `from` towards `to`, or None when the pair is
// co-located or at least the threshold apart.
pub fn link_between(from: Point2, to: Point2, style: RingStyle) -> Option<Link> {
    if from == to {
        return None;
    }

    let distance = from.distance(to);
    if distance >= style.threshold {
        return None;
    }

    // Degenerate style: the UI allows the ring radius to meet or exceed the
    // link threshold, which leaves no span for the width mapping
    if style.threshold <= style.radius {
        return None;
    }

    let direction = rad_to_deg((to.y - from.y).atan2(to.x - from.x));
    let width = arc_width(distance, style);

    // Sample the band in 1-degree steps across the angular window
    let mut inner = Vec::new();
    let mut outer = Vec::new();
    let mut deg = direction - width * 0.5;
    while deg <= direction + width * 0.5 {
        let dir = unit(deg_to_rad(deg));
        inner.push(from + dir * (style.radius - style.thickness));
        outer.push(from + dir * style.radius);
        deg += 1.0;
    }
    outer.reverse();

    let mut band = inner;
    band.extend(outer);

    let tie = (
        from + unit(deg_to_rad(direction)) * style.radius,
        to + unit(deg_to_rad(direction + 180.0)) * style.radius,
    );

    Some(Link { band, tie })
}

/*
 * Particle Flock
 *
 * A flocking simulation where each particle is drawn as a glowing ring and
 * nearby particles are joined by arc bands and tie lines. Separation,
 * alignment, cohesion, a randomized wander force and boundary avoidance
 * drive the motion; rendering happens through the app/renderer modules.
 */

use particle_flock::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}

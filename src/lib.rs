/*
 * Particle Flock - Module Definitions
 *
 * This file defines the module structure for the particle flock simulation.
 * The pure simulation core lives in particle, flock and links; the nannou
 * host application lives in app, renderer and ui.
 */

// Re-export key components for easier access
pub use flock::{Bounds, Flock};
pub use links::{Link, RingStyle};
pub use params::SimulationParams;
pub use particle::Particle;
pub use render::RenderTarget;

// Define modules
pub mod app;
pub mod flock;
pub mod links;
pub mod params;
pub mod particle;
pub mod render;
pub mod renderer;
pub mod ui;

// Per-particle tuning constants
pub const PERCEPTION_RANGE: f32 = 40.0;
pub const MAX_FORCE: f32 = 1.0;
pub const MAX_SPEED: f32 = 6.0;
pub const BOUNDARY_MARGIN: f32 = 5.0;

// Frame-over-frame velocity damping factor
pub const VELOCITY_DAMPING: f32 = 0.9;

// Ring / link geometry constants
pub const RING_RADIUS: f32 = 20.0;
pub const RING_THICKNESS: f32 = 8.0;
pub const LINK_THRESHOLD: f32 = 80.0;
pub const RING_STEP_DEG: usize = 5;

pub const NUM_PARTICLES: usize = 40;

/*
 * Particle Flock Benchmarks
 *
 * Measures the per-frame update pass and the link geometry generation for
 * a range of flock sizes.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use particle_flock::flock::{Bounds, Flock};
use particle_flock::links::RingStyle;
use particle_flock::render::RenderTarget;

// Counts emitted primitives without allocating per call
#[derive(Default)]
struct Counter {
    open: usize,
    filled: usize,
    lines: usize,
}

impl RenderTarget for Counter {
    fn open_polygon(&mut self, _hue: f32, vertices: &[Point2]) {
        self.open += vertices.len();
    }

    fn filled_polygon(&mut self, _hue: f32, vertices: &[Point2]) {
        self.filled += vertices.len();
    }

    fn line_segment(&mut self, _hue: f32, _a: Point2, _b: Point2) {
        self.lines += 1;
    }
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_update");
    let bounds = Bounds::new(720.0, 720.0);

    for num_particles in [40, 100, 250].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_particles),
            num_particles,
            |b, &n| {
                let mut rng = StdRng::seed_from_u64(7);
                let mut flock = Flock::new(n, bounds, &mut rng);

                b.iter(|| {
                    flock.update(black_box(bounds), &mut rng);
                });
            },
        );
    }

    group.finish();
}

fn bench_link_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_geometry");
    let bounds = Bounds::new(720.0, 720.0);

    for num_particles in [40, 100, 250].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_particles),
            num_particles,
            |b, &n| {
                let mut rng = StdRng::seed_from_u64(7);
                let flock = Flock::new(n, bounds, &mut rng);
                let style = RingStyle::default();

                b.iter(|| {
                    let mut counter = Counter::default();
                    flock.render(style, &mut counter);
                    black_box(counter.open + counter.filled + counter.lines)
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_update, bench_link_geometry
}

criterion_main!(benches);

//! Per-frame cost of a full simulation step (220 stars, 30 debris,
//! 5 comets, 8 satellites, 5 planets plus the player pipeline).

use criterion::{criterion_group, criterion_main, Criterion};
use sx_sim::SpaceSim;

fn bench_frame_step(c: &mut Criterion) {
    c.bench_function("frame_step", |b| {
        let mut sim = SpaceSim::new(1280.0, 720.0);
        sim.key_down("ArrowRight");
        b.iter(|| {
            // Keep the session live so the full pipeline runs each frame.
            if sim.is_over() {
                sim.reset();
            }
            sim.step();
        });
    });

    c.bench_function("snapshot", |b| {
        let mut sim = SpaceSim::new(1280.0, 720.0);
        sim.step();
        b.iter(|| sim.snapshot());
    });
}

criterion_group!(benches, bench_frame_step);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use lebedev_quadrature::{expand_orbit, generate_rule_by_order};
use std::hint::black_box;

/// Simple benchmark to verify the basic setup works
fn bench_quick_orbit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_orbit_test");

    group.bench_function("axis_orbit", |b| {
        b.iter(|| expand_orbit(black_box(1), black_box(0.0), black_box(0.0), black_box(1.0)))
    });

    group.bench_function("general_orbit", |b| {
        b.iter(|| expand_orbit(black_box(6), black_box(0.2), black_box(0.45), black_box(1.0)))
    });

    group.bench_function("rule_26", |b| {
        b.iter(|| generate_rule_by_order(black_box(26)))
    });

    group.finish();
}

criterion_group!(quick_benches, bench_quick_orbit_test);
criterion_main!(quick_benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lebedev_quadrature::{generate_rule, validate_rule, RuleOrder};
use std::hint::black_box;

/// Generation cost across the range of grid sizes.
/// Run with `--features parallel` to compare the rayon build of `generate_all_rules`.
fn bench_rule_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_generation");

    for order in [
        RuleOrder::N26,
        RuleOrder::N302,
        RuleOrder::N1202,
        RuleOrder::N5810,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(order.points()), &order, |b, &order| {
            b.iter(|| generate_rule(black_box(order)))
        });
    }

    group.bench_function("all_rules", |b| {
        b.iter(lebedev_quadrature::generate_all_rules)
    });

    group.finish();
}

fn bench_rule_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_validation");
    group.sample_size(20);

    for order in [RuleOrder::N302, RuleOrder::N5810] {
        let rule = generate_rule(order).expect("tabulated rule");
        group.bench_with_input(BenchmarkId::from_parameter(order.points()), &rule, |b, rule| {
            b.iter(|| validate_rule(black_box(rule), 1e-12))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rule_generation, bench_rule_validation);
criterion_main!(benches);

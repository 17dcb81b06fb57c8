//! Criterion benchmarks for the figure builders.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tda_core::source::PointSource;
use tda_figures::{build_persistence_diagram, build_point_cloud};

fn bench_point_cloud(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_cloud");
    for count in [30usize, 300, 3_000] {
        let points = PointSource::generate(count, 1.0, 0).expect("valid source");
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| build_point_cloud(black_box(points), black_box(0.4)))
        });
    }
    group.finish();
}

fn bench_persistence_diagram(c: &mut Criterion) {
    c.bench_function("persistence_diagram", |b| {
        b.iter(|| build_persistence_diagram(black_box(0.4)))
    });
}

criterion_group!(benches, bench_point_cloud, bench_persistence_diagram);
criterion_main!(benches);

#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for the line, conic and parametric rasterizers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_raster::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    for length in [10, 100, 1_000, 10_000] {
        let end = f64::from(length);

        group.bench_with_input(BenchmarkId::new("dda", length), &end, |b, &end| {
            b.iter(|| dda_line(0.0, 0.0, black_box(end), black_box(end * 0.37)).count());
        });

        group.bench_with_input(BenchmarkId::new("bresenham", length), &length, |b, &length| {
            b.iter(|| bresenham_line(0, 0, black_box(length), black_box(length / 3)).count());
        });

        group.bench_with_input(BenchmarkId::new("wu", length), &end, |b, &end| {
            b.iter(|| wu_line(0.0, 0.0, black_box(end), black_box(end * 0.37)).count());
        });
    }

    group.finish();
}

fn conic_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("conics");

    for size in [10.0, 100.0, 1_000.0] {
        group.bench_with_input(BenchmarkId::new("circle", size), &size, |b, &r| {
            b.iter(|| bresenham_circle(0.0, 0.0, black_box(r)).count());
        });

        group.bench_with_input(BenchmarkId::new("ellipse", size), &size, |b, &a| {
            b.iter(|| midpoint_ellipse(0.0, 0.0, black_box(a), black_box(a / 2.0)).count());
        });

        group.bench_with_input(BenchmarkId::new("hyperbola", size), &size, |b, &a| {
            b.iter(|| midpoint_hyperbola(0.0, 0.0, black_box(a), black_box(a / 2.0), None).count());
        });

        group.bench_with_input(BenchmarkId::new("parabola", size), &size, |b, &p| {
            b.iter(|| midpoint_parabola(0.0, 0.0, black_box(p), 1, None).count());
        });
    }

    group.finish();
}

fn parametric_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parametric");

    let controls: Vec<Point> = (0..64)
        .map(|i| {
            let t = f64::from(i);
            Point::new(t * 10.0, (t * 0.5).sin() * 100.0)
        })
        .collect();

    for steps in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("bezier", steps), &steps, |b, &steps| {
            b.iter(|| {
                bezier_curve(controls[0], controls[1], controls[2], controls[3], black_box(steps))
                    .expect("four control points")
                    .count()
            });
        });

        group.bench_with_input(BenchmarkId::new("bspline", steps), &steps, |b, &steps| {
            b.iter(|| {
                bspline_curve(black_box(&controls), black_box(steps))
                    .expect("spline should evaluate")
                    .count()
            });
        });
    }

    group.finish();
}

fn dedup_overhead_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup_overhead");

    // Dense sampling of a short curve revisits most cells
    let controls = [
        Point::new(0.0, 0.0),
        Point::new(20.0, 60.0),
        Point::new(40.0, -60.0),
        Point::new(60.0, 0.0),
    ];

    group.bench_function("emitted", |b| {
        b.iter(|| bspline_curve(black_box(&controls), 5_000).unwrap().count());
    });
    group.bench_function("raw", |b| {
        b.iter(|| bspline_curve(black_box(&controls), 5_000).unwrap().into_inner().count());
    });

    group.finish();
}

criterion_group!(
    benches,
    line_benchmark,
    conic_benchmark,
    parametric_benchmark,
    dedup_overhead_benchmark
);
criterion_main!(benches);

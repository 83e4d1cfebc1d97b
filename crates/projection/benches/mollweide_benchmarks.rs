//! Benchmarks for the Mollweide projection.
//!
//! Run with: cargo bench --package projection
//! Or: cargo bench --package projection --bench mollweide_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use projection::{solve_theta, Mollweide, MollweideParams, Point2, EPSLN};

// =============================================================================
// SOLVER BENCHMARKS
// =============================================================================

fn bench_solve_theta(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_theta");

    // Iteration count grows toward the poles
    for lat_deg in [0.0_f64, 45.0, 80.0, 89.9, 90.0] {
        group.bench_with_input(BenchmarkId::from_parameter(lat_deg), &lat_deg, |b, &lat| {
            let lat = lat.to_radians();
            b.iter(|| solve_theta(black_box(lat), EPSLN))
        });
    }

    group.finish();
}

// =============================================================================
// POINT TRANSFORM BENCHMARKS
// =============================================================================

fn bench_single_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_point");
    let proj = Mollweide::new(MollweideParams::default()).expect("valid params");

    group.bench_function("forward", |b| {
        b.iter(|| proj.forward(black_box(Point2::new(0.5, 0.8))))
    });

    let projected = proj.forward(Point2::new(0.5, 0.8));
    group.bench_function("inverse", |b| b.iter(|| proj.inverse(black_box(projected))));

    group.finish();
}

// =============================================================================
// BATCH BENCHMARKS
// =============================================================================

fn global_points(n_lon: usize, n_lat: usize) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(n_lon * n_lat);
    for j in 0..n_lat {
        let lat = -89.0 + 178.0 * j as f64 / (n_lat - 1) as f64;
        for i in 0..n_lon {
            let lon = -179.0 + 358.0 * i as f64 / (n_lon - 1) as f64;
            points.push(Point2::new(lon.to_radians(), lat.to_radians()));
        }
    }
    points
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let proj = Mollweide::new(MollweideParams::default()).expect("valid params");

    for size in [64usize, 256] {
        let points = global_points(size, size);
        group.throughput(Throughput::Elements(points.len() as u64));

        group.bench_with_input(BenchmarkId::new("forward", size), &points, |b, points| {
            b.iter(|| {
                let mut buf = points.clone();
                proj.forward_batch(black_box(&mut buf));
                buf
            })
        });

        let mut projected = points.clone();
        proj.forward_batch(&mut projected);
        group.bench_with_input(BenchmarkId::new("inverse", size), &projected, |b, projected| {
            b.iter(|| {
                let mut buf = projected.clone();
                proj.inverse_batch(black_box(&mut buf));
                buf
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve_theta, bench_single_point, bench_batch);
criterion_main!(benches);

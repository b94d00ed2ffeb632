//! Trend fitting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (100 to 10K points)
//! - Model families (linear, exponential, logarithmic, power, polynomial)
//! - Polynomial orders (2 to 6)
//! - Curve sampling resolution
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_distr::Normal;
use std::hint::black_box;
use trendline_rs::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate linear data with Gaussian noise.
fn generate_linear_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    let x: Vec<f64> = (1..=size).map(|i| i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 0.5 + 2.0 * xi + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate exponential-growth data with multiplicative noise.
fn generate_growth_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.05).unwrap();

    let x: Vec<f64> = (1..=size).map(|i| i as f64 / size as f64 * 10.0).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 1.5 * (0.3 * xi).exp() * (1.0 + noise_dist.sample(&mut rng)).abs())
        .collect();
    (x, y)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    let model = TrendFit::new().build().unwrap();

    for size in [100, 1_000, 10_000] {
        let (x, y) = generate_linear_data(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("linear", size), &size, |b, _| {
            b.iter(|| model.fit(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("families");
    let (x, y) = generate_growth_data(1_000, 7);

    let families = [
        ("linear", Linear),
        ("exponential", Exponential),
        ("logarithmic", Logarithmic),
        ("power", Power),
        ("polynomial", Polynomial { order: 2 }),
    ];

    for (name, kind) in families {
        let model = TrendFit::new().model(kind).build().unwrap();
        group.bench_function(name, |b| {
            b.iter(|| model.fit(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_polynomial_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_orders");
    let (x, y) = generate_linear_data(1_000, 13);

    for order in [2, 3, 4, 5, 6] {
        let model = TrendFit::new()
            .model(Polynomial { order })
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, _| {
            b.iter(|| model.fit(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");
    let (x, y) = generate_linear_data(1_000, 21);
    let model = TrendFit::new().build().unwrap();
    let fit = model.fit(&x, &y).unwrap();

    for points in [100, 1_000] {
        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, &points| {
            b.iter(|| black_box(&fit).curve_points(points).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_families,
    bench_polynomial_orders,
    bench_curve_sampling
);
criterion_main!(benches);

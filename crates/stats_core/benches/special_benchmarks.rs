//! Criterion benchmarks for stats_core special functions.
//!
//! Measures the incomplete gamma function on both evaluation branches and
//! the incomplete beta inversion across shape regimes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stats_core::math::special::{
    inv_reg_incomplete_beta, ln_gamma, norm_quantile, reg_incomplete_beta, reg_lower_gamma,
};

/// Benchmark ln_gamma on the Lanczos and reflection paths.
fn bench_ln_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("ln_gamma");
    for x in [0.25_f64, 3.5, 1000.0] {
        group.bench_with_input(BenchmarkId::from_parameter(x), &x, |b, &x| {
            b.iter(|| ln_gamma(black_box(x)));
        });
    }
    group.finish();
}

/// Benchmark P(a, x) for the series (x < a + 1) and continued-fraction branches.
fn bench_incomplete_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("reg_lower_gamma");
    for (label, a, x) in [
        ("series_small", 0.5_f64, 0.3_f64),
        ("series_large", 100.0, 90.0),
        ("fraction_small", 0.5, 5.0),
        ("fraction_large", 100.0, 115.0),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| reg_lower_gamma(black_box(a), black_box(x)));
        });
    }
    group.finish();
}

/// Benchmark I_x(a, b) and its inverse.
fn bench_incomplete_beta(c: &mut Criterion) {
    let mut group = c.benchmark_group("incomplete_beta");
    group.bench_function("forward", |b| {
        b.iter(|| reg_incomplete_beta(black_box(2.5_f64), black_box(6.0), black_box(0.3)));
    });
    for (a, bb) in [(0.5_f64, 0.5_f64), (2.5, 6.0), (50.0, 80.0)] {
        group.bench_with_input(
            BenchmarkId::new("inverse", format!("{}_{}", a, bb)),
            &(a, bb),
            |b, &(a, bb)| {
                b.iter(|| inv_reg_incomplete_beta(a, bb, black_box(0.9)));
            },
        );
    }
    group.finish();
}

/// Benchmark the inverse normal used for Wilson–Hilferty seeding.
fn bench_norm_quantile(c: &mut Criterion) {
    c.bench_function("norm_quantile", |b| {
        b.iter(|| norm_quantile(black_box(0.975_f64)));
    });
}

criterion_group!(
    benches,
    bench_ln_gamma,
    bench_incomplete_gamma,
    bench_incomplete_beta,
    bench_norm_quantile
);
criterion_main!(benches);

//! Benchmarks for the position sizer and method comparison.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;
use sizing_calc::{ComparisonAggregator, PositionSizer};
use sizing_core::{Grade, SizingMethod};

fn benchmark_compute_size(c: &mut Criterion) {
    let sizer = PositionSizer::default();

    c.bench_function("compute_size", |b| {
        b.iter(|| {
            for method in SizingMethod::all() {
                for grade in Grade::all() {
                    let _ = black_box(sizer.compute_size(
                        black_box(dec!(100000)),
                        black_box(dec!(1.25)),
                        *method,
                        *grade,
                    ));
                }
            }
        })
    });
}

fn benchmark_comparison(c: &mut Criterion) {
    let aggregator = ComparisonAggregator::default();

    c.bench_function("compare_methods", |b| {
        b.iter(|| aggregator.compute(black_box(dec!(100000)), black_box(dec!(1))))
    });
}

criterion_group!(benches, benchmark_compute_size, benchmark_comparison);
criterion_main!(benches);

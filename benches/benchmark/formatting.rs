use crate::common::{configure_criterion, deep_chain};
use criterion::{criterion_group, BenchmarkId, Criterion};
use error_trail::{Aggregate, Error};
use std::hint::black_box;

pub fn bench_plain(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/plain");

    for depth in [5, 20] {
        let err = deep_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| black_box(err.to_string()))
        });
    }
    group.finish();
}

/// Extended rendering resolves symbols for every captured stack.
pub fn bench_extended(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/extended");

    let err = Error::new("disk full").wrap("writing segment");
    group.bench_function("wrapped_root", |b| b.iter(|| black_box(format!("{:#}", err))));

    group.finish();
}

pub fn bench_aggregate(c: &mut Criterion) {
    let agg: Aggregate = (0..10).map(|i| Error::new(format!("field_{i} invalid"))).collect();

    c.bench_function("formatting/aggregate_10", |b| b.iter(|| black_box(agg.to_string())));
}

criterion_group! {
    name = formatting_benches;
    config = configure_criterion();
    targets =
        bench_plain,
        bench_extended,
        bench_aggregate,
}

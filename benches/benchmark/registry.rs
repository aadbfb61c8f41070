use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use error_trail::registry::Registry;
use error_trail::{DefaultCoder, Error};
use std::hint::black_box;

pub fn bench_resolution(c: &mut Criterion) {
    let registry = Registry::new();
    registry
        .register_all((10_000..10_500).map(|code| DefaultCoder::new(code, "generated")))
        .expect("distinct codes");

    let known = Error::new("boom").wrap_code(10_250).wrap("ctx");
    let unknown = Error::new("boom").with_code(99_999);

    let mut group = c.benchmark_group("registry/resolve");
    group.bench_function("registered", |b| b.iter(|| black_box(known.coder_in(&registry))));
    group.bench_function("unregistered", |b| b.iter(|| black_box(unknown.coder_in(&registry))));
    group.finish();
}

pub fn bench_registration(c: &mut Criterion) {
    c.bench_function("registry/register_unregister", |b| {
        let registry = Registry::new();
        b.iter(|| {
            registry.register(DefaultCoder::new(20_000, "temporary")).expect("code is free");
            black_box(registry.unregister(20_000))
        })
    });
}

criterion_group! {
    name = registry_benches;
    config = configure_criterion();
    targets =
        bench_resolution,
        bench_registration,
}

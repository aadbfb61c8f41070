use crate::common::{configure_criterion, DomainError};
use criterion::{criterion_group, Criterion};
use error_trail::{set_capture_mode, CaptureMode, Error, ResultExt};
use std::hint::black_box;

pub fn bench_root_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/root");

    group.bench_function("new_with_stack", |b| {
        set_capture_mode(CaptureMode::Always);
        b.iter(|| black_box(Error::new("connection pool exhausted")))
    });

    group.bench_function("new_without_stack", |b| {
        set_capture_mode(CaptureMode::Never);
        b.iter(|| black_box(Error::new("connection pool exhausted")));
        set_capture_mode(CaptureMode::Always);
    });

    group.bench_function("from_foreign", |b| {
        b.iter(|| black_box(Error::from(DomainError::Network("service unavailable".to_string()))))
    });

    group.finish();
}

pub fn bench_annotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/annotate");

    group.bench_function("with_message", |b| {
        b.iter(|| black_box(Error::from(DomainError::Database("timeout".to_string())).with_message("loading user")))
    });

    group.bench_function("with_code", |b| {
        b.iter(|| black_box(Error::from(DomainError::Database("timeout".to_string())).with_code(503)))
    });

    group.bench_function("wrap", |b| {
        b.iter(|| black_box(Error::from(DomainError::Database("timeout".to_string())).wrap("loading user")))
    });

    group.bench_function("result_ext_ok", |b| {
        b.iter(|| black_box(Ok::<u64, DomainError>(42).wrap("never annotated")))
    });

    group.finish();
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_root_creation,
        bench_annotation,
}

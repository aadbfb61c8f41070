use criterion::criterion_main;

mod common;
mod core;
mod formatting;
mod registry;

criterion_main!(
    core::core_benches,
    traversal::traversal_benches,
    formatting::formatting_benches,
    registry::registry_benches,
);

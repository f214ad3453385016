//! Benchmarks for synthesis primitives and the export path.

mod additive;
mod export;
mod fm;
mod normalize;

pub use additive::bench_additive;
pub use export::bench_export;
pub use fm::bench_fm;
pub use normalize::bench_normalize;

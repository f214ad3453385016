//! Benchmarks for two-operator FM generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavegen::dsp::generate_fm;

use crate::FRAME_COUNTS;

pub fn bench_fm(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fm");

    for &frames in FRAME_COUNTS {
        for index in [0.0, 3.0] {
            let id = BenchmarkId::new(format!("index_{index}"), frames);
            group.bench_with_input(id, &frames, |b, &n| {
                b.iter(|| generate_fm(black_box(n), 1.0, 1.0, black_box(index)))
            });
        }
    }

    group.finish();
}

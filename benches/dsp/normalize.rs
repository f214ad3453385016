//! Benchmarks for peak normalization.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavegen::dsp::{generate_fm, normalize, normalize_in_place};

use crate::FRAME_COUNTS;

pub fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/normalize");

    for &frames in FRAME_COUNTS {
        let input: Vec<f64> = generate_fm(frames, 1.0, 1.0, 3.0)
            .unwrap()
            .into_iter()
            .map(|s| s * 0.37)
            .collect();

        // Allocates a fresh buffer
        group.bench_with_input(BenchmarkId::new("copy", frames), &input, |b, input| {
            b.iter(|| normalize(black_box(input)))
        });

        // Scales a reused buffer
        let mut scratch = input.clone();
        group.bench_with_input(BenchmarkId::new("in_place", frames), &input, |b, input| {
            b.iter(|| {
                scratch.copy_from_slice(input);
                normalize_in_place(black_box(&mut scratch))
            })
        });
    }

    group.finish();
}

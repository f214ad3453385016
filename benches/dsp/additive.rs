//! Benchmarks for additive waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavegen::dsp::generate_additive;

use crate::FRAME_COUNTS;

pub fn bench_additive(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/additive");

    // 1/n weights, saw-like
    let saw: Vec<f64> = (1..=16).map(|n| 1.0 / n as f64).collect();
    let weights = [1.0, 0.5, 0.25, 0.125];

    for &frames in FRAME_COUNTS {
        // Fundamental only - one sin() per frame
        group.bench_with_input(BenchmarkId::new("sine", frames), &frames, |b, &n| {
            b.iter(|| generate_additive(black_box(n), None))
        });

        // Four harmonics, the demo preset
        group.bench_with_input(BenchmarkId::new("harmonics_4", frames), &frames, |b, &n| {
            b.iter(|| generate_additive(black_box(n), Some(black_box(&weights[..]))))
        });

        // Sixteen harmonics - cost scales with harmonic count
        group.bench_with_input(BenchmarkId::new("harmonics_16", frames), &frames, |b, &n| {
            b.iter(|| generate_additive(black_box(n), Some(black_box(&saw[..]))))
        });
    }

    group.finish();
}

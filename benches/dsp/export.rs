//! Benchmarks for quantization and WAV writing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavegen::{
    io::{export_pcm, quantize},
    ExportConfig, Waveform,
};

use crate::FRAME_COUNTS;

pub fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("io/export");
    let dir = tempfile::tempdir().unwrap();
    let config = ExportConfig::default();
    let full_scale = config.full_scale();

    for &frames in FRAME_COUNTS {
        let samples = Waveform::additive(frames, [1.0, 0.5, 0.25, 0.125])
            .render_normalized()
            .unwrap();

        // Quantization alone, no file
        group.bench_with_input(BenchmarkId::new("quantize", frames), &samples, |b, s| {
            b.iter(|| {
                s.iter()
                    .map(|&x| quantize(black_box(x), full_scale))
                    .fold(0i64, |acc, q| acc + q as i64)
            })
        });

        let path = dir.path().join(format!("bench_{frames}.wav"));
        group.bench_with_input(BenchmarkId::new("write", frames), &samples, |b, s| {
            b.iter(|| export_pcm(&path, black_box(s), &config).unwrap())
        });
    }

    group.finish();
}

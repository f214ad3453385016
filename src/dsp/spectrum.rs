//! Harmonic inspection of single-cycle buffers.
//!
//! A buffer that holds whole cycles is exactly periodic, so a plain
//! rectangular-window FFT lands every harmonic on its own bin with no
//! leakage. Bin k is the k-th harmonic of the buffer period.

use rustfft::{num_complex::Complex, FftPlanner};

fn forward(samples: &[f64]) -> Vec<Complex<f64>> {
    let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    if buffer.is_empty() {
        return buffer;
    }
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

/// Amplitudes of harmonics `1..=count`, scaled so a unit sine reads 1.0.
///
/// Harmonics at or above Nyquist are reported as 0.0.
pub fn harmonic_magnitudes(samples: &[f64], count: usize) -> Vec<f64> {
    let bins = forward(samples);
    let half = bins.len() / 2;
    let scale = if half > 0 { 1.0 / half as f64 } else { 0.0 };

    (1..=count)
        .map(|k| {
            if k < half {
                bins[k].norm() * scale
            } else {
                0.0
            }
        })
        .collect()
}

/// Index of the strongest non-DC bin below Nyquist, or `None` for buffers too
/// short to hold one.
pub fn dominant_bin(samples: &[f64]) -> Option<usize> {
    let bins = forward(samples);
    let half = bins.len() / 2;
    (1..half).max_by(|&a, &b| bins[a].norm().total_cmp(&bins[b].norm()))
}

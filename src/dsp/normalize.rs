//! Peak normalization.
//!
//! Scales a buffer so its largest absolute sample is exactly 1.0. Buffers
//! whose peak is under [`MIN_PEAK`] are rejected instead of amplified: at that
//! level the gain would exceed 100x and the input is effectively silence.

use crate::error::{Result, WaveError};

/// Smallest peak that will be normalized.
pub const MIN_PEAK: f64 = 0.01;

/// Largest absolute sample value. Empty buffers have a peak of 0.0.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0f64, |acc, s| {
        let a = s.abs();
        // NaN must poison the result so the guard sees it.
        if a.is_nan() || acc.is_nan() {
            f64::NAN
        } else {
            acc.max(a)
        }
    })
}

/// Return a copy of `samples` scaled to unit peak.
pub fn normalize(samples: &[f64]) -> Result<Vec<f64>> {
    let mut out = samples.to_vec();
    normalize_in_place(&mut out)?;
    Ok(out)
}

/// Scale `samples` to unit peak in place. On error the buffer is untouched.
pub fn normalize_in_place(samples: &mut [f64]) -> Result<()> {
    let peak = peak(samples);
    if !peak.is_finite() || peak < MIN_PEAK {
        return Err(WaveError::DegenerateSignal { peak });
    }

    for s in samples.iter_mut() {
        *s /= peak;
    }
    tracing::debug!(peak, gain = 1.0 / peak, "normalized buffer");
    Ok(())
}

//! Waveform synthesis math and buffer post-processing.
//!
//! Everything here is pure computation over owned `Vec<f64>` buffers: no
//! filesystem access, no shared state. Synthesizers return raw buffers that
//! must go through [`normalize`] before they are quantized for export.

/// Fourier-style summation of phase-aligned sine harmonics.
pub mod additive;
/// Two-operator frequency modulation.
pub mod fm;
/// Peak normalization with a silent-input guard.
pub mod normalize;
/// FFT-based harmonic inspection of single-cycle buffers.
pub mod spectrum;

pub use additive::{generate_additive, AdditiveParams};
pub use fm::{generate_fm, FmParams};
pub use normalize::{normalize, normalize_in_place, peak, MIN_PEAK};

use crate::error::{Result, WaveError};

/// Reject frame counts that would divide by zero in the phase step.
pub(crate) fn check_frame_count(frame_count: usize) -> Result<()> {
    if frame_count == 0 {
        return Err(WaveError::invalid("frame count must be positive"));
    }
    Ok(())
}

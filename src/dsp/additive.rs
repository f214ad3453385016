#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::check_frame_count;
use crate::error::Result;

/*
Additive Synthesis
==================

Any periodic waveform can be built by stacking sine waves at whole-number
multiples of a fundamental frequency. Each multiple is a harmonic, and the
weight given to each one decides the timbre.

  harmonic 1  fundamental     sin(1 * x)
  harmonic 2  octave          sin(2 * x)
  harmonic 3  octave + fifth  sin(3 * x)
  ...

The buffer spans exactly one period of the fundamental. With N frames the
phase step is

    step = 2π / N

and frame i is

    sample[i] = Σ weight[n] * sin((n + 1) * i * step)

for every harmonic index n (0-based, so index 0 is the fundamental). All
harmonics start at a zero crossing, so sample[0] is always 0.0.

Weights are not scaled here. A buffer like [1.0, 0.5, 0.25, 0.125] peaks
above 1.0 and has to be normalized before it can be quantized.

Some familiar weight sets:

  [1.0]                         pure sine
  [1.0, 0.5, 0.333, 0.25, ...]  saw-like (1/n)
  [1.0, 0.0, 0.333, 0.0, 0.2]   square-like (odd harmonics, 1/n)
*/

/// Parameters for an additive single-cycle waveform.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AdditiveParams {
    /// Number of frames spanning one period of the fundamental.
    pub frame_count: usize,
    /// Harmonic weights; index 0 is the fundamental.
    pub harmonics: Vec<f64>,
}

impl AdditiveParams {
    /// Pure fundamental sine.
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            harmonics: vec![1.0],
        }
    }

    pub fn with_harmonics(mut self, harmonics: impl Into<Vec<f64>>) -> Self {
        self.harmonics = harmonics.into();
        self
    }

    pub fn render(&self) -> Result<Vec<f64>> {
        generate_additive(self.frame_count, Some(self.harmonics.as_slice()))
    }
}

/// Sum phase-aligned sine harmonics across one period of `frame_count` frames.
///
/// `None` means a single fundamental (`[1.0]`). An empty weight list yields a
/// silent buffer, which the normalizer will later reject.
pub fn generate_additive(frame_count: usize, harmonics: Option<&[f64]>) -> Result<Vec<f64>> {
    check_frame_count(frame_count)?;
    let harmonics = harmonics.unwrap_or(&[1.0]);

    let step = TAU / frame_count as f64;
    let mut frames = vec![0.0; frame_count];

    for (i, frame) in frames.iter_mut().enumerate() {
        for (n, &weight) in harmonics.iter().enumerate() {
            *frame += weight * ((n as f64 + 1.0) * i as f64 * step).sin();
        }
    }

    tracing::debug!(frame_count, harmonics = harmonics.len(), "rendered additive waveform");
    Ok(frames)
}

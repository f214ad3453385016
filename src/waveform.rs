//! One type for both synthesizer families.
//!
//! Additive and FM waveforms share the same back half: normalize to unit
//! peak, quantize, write. [`Waveform`] carries the parameters for either and
//! runs that pipeline.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dsp::{normalize, AdditiveParams, FmParams};
use crate::error::Result;
use crate::io::wav::{export_pcm, ExportConfig};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Waveform {
    Additive(AdditiveParams),
    Fm(FmParams),
}

impl Waveform {
    pub fn additive(frame_count: usize, harmonics: impl Into<Vec<f64>>) -> Self {
        Self::Additive(AdditiveParams::new(frame_count).with_harmonics(harmonics))
    }

    pub fn fm(frame_count: usize, carrier_ratio: f64, modulator_ratio: f64, mod_index: f64) -> Self {
        Self::Fm(
            FmParams::new(frame_count)
                .carrier_ratio(carrier_ratio)
                .modulator_ratio(modulator_ratio)
                .mod_index(mod_index),
        )
    }

    pub fn frame_count(&self) -> usize {
        match self {
            Self::Additive(p) => p.frame_count,
            Self::Fm(p) => p.frame_count,
        }
    }

    /// Same waveform at a different length.
    pub fn with_frame_count(mut self, frame_count: usize) -> Self {
        match &mut self {
            Self::Additive(p) => p.frame_count = frame_count,
            Self::Fm(p) => p.frame_count = frame_count,
        }
        self
    }

    /// Raw synthesizer output, not normalized.
    pub fn render(&self) -> Result<Vec<f64>> {
        match self {
            Self::Additive(p) => p.render(),
            Self::Fm(p) => p.render(),
        }
    }

    /// Synthesizer output scaled to unit peak.
    pub fn render_normalized(&self) -> Result<Vec<f64>> {
        normalize(&self.render()?)
    }

    /// Render, normalize, and write to `path`.
    pub fn export(&self, path: &Path, config: &ExportConfig) -> Result<()> {
        let samples = self.render_normalized()?;
        export_pcm(path, &samples, config)
    }
}

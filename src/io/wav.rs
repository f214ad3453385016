//! PCM WAV export.
//!
//! Normalized `f64` samples are quantized by truncation toward zero against
//! the symmetric full-scale value `2^(bits-1) - 1`, so at 16 bits 1.0 maps to
//! 32767 and -1.0 maps to -32767. The most negative code is never produced.

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, WaveError};
use crate::DEFAULT_SAMPLE_RATE;

/// Output format for exported files.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl Default for ExportConfig {
    /// Mono, 16-bit, 48 kHz.
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: 1,
            bits_per_sample: 16,
        }
    }
}

impl ExportConfig {
    pub fn new(sample_rate: u32, channels: u16, bits_per_sample: u16) -> Self {
        Self {
            sample_rate,
            channels,
            bits_per_sample,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(WaveError::invalid("sample rate must be positive"));
        }
        if self.channels == 0 {
            return Err(WaveError::invalid("channel count must be positive"));
        }
        if !matches!(self.bits_per_sample, 8 | 16 | 24 | 32) {
            return Err(WaveError::invalid(format!(
                "unsupported bit depth {}",
                self.bits_per_sample
            )));
        }
        Ok(())
    }

    /// Largest positive integer code at this bit depth.
    pub fn full_scale(&self) -> i32 {
        ((1i64 << self.bits_per_sample.saturating_sub(1).min(31)) - 1) as i32
    }

    fn spec(&self) -> WavSpec {
        WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
            sample_format: SampleFormat::Int,
        }
    }
}

/// Truncating conversion of one normalized sample to an integer code.
///
/// Values outside [-1.0, 1.0] are clamped first.
#[inline]
pub fn quantize(sample: f64, full_scale: i32) -> i32 {
    (sample.clamp(-1.0, 1.0) * full_scale as f64) as i32
}

/// Create `dir` and its parents. An existing directory is not an error.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write normalized samples to `path` as an uncompressed PCM WAV file.
///
/// The parent directory is created if missing. Each sample is written to
/// every channel of its frame.
pub fn export_pcm(path: &Path, samples: &[f64], config: &ExportConfig) -> Result<()> {
    config.validate()?;
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let full_scale = config.full_scale();
    let mut writer = WavWriter::create(path, config.spec())?;
    for &s in samples {
        let code = quantize(s, full_scale);
        for _ in 0..config.channels {
            match config.bits_per_sample {
                8 => writer.write_sample(code as i8)?,
                16 => writer.write_sample(code as i16)?,
                _ => writer.write_sample(code)?,
            }
        }
    }
    writer.finalize()?;

    tracing::info!(
        path = %path.display(),
        frames = samples.len(),
        sample_rate = config.sample_rate,
        bits = config.bits_per_sample,
        "wrote wav"
    );
    Ok(())
}

/// Read a PCM file back as normalized samples from its first channel.
pub fn read_pcm(path: &Path) -> Result<(ExportConfig, Vec<f64>)> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int {
        return Err(WaveError::invalid("only integer PCM can be read back"));
    }

    let config = ExportConfig::new(spec.sample_rate, spec.channels, spec.bits_per_sample);
    config.validate()?;
    let full_scale = config.full_scale() as f64;
    let channels = config.channels as usize;

    let samples = reader
        .samples::<i32>()
        .step_by(channels)
        .map(|s| s.map(|code| code as f64 / full_scale))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok((config, samples))
}

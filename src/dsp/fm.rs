#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::check_frame_count;
use crate::error::Result;

/*
Two-Operator FM
===============

Frequency modulation uses one sine (the modulator) to push the pitch of
another sine (the carrier) up and down. When the modulator runs at audio
rate the wobble is too fast to hear as vibrato and turns into sidebands:
new partials spaced around the carrier by multiples of the modulator rate.

Vocabulary
----------

  carrier       The oscillator you hear.

  modulator     The oscillator that bends the carrier's frequency.

  ratio         Frequency of an operator relative to the buffer period.

  mod index     Depth of modulation. 0 is a plain sine, larger values
                spread energy into more sidebands (brighter, more metallic).

  accumulator   Running phase. Each frame adds a step; the step size is
                the instantaneous frequency.


The Math
--------

Both operators add 1.0 to their ratio before computing a step, so a ratio
of 1 means two cycles across the buffer:

    modulator_step = 2π * (modulator_ratio + 1) / N

    carrier_step[i] = 2π * (carrier_ratio + 1)
                    * (1 + modulator[i] * mod_index) / N

The carrier's step is scaled per frame by the modulator value, which is
true frequency modulation (the phase integrates the bent frequency) rather
than phase modulation.

Phase advances BEFORE sampling on both operators:

    phase += step
    out[i] = sin(phase)

so frame 0 already sits one step into the cycle. This offset and the +1
ratio bias shape the exact output of existing sample packs and must stay.


Character
---------

  index 0      pure sine at (carrier_ratio + 1) cycles per buffer
  index 1      mellow, slightly nasal
  index 3      bright, bell/brass edge
  index > 5    harsh, noisy; carrier can run backwards when
               1 + modulator * index < 0
*/

/// Parameters for a two-operator FM waveform.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FmParams {
    pub frame_count: usize,
    pub carrier_ratio: f64,
    pub modulator_ratio: f64,
    pub mod_index: f64,
}

impl FmParams {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            carrier_ratio: 1.0,
            modulator_ratio: 1.0,
            mod_index: 1.0,
        }
    }

    pub fn carrier_ratio(mut self, ratio: f64) -> Self {
        self.carrier_ratio = ratio;
        self
    }

    pub fn modulator_ratio(mut self, ratio: f64) -> Self {
        self.modulator_ratio = ratio;
        self
    }

    pub fn mod_index(mut self, index: f64) -> Self {
        self.mod_index = index;
        self
    }

    pub fn render(&self) -> Result<Vec<f64>> {
        generate_fm(
            self.frame_count,
            self.carrier_ratio,
            self.modulator_ratio,
            self.mod_index,
        )
    }
}

/// The modulator operator on its own: a sine advanced before each sample.
pub fn modulator_sweep(frame_count: usize, modulator_ratio: f64) -> Result<Vec<f64>> {
    check_frame_count(frame_count)?;

    let step = TAU * (modulator_ratio + 1.0) / frame_count as f64;
    let mut phase = 0.0;
    let frames = (0..frame_count)
        .map(|_| {
            phase += step;
            phase.sin()
        })
        .collect();
    Ok(frames)
}

/// Render the carrier of a two-operator FM pair. Output is not normalized.
pub fn generate_fm(
    frame_count: usize,
    carrier_ratio: f64,
    modulator_ratio: f64,
    mod_index: f64,
) -> Result<Vec<f64>> {
    let modulator = modulator_sweep(frame_count, modulator_ratio)?;

    let base = TAU * (carrier_ratio + 1.0);
    let n = frame_count as f64;
    let mut phase = 0.0;
    let carrier = modulator
        .iter()
        .map(|m| {
            phase += base * (1.0 + m * mod_index) / n;
            phase.sin()
        })
        .collect();

    tracing::debug!(
        frame_count,
        carrier_ratio,
        modulator_ratio,
        mod_index,
        "rendered fm waveform"
    );
    Ok(carrier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaveError;

    #[test]
    fn zero_index_is_plain_carrier() {
        let n = 1024;
        let frames = generate_fm(n, 1.0, 1.0, 0.0).unwrap();

        // Carrier ratio 1 → two cycles, sampled after the first step.
        for (i, actual) in frames.iter().enumerate() {
            let expected = (TAU * 2.0 * (i + 1) as f64 / n as f64).sin();
            assert!(
                (actual - expected).abs() < 1e-9,
                "frame {i}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn zero_index_ignores_modulator_ratio() {
        let a = generate_fm(512, 2.0, 0.5, 0.0).unwrap();
        let b = generate_fm(512, 2.0, 7.0, 0.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn modulator_samples_after_first_step() {
        let sweep = modulator_sweep(1024, 1.0).unwrap();
        let step = TAU * 2.0 / 1024.0;
        assert!((sweep[0] - step.sin()).abs() < 1e-15);
        assert!(sweep[0] > 0.0);
    }

    #[test]
    fn first_carrier_frame_follows_formula() {
        let n = 1024;
        let (cr, mr, idx) = (1.0, 1.0, 3.0);
        let frames = generate_fm(n, cr, mr, idx).unwrap();

        let m0 = (TAU * (mr + 1.0) / n as f64).sin();
        let step0 = TAU * (cr + 1.0) * (1.0 + m0 * idx) / n as f64;
        let m1 = (2.0 * TAU * (mr + 1.0) / n as f64).sin();
        let step1 = TAU * (cr + 1.0) * (1.0 + m1 * idx) / n as f64;

        assert!((frames[0] - step0.sin()).abs() < 1e-12);
        assert!((frames[1] - (step0 + step1).sin()).abs() < 1e-12);
    }

    #[test]
    fn modulation_changes_output() {
        let plain = generate_fm(1024, 1.0, 1.0, 0.0).unwrap();
        let bent = generate_fm(1024, 1.0, 1.0, 3.0).unwrap();
        assert_eq!(plain.len(), bent.len());
        assert!(plain.iter().zip(&bent).any(|(a, b)| (a - b).abs() > 0.1));
    }

    #[test]
    fn bounded_and_deterministic() {
        let params = FmParams::new(2048).mod_index(3.0);
        let a = params.render().unwrap();
        assert!(a.iter().all(|s| s.is_finite() && s.abs() <= 1.0));
        assert_eq!(a, params.render().unwrap());
    }

    #[test]
    fn zero_frames_rejected() {
        assert!(matches!(
            generate_fm(0, 1.0, 1.0, 1.0),
            Err(WaveError::InvalidArgument(_))
        ));
    }
}

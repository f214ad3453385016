//! Named demonstration waveforms.
//!
//! These are the files the `wavegen` binary writes: a pure sine, a four
//! harmonic stack with halving weights, and a bright FM tone.

use crate::waveform::Waveform;

#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub file_name: &'static str,
    pub waveform: Waveform,
}

pub const NAMES: [&str; 3] = ["sine", "harmonics", "fm"];

/// Every preset at `frame_count`, in output order.
pub fn all(frame_count: usize) -> Vec<Preset> {
    vec![
        Preset {
            name: "sine",
            file_name: "1.wav",
            waveform: Waveform::additive(frame_count, [1.0]),
        },
        Preset {
            name: "harmonics",
            file_name: "2.wav",
            waveform: Waveform::additive(frame_count, [1.0, 0.5, 0.25, 0.125]),
        },
        Preset {
            name: "fm",
            file_name: "3.wav",
            waveform: Waveform::fm(frame_count, 1.0, 1.0, 3.0),
        },
    ]
}

pub fn by_name(name: &str, frame_count: usize) -> Option<Preset> {
    all(frame_count).into_iter().find(|p| p.name == name)
}

pub mod dsp; // Synthesis math and buffer post-processing
pub mod error;
pub mod io; // WAV export and read-back
pub mod presets; // Named demonstration waveforms
pub mod waveform; // Shared synthesize -> normalize -> export pipeline

pub use error::{Result, WaveError};
pub use io::wav::ExportConfig;
pub use waveform::Waveform;

pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;
pub const DEFAULT_FRAME_COUNT: usize = 4096;
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

// Purpose - external interfaces: writing and reading PCM audio files

pub mod wav;

pub use wav::{ensure_dir, export_pcm, quantize, read_pcm, ExportConfig};

//! wavegen - single-cycle sample generator
//!
//! Writes the demonstration waveforms as 48 kHz mono 16-bit WAV files,
//! ready to load onto a hardware sampler.
//!
//! Run with: cargo run -- --num-frames 1024 --out-dir generated

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use wavegen::{
    dsp::{normalize, spectrum},
    io::export_pcm,
    presets, ExportConfig, DEFAULT_FRAME_COUNT, DEFAULT_OUTPUT_DIR,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Frames per single-cycle waveform
    #[arg(long, default_value_t = DEFAULT_FRAME_COUNT)]
    num_frames: usize,

    /// Directory the WAV files are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Log per-waveform details
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = ExportConfig::default();

    for preset in presets::all(args.num_frames) {
        let raw = preset
            .waveform
            .render()
            .wrap_err_with(|| format!("synthesis failed for '{}'", preset.name))?;
        let samples = normalize(&raw)
            .wrap_err_with(|| format!("normalization failed for '{}'", preset.name))?;

        tracing::debug!(
            preset = preset.name,
            harmonics = ?spectrum::harmonic_magnitudes(&samples, 8),
            "harmonic content"
        );

        let path = args.out_dir.join(preset.file_name);
        export_pcm(&path, &samples, &config)
            .wrap_err_with(|| format!("export failed for {}", path.display()))?;
    }

    Ok(())
}

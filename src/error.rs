//! Error types for waveform synthesis and export.

use thiserror::Error;

/// Errors raised while synthesizing, normalizing, or writing a waveform.
#[derive(Debug, Error)]
pub enum WaveError {
    /// A parameter outside the supported domain (zero frames, bad bit depth).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The buffer is too quiet to normalize without amplifying past 100x.
    #[error("normalization would amplify signal over 100x (peak {peak})")]
    DegenerateSignal { peak: f64 },

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl From<hound::Error> for WaveError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(io) => Self::Io(io),
            other => Self::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, other)),
        }
    }
}

impl WaveError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, WaveError>;

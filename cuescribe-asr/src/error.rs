//! Error types for speech-recognition invocations.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Speech-recognition failure variants.
#[derive(Debug, Error)]
pub enum Error {
    /// The whisper binary could not be launched
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The whisper process exited abnormally
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The expected transcription document was not produced
    #[error("transcription output not found: {}", .0.display())]
    MissingOutput(PathBuf),

    /// The transcription document could not be parsed
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The audio segment could not be inspected
    #[error(transparent)]
    Wav(#[from] hound::Error),

    /// Scratch-directory or file I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for cuescribe-asr operations.
pub type Result<T> = std::result::Result<T, Error>;

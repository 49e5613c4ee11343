//! Error types for external transcoder invocations.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Transcoding tool failure variants.
#[derive(Debug, Error)]
pub enum Error {
    /// The tool binary could not be launched
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool exited abnormally
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The tool reported success but the expected output file is missing
    #[error("{program} produced no output at {}", .path.display())]
    MissingOutput { program: String, path: PathBuf },
}

/// Result type alias for cuescribe-media operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Speech-recognition capability for the transcription pipeline.
//!
//! [`Transcriber`] is the seam the pipeline consumes; [`Whisper`] implements
//! it by driving the `whisper` CLI. The acoustic model itself is opaque:
//! resampling, feature extraction and decoding all happen inside the
//! external tool.

pub mod error;
pub mod whisper;

pub use error::{Error, Result};
pub use whisper::{Device, Transcription, Whisper, WhisperModel};

use std::path::Path;

/// Speech-recognition capability.
///
/// Implementations load their model once and are shared read-only across a
/// batch; each call transcribes one short audio segment.
pub trait Transcriber {
    /// Recognize the speech in the audio file at `audio`.
    fn transcribe(&self, audio: &Path) -> Result<String>;
}

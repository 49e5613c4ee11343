//! FFmpeg invocation for audio extraction and slicing.

use crate::Transcode;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// FFmpeg subprocess wrapper.
///
/// Extraction resamples the first audio track to 16kHz mono 16-bit PCM WAV,
/// the input format speech-recognition tooling expects. Slicing is a stream
/// copy, so segment boundaries land on the nearest packet without
/// re-encoding.
#[derive(Clone, Debug)]
pub struct Ffmpeg {
    program: OsString,
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Ffmpeg {
    /// Use a specific ffmpeg binary instead of the one on `PATH`.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: Vec<OsString>, output_path: &Path) -> Result<()> {
        let program = self.program.to_string_lossy().into_owned();

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| Error::Launch {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Failed {
                program,
                status: output.status,
                stderr: stderr_tail(&output.stderr),
            });
        }

        if !output_path.is_file() {
            return Err(Error::MissingOutput {
                program,
                path: output_path.to_path_buf(),
            });
        }

        Ok(())
    }
}

impl Transcode for Ffmpeg {
    fn extract_audio(&self, video: &Path, audio_out: &Path) -> Result<()> {
        tracing::debug!(video = ?video.display(), "extracting audio track");

        self.run(extract_args(video, audio_out), audio_out)
    }

    fn slice_audio(
        &self,
        audio: &Path,
        start: &str,
        end: &str,
        segment_out: &Path,
    ) -> Result<()> {
        tracing::debug!(audio = ?audio.display(), start, end, "slicing audio");

        self.run(slice_args(audio, start, end, segment_out), segment_out)
    }
}

/// Arguments for extracting the first audio track as 16kHz mono PCM WAV.
fn extract_args(video: &Path, audio_out: &Path) -> Vec<OsString> {
    vec![
        "-hide_banner".into(),
        "-nostdin".into(),
        "-y".into(),
        "-i".into(),
        video.into(),
        "-map".into(),
        "0:a:0".into(),
        "-ac".into(),
        "1".into(),
        "-ar".into(),
        "16000".into(),
        "-c:a".into(),
        "pcm_s16le".into(),
        audio_out.into(),
    ]
}

/// Arguments for a lossless stream-copy slice of `audio`.
fn slice_args(audio: &Path, start: &str, end: &str, segment_out: &Path) -> Vec<OsString> {
    vec![
        "-hide_banner".into(),
        "-nostdin".into(),
        "-y".into(),
        "-i".into(),
        audio.into(),
        "-ss".into(),
        start.into(),
        "-to".into(),
        end.into(),
        "-c".into(),
        "copy".into(),
        segment_out.into(),
    ]
}

/// Last few stderr lines, joined for single-line error context.
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let mut lines: Vec<&str> = text.lines().rev().take(4).collect();
    lines.reverse();
    lines.join(" | ")
}

//! Per-pair transcription pipeline.
//!
//! For one video/subtitle pair: extract audio once, slice it along the
//! subtitle cue timings, transcribe every slice in cue order, then write
//! the assembled transcript next to the video. All intermediate audio lives
//! in a scratch directory that is released on every exit path, so a failed
//! pair leaves nothing behind.

use crate::scan::{MediaPair, transcript_path};
use cuescribe_asr::Transcriber;
use cuescribe_media::Transcode;
use cuescribe_vtt::timecode::format_timestamp;
use eyre::{Context, Result};
use std::path::PathBuf;

/// Process one pair, returning the written transcript path.
pub fn process_pair<T, R>(transcoder: &T, transcriber: &R, pair: &MediaPair) -> Result<PathBuf>
where
    T: Transcode,
    R: Transcriber,
{
    let workspace = tempfile::tempdir().wrap_err("failed to allocate scratch directory")?;

    tracing::info!(video = ?pair.video.display(), "extracting audio");

    let audio = workspace.path().join("audio.wav");
    transcoder
        .extract_audio(&pair.video, &audio)
        .wrap_err_with(|| format!("failed to extract audio from {:?}", pair.video.display()))?;

    tracing::info!(subtitle = ?pair.subtitle.display(), "parsing subtitle cues");

    let text = std::fs::read_to_string(&pair.subtitle)
        .wrap_err_with(|| format!("failed to read subtitle {:?}", pair.subtitle.display()))?;
    let cues = cuescribe_vtt::scan_cues(&text)
        .wrap_err_with(|| format!("failed to parse subtitle {:?}", pair.subtitle.display()))?;

    tracing::info!(cues = cues.len(), "slicing audio");

    let mut segments = Vec::with_capacity(cues.len());

    for (index, range) in cues.iter().enumerate() {
        let start = format_timestamp(range.start)?;
        let end = format_timestamp(range.end)?;

        let segment = workspace.path().join(format!("segment_{index:03}.wav"));
        transcoder
            .slice_audio(&audio, &start, &end, &segment)
            .wrap_err_with(|| format!("failed to slice segment {index} ({start} --> {end})"))?;

        segments.push(segment);
    }

    tracing::info!(segments = segments.len(), "transcribing segments");

    let mut fragments = Vec::with_capacity(segments.len());

    for (index, segment) in segments.iter().enumerate() {
        let fragment = transcriber
            .transcribe(segment)
            .wrap_err_with(|| format!("failed to transcribe segment {index}"))?;

        tracing::debug!(segment = index, chars = fragment.len(), "segment transcribed");

        fragments.push(fragment);
    }

    let transcript = normalize_transcript(&fragments.join(" "));

    let output = transcript_path(&pair.video);
    std::fs::write(&output, &transcript)
        .wrap_err_with(|| format!("failed to write transcript {:?}", output.display()))?;

    workspace
        .close()
        .wrap_err("failed to release scratch directory")?;

    tracing::info!(transcript = ?output.display(), "transcript written");

    Ok(output)
}

/// Punctuation cleanup applied to the assembled transcript: every period
/// becomes a space, then doubled spaces collapse in a single pass. The
/// collapse is deliberately not repeated, so three-space runs shrink by one
/// space only.
fn normalize_transcript(text: &str) -> String {
    text.replace('.', " ").replace("  ", " ")
}

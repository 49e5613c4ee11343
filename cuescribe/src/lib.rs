//! Batch subtitle-guided video transcription.
//!
//! Walks a directory tree for video/subtitle pairs, extracts each video's
//! audio with ffmpeg, slices it along the WebVTT cue timings, transcribes
//! every slice in cue order and writes one transcript file per video.

pub mod cli;
pub mod pipeline;
pub mod run;
pub mod scan;

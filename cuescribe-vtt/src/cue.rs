//! Scanning subtitle text for WebVTT cue timing lines.

use crate::error::Result;
use crate::timecode::parse_timestamp;
use regex::Regex;
use std::sync::OnceLock;

/// Time span of a single subtitle cue, in seconds.
///
/// Ranges are emitted in the order their cue lines appear in the source
/// text; that order drives slicing and transcription downstream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeRange {
    /// Cue start in seconds
    pub start: f64,
    /// Cue end in seconds
    pub end: f64,
}

fn cue_timing_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{2}:\d{2}:\d{2}\.\d{3}) --> (\d{2}:\d{2}:\d{2}\.\d{3})")
            .expect("cue timing pattern compiles")
    })
}

/// Scan subtitle text for cue timing lines, in textual order.
///
/// Only timing lines are interpreted; cue identifiers, payload text and
/// styling blocks are ignored. Ranges are not validated beyond timestamp
/// shape: duplicates, overlaps and cues whose start lies after their end are
/// all passed through unchanged. Text without any timing line yields an
/// empty vector, not an error.
pub fn scan_cues(text: &str) -> Result<Vec<TimeRange>> {
    cue_timing_pattern()
        .captures_iter(text)
        .map(|caps| {
            let start = parse_timestamp(&caps[1])?;
            let end = parse_timestamp(&caps[2])?;
            Ok(TimeRange { start, end })
        })
        .collect()
}

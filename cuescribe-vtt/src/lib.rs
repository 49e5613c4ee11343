//! WebVTT cue timing extraction for subtitle-guided transcription.
//!
//! Two small pure pieces: [`timecode`] converts between `HH:MM:SS.mmm`
//! timestamps and seconds, [`cue`] scans subtitle text for cue timing lines.
//! Nothing else of the WebVTT format is interpreted.

pub mod cue;
pub mod error;
pub mod timecode;

pub use cue::{TimeRange, scan_cues};
pub use error::{Error, Result};
pub use timecode::{format_timestamp, parse_timestamp};

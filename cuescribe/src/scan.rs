//! Discovery of video/subtitle pairs under a directory tree.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Video container extensions eligible for transcription.
const VIDEO_EXTENSIONS: &[&str] = &["avi", "mkv", "mov", "mp4", "webm"];

/// Subtitle extension looked up next to each video.
const SUBTITLE_EXTENSION: &str = "vtt";

/// A video file with its same-stem subtitle sibling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaPair {
    pub video: PathBuf,
    pub subtitle: PathBuf,
}

/// Walk `root` recursively and collect every video that has a same-stem
/// subtitle sibling, in file-name order. A video without one is not an
/// error; it is skipped.
pub fn discover_pairs(root: &Path) -> Vec<MediaPair> {
    let mut pairs = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_video(path) {
            continue;
        }

        let subtitle = path.with_extension(SUBTITLE_EXTENSION);
        if subtitle.is_file() {
            pairs.push(MediaPair {
                video: path.to_path_buf(),
                subtitle,
            });
        } else {
            tracing::debug!(video = ?path.display(), "no matching subtitle, skipping");
        }
    }

    pairs
}

/// Check the extension against the recognized video containers.
fn is_video(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
}

/// Sibling transcript path: same directory, `<stem>_transcription.txt`.
pub fn transcript_path(video: &Path) -> PathBuf {
    let stem = video.file_stem().unwrap_or_default().to_string_lossy();
    video.with_file_name(format!("{stem}_transcription.txt"))
}

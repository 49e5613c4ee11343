//! Whisper CLI invocation and its JSON transcription document.

use crate::Transcriber;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Whisper model size. Larger models are more accurate and slower.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum WhisperModel {
    Tiny,
    #[default]
    Base,
    Small,
    Medium,
    Large,
    Turbo,
}

impl WhisperModel {
    /// Model name as the whisper CLI spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Base => "base",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Turbo => "turbo",
        }
    }
}

impl fmt::Display for WhisperModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device to run inference on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Device {
    #[default]
    Cpu,
    Cuda,
}

impl Device {
    /// Device name as the whisper CLI spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Cuda => "cuda",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transcription document emitted by whisper's JSON output format.
#[derive(Clone, Debug, Deserialize)]
pub struct Transcription {
    /// Full recognized text
    pub text: String,
    /// Per-span detail
    #[serde(default)]
    pub segments: Vec<TranscribedSpan>,
    /// Detected or forced language
    #[serde(default)]
    pub language: String,
}

/// One recognized span within a transcription document.
#[derive(Clone, Debug, Deserialize)]
pub struct TranscribedSpan {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Speech-recognition capability backed by the `whisper` CLI.
///
/// Built once per batch and shared read-only across pairs; each call runs
/// one blocking inference on a short audio segment, with the JSON document
/// collected from a per-call scratch directory.
#[derive(Clone, Debug, Default)]
pub struct Whisper {
    /// Whisper binary; `whisper` on `PATH` when unset
    pub program: Option<PathBuf>,
    /// Model size to load
    pub model: WhisperModel,
    /// Inference device
    pub device: Device,
    /// Language hint; autodetect when unset
    pub language: Option<String>,
    /// Model download/cache directory; the tool's own default when unset
    pub model_dir: Option<PathBuf>,
}

impl Transcriber for Whisper {
    fn transcribe(&self, audio: &Path) -> Result<String> {
        if !has_audio_content(audio)? {
            tracing::warn!(audio = ?audio.display(), "segment has no samples, skipping inference");
            return Ok(String::new());
        }

        let scratch = tempfile::tempdir()?;
        let program = self
            .program
            .clone()
            .unwrap_or_else(|| PathBuf::from("whisper"));

        tracing::debug!(
            audio = ?audio.display(),
            model = self.model.as_str(),
            "running whisper"
        );

        let output = Command::new(&program)
            .args(transcribe_args(self, audio, scratch.path()))
            .output()
            .map_err(|source| Error::Launch {
                program: program.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Failed {
                program: program.to_string_lossy().into_owned(),
                status: output.status,
                stderr: stderr_tail(&output.stderr),
            });
        }

        let document = transcription_path(audio, scratch.path());
        let json = std::fs::read_to_string(&document)
            .map_err(|_| Error::MissingOutput(document.clone()))?;
        let transcription: Transcription = serde_json::from_str(&json)?;

        scratch.close()?;

        Ok(transcription.text)
    }
}

/// Build the whisper CLI argument list for one segment.
fn transcribe_args(whisper: &Whisper, audio: &Path, scratch: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        audio.into(),
        "--model".into(),
        whisper.model.as_str().into(),
        "--device".into(),
        whisper.device.as_str().into(),
        "--task".into(),
        "transcribe".into(),
        "--output_format".into(),
        "json".into(),
        "--output_dir".into(),
        scratch.into(),
        "--verbose".into(),
        "False".into(),
    ];

    if let Some(language) = &whisper.language {
        args.push("--language".into());
        args.push(language.into());
    }

    if let Some(model_dir) = &whisper.model_dir {
        args.push("--model_dir".into());
        args.push(model_dir.into());
    }

    args
}

/// Path of the JSON document whisper writes for `audio` inside `scratch`.
fn transcription_path(audio: &Path, scratch: &Path) -> PathBuf {
    let stem = audio.file_stem().unwrap_or_default();
    scratch.join(Path::new(stem).with_extension("json"))
}

/// WAV header check: a segment without samples skips inference entirely.
fn has_audio_content(audio: &Path) -> Result<bool> {
    let reader = hound::WavReader::open(audio)?;
    Ok(reader.duration() > 0)
}

/// Last few stderr lines, joined for single-line error context.
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let mut lines: Vec<&str> = text.lines().rev().take(4).collect();
    lines.reverse();
    lines.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(path: &Path, samples: &[i16]) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn default_args_request_json_output() {
        let whisper = Whisper::default();
        let args = transcribe_args(&whisper, Path::new("segment_000.wav"), Path::new("/scratch"));

        let expected: Vec<OsString> = [
            "segment_000.wav",
            "--model",
            "base",
            "--device",
            "cpu",
            "--task",
            "transcribe",
            "--output_format",
            "json",
            "--output_dir",
            "/scratch",
            "--verbose",
            "False",
        ]
        .iter()
        .map(OsString::from)
        .collect();

        assert_eq!(args, expected);
    }

    #[test]
    fn language_and_model_dir_are_appended_when_set() {
        let whisper = Whisper {
            model: WhisperModel::Turbo,
            device: Device::Cuda,
            language: Some("en".to_string()),
            model_dir: Some(PathBuf::from("/models")),
            ..Whisper::default()
        };

        let args = transcribe_args(&whisper, Path::new("a.wav"), Path::new("/scratch"));

        assert_eq!(args[2], OsString::from("turbo"));
        assert_eq!(args[4], OsString::from("cuda"));

        let expected_tail: Vec<OsString> = ["--language", "en", "--model_dir", "/models"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(&args[args.len() - 4..], expected_tail.as_slice());
    }

    #[test]
    fn parses_whisper_json_document() {
        let json = r#"{
            "text": " Hello there. General Kenobi.",
            "segments": [
                {"id": 0, "seek": 0, "start": 0.0, "end": 2.1, "text": " Hello there.", "temperature": 0.0},
                {"id": 1, "seek": 0, "start": 2.1, "end": 4.0, "text": " General Kenobi.", "temperature": 0.0}
            ],
            "language": "en"
        }"#;

        let transcription: Transcription = serde_json::from_str(json).unwrap();

        assert_eq!(transcription.text, " Hello there. General Kenobi.");
        assert_eq!(transcription.segments.len(), 2);
        assert_eq!(transcription.segments[1].text, " General Kenobi.");
        assert_eq!(transcription.language, "en");
    }

    #[test]
    fn parses_minimal_json_document() {
        let transcription: Transcription = serde_json::from_str(r#"{"text": ""}"#).unwrap();

        assert_eq!(transcription.text, "");
        assert!(transcription.segments.is_empty());
        assert_eq!(transcription.language, "");
    }

    #[test]
    fn transcription_path_swaps_extension_into_scratch() {
        let path = transcription_path(Path::new("/work/segment_007.wav"), Path::new("/scratch"));

        assert_eq!(path, PathBuf::from("/scratch/segment_007.json"));
    }

    #[test]
    fn empty_segment_short_circuits_without_running_whisper() {
        let scratch = tempfile::tempdir().unwrap();
        let silent = scratch.path().join("silent.wav");
        write_wav(&silent, &[]);

        // A nonexistent binary proves the subprocess is never spawned.
        let whisper = Whisper {
            program: Some(PathBuf::from("cuescribe-test-no-such-whisper")),
            ..Whisper::default()
        };

        assert_eq!(whisper.transcribe(&silent).unwrap(), "");
    }

    #[test]
    fn missing_binary_reports_launch_error() {
        let scratch = tempfile::tempdir().unwrap();
        let segment = scratch.path().join("segment.wav");
        write_wav(&segment, &[0, 1, -1, 2]);

        let whisper = Whisper {
            program: Some(PathBuf::from("cuescribe-test-no-such-whisper")),
            ..Whisper::default()
        };

        assert!(matches!(
            whisper.transcribe(&segment),
            Err(Error::Launch { .. })
        ));
    }

    #[test]
    fn unreadable_segment_reports_wav_error() {
        let scratch = tempfile::tempdir().unwrap();
        let bogus = scratch.path().join("bogus.wav");
        std::fs::write(&bogus, b"not a wav").unwrap();

        let whisper = Whisper::default();

        assert!(matches!(whisper.transcribe(&bogus), Err(Error::Wav(_))));
    }
}

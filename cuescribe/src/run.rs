//! Run subcommand - transcribe every paired video under a directory tree.

use crate::{pipeline, scan};
use color_eyre::Section;
use cuescribe_asr::{Device, Whisper, WhisperModel};
use cuescribe_media::Ffmpeg;
use eyre::{Context, Result, eyre};
use std::path::PathBuf;

/// CLI arguments for batch transcription.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Root directory to scan for video/subtitle pairs
    pub root: PathBuf,

    /// Whisper model size
    #[arg(long, value_enum, default_value_t = WhisperModel::Base)]
    pub model: WhisperModel,

    /// Inference device
    #[arg(long, value_enum, default_value_t = Device::Cpu)]
    pub device: Device,

    /// Transcription language (autodetect when omitted)
    #[arg(long)]
    pub language: Option<String>,

    /// Whisper model cache directory (default: under the user cache dir)
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// ffmpeg binary to invoke
    #[arg(long, default_value = "ffmpeg")]
    pub ffmpeg: PathBuf,

    /// whisper binary to invoke
    #[arg(long, default_value = "whisper")]
    pub whisper: PathBuf,
}

/// Resolved configuration for batch transcription.
#[derive(Debug)]
pub struct Config {
    pub root: PathBuf,
    pub transcoder: Ffmpeg,
    pub transcriber: Whisper,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        if !args.root.is_dir() {
            return Err(eyre!("not a directory: {:?}", args.root.display()));
        }

        let model_dir = match args.model_dir {
            Some(dir) => dir,
            None => default_model_dir()?,
        };

        std::fs::create_dir_all(&model_dir).wrap_err_with(|| {
            format!("failed to create model directory {:?}", model_dir.display())
        })?;

        Ok(Self {
            root: args.root,
            transcoder: Ffmpeg::new(args.ffmpeg),
            transcriber: Whisper {
                program: Some(args.whisper),
                model: args.model,
                device: args.device,
                language: args.language,
                model_dir: Some(model_dir),
            },
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        root = ?config.root.display(),
        model = config.transcriber.model.as_str(),
        "scanning for video/subtitle pairs"
    );

    let pairs = scan::discover_pairs(&config.root);

    if pairs.is_empty() {
        tracing::info!("no video/subtitle pairs found");
        return Ok(());
    }

    tracing::info!(pairs = pairs.len(), "starting batch");

    let mut failed = 0usize;

    for pair in &pairs {
        match pipeline::process_pair(&config.transcoder, &config.transcriber, pair) {
            Ok(output) => {
                tracing::info!(
                    video = ?pair.video.display(),
                    transcript = ?output.display(),
                    "pair complete"
                );
            }
            Err(report) => {
                failed += 1;
                tracing::error!(
                    video = ?pair.video.display(),
                    error = ?report,
                    "pair failed, continuing with remaining pairs"
                );
            }
        }
    }

    if failed > 0 {
        return Err(eyre!("{failed} of {} pairs failed", pairs.len()))
            .suggestion("rerun with RUST_LOG=debug for per-stage detail");
    }

    tracing::info!(pairs = pairs.len(), "batch complete");

    Ok(())
}

/// Default whisper model cache location under the user cache directory.
fn default_model_dir() -> Result<PathBuf> {
    let cache = dirs::cache_dir().ok_or_else(|| eyre!("no user cache directory available"))?;
    Ok(cache.join("cuescribe").join("models"))
}

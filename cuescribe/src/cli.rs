//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "cues")]
#[command(about = "Subtitle-guided batch video transcription")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transcribe every video with a matching subtitle file under a directory
    Run(crate::run::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Run(args) => crate::run::execute(args.try_into()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuescribe_asr::{Device, WhisperModel};

    #[test]
    fn parses_run_command() {
        let cli = Cli::parse_from(["cues", "run", "/media/library"]);

        match &cli.command {
            Commands::Run(crate::run::Args {
                root,
                model: WhisperModel::Base,
                device: Device::Cpu,
                language: None,
                model_dir: None,
                ..
            }) if root.to_str() == Some("/media/library") => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_run_with_model_and_device() {
        let cli = Cli::parse_from([
            "cues",
            "run",
            "/media/library",
            "--model",
            "small",
            "--device",
            "cuda",
            "--language",
            "en",
        ]);

        match &cli.command {
            Commands::Run(crate::run::Args {
                model: WhisperModel::Small,
                device: Device::Cuda,
                language: Some(language),
                ..
            }) if language == "en" => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_run_with_tool_overrides() {
        let cli = Cli::parse_from([
            "cues",
            "run",
            "/media/library",
            "--ffmpeg",
            "/opt/ffmpeg/bin/ffmpeg",
            "--whisper",
            "/opt/whisper/bin/whisper",
            "--model-dir",
            "/var/cache/models",
        ]);

        match &cli.command {
            Commands::Run(crate::run::Args {
                ffmpeg,
                whisper,
                model_dir: Some(model_dir),
                ..
            }) if ffmpeg.to_str() == Some("/opt/ffmpeg/bin/ffmpeg")
                && whisper.to_str() == Some("/opt/whisper/bin/whisper")
                && model_dir.to_str() == Some("/var/cache/models") => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }
}

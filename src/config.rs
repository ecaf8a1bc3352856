//! Command-line configuration shared by the `plot-autocorrelation` and
//! `plot-pitch` binaries.
use std::path::PathBuf;

use clap::{Args, Parser};

use crate::plot::{Output, DEFAULT_SIZE};

#[derive(Args, Debug, Clone, PartialEq)]
pub struct OutputArgs {
    /// Write the figure to this file (PNG, or SVG for a `.svg` extension)
    /// instead of opening a viewer.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Figure width in pixels.
    #[arg(long, default_value_t = DEFAULT_SIZE.0)]
    pub width: u32,

    /// Figure height in pixels.
    #[arg(long, default_value_t = DEFAULT_SIZE.1)]
    pub height: u32,
}

impl OutputArgs {
    pub fn output(&self) -> Output {
        match &self.output {
            Some(path) => Output::Export(path.clone()),
            None => Output::Show,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Plot a voiced phoneme and its autocorrelation, marking the estimated pitch period.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "plot-autocorrelation", version)]
pub struct AutocorrelationArgs {
    /// WAV recording of a single voiced phoneme.
    #[arg(value_name = "AUDIO", default_value = "fonema_E.wav")]
    pub audio_path: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Plot an estimated pitch track against a reference track.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "plot-pitch", version)]
pub struct ComparisonArgs {
    /// WAV recording the tracks were computed from; only its sample rate is used.
    #[arg(value_name = "AUDIO", default_value = "prueba.wav")]
    pub audio_path: PathBuf,

    /// Estimated pitch track, one value in Hz per line.
    #[arg(long = "f0", value_name = "PATH", default_value = "prueba.f0")]
    pub f0_path: PathBuf,

    /// Reference pitch track, one value in Hz per line.
    #[arg(long = "f0ref", value_name = "PATH", default_value = "prueba.f0ref")]
    pub f0ref_path: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

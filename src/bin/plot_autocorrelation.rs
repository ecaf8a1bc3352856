use clap::Parser;

use pitch_visualizer::audio::AudioSignal;
use pitch_visualizer::config::AutocorrelationArgs;
use pitch_visualizer::plot;
use pitch_visualizer::visualize::{analyze_autocorrelation, autocorrelation_figure};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = AutocorrelationArgs::parse();

    let signal: AudioSignal<f64> = AudioSignal::from_wav_file(&args.audio_path)?;
    let analysis = analyze_autocorrelation(&signal)?;
    let figure = autocorrelation_figure(&signal, &analysis, args.output.size());

    plot::render(&figure, &args.output.output())
}

use clap::Parser;

use pitch_visualizer::audio::AudioSignal;
use pitch_visualizer::config::ComparisonArgs;
use pitch_visualizer::plot;
use pitch_visualizer::track::PitchTrack;
use pitch_visualizer::visualize::compare_tracks;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ComparisonArgs::parse();

    let signal: AudioSignal<f64> = AudioSignal::from_wav_file(&args.audio_path)?;
    let estimated = PitchTrack::from_file(&args.f0_path)?;
    let reference = PitchTrack::from_file(&args.f0ref_path)?;

    let figure = compare_tracks(signal.sample_rate(), estimated, reference, args.output.size())?;

    plot::render(&figure, &args.output.output())
}

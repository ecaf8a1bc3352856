//! The two figures this crate draws: a voiced phoneme next to its
//! autocorrelation, and an estimated pitch track against a reference.
use anyhow::{Context, Result};

use crate::audio::AudioSignal;
use crate::detector::autocorrelation::AutocorrelationDetector;
use crate::detector::internals::PitchEstimate;
use crate::detector::PeriodDetector;
use crate::float::{to_f64, Float};
use crate::plot::{Figure, Marker, Panel, Series, SeriesColor};
use crate::track::{PitchTrack, TrackComparison};

/// Everything the autocorrelation figure is drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct AutocorrelationAnalysis<T>
where
    T: Float,
{
    /// Non-negative lags only, same length as the signal.
    pub autocorrelation: Vec<T>,
    pub estimate: PitchEstimate<T>,
}

/// Run the autocorrelation period estimate over the whole of `signal`.
pub fn analyze_autocorrelation<T>(signal: &AudioSignal<T>) -> Result<AutocorrelationAnalysis<T>>
where
    T: Float,
{
    let mut detector = AutocorrelationDetector::new(signal.len());
    let estimate = detector
        .get_period(signal.data(), signal.sample_rate())
        .context("signal is too short to estimate a pitch period")?;

    match estimate.frequency() {
        Some(f0) => log::info!(
            "pitch estimate: {} ms ({:.1} Hz)",
            estimate.period_ms(),
            to_f64(f0)
        ),
        None => log::warn!("no pitch period found, the signal may be silent"),
    }

    Ok(AutocorrelationAnalysis {
        autocorrelation: detector.autocorrelation().to_vec(),
        estimate,
    })
}

/// Waveform on top, autocorrelation below with the period candidate marked.
pub fn autocorrelation_figure<T>(
    signal: &AudioSignal<T>,
    analysis: &AutocorrelationAnalysis<T>,
    size: (u32, u32),
) -> Figure
where
    T: Float,
{
    let time = signal.time_axis();
    let estimate = &analysis.estimate;

    let waveform = Panel::new("Voiced phoneme").series(Series::new(
        SeriesColor::Blue,
        points(&time, signal.data()),
    ));

    let autocorrelation = Panel::new("Signal autocorrelation")
        .x_label("Time (s)")
        .series(Series::new(
            SeriesColor::Blue,
            points(&time, &analysis.autocorrelation),
        ))
        .marker(Marker {
            label: Some(format!("Pitch estimate = {}ms", to_f64(estimate.period_ms()))),
            color: SeriesColor::Red,
            point: (to_f64(estimate.period), to_f64(estimate.correlation)),
        });

    Figure::new(size).panel(waveform).panel(autocorrelation)
}

/// Both tracks over `frame_index / sample_rate`, reference in red and
/// estimate in green.
pub fn comparison_figure(comparison: &TrackComparison, size: (u32, u32)) -> Figure {
    let time = comparison.time();
    let first = time.first().copied().unwrap_or(0.);
    let last = time.last().copied().unwrap_or(first);

    let panel = Panel::new("Pitch comparison")
        .x_label("Time [s]")
        .y_label("Pitch [Hz]")
        .grid(true)
        .x_range(first, last)
        .series(
            Series::new(SeriesColor::Red, comparison.reference_points())
                .labelled("Reference pitch"),
        )
        .series(
            Series::new(SeriesColor::Green, comparison.estimated_points())
                .labelled("Estimated pitch"),
        );

    Figure::new(size).panel(panel)
}

/// Pair the tracks and build the comparison figure in one step.
pub fn compare_tracks(
    sample_rate: usize,
    estimated: PitchTrack,
    reference: PitchTrack,
    size: (u32, u32),
) -> Result<Figure> {
    let comparison = TrackComparison::new(sample_rate, estimated, reference)?;
    Ok(comparison_figure(&comparison, size))
}

fn points<T: Float>(x: &[f64], y: &[T]) -> Vec<(f64, f64)> {
    x.iter().copied().zip(y.iter().map(|&v| to_f64(v))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::DEFAULT_SIZE;

    #[test]
    fn autocorrelation_figure_marks_the_period() {
        let signal = AudioSignal::new(vec![1., 0., -1., 0., 1., 0., -1., 0.], 8).unwrap();
        let analysis = analyze_autocorrelation(&signal).unwrap();
        let figure = autocorrelation_figure(&signal, &analysis, DEFAULT_SIZE);

        assert_eq!(analysis.autocorrelation.len(), 8);
        assert_eq!(figure.panels.len(), 2);
        assert_eq!(figure.panels[0].series[0].points.len(), 8);

        let marker = &figure.panels[1].markers[0];
        assert_eq!(marker.label.as_deref(), Some("Pitch estimate = 500ms"));
        assert!((marker.point.0 - 0.5).abs() < 1e-12);
        assert!((marker.point.1 - 0.25).abs() < 1e-12);
    }

    #[test]
    fn comparison_figure_layout() {
        let figure = compare_tracks(
            16000,
            PitchTrack::new(vec![100., 100., 105., 110.]),
            PitchTrack::new(vec![100., 102., 104., 108.]),
            DEFAULT_SIZE,
        )
        .unwrap();

        let panel = &figure.panels[0];
        assert!(panel.grid);
        assert!(panel.has_legend());
        assert_eq!(panel.x_extent(), 0.0..1.875e-4);
        assert_eq!(panel.series[0].color, SeriesColor::Red);
        assert_eq!(panel.series[1].points[3], (1.875e-4, 110.));
    }

    #[test]
    fn single_frame_comparison_is_drawable() {
        let figure = compare_tracks(
            16000,
            PitchTrack::new(vec![120.]),
            PitchTrack::new(vec![118.]),
            DEFAULT_SIZE,
        )
        .unwrap();

        let range = figure.panels[0].x_extent();
        assert!(range.end > range.start);
    }
}

//! # Pitch Visualizer
//! *pitch_visualizer* draws the figures used to inspect pitch estimation on
//! speech recordings:
//!
//!   * a voiced phoneme next to its autocorrelation, with the estimated pitch
//!     period marked ([visualize::autocorrelation_figure]);
//!   * an estimated pitch track overlaid on a reference track
//!     ([visualize::comparison_figure]).
//!
//! Figures are plain [Figure][plot::Figure] values. Rendering them is a separate,
//! explicit step ([plot::render]) that either writes an image file or opens a
//! viewer and blocks until it is closed.
//!
//! # Detectors
//! The period estimate comes from an [AutocorrelationDetector][detector::autocorrelation]:
//! the autocorrelation is computed with an FFT, then the largest value after the
//! global minimum is taken as the period.
//!
//! # Examples
//! ```
//! use pitch_visualizer::detector::autocorrelation::AutocorrelationDetector;
//! use pitch_visualizer::detector::PeriodDetector;
//!
//! const SAMPLE_RATE: usize = 8000;
//! const SIZE: usize = 800;
//!
//! // Signal coming from some source (microphone, a WAV file, etc...)
//! let dt = 1.0 / SAMPLE_RATE as f64;
//! let freq = 200.0;
//! let signal: Vec<f64> = (0..SIZE)
//!     .map(|x| (2.0 * std::f64::consts::PI * x as f64 * dt * freq).sin())
//!     .collect();
//!
//! let mut detector = AutocorrelationDetector::new(SIZE);
//! let estimate = detector.get_period(&signal, SAMPLE_RATE).unwrap();
//!
//! assert_eq!(estimate.period_samples, 40);
//! println!("Period: {} ms", estimate.period_ms());
//! ```

pub use detector::internals::PitchEstimate;

pub mod audio;
pub mod config;
pub mod detector;
pub mod float;
pub mod plot;
pub mod track;
pub mod utils;
pub mod visualize;

//! Pitch tracks: one fundamental frequency value (Hz) per analysis frame.
use std::fs;
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};

use crate::audio::time_axis;

#[derive(Debug, Clone, PartialEq)]
pub struct PitchTrack {
    values: Vec<f64>,
}

impl PitchTrack {
    pub fn new(values: Vec<f64>) -> Self {
        PitchTrack { values }
    }

    /// Read whitespace-delimited floats, usually one per line. Blank lines and
    /// text after `#` are ignored.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read pitch track {:?}", path))?;
        let track = Self::parse(&text).with_context(|| format!("in pitch track {:?}", path))?;

        log::info!("loaded {:?}: {} frames", path, track.len());
        Ok(track)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut values = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let content = line.split('#').next().unwrap_or("");
            for token in content.split_whitespace() {
                match token.parse::<f64>() {
                    Ok(v) => values.push(v),
                    Err(_) => bail!("line {}: {:?} is not a number", line_no + 1, token),
                }
            }
        }
        Ok(PitchTrack { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An estimated and a reference track checked to line up frame by frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackComparison {
    time: Vec<f64>,
    estimated: PitchTrack,
    reference: PitchTrack,
}

impl TrackComparison {
    /// Pair two tracks for plotting. Tracks of different lengths are an
    /// error rather than being truncated or padded.
    pub fn new(sample_rate: usize, estimated: PitchTrack, reference: PitchTrack) -> Result<Self> {
        ensure!(sample_rate > 0, "sample rate must be positive");
        ensure!(!estimated.is_empty(), "estimated pitch track is empty");
        ensure!(
            estimated.len() == reference.len(),
            "pitch track length mismatch: estimated {} frames, reference {} frames",
            estimated.len(),
            reference.len()
        );

        let time = time_axis(estimated.len(), sample_rate);
        Ok(TrackComparison {
            time,
            estimated,
            reference,
        })
    }

    /// Time of each frame in seconds, `frame_index / sample_rate`. Never empty.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn estimated(&self) -> &PitchTrack {
        &self.estimated
    }

    pub fn reference(&self) -> &PitchTrack {
        &self.reference
    }

    pub fn estimated_points(&self) -> Vec<(f64, f64)> {
        zip_points(&self.time, self.estimated.values())
    }

    pub fn reference_points(&self) -> Vec<(f64, f64)> {
        zip_points(&self.time, self.reference.values())
    }
}

fn zip_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter().copied().zip(y.iter().copied()).collect()
}

//! Loading of uncompressed WAV recordings into an [AudioSignal].
use std::io::Read;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use hound::{SampleFormat, WavReader};

use crate::float::Float;

/// A mono recording: samples in `[-1, 1]` plus the rate they were taken at.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal<T> {
    data: Vec<T>,
    sample_rate: usize,
}

impl<T: Float> AudioSignal<T> {
    pub fn new(data: Vec<T>, sample_rate: usize) -> Result<Self> {
        ensure!(sample_rate > 0, "sample rate must be positive");
        ensure!(!data.is_empty(), "audio signal has no samples");
        Ok(AudioSignal { data, sample_rate })
    }

    /// Read a WAV file. Integer samples are scaled by `2^(bits - 1)`;
    /// multi-channel files are averaged down to one channel.
    pub fn from_wav_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = WavReader::open(path)
            .with_context(|| format!("failed to open WAV file {:?}", path))?;
        let signal = Self::from_wav_reader(reader)
            .with_context(|| format!("failed to decode WAV file {:?}", path))?;

        log::info!(
            "loaded {:?}: {} samples at {} Hz ({:.3} s)",
            path,
            signal.len(),
            signal.sample_rate,
            signal.duration()
        );
        Ok(signal)
    }

    pub fn from_wav_reader<R: Read>(mut reader: WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        let channels = spec.channels as usize;
        ensure!(channels > 0, "WAV file declares zero channels");

        let interleaved: Vec<f64> = match spec.sample_format {
            SampleFormat::Float => reader
                .samples::<f32>()
                .map(|s| s.map(f64::from))
                .collect::<Result<_, _>>()?,
            SampleFormat::Int => {
                let full_scale = (1u64 << (spec.bits_per_sample - 1)) as f64;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|s| s as f64 / full_scale))
                    .collect::<Result<_, _>>()?
            }
        };

        if channels > 1 {
            log::warn!("averaging {} channels down to mono", channels);
        }
        let data = interleaved
            .chunks(channels)
            .map(|frame| T::from_f64(frame.iter().sum::<f64>() / frame.len() as f64).unwrap())
            .collect();

        Self::new(data, spec.sample_rate as usize)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn sample_rate(&self) -> usize {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }

    /// Time of each sample in seconds, `index / sample_rate`.
    pub fn time_axis(&self) -> Vec<f64> {
        time_axis(self.len(), self.sample_rate)
    }
}

/// `[0, 1/rate, 2/rate, ...]` with `len` entries.
pub fn time_axis(len: usize, sample_rate: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 / sample_rate as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use hound::{WavSpec, WavWriter};

    fn wav_bytes<F>(spec: WavSpec, write: F) -> Vec<u8>
    where
        F: FnOnce(&mut WavWriter<&mut Cursor<Vec<u8>>>),
    {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
            write(&mut writer);
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn int_samples_are_normalized() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let bytes = wav_bytes(spec, |w| {
            for s in [0i16, 16384, -32768] {
                w.write_sample(s).unwrap();
            }
        });

        let signal: AudioSignal<f64> =
            AudioSignal::from_wav_reader(WavReader::new(Cursor::new(bytes)).unwrap()).unwrap();

        assert_eq!(signal.sample_rate(), 8000);
        assert_eq!(signal.data(), &[0., 0.5, -1.]);
    }

    #[test]
    fn stereo_is_averaged() {
        let spec = WavSpec {
            channels: 2,
            sample_rate: 100,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let bytes = wav_bytes(spec, |w| {
            for s in [1.0f32, 0.0, -0.5, -0.5] {
                w.write_sample(s).unwrap();
            }
        });

        let signal: AudioSignal<f32> =
            AudioSignal::from_wav_reader(WavReader::new(Cursor::new(bytes)).unwrap()).unwrap();

        assert_eq!(signal.data(), &[0.5, -0.5]);
        assert_eq!(signal.duration(), 0.02);
    }

    #[test]
    fn empty_signal_is_rejected() {
        assert!(AudioSignal::<f64>::new(vec![], 8000).is_err());
        assert!(AudioSignal::new(vec![0.0f64], 0).is_err());
    }

    #[test]
    fn time_axis_divides_by_rate() {
        assert_eq!(time_axis(4, 16000), vec![0., 6.25e-5, 1.25e-4, 1.875e-4]);
    }
}

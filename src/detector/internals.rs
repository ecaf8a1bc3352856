use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::float::Float;
use crate::utils::buffer::{copy_complex_to_real, copy_real_to_complex, modulus_squared};
use crate::utils::buffer::{new_complex_buffer, new_real_buffer};
use crate::utils::peak::{first_max, first_min};

/// A pitch period candidate read off an autocorrelation sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchEstimate<T>
where
    T: Float,
{
    /// Lag of the candidate, in samples.
    pub period_samples: usize,
    /// Lag of the candidate, in seconds.
    pub period: T,
    /// Autocorrelation value at the candidate lag.
    pub correlation: T,
    pub sample_rate: usize,
}

impl<T> PitchEstimate<T>
where
    T: Float,
{
    pub fn period_ms(&self) -> T {
        let millis = T::from_usize(self.period_samples * 1000).unwrap();
        millis / T::from_usize(self.sample_rate).unwrap()
    }

    /// The fundamental frequency matching the period, or `None` for a zero period.
    pub fn frequency(&self) -> Option<T> {
        if self.period_samples == 0 {
            return None;
        }
        Some(T::one() / self.period)
    }
}

/// Length of the full two-sided correlation of a signal of length `n`.
pub fn full_len(n: usize) -> usize {
    (2 * n).saturating_sub(1)
}

/// FFT plans and scratch buffers for signals of one fixed size. Planning is
/// done once so repeated calls only pay for the transforms.
pub struct DetectorInternals<T>
where
    T: Float,
{
    pub size: usize,
    pub fft_len: usize,
    forward: Arc<dyn Fft<T>>,
    inverse: Arc<dyn Fft<T>>,
    pub signal_complex: Vec<Complex<T>>,
    pub scratch: Vec<Complex<T>>,
    pub full: Vec<T>,
}

impl<T> DetectorInternals<T>
where
    T: Float,
{
    pub fn new(size: usize) -> Self {
        // Zero padding to 2n-1 makes the circular correlation equal the linear one.
        let fft_len = full_len(size).max(1);

        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(fft_len);
        let inverse = planner.plan_fft_inverse(fft_len);
        let scratch_len = forward
            .get_inplace_scratch_len()
            .max(inverse.get_inplace_scratch_len());

        DetectorInternals {
            size,
            fft_len,
            forward,
            inverse,
            signal_complex: new_complex_buffer(fft_len),
            scratch: new_complex_buffer(scratch_len),
            full: new_real_buffer(full_len(size)),
        }
    }
}

/// Compute the full (two-sided) autocorrelation of `signal`, divided by the
/// signal length, into `internals.full`. Index `k` of the result holds lag
/// `k - (n - 1)`, so lag 0 sits in the middle.
pub fn full_autocorrelation<T>(signal: &[T], internals: &mut DetectorInternals<T>)
where
    T: Float,
{
    assert_eq!(signal.len(), internals.size);
    let n = signal.len();
    if n == 0 {
        return;
    }
    let fft_len = internals.fft_len;

    copy_real_to_complex(signal, &mut internals.signal_complex);
    internals
        .forward
        .process_with_scratch(&mut internals.signal_complex, &mut internals.scratch);
    modulus_squared(&mut internals.signal_complex);
    internals
        .inverse
        .process_with_scratch(&mut internals.signal_complex, &mut internals.scratch);

    // rustfft doesn't normalize, so one division by `fft_len` undoes the
    // round trip; the extra division by `n` is the biased estimator scaling.
    let scale = T::one() / (T::from_usize(fft_len).unwrap() * T::from_usize(n).unwrap());

    // Circular lag m lives at index m and lag -m at index fft_len - m.
    // Rotate so negative lags come first.
    internals.signal_complex.rotate_left(n % fft_len);
    copy_complex_to_real(&internals.signal_complex, &mut internals.full, scale);

    // Where the lag sum is exactly zero the round trip leaves rounding noise
    // of either sign. Flatten it so ties between those lags stay ties.
    let zero_lag = internals.full[n - 1];
    let tolerance = T::epsilon() * T::from_usize(fft_len).unwrap() * zero_lag;
    internals
        .full
        .iter_mut()
        .filter(|r| **r <= tolerance && **r >= -tolerance)
        .for_each(|r| *r = T::zero());
}

/// The non-negative lag half of a full correlation: everything from index
/// `len / 2` onward. Lag 0 is the first element.
pub fn non_negative_lags<T>(full: &[T]) -> &[T] {
    &full[full.len() / 2..]
}

/// Read a period candidate off `autocorr` (non-negative lags only): skip to the
/// global minimum, then take the largest value from there on.
pub fn period_from_min_max<T>(autocorr: &[T], sample_rate: usize) -> Option<PitchEstimate<T>>
where
    T: Float,
{
    let (min_index, _) = first_min(autocorr)?;
    let (max_index, correlation) = first_max(&autocorr[min_index..])?;
    let period_samples = min_index + max_index;

    Some(PitchEstimate {
        period_samples,
        period: T::from_usize(period_samples)? / T::from_usize(sample_rate)?,
        correlation,
        sample_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct_full_autocorrelation(signal: &[f64]) -> Vec<f64> {
        let n = signal.len() as isize;
        (-(n - 1)..n)
            .map(|lag| {
                (0..n)
                    .filter(|i| i + lag >= 0 && i + lag < n)
                    .map(|i| signal[i as usize] * signal[(i + lag) as usize])
                    .sum::<f64>()
                    / n as f64
            })
            .collect()
    }

    #[test]
    fn full_autocorrelation_test() {
        let signal: Vec<f64> = vec![0., 1., 2., 0., -1., -2., 0.5];
        let expected = direct_full_autocorrelation(&signal);

        let mut internals = DetectorInternals::new(signal.len());
        full_autocorrelation(&signal, &mut internals);

        assert_eq!(internals.full.len(), 2 * signal.len() - 1);
        // Using an FFT loses precision; we don't care that much, so compare generously.
        internals
            .full
            .iter()
            .zip(expected.iter())
            .for_each(|(a, b)| assert!((a - b).abs() < 1e-9, "{} != {}", a, b));
    }

    #[test]
    fn zero_lags_are_exact() {
        let signal: Vec<f64> = vec![1., 1., 0., 0., 0., 0., 0., 0.];
        let mut internals = DetectorInternals::new(signal.len());
        full_autocorrelation(&signal, &mut internals);

        let half = non_negative_lags(&internals.full);
        assert!((half[0] - 0.25).abs() < 1e-12);
        assert!((half[1] - 0.125).abs() < 1e-12);
        assert!(half[2..].iter().all(|&r| r == 0.));
        assert!(internals.full[..6].iter().all(|&r| r == 0.));
    }

    #[test]
    fn zero_lag_is_the_mean_power() {
        let signal: Vec<f32> = vec![1., -1., 1., -1.];
        let mut internals = DetectorInternals::new(signal.len());
        full_autocorrelation(&signal, &mut internals);

        let half = non_negative_lags(&internals.full);
        assert_eq!(half.len(), 4);
        assert!((half[0] - 1.0).abs() < 1e-5);
        assert!((half[1] + 0.75).abs() < 1e-5);
    }

    #[test]
    fn retained_half_length() {
        for n in 1..20 {
            let full = vec![0.0f64; full_len(n)];
            let expected = full_len(n) - full_len(n) / 2;
            assert_eq!(non_negative_lags(&full).len(), expected);
            assert_eq!(expected, n);
        }
    }

    #[test]
    fn min_max_period() {
        let autocorr = [0.5, 0., -0.375, 0., 0.25, 0., -0.125, 0.];
        let estimate = period_from_min_max(&autocorr, 8).unwrap();

        assert_eq!(estimate.period_samples, 4);
        assert_eq!(estimate.period, 0.5);
        assert_eq!(estimate.correlation, 0.25);
        assert_eq!(estimate.period_ms(), 500.);
        assert_eq!(estimate.frequency(), Some(2.));
    }

    #[test]
    fn zero_period_has_no_frequency() {
        let estimate = period_from_min_max(&[0.0f64; 8], 8).unwrap();

        assert_eq!(estimate.period_samples, 0);
        assert_eq!(estimate.period, 0.);
        assert_eq!(estimate.frequency(), None);
    }
}

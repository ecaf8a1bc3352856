//! Pitch period estimation from the autocorrelation of a voiced sound.
//!
//! Let $S=(s_0,s_1,\ldots,s_{N-1})$ be a discrete signal. Its autocorrelation at lag $t$ is
//! $$ r(t) = \frac{1}{N}\sum_{i=0}^{N-1-t} s_i s_{i+t}. $$
//! For a periodic signal $r$ has a dominant peak at $t=0$, falls off, and rises again
//! near every multiple of the period.
//!
//! ## Heuristic
//! The detector finds the global minimum of $r$ over the non-negative lags, assuming
//! it lies between the zero-lag peak and the first secondary peak, and then returns
//! the largest value of $r$ from that minimum onward as the period candidate.
//!
//! This is fragile for aperiodic, noisy or unvoiced input: the result is always defined
//! but not always meaningful. Silence yields a period of zero.

use crate::detector::internals::full_autocorrelation;
use crate::detector::internals::non_negative_lags;
use crate::detector::internals::period_from_min_max;
use crate::detector::internals::DetectorInternals;
use crate::detector::internals::PitchEstimate;
use crate::detector::PeriodDetector;
use crate::float::Float;

pub struct AutocorrelationDetector<T>
where
    T: Float,
{
    internals: DetectorInternals<T>,
}

impl<T> AutocorrelationDetector<T>
where
    T: Float,
{
    pub fn new(size: usize) -> Self {
        let internals = DetectorInternals::new(size);
        AutocorrelationDetector { internals }
    }

    /// Non-negative lag half of the autocorrelation computed by the last call to
    /// [get_period][PeriodDetector::get_period]. Lag 0 is the first element.
    pub fn autocorrelation(&self) -> &[T] {
        non_negative_lags(&self.internals.full)
    }

    /// The full two-sided autocorrelation computed by the last call to
    /// [get_period][PeriodDetector::get_period].
    pub fn full_autocorrelation(&self) -> &[T] {
        &self.internals.full
    }
}

impl<T> PeriodDetector<T> for AutocorrelationDetector<T>
where
    T: Float,
{
    fn get_period(&mut self, signal: &[T], sample_rate: usize) -> Option<PitchEstimate<T>> {
        assert_eq!(signal.len(), self.internals.size);

        full_autocorrelation(signal, &mut self.internals);
        let estimate = period_from_min_max(self.autocorrelation(), sample_rate)?;

        log::debug!(
            "autocorrelation period: {} samples ({} ms), correlation {}",
            estimate.period_samples,
            estimate.period_ms(),
            estimate.correlation
        );
        Some(estimate)
    }
}

use crate::detector::internals::PitchEstimate;
use crate::float::Float;

pub mod autocorrelation;
pub mod internals;

pub trait PeriodDetector<T>
where
    T: Float,
{
    /// Estimate the pitch period of `signal`. Returns `None` when the signal
    /// is empty.
    fn get_period(&mut self, signal: &[T], sample_rate: usize) -> Option<PitchEstimate<T>>;
}

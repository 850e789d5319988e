//! Mono sample buffer at a fixed sample rate.

use crate::error::{check_sample_rate, AudioError, AudioResult};

/// Number of samples covering `duration` seconds at `sample_rate`.
///
/// Non-positive durations produce zero samples; any positive duration produces
/// at least one sample.
pub fn num_samples(duration: f64, sample_rate: u32) -> usize {
    if duration.is_nan() || duration <= 0.0 {
        return 0;
    }
    let n = (duration * sample_rate as f64).round() as usize;
    n.max(1)
}

/// Mono audio samples (nominally in [-1.0, 1.0]) tagged with their sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Wraps existing samples.
    ///
    /// # Errors
    /// * `InvalidSampleRate` - zero, or above [`MAX_SAMPLE_RATE`](crate::wav::MAX_SAMPLE_RATE)
    /// * `InvalidParameter` - a sample is NaN or infinite
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> AudioResult<Self> {
        check_sample_rate(sample_rate)?;
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(AudioError::invalid_param(
                "samples",
                format!("sample {} is {}", index, samples[index]),
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Wraps samples whose rate was already validated.
    pub(crate) fn from_validated(samples: Vec<f64>, sample_rate: u32) -> Self {
        debug_assert!(sample_rate > 0);
        Self {
            samples,
            sample_rate,
        }
    }

    /// Creates a buffer of `num_samples` zeros.
    pub fn silent(num_samples: usize, sample_rate: u32) -> AudioResult<Self> {
        Self::new(vec![0.0; num_samples], sample_rate)
    }

    /// Creates an empty buffer.
    pub fn empty(sample_rate: u32) -> AudioResult<Self> {
        Self::new(Vec::new(), sample_rate)
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Borrows the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Mutably borrows the samples.
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    /// Consumes the buffer, returning its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Absolute peak value (0.0 for an empty buffer).
    pub fn peak(&self) -> f64 {
        crate::mixer::peak(&self.samples)
    }

    /// Fails with `RateMismatch` unless `other` shares this buffer's rate.
    pub fn ensure_same_rate(&self, other: &SampleBuffer) -> AudioResult<()> {
        if self.sample_rate != other.sample_rate {
            return Err(AudioError::RateMismatch {
                expected: self.sample_rate,
                found: other.sample_rate,
            });
        }
        Ok(())
    }

    /// Appends the samples of `other`.
    pub fn append(&mut self, other: &SampleBuffer) -> AudioResult<()> {
        self.ensure_same_rate(other)?;
        self.samples.extend_from_slice(&other.samples);
        Ok(())
    }

    /// Multiplies every sample by `gain`.
    pub fn scale(&mut self, gain: f64) {
        for sample in self.samples.iter_mut() {
            *sample *= gain;
        }
    }
}

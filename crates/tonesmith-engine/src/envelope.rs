//! ADSR envelope shaping.
//!
//! An [`EnvelopeSpec`] describes Attack-Decay-Sustain-Release timing in
//! seconds. Applying it to a buffer converts each phase to a whole number of
//! samples and multiplies the buffer by the resulting gain curve. When the
//! three timed phases do not fit in the buffer they are compressed
//! proportionally, so a short sound never has overlapping segments.

use serde::{Deserialize, Serialize};

use crate::buffer::SampleBuffer;
use crate::error::{check_non_negative, AudioError, AudioResult};

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeSpec {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for EnvelopeSpec {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.5,
            release: 0.2,
        }
    }
}

impl EnvelopeSpec {
    /// Creates new ADSR parameters.
    pub const fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// Creates a percussive envelope (no sustain).
    pub const fn percussive(attack: f64, decay: f64) -> Self {
        Self {
            attack,
            decay,
            sustain: 0.0,
            release: 0.0,
        }
    }

    /// Creates a pluck envelope (very fast attack, medium decay).
    pub const fn pluck(decay: f64) -> Self {
        Self::percussive(0.001, decay)
    }

    /// Creates a pad envelope (slow attack and release).
    pub const fn pad(attack: f64, release: f64) -> Self {
        Self {
            attack,
            decay: 0.0,
            sustain: 1.0,
            release,
        }
    }

    /// Envelope that leaves the signal untouched.
    pub const fn gate() -> Self {
        Self::pad(0.0, 0.0)
    }

    /// Checks durations are finite and non-negative and sustain is in [0, 1].
    pub fn validate(&self) -> AudioResult<()> {
        check_non_negative("envelope.attack", self.attack)?;
        check_non_negative("envelope.decay", self.decay)?;
        check_non_negative("envelope.release", self.release)?;
        if !(0.0..=1.0).contains(&self.sustain) {
            return Err(AudioError::invalid_param(
                "envelope.sustain",
                format!("must be in [0, 1], got {}", self.sustain),
            ));
        }
        Ok(())
    }
}

/// Sample counts of each envelope phase for a buffer of a given length.
///
/// `attack + decay + sustain + release` always equals the buffer length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeSegments {
    pub attack: usize,
    pub decay: usize,
    pub sustain: usize,
    pub release: usize,
}

impl EnvelopeSegments {
    /// Splits `num_samples` into ADSR phases.
    pub fn compute(spec: &EnvelopeSpec, num_samples: usize, sample_rate: u32) -> AudioResult<Self> {
        spec.validate()?;
        let rate = sample_rate as f64;
        let to_samples = |seconds: f64| (seconds * rate).round() as usize;

        let mut attack = to_samples(spec.attack);
        let mut decay = to_samples(spec.decay);
        let mut release = to_samples(spec.release);

        // Counts saturate at usize::MAX for huge durations; widen so the
        // sum and the proportional scaling cannot overflow.
        let n = num_samples as u128;
        let timed = attack as u128 + decay as u128 + release as u128;
        if timed > n {
            let scale = |count: usize| (count as u128 * n / timed) as usize;
            attack = scale(attack);
            decay = scale(decay);
            release = scale(release);
        }

        Ok(Self {
            attack,
            decay,
            sustain: num_samples - attack - decay - release,
            release,
        })
    }

    /// Total length in samples.
    pub fn total(&self) -> usize {
        self.attack + self.decay + self.sustain + self.release
    }

    /// Index of the first release sample.
    pub fn release_start(&self) -> usize {
        self.attack + self.decay + self.sustain
    }

    fn gain(&self, index: usize, sustain_level: f64) -> f64 {
        let decay_start = self.attack;
        let sustain_start = decay_start + self.decay;
        let release_start = self.release_start();

        if index < decay_start {
            index as f64 / self.attack as f64
        } else if index < sustain_start {
            let j = (index - decay_start) as f64;
            1.0 - (1.0 - sustain_level) * j / self.decay as f64
        } else if index < release_start {
            sustain_level
        } else if self.release > 1 {
            let k = (index - release_start) as f64;
            sustain_level * (1.0 - k / (self.release - 1) as f64)
        } else {
            0.0
        }
    }
}

/// Gain curve of `spec` over `num_samples` samples.
pub fn envelope_curve(
    spec: &EnvelopeSpec,
    num_samples: usize,
    sample_rate: u32,
) -> AudioResult<Vec<f64>> {
    let segments = EnvelopeSegments::compute(spec, num_samples, sample_rate)?;
    Ok((0..num_samples)
        .map(|i| segments.gain(i, spec.sustain))
        .collect())
}

/// Multiplies `buffer` by the envelope's gain curve.
///
/// # Errors
/// Returns `InvalidParameter` if the envelope is invalid.
pub fn apply_envelope(buffer: &SampleBuffer, spec: &EnvelopeSpec) -> AudioResult<SampleBuffer> {
    let curve = envelope_curve(spec, buffer.len(), buffer.sample_rate())?;
    let mut shaped = buffer.clone();
    for (sample, gain) in shaped.samples_mut().iter_mut().zip(curve) {
        *sample *= gain;
    }
    Ok(shaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::sine_wave;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segments_fit() {
        let spec = EnvelopeSpec::new(0.01, 0.02, 0.5, 0.03);
        let segments = EnvelopeSegments::compute(&spec, 1000, 1000).unwrap();
        assert_eq!(
            segments,
            EnvelopeSegments {
                attack: 10,
                decay: 20,
                sustain: 940,
                release: 30,
            }
        );
        assert_eq!(segments.release_start(), 970);
    }

    #[test]
    fn test_segments_compressed_when_too_long() {
        // 0.5 + 0.3 + 0.2 seconds over a 0.1 second buffer
        let spec = EnvelopeSpec::new(0.5, 0.3, 0.7, 0.2);
        let segments = EnvelopeSegments::compute(&spec, 100, 1000).unwrap();
        assert_eq!(segments.attack, 50);
        assert_eq!(segments.decay, 30);
        assert_eq!(segments.release, 20);
        assert_eq!(segments.sustain, 0);
        assert_eq!(segments.total(), 100);
    }

    #[test]
    fn test_segments_never_exceed_length() {
        for n in [0, 1, 2, 3, 7, 50, 441] {
            let spec = EnvelopeSpec::new(0.013, 0.007, 0.4, 0.011);
            let segments = EnvelopeSegments::compute(&spec, n, 1000).unwrap();
            assert_eq!(segments.total(), n);
        }
    }

    #[test]
    fn test_huge_attack_compresses_into_buffer() {
        let tone = sine_wave(440.0, 1.0, 44100, 1.0).unwrap();
        let spec = EnvelopeSpec::new(1e10, 0.1, 0.5, 0.1);

        let segments = EnvelopeSegments::compute(&spec, tone.len(), 44100).unwrap();
        assert_eq!(
            segments,
            EnvelopeSegments {
                attack: 44_099,
                decay: 0,
                sustain: 1,
                release: 0,
            }
        );

        let shaped = apply_envelope(&tone, &spec).unwrap();
        assert_eq!(shaped.len(), 44100);
        assert!(shaped.peak() <= 1.0);
    }

    #[test]
    fn test_saturated_durations_split_evenly() {
        let spec = EnvelopeSpec::new(f64::MAX, f64::MAX, 0.5, f64::MAX);
        let segments = EnvelopeSegments::compute(&spec, 100, 44100).unwrap();
        assert_eq!(segments.attack, 33);
        assert_eq!(segments.decay, 33);
        assert_eq!(segments.release, 33);
        assert_eq!(segments.total(), 100);
    }

    #[test]
    fn test_curve_shape() {
        let spec = EnvelopeSpec::new(0.004, 0.004, 0.5, 0.005);
        let curve = envelope_curve(&spec, 20, 1000).unwrap();

        // Attack rises from zero
        assert_eq!(curve[0], 0.0);
        assert_eq!(curve[2], 0.5);
        // Decay starts at full scale and heads to sustain
        assert_eq!(curve[4], 1.0);
        assert!((curve[6] - 0.75).abs() < 1e-12);
        // Sustain
        assert_eq!(curve[10], 0.5);
        // Release ends at zero
        assert_eq!(curve[15], 0.5);
        assert_eq!(curve[19], 0.0);
    }

    #[test]
    fn test_single_sample_release_is_silent() {
        let spec = EnvelopeSpec::new(0.0, 0.0, 1.0, 0.001);
        let curve = envelope_curve(&spec, 5, 1000).unwrap();
        assert_eq!(curve, vec![1.0, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_gate_is_identity() {
        let buffer = sine_wave(440.0, 0.05, 8000, 0.9).unwrap();
        let shaped = apply_envelope(&buffer, &EnvelopeSpec::gate()).unwrap();
        assert_eq!(shaped, buffer);
    }

    #[test]
    fn test_apply_to_empty_buffer() {
        let buffer = SampleBuffer::empty(44100).unwrap();
        let shaped = apply_envelope(&buffer, &EnvelopeSpec::default()).unwrap();
        assert!(shaped.is_empty());
    }

    #[test]
    fn test_output_bounded_by_input() {
        let buffer = sine_wave(300.0, 0.2, 8000, 1.0).unwrap();
        let shaped = apply_envelope(&buffer, &EnvelopeSpec::new(0.01, 0.05, 0.6, 0.1)).unwrap();
        for (out, inp) in shaped.samples().iter().zip(buffer.samples()) {
            assert!(out.abs() <= inp.abs() + 1e-12);
        }
    }

    #[test]
    fn test_percussive_fades_out() {
        let spec = EnvelopeSpec::percussive(0.001, 0.05);
        let curve = envelope_curve(&spec, 1000, 1000).unwrap();
        assert_eq!(curve[1], 1.0);
        assert_eq!(*curve.last().unwrap(), 0.0);
    }

    #[test]
    fn test_validation() {
        let bad = [
            EnvelopeSpec::new(-0.1, 0.1, 0.5, 0.1),
            EnvelopeSpec::new(0.1, f64::NAN, 0.5, 0.1),
            EnvelopeSpec::new(0.1, 0.1, 1.5, 0.1),
            EnvelopeSpec::new(0.1, 0.1, -0.1, 0.1),
            EnvelopeSpec::new(0.1, 0.1, 0.5, f64::INFINITY),
        ];
        for spec in bad {
            assert!(matches!(
                spec.validate(),
                Err(AudioError::InvalidParameter { .. })
            ));
        }
        assert!(EnvelopeSpec::default().validate().is_ok());
    }
}

//! Elementary oscillators and noise.
//!
//! Every generator validates its parameters up front and returns a fresh
//! [`SampleBuffer`] at the requested sample rate. Durations are converted to
//! sample counts with [`num_samples`], so a non-positive duration yields an
//! empty buffer rather than an error.

use std::f64::consts::TAU;

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::buffer::{num_samples, SampleBuffer};
use crate::error::{
    check_duration, check_frequency, check_non_negative, check_sample_rate, AudioResult,
};
use crate::modulation::Vibrato;

/// One component of an additive stack, relative to a fundamental frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Partial {
    /// Frequency multiplier applied to the fundamental.
    pub ratio: f64,
    /// Amplitude weight of this partial.
    pub amplitude: f64,
}

impl Partial {
    /// Creates a partial.
    pub const fn new(ratio: f64, amplitude: f64) -> Self {
        Self { ratio, amplitude }
    }

    /// Builds partials from parallel ratio and amplitude lists.
    pub fn from_pairs(ratios: &[f64], amplitudes: &[f64]) -> Vec<Partial> {
        ratios
            .iter()
            .zip(amplitudes.iter())
            .map(|(&ratio, &amplitude)| Partial { ratio, amplitude })
            .collect()
    }

    pub(crate) fn validate(&self) -> AudioResult<()> {
        check_frequency("partial.ratio", self.ratio)?;
        check_non_negative("partial.amplitude", self.amplitude)
    }
}

/// Sine oscillator descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Optional multiplier applied to `frequency` (harmonic stacks).
    pub ratio: Option<f64>,
    /// Phase offset in radians.
    pub phase: f64,
    /// Optional phase modulation.
    pub vibrato: Option<Vibrato>,
}

impl Oscillator {
    /// Creates a unit-amplitude oscillator at `frequency`.
    pub fn new(frequency: f64) -> Self {
        Self {
            frequency,
            amplitude: 1.0,
            ratio: None,
            phase: 0.0,
            vibrato: None,
        }
    }

    /// Sets the amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets the harmonic ratio.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = Some(ratio);
        self
    }

    /// Sets the phase offset in radians.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Attaches vibrato.
    pub fn with_vibrato(mut self, vibrato: Vibrato) -> Self {
        self.vibrato = Some(vibrato);
        self
    }

    /// Frequency actually sounded: `frequency * ratio`.
    pub fn effective_frequency(&self) -> f64 {
        self.frequency * self.ratio.unwrap_or(1.0)
    }

    /// Checks frequency, ratio, amplitude, phase and vibrato parameters.
    pub fn validate(&self) -> AudioResult<()> {
        check_frequency("frequency", self.frequency)?;
        if let Some(ratio) = self.ratio {
            check_frequency("ratio", ratio)?;
        }
        check_non_negative("amplitude", self.amplitude)?;
        if !self.phase.is_finite() {
            return Err(crate::AudioError::invalid_param(
                "phase",
                format!("must be finite, got {}", self.phase),
            ));
        }
        if let Some(vibrato) = &self.vibrato {
            vibrato.validate()?;
        }
        Ok(())
    }

    /// Renders `duration` seconds of this oscillator.
    ///
    /// Sample `i` is `amplitude * sin(2π f t + phase + vibrato(t))` with
    /// `t = i / sample_rate`.
    pub fn render(&self, duration: f64, sample_rate: u32) -> AudioResult<SampleBuffer> {
        self.validate()?;
        check_sample_rate(sample_rate)?;
        check_duration(duration)?;

        let n = num_samples(duration, sample_rate);
        let rate = sample_rate as f64;
        let omega = TAU * self.effective_frequency();

        let samples = (0..n)
            .map(|i| {
                let t = i as f64 / rate;
                let offset = self.vibrato.map_or(0.0, |v| v.phase_offset(t));
                self.amplitude * (omega * t + self.phase + offset).sin()
            })
            .collect();

        SampleBuffer::new(samples, sample_rate)
    }
}

/// Generates a sine wave.
///
/// # Arguments
/// * `frequency` - Frequency in Hz (must be > 0)
/// * `duration` - Duration in seconds (non-positive yields an empty buffer)
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Peak amplitude (must be >= 0)
pub fn sine_wave(
    frequency: f64,
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
) -> AudioResult<SampleBuffer> {
    Oscillator::new(frequency)
        .with_amplitude(amplitude)
        .render(duration, sample_rate)
}

/// Generates uniform white noise in `[-amplitude, amplitude]`.
///
/// Draws come from `rng`, so the output is reproducible for a given seed.
pub fn white_noise(
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
    rng: &mut Pcg32,
) -> AudioResult<SampleBuffer> {
    check_sample_rate(sample_rate)?;
    check_duration(duration)?;
    check_non_negative("amplitude", amplitude)?;

    let n = num_samples(duration, sample_rate);
    let samples = (0..n)
        .map(|_| amplitude * (rng.gen::<f64>() * 2.0 - 1.0))
        .collect();

    SampleBuffer::new(samples, sample_rate)
}

/// Generates `duration` seconds of silence.
pub fn silence(duration: f64, sample_rate: u32) -> AudioResult<SampleBuffer> {
    check_duration(duration)?;
    SampleBuffer::silent(num_samples(duration, sample_rate), sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;
    use crate::rng::create_rng;

    #[test]
    fn test_sine_length_and_range() {
        let buffer = sine_wave(440.0, 0.5, 22050, 1.0).unwrap();
        assert_eq!(buffer.len(), 11025);
        assert_eq!(buffer.sample_rate(), 22050);
        for &s in buffer.samples() {
            assert!((-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_sine_concert_a() {
        let buffer = sine_wave(440.0, 1.0, 44100, 1.0).unwrap();
        assert_eq!(buffer.len(), 44100);
        assert_eq!(buffer.samples()[0], 0.0);
        // A quarter second holds exactly 110 cycles, so the phase is back at zero.
        assert!(buffer.samples()[11025].abs() < 1e-9);
    }

    #[test]
    fn test_sine_quarter_period() {
        // 11025 Hz at 44100 Hz: one quarter period per sample
        let buffer = sine_wave(11025.0, 0.001, 44100, 1.0).unwrap();
        assert!((buffer.samples()[1] - 1.0).abs() < 1e-12);
        assert!(buffer.samples()[2].abs() < 1e-12);
        assert!((buffer.samples()[3] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sine_amplitude() {
        let buffer = sine_wave(100.0, 0.1, 8000, 0.25).unwrap();
        assert!(buffer.peak() <= 0.25 + 1e-12);
        assert!(buffer.peak() > 0.24);
    }

    #[test]
    fn test_sine_invalid_frequency() {
        for freq in [0.0, -440.0, f64::NAN, f64::INFINITY] {
            let err = sine_wave(freq, 1.0, 44100, 1.0).unwrap_err();
            assert!(matches!(err, AudioError::InvalidParameter { .. }));
        }
    }

    #[test]
    fn test_sine_non_positive_duration_is_empty() {
        assert!(sine_wave(440.0, 0.0, 44100, 1.0).unwrap().is_empty());
        assert!(sine_wave(440.0, -1.0, 44100, 1.0).unwrap().is_empty());
    }

    #[test]
    fn test_sine_negative_amplitude_rejected() {
        assert!(sine_wave(440.0, 0.1, 44100, -0.5).is_err());
    }

    #[test]
    fn test_oscillator_ratio_and_phase() {
        let osc = Oscillator::new(100.0)
            .with_ratio(2.0)
            .with_phase(std::f64::consts::FRAC_PI_2);
        assert_eq!(osc.effective_frequency(), 200.0);

        let buffer = osc.render(0.01, 8000).unwrap();
        // Phase offset of π/2 turns the sine into a cosine
        assert!((buffer.samples()[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_oscillator_vibrato_changes_output() {
        let plain = Oscillator::new(440.0).render(0.1, 8000).unwrap();
        let wobbly = Oscillator::new(440.0)
            .with_vibrato(Vibrato::new(6.0, 0.8))
            .render(0.1, 8000)
            .unwrap();
        assert_eq!(plain.len(), wobbly.len());
        assert_ne!(plain.samples(), wobbly.samples());
        assert!(wobbly.peak() <= 1.0 + 1e-12);
    }

    #[test]
    fn test_white_noise_range_and_determinism() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let a = white_noise(0.05, 8000, 0.3, &mut rng1).unwrap();
        let b = white_noise(0.05, 8000, 0.3, &mut rng2).unwrap();

        assert_eq!(a.len(), 400);
        assert_eq!(a, b);
        for &s in a.samples() {
            assert!((-0.3..=0.3).contains(&s));
        }
        assert!(a.peak() > 0.0);
    }

    #[test]
    fn test_silence() {
        let buffer = silence(0.1, 8000).unwrap();
        assert_eq!(buffer.len(), 800);
        assert_eq!(buffer.peak(), 0.0);
        assert!(silence(0.0, 8000).unwrap().is_empty());
    }

    #[test]
    fn test_partial_from_pairs() {
        let partials = Partial::from_pairs(&[1.0, 2.0, 2.4], &[1.0, 0.5]);
        assert_eq!(partials.len(), 2);
        assert_eq!(partials[1], Partial::new(2.0, 0.5));
    }
}

//! Frequency sweeps with accumulated phase.
//!
//! The instantaneous frequency is integrated sample by sample, so the output
//! never jumps in phase when the frequency changes.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::buffer::{num_samples, SampleBuffer};
use crate::error::{
    check_duration, check_non_negative, check_sample_rate, AudioError, AudioResult,
};
use crate::mixer::normalize_peak;
use crate::waveform::Partial;

/// Frequency sweep curve types.
///
/// An exponential curve needs both endpoints above 0 Hz. When one is not,
/// it follows the linear curve instead. Rendered sweeps go through
/// [`FrequencySweep::validate`], which rejects negative endpoints, so there
/// the fallback only applies to a sweep starting or ending at 0 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepCurve {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Exponential interpolation (perceptually linear for pitch).
    Exponential,
}

impl SweepCurve {
    /// Interpolates between `start` and `end` at progress `t` in [0, 1].
    ///
    /// Exponential interpolation is undefined when either endpoint is <= 0;
    /// in that case the linear curve is used instead.
    pub fn interpolate(&self, start: f64, end: f64, t: f64) -> f64 {
        match self {
            SweepCurve::Linear => start + (end - start) * t,
            SweepCurve::Exponential => {
                if start <= 0.0 || end <= 0.0 {
                    start + (end - start) * t
                } else {
                    start * (end / start).powf(t)
                }
            }
        }
    }
}

/// Frequency sweep parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencySweep {
    /// Starting frequency in Hz.
    pub start_freq: f64,
    /// Ending frequency in Hz.
    pub end_freq: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Sweep curve type.
    pub curve: SweepCurve,
}

impl FrequencySweep {
    /// Creates a new frequency sweep.
    pub fn new(start_freq: f64, end_freq: f64, duration: f64, curve: SweepCurve) -> Self {
        Self {
            start_freq,
            end_freq,
            duration,
            curve,
        }
    }

    /// Frequency at normalized time `t` (0.0 to 1.0).
    pub fn at(&self, t: f64) -> f64 {
        self.curve.interpolate(self.start_freq, self.end_freq, t)
    }

    /// Endpoints must be finite and non-negative, and at least one must be
    /// positive. A negative endpoint is an `InvalidParameter` for every
    /// curve, matching the oscillators' rejection of frequencies <= 0.
    pub fn validate(&self) -> AudioResult<()> {
        check_non_negative("start_freq", self.start_freq)?;
        check_non_negative("end_freq", self.end_freq)?;
        if self.start_freq == 0.0 && self.end_freq == 0.0 {
            return Err(AudioError::invalid_param(
                "start_freq",
                "sweep endpoints cannot both be 0 Hz",
            ));
        }
        check_duration(self.duration)
    }

    /// Instantaneous frequency for each of `n` samples, at `t = i / n`.
    pub fn frequencies(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.at(i as f64 / n as f64)).collect()
    }
}

/// Running phase (radians) for each sample of the sweep.
///
/// `phase[0] = 0` and `phase[i + 1] = phase[i] + 2π f(t_i) / sample_rate`.
pub fn sweep_phase(sweep: &FrequencySweep, sample_rate: u32) -> AudioResult<Vec<f64>> {
    sweep.validate()?;
    check_sample_rate(sample_rate)?;

    let n = num_samples(sweep.duration, sample_rate);
    let rate = sample_rate as f64;
    let mut phase = 0.0;
    let mut phases = Vec::with_capacity(n);

    for freq in sweep.frequencies(n) {
        phases.push(phase);
        phase += TAU * freq / rate;
    }

    Ok(phases)
}

/// Renders a sweeping sine of the given amplitude.
pub fn frequency_sweep(
    sweep: &FrequencySweep,
    sample_rate: u32,
    amplitude: f64,
) -> AudioResult<SampleBuffer> {
    check_non_negative("amplitude", amplitude)?;
    let samples = sweep_phase(sweep, sample_rate)?
        .into_iter()
        .map(|phase| amplitude * phase.sin())
        .collect();
    SampleBuffer::new(samples, sample_rate)
}

/// Renders several partials that follow one sweep.
///
/// All partials share the accumulated base phase; partial `k` sounds
/// `amplitude_k * sin(ratio_k * phase)`. The sum is rescaled only if its peak
/// exceeds 1.0.
pub fn sweep_partials(
    sweep: &FrequencySweep,
    partials: &[Partial],
    sample_rate: u32,
) -> AudioResult<SampleBuffer> {
    for partial in partials {
        partial.validate()?;
    }
    let phases = sweep_phase(sweep, sample_rate)?;

    let mut samples: Vec<f64> = phases
        .iter()
        .map(|&phase| {
            partials
                .iter()
                .map(|p| p.amplitude * (p.ratio * phase).sin())
                .sum::<f64>()
        })
        .collect();
    normalize_peak(&mut samples, 1.0);

    SampleBuffer::new(samples, sample_rate)
}

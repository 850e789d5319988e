//! Low-frequency modulators: vibrato and tremolo.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::buffer::SampleBuffer;
use crate::error::{check_non_negative, AudioResult};

/// Sinusoidal phase modulation of an oscillator.
///
/// Vibrato is a parameter of [`Oscillator`](crate::waveform::Oscillator) and is
/// evaluated while rendering, never on already-rendered samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vibrato {
    /// Modulation rate in Hz.
    pub rate: f64,
    /// Peak phase deviation in radians.
    pub depth: f64,
}

impl Vibrato {
    /// Creates a vibrato.
    pub const fn new(rate: f64, depth: f64) -> Self {
        Self { rate, depth }
    }

    /// Phase offset in radians at time `t` seconds: `depth * sin(2π rate t)`.
    #[inline]
    pub fn phase_offset(&self, t: f64) -> f64 {
        self.depth * (TAU * self.rate * t).sin()
    }

    /// Rate and depth must be finite and non-negative.
    pub fn validate(&self) -> AudioResult<()> {
        check_non_negative("vibrato.rate", self.rate)?;
        check_non_negative("vibrato.depth", self.depth)
    }
}

/// Sinusoidal gain modulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tremolo {
    /// Modulation rate in Hz.
    pub rate: f64,
    /// Gain deviation around 1.0.
    pub depth: f64,
}

impl Tremolo {
    /// Creates a tremolo.
    pub const fn new(rate: f64, depth: f64) -> Self {
        Self { rate, depth }
    }

    /// Gain at time `t` seconds: `1 + depth * sin(2π rate t)`.
    #[inline]
    pub fn gain(&self, t: f64) -> f64 {
        1.0 + self.depth * (TAU * self.rate * t).sin()
    }

    /// Rate and depth must be finite and non-negative.
    pub fn validate(&self) -> AudioResult<()> {
        check_non_negative("tremolo.rate", self.rate)?;
        check_non_negative("tremolo.depth", self.depth)
    }
}

/// Applies tremolo to a rendered buffer.
pub fn apply_tremolo(mut buffer: SampleBuffer, tremolo: &Tremolo) -> AudioResult<SampleBuffer> {
    tremolo.validate()?;
    let rate = buffer.sample_rate() as f64;
    for (i, sample) in buffer.samples_mut().iter_mut().enumerate() {
        *sample *= tremolo.gain(i as f64 / rate);
    }
    Ok(buffer)
}

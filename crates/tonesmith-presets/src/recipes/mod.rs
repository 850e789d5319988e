//! Parameter sets for every preset, grouped by theme.

use tonesmith_engine::{EnvelopeSpec, Partial, SoundSegment, Source, SweepCurve};

pub(crate) mod alerts;
pub(crate) mod bells;
pub(crate) mod game;
pub(crate) mod ui;

pub(crate) const fn env(attack: f64, decay: f64, sustain: f64, release: f64) -> EnvelopeSpec {
    EnvelopeSpec::new(attack, decay, sustain, release)
}

/// Sine tones sounding together, each given as `(frequency, amplitude)`.
pub(crate) fn tones(duration: f64, tones: &[(f64, f64)]) -> SoundSegment {
    tones
        .iter()
        .fold(SoundSegment::new(duration), |segment, &(frequency, amplitude)| {
            segment.voice(Source::tone(frequency).weighted(amplitude))
        })
}

/// A harmonic stack with every amplitude scaled by `gain`.
pub(crate) fn stack(
    fundamental: f64,
    duration: f64,
    ratios: &[f64],
    amplitudes: &[f64],
    gain: f64,
) -> SoundSegment {
    let partials = ratios
        .iter()
        .zip(amplitudes)
        .map(|(&ratio, &amplitude)| Partial::new(ratio, amplitude * gain))
        .collect();
    SoundSegment::new(duration).voice(Source::partials(fundamental, partials))
}

/// A linear glide carrying `(ratio, amplitude)` partials.
pub(crate) fn glide(start: f64, end: f64, duration: f64, partials: &[(f64, f64)]) -> SoundSegment {
    SoundSegment::new(duration).voice(Source::Sweep {
        start_freq: start,
        end_freq: end,
        curve: SweepCurve::Linear,
        partials: partials
            .iter()
            .map(|&(ratio, amplitude)| Partial::new(ratio, amplitude))
            .collect(),
    })
}

/// Adds a white-noise voice at `amplitude`.
pub(crate) fn with_noise(segment: SoundSegment, amplitude: f64) -> SoundSegment {
    segment.voice(Source::Noise.weighted(amplitude))
}

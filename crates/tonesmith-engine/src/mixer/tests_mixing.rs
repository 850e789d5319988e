//! Tests for weighted mixing, placement, stacking and concatenation.

use super::*;
use crate::buffer::SampleBuffer;
use crate::error::AudioError;
use crate::waveform::{sine_wave, Partial};

fn constant(value: f64, len: usize, rate: u32) -> SampleBuffer {
    SampleBuffer::new(vec![value; len], rate).unwrap()
}

// ============================================================================
// mix()
// ============================================================================

#[test]
fn test_mix_single_source_unscaled() {
    let out = mix(&[(constant(0.5, 100, 44100), 1.0)]).unwrap();
    assert_eq!(out.len(), 100);
    assert!(out.samples().iter().all(|&s| (s - 0.5).abs() < 1e-12));
}

#[test]
fn test_mix_weights_applied() {
    let out = mix(&[
        (constant(1.0, 100, 44100), 0.5),
        (constant(1.0, 100, 44100), 0.25),
    ])
    .unwrap();
    assert!(out.samples().iter().all(|&s| (s - 0.75).abs() < 1e-12));
}

#[test]
fn test_mix_quiet_sum_not_rescaled() {
    let out = mix(&[
        (constant(0.3, 100, 8000), 1.0),
        (constant(0.2, 100, 8000), 1.0),
        (constant(0.1, 100, 8000), 1.0),
    ])
    .unwrap();
    assert!(out.samples().iter().all(|&s| (s - 0.6).abs() < 1e-12));
}

#[test]
fn test_mix_hot_sum_rescaled_to_full_scale() {
    let out = mix(&[
        (constant(0.8, 100, 8000), 1.0),
        (constant(0.8, 50, 8000), 1.0),
    ])
    .unwrap();

    // Raw sum is 1.6 then 0.8; rescaled by 1/1.6
    assert!((out.samples()[0] - 1.0).abs() < 1e-12);
    assert!((out.samples()[75] - 0.5).abs() < 1e-12);
}

#[test]
fn test_mix_zero_pads_shorter_inputs() {
    let out = mix(&[
        (constant(0.5, 50, 8000), 1.0),
        (constant(0.25, 100, 8000), 1.0),
    ])
    .unwrap();
    assert_eq!(out.len(), 100);
    assert!((out.samples()[10] - 0.75).abs() < 1e-12);
    assert!((out.samples()[60] - 0.25).abs() < 1e-12);
}

#[test]
fn test_mix_rate_mismatch() {
    let err = mix(&[
        (constant(0.5, 10, 44100), 1.0),
        (constant(0.5, 10, 48000), 1.0),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        AudioError::RateMismatch {
            expected: 44100,
            found: 48000
        }
    ));
}

#[test]
fn test_mix_rejects_empty_and_negative_weight() {
    assert!(matches!(
        mix(&[]),
        Err(AudioError::InvalidParameter { .. })
    ));
    assert!(matches!(
        mix(&[(constant(0.5, 10, 8000), -1.0)]),
        Err(AudioError::InvalidParameter { .. })
    ));
}

#[test]
fn test_mix_rejects_overflowing_weights() {
    let err = mix(&[
        (constant(1.0, 4, 8000), 1e308),
        (constant(1.0, 4, 8000), 1e308),
    ])
    .unwrap_err();
    assert!(matches!(err, AudioError::InvalidParameter { ref name, .. } if name == "weight"));

    let mut mixer = Mixer::new(8000).unwrap();
    mixer.add(constant(1.0, 4, 8000), 1e308).unwrap();
    mixer.add(constant(1.0, 4, 8000), 1e308).unwrap();
    assert!(mixer.mix().is_err());
}

#[test]
fn test_mix_huge_finite_weights_rescaled() {
    let out = mix(&[
        (constant(1.0, 4, 8000), 1e300),
        (constant(-0.5, 4, 8000), 1e300),
    ])
    .unwrap();
    assert!(out.samples().iter().all(|&s| (s - 1.0).abs() < 1e-12));
}

#[test]
fn test_mix_never_exceeds_full_scale() {
    let rate = 44100;
    let inputs: Vec<(SampleBuffer, f64)> = [220.0, 330.0, 440.0, 550.0, 660.0]
        .iter()
        .map(|&f| (sine_wave(f, 0.1, rate, 1.0).unwrap(), 0.9))
        .collect();
    let out = mix(&inputs).unwrap();
    assert!(out.peak() <= 1.0 + f64::EPSILON);
}

// ============================================================================
// Mixer
// ============================================================================

#[test]
fn test_mixer_offset_placement() {
    let mut mixer = Mixer::new(8000).unwrap();
    mixer.add(constant(0.5, 50, 8000), 1.0).unwrap();
    mixer.add_at(constant(0.3, 50, 8000), 1.0, 25).unwrap();
    assert_eq!(mixer.len(), 75);
    assert_eq!(mixer.num_layers(), 2);

    let out = mixer.mix().unwrap();
    assert!((out.samples()[10] - 0.5).abs() < 1e-12);
    assert!((out.samples()[30] - 0.8).abs() < 1e-12);
    assert!((out.samples()[60] - 0.3).abs() < 1e-12);
}

#[test]
fn test_mixer_offset_seconds() {
    let layer = Layer::new(constant(0.5, 10, 8000), 1.0).with_offset_seconds(0.01);
    assert_eq!(layer.offset, 80);
    assert_eq!(layer.end(), 90);
}

#[test]
fn test_mixer_rejects_other_rates() {
    let mut mixer = Mixer::new(22050).unwrap();
    assert!(matches!(
        mixer.add(constant(0.5, 10, 44100), 1.0),
        Err(AudioError::RateMismatch { .. })
    ));
    assert!(mixer.is_empty());
}

#[test]
fn test_mixer_empty_mix() {
    let mixer = Mixer::new(8000).unwrap();
    let out = mixer.mix().unwrap();
    assert!(out.is_empty());
    assert_eq!(out.sample_rate(), 8000);
}

// ============================================================================
// harmonic_stack() / concat()
// ============================================================================

#[test]
fn test_harmonic_stack_single_partial_matches_sine() {
    let stack = harmonic_stack(500.0, &[Partial::new(2.0, 0.4)], 0.02, 8000).unwrap();
    let sine = sine_wave(1000.0, 0.02, 8000, 0.4).unwrap();
    assert_eq!(stack.len(), sine.len());
    for (a, b) in stack.samples().iter().zip(sine.samples()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_harmonic_stack_bell_partials_stay_in_range() {
    let partials = Partial::from_pairs(&[1.0, 2.0, 2.4, 3.0, 4.2], &[1.0, 0.5, 0.3, 0.2, 0.15]);
    let stack = harmonic_stack(800.0, &partials, 0.1, 44100).unwrap();
    assert_eq!(stack.len(), 4410);
    assert!(stack.peak() <= 1.0 + f64::EPSILON);
}

#[test]
fn test_harmonic_stack_validation() {
    assert!(harmonic_stack(0.0, &[Partial::new(1.0, 1.0)], 0.1, 8000).is_err());
    assert!(harmonic_stack(440.0, &[], 0.1, 8000).is_err());
    assert!(harmonic_stack(440.0, &[Partial::new(-1.0, 1.0)], 0.1, 8000).is_err());
}

#[test]
fn test_concat_sequences_buffers() {
    let out = concat(&[
        constant(0.1, 10, 8000),
        constant(0.0, 5, 8000),
        constant(0.2, 10, 8000),
    ])
    .unwrap();
    assert_eq!(out.len(), 25);
    assert_eq!(out.samples()[0], 0.1);
    assert_eq!(out.samples()[12], 0.0);
    assert_eq!(out.samples()[24], 0.2);
}

#[test]
fn test_concat_rate_mismatch_and_empty() {
    assert!(matches!(
        concat(&[constant(0.1, 10, 8000), constant(0.1, 10, 16000)]),
        Err(AudioError::RateMismatch { .. })
    ));
    assert!(concat(&[]).is_err());
}

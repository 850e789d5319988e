//! Modulation unit tests.

use std::f64::consts::{PI, TAU};

use super::*;
use crate::error::AudioError;
use crate::waveform::Partial;

#[test]
fn test_sweep_curve_linear() {
    let curve = SweepCurve::Linear;
    assert!((curve.interpolate(100.0, 200.0, 0.0) - 100.0).abs() < 0.01);
    assert!((curve.interpolate(100.0, 200.0, 0.5) - 150.0).abs() < 0.01);
    assert!((curve.interpolate(100.0, 200.0, 1.0) - 200.0).abs() < 0.01);
}

#[test]
fn test_sweep_curve_exponential() {
    let curve = SweepCurve::Exponential;
    assert!((curve.interpolate(100.0, 400.0, 0.0) - 100.0).abs() < 0.01);
    // Geometric mean at 0.5
    assert!((curve.interpolate(100.0, 400.0, 0.5) - 200.0).abs() < 1e-9);
    assert!((curve.interpolate(100.0, 400.0, 1.0) - 400.0).abs() < 0.01);
}

#[test]
fn test_exponential_falls_back_to_linear() {
    let exp = SweepCurve::Exponential;
    let lin = SweepCurve::Linear;
    for t in [0.0, 0.25, 0.5, 1.0] {
        assert_eq!(exp.interpolate(0.0, 800.0, t), lin.interpolate(0.0, 800.0, t));
        assert_eq!(exp.interpolate(600.0, 0.0, t), lin.interpolate(600.0, 0.0, t));
    }
}

#[test]
fn test_sweep_frequencies() {
    let sweep = FrequencySweep::new(200.0, 600.0, 0.1, SweepCurve::Linear);
    let freqs = sweep.frequencies(10);

    assert_eq!(freqs.len(), 10);
    assert!((freqs[0] - 200.0).abs() < 1e-9);
    assert!((freqs[5] - 400.0).abs() < 1e-9);
    assert!(freqs[9] < 600.0);
}

#[test]
fn test_sweep_phase_accumulates() {
    let sweep = FrequencySweep::new(1000.0, 1000.0, 0.01, SweepCurve::Linear);
    let phases = sweep_phase(&sweep, 8000).unwrap();

    assert_eq!(phases.len(), 80);
    assert_eq!(phases[0], 0.0);
    // Constant 1 kHz at 8 kHz: π/4 per sample
    for pair in phases.windows(2) {
        assert!((pair[1] - pair[0] - PI / 4.0).abs() < 1e-12);
    }
}

#[test]
fn test_constant_sweep_matches_sine() {
    let sweep = FrequencySweep::new(440.0, 440.0, 0.05, SweepCurve::Exponential);
    let swept = frequency_sweep(&sweep, 44100, 1.0).unwrap();
    let sine = crate::waveform::sine_wave(440.0, 0.05, 44100, 1.0).unwrap();

    assert_eq!(swept.len(), sine.len());
    for (a, b) in swept.samples().iter().zip(sine.samples()) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn test_sweep_phase_continuity() {
    let sample_rate = 44100;
    for curve in [SweepCurve::Linear, SweepCurve::Exponential] {
        let sweep = FrequencySweep::new(1200.0, 300.0, 0.2, curve);
        let phases = sweep_phase(&sweep, sample_rate).unwrap();

        let increments: Vec<f64> = phases.windows(2).map(|w| w[1] - w[0]).collect();
        let one_period = TAU * 1200.0 / sample_rate as f64;
        for pair in increments.windows(2) {
            // The per-sample phase step drifts smoothly, never by a whole step
            assert!((pair[1] - pair[0]).abs() < one_period * 0.01);
        }
    }
}

#[test]
fn test_sweep_samples_have_no_clicks() {
    let sample_rate = 44100;
    let sweep = FrequencySweep::new(2000.0, 500.0, 0.3, SweepCurve::Linear);
    let buffer = frequency_sweep(&sweep, sample_rate, 1.0).unwrap();

    // |d/dt sin(φ)| <= dφ/dt, so neighbouring samples differ by at most one
    // sample's worth of phase at the highest frequency.
    let max_step = TAU * 2000.0 / sample_rate as f64;
    for pair in buffer.samples().windows(2) {
        assert!((pair[1] - pair[0]).abs() <= max_step + 1e-9);
    }
}

#[test]
fn test_exponential_from_zero_renders_linear() {
    let exp = FrequencySweep::new(0.0, 800.0, 0.05, SweepCurve::Exponential);
    let lin = FrequencySweep::new(0.0, 800.0, 0.05, SweepCurve::Linear);
    assert_eq!(
        frequency_sweep(&exp, 8000, 0.5).unwrap(),
        frequency_sweep(&lin, 8000, 0.5).unwrap()
    );
}

#[test]
fn test_negative_endpoint_rejected_for_every_curve() {
    for curve in [SweepCurve::Linear, SweepCurve::Exponential] {
        let sweep = FrequencySweep::new(400.0, -50.0, 0.05, curve);
        let err = frequency_sweep(&sweep, 8000, 0.5).unwrap_err();
        assert!(matches!(err, AudioError::InvalidParameter { ref name, .. } if name == "end_freq"));
    }
}

#[test]
fn test_sweep_validation() {
    let bad = [
        FrequencySweep::new(0.0, 0.0, 0.1, SweepCurve::Linear),
        FrequencySweep::new(-100.0, 200.0, 0.1, SweepCurve::Linear),
        FrequencySweep::new(100.0, f64::NAN, 0.1, SweepCurve::Exponential),
        FrequencySweep::new(100.0, 200.0, f64::INFINITY, SweepCurve::Linear),
    ];
    for sweep in bad {
        assert!(frequency_sweep(&sweep, 44100, 1.0).is_err());
    }

    let empty = FrequencySweep::new(100.0, 200.0, 0.0, SweepCurve::Linear);
    assert!(frequency_sweep(&empty, 44100, 1.0).unwrap().is_empty());
}

#[test]
fn test_sweep_partials_share_phase() {
    let sweep = FrequencySweep::new(1200.0, 300.0, 0.2, SweepCurve::Linear);
    let single = frequency_sweep(&sweep, 44100, 0.4).unwrap();
    let stacked = sweep_partials(&sweep, &[Partial::new(1.0, 0.4)], 44100).unwrap();
    assert_eq!(single, stacked);

    let layered = sweep_partials(
        &sweep,
        &[Partial::new(1.0, 0.4), Partial::new(2.0, 0.2)],
        44100,
    )
    .unwrap();
    assert_eq!(layered.len(), single.len());
    assert!(layered.peak() <= 1.0 + 1e-12);
}

#[test]
fn test_sweep_partials_rescale_when_hot() {
    let sweep = FrequencySweep::new(2000.0, 500.0, 0.1, SweepCurve::Linear);
    let buffer = sweep_partials(
        &sweep,
        &[Partial::new(1.0, 0.9), Partial::new(1.5, 0.9), Partial::new(2.3, 0.9)],
        8000,
    )
    .unwrap();
    assert!((buffer.peak() - 1.0).abs() < 1e-12);
}

#[test]
fn test_vibrato_phase_offset() {
    let vibrato = Vibrato::new(5.0, 0.5);
    assert_eq!(vibrato.phase_offset(0.0), 0.0);
    // Quarter cycle of a 5 Hz modulator
    assert!((vibrato.phase_offset(0.05) - 0.5).abs() < 1e-12);
    assert!(Vibrato::new(-1.0, 0.5).validate().is_err());
}

#[test]
fn test_tremolo_gain_curve() {
    let buffer = crate::buffer::SampleBuffer::new(vec![0.5; 1000], 1000).unwrap();
    let tremolo = Tremolo::new(20.0, 0.1);
    let out = apply_tremolo(buffer, &tremolo).unwrap();

    assert_eq!(out.len(), 1000);
    assert!((out.samples()[0] - 0.5).abs() < 1e-12);
    // t = 12.5 ms is a quarter cycle of 20 Hz; gain 1.1 is approached there
    let peak = out.peak();
    assert!(peak <= 0.55 + 1e-12);
    assert!(peak > 0.549);
}

#[test]
fn test_tremolo_rejects_negative_depth() {
    let buffer = crate::buffer::SampleBuffer::new(vec![0.5; 10], 1000).unwrap();
    assert!(apply_tremolo(buffer, &Tremolo::new(20.0, -0.1)).is_err());
}

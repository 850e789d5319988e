//! Tests for peak measurement and conditional rescaling.

use super::*;

#[test]
fn test_peak() {
    assert_eq!(peak(&[0.5, -0.8, 0.2]), 0.8);
    assert_eq!(peak(&[]), 0.0);
}

#[test]
fn test_normalize_peak_leaves_quiet_audio() {
    let mut samples = vec![0.5, -0.3, 0.8, -0.2];
    let before = samples.clone();
    assert_eq!(normalize_peak(&mut samples, 1.0), None);
    assert_eq!(samples, before);
}

#[test]
fn test_normalize_peak_exactly_at_ceiling() {
    let mut samples = vec![1.0, -1.0, 0.5];
    assert_eq!(normalize_peak(&mut samples, 1.0), None);
    assert_eq!(samples, vec![1.0, -1.0, 0.5]);
}

#[test]
fn test_normalize_peak_loud_audio() {
    let mut samples = vec![2.0, -1.5, 3.0, -2.5];
    let gain = normalize_peak(&mut samples, 1.0).expect("should rescale");

    assert!((gain - 1.0 / 3.0).abs() < 1e-12);
    assert!((peak(&samples) - 1.0).abs() < 1e-12);
    // Relative levels are preserved
    assert!((samples[0] / samples[2] - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_normalize_peak_silent_audio() {
    let mut samples = vec![0.0; 4];
    assert_eq!(normalize_peak(&mut samples, 1.0), None);
    assert!(samples.iter().all(|&s| s == 0.0));
}

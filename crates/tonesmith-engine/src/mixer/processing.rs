//! Peak measurement and clipping prevention.

/// Absolute peak of `samples` (0.0 when empty).
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Rescales `samples` so their peak equals `ceiling`, but only if the current
/// peak exceeds it.
///
/// Returns the gain that was applied, or `None` if the samples were left
/// untouched.
pub fn normalize_peak(samples: &mut [f64], ceiling: f64) -> Option<f64> {
    let current_peak = peak(samples);
    if current_peak <= ceiling || !current_peak.is_finite() {
        return None;
    }

    let gain = ceiling / current_peak;
    for sample in samples.iter_mut() {
        *sample *= gain;
    }
    Some(gain)
}

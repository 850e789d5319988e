//! Additive mixing of mono buffers.
//!
//! Buffers are summed with per-input weights. Inputs must share one sample
//! rate; shorter inputs are zero-padded to the longest. The sum is rescaled
//! only when its absolute peak exceeds 1.0, so a single quiet source keeps
//! its level.

#[allow(clippy::module_inception)]
mod mixer;
mod processing;
mod types;

#[cfg(test)]
mod tests_mixing;
#[cfg(test)]
mod tests_normalization;

// Re-export public API
pub use mixer::{concat, harmonic_stack, mix, Mixer};
pub use processing::{normalize_peak, peak};
pub use types::Layer;

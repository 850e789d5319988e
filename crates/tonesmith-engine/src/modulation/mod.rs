//! Pitch and amplitude modulation.
//!
//! - [`sweep`] - continuous-phase frequency glides (linear / exponential)
//! - [`lfo`] - vibrato (phase modulation of an oscillator descriptor) and
//!   tremolo (gain modulation of rendered samples)

pub mod lfo;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use lfo::{apply_tremolo, Tremolo, Vibrato};
pub use sweep::{frequency_sweep, sweep_partials, sweep_phase, FrequencySweep, SweepCurve};

//! Tonesmith synthesis engine
//!
//! Procedural sound-effect synthesis with 16-bit mono WAV output.
//!
//! # Overview
//!
//! Sounds are built from a small set of primitives:
//!
//! - **Oscillators** - sine tones with optional phase offset and vibrato
//! - **Noise** - seeded white noise
//! - **Additive stacks** - partials at ratios of a fundamental
//! - **Sweeps** - continuous-phase linear or exponential glides
//! - **Envelopes** - ADSR gain curves with proportional compression
//!
//! A [`SoundSpec`] arranges these into segments and voices; an [`Engine`]
//! renders it and encodes the result.
//!
//! # Determinism
//!
//! All synthesis is deterministic. Given the same spec and seed, the output is
//! byte-identical across runs. Noise uses PCG32 with per-voice seeds derived
//! via BLAKE3, and every encoded file carries the BLAKE3 hash of its PCM data.
//!
//! # Example
//!
//! ```
//! use tonesmith_engine::{Engine, EnvelopeSpec, SoundSegment, SoundSpec, Source};
//!
//! let spec = SoundSpec::new("beep").then(
//!     SoundSegment::new(0.2)
//!         .voice(Source::tone(880.0).weighted(0.5))
//!         .with_envelope(EnvelopeSpec::new(0.01, 0.05, 0.6, 0.1)),
//! );
//!
//! let audio = Engine::new(22050)?.synthesize(&spec)?;
//! assert_eq!(audio.num_samples, 4410);
//! assert_eq!(&audio.bytes[0..4], b"RIFF");
//! # Ok::<(), tonesmith_engine::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`engine`] - [`Engine`] and the segment pipeline
//! - [`spec`] - serializable sound descriptions
//! - [`waveform`] - sine, noise and silence generators
//! - [`envelope`] - ADSR envelope shaping
//! - [`modulation`] - sweeps, vibrato and tremolo
//! - [`mixer`] - weighted mixing, additive stacks and concatenation
//! - [`rng`] - deterministic RNG with seed derivation
//! - [`wav`] - deterministic WAV encoder

pub mod buffer;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod mixer;
pub mod modulation;
pub mod rng;
pub mod spec;
pub mod wav;
pub mod waveform;

// Re-export main types at crate root
pub use buffer::{num_samples, SampleBuffer};
pub use engine::{synthesize, Engine, EngineConfig, DEFAULT_SAMPLE_RATE};
pub use envelope::{apply_envelope, envelope_curve, EnvelopeSegments, EnvelopeSpec};
pub use error::{AudioError, AudioResult};
pub use mixer::{concat, harmonic_stack, mix, Mixer};
pub use modulation::{
    apply_tremolo, frequency_sweep, sweep_partials, FrequencySweep, SweepCurve, Tremolo, Vibrato,
};
pub use spec::{Segment, SoundSegment, SoundSpec, Source, Voice};
pub use wav::{encode, EncodedAudio};
pub use waveform::{silence, sine_wave, white_noise, Oscillator, Partial};

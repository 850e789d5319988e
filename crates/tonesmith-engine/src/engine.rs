//! Rendering of [`SoundSpec`]s into encoded audio.
//!
//! Each sound segment runs the same pipeline: every voice is rendered over
//! the segment duration and shaped by its own envelope, the voices are mixed
//! with their weights, tremolo is applied to the mix (rescaling it if the
//! modulation pushed it past full scale), and finally the segment envelope.
//! Segments (pauses included) are then joined end to end and encoded as WAV.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::buffer::SampleBuffer;
use crate::envelope::apply_envelope;
use crate::error::{check_duration, check_sample_rate, AudioError, AudioResult};
use crate::mixer::{concat, harmonic_stack, mix, normalize_peak};
use crate::modulation::{apply_tremolo, frequency_sweep, sweep_partials, FrequencySweep};
use crate::rng::create_voice_rng;
use crate::spec::{Segment, SoundSegment, SoundSpec, Source, Voice};
use crate::wav::{encode, EncodedAudio};
use crate::waveform::{silence, white_noise, Oscillator};

/// Sample rate used when none is configured.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

/// Serializable engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Output sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl EngineConfig {
    /// Validates the settings and builds an engine.
    pub fn build(&self) -> AudioResult<Engine> {
        Engine::new(self.sample_rate)
    }
}

/// Synthesis engine bound to one sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    sample_rate: u32,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl Engine {
    /// Creates an engine rendering at `sample_rate`.
    pub fn new(sample_rate: u32) -> AudioResult<Self> {
        check_sample_rate(sample_rate)?;
        Ok(Self { sample_rate })
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Renders a spec to samples without encoding.
    pub fn render(&self, spec: &SoundSpec) -> AudioResult<SampleBuffer> {
        debug!(
            name = %spec.name,
            seed = spec.seed,
            segments = spec.segments.len(),
            sample_rate = self.sample_rate,
            "rendering sound"
        );

        let buffers = spec
            .segments
            .iter()
            .enumerate()
            .map(|(index, segment)| self.render_segment(spec.seed, index as u32, segment))
            .collect::<AudioResult<Vec<_>>>()?;

        if buffers.is_empty() {
            return SampleBuffer::empty(self.sample_rate);
        }
        concat(&buffers)
    }

    /// Renders and encodes a spec as a 16-bit mono WAV file.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for any out-of-range value in the spec;
    /// nothing is produced on error.
    pub fn synthesize(&self, spec: &SoundSpec) -> AudioResult<EncodedAudio> {
        let buffer = self.render(spec)?;
        encode(&buffer, self.sample_rate)
    }

    fn render_segment(&self, seed: u32, index: u32, segment: &Segment) -> AudioResult<SampleBuffer> {
        let buffer = match segment {
            Segment::Silence { duration } => silence(*duration, self.sample_rate)?,
            Segment::Sound(sound) => self.render_sound(seed, index, sound)?,
        };
        trace!(segment = index, samples = buffer.len(), "segment rendered");
        Ok(buffer)
    }

    fn render_sound(&self, seed: u32, index: u32, sound: &SoundSegment) -> AudioResult<SampleBuffer> {
        check_duration(sound.duration)?;
        if sound.voices.is_empty() {
            return Err(AudioError::invalid_param(
                format!("segments[{}].voices", index),
                "a sound segment needs at least one voice",
            ));
        }

        let inputs = sound
            .voices
            .iter()
            .enumerate()
            .map(|(voice_index, voice)| {
                let rendered =
                    self.render_voice(seed, index, voice_index as u32, voice, sound.duration)?;
                Ok((rendered, voice.weight))
            })
            .collect::<AudioResult<Vec<_>>>()?;

        let mut buffer = mix(&inputs)?;
        if let Some(tremolo) = &sound.tremolo {
            buffer = apply_tremolo(buffer, tremolo)?;
            normalize_peak(buffer.samples_mut(), 1.0);
        }
        if let Some(envelope) = &sound.envelope {
            buffer = apply_envelope(&buffer, envelope)?;
        }
        Ok(buffer)
    }

    fn render_voice(
        &self,
        seed: u32,
        segment_index: u32,
        voice_index: u32,
        voice: &Voice,
        duration: f64,
    ) -> AudioResult<SampleBuffer> {
        let rate = self.sample_rate;
        let buffer = match &voice.source {
            Source::Tone {
                frequency,
                phase,
                vibrato,
            } => {
                let mut osc = Oscillator::new(*frequency).with_phase(*phase);
                if let Some(vibrato) = vibrato {
                    osc = osc.with_vibrato(*vibrato);
                }
                osc.render(duration, rate)?
            }
            Source::Partials {
                fundamental,
                partials,
            } => harmonic_stack(*fundamental, partials, duration, rate)?,
            Source::Sweep {
                start_freq,
                end_freq,
                curve,
                partials,
            } => {
                let sweep = FrequencySweep::new(*start_freq, *end_freq, duration, *curve);
                if partials.is_empty() {
                    frequency_sweep(&sweep, rate, 1.0)?
                } else {
                    sweep_partials(&sweep, partials, rate)?
                }
            }
            Source::Noise => {
                let mut rng = create_voice_rng(seed, segment_index, voice_index);
                white_noise(duration, rate, 1.0, &mut rng)?
            }
        };

        match &voice.envelope {
            Some(envelope) => apply_envelope(&buffer, envelope),
            None => Ok(buffer),
        }
    }
}

/// Synthesizes `spec` at the default sample rate.
pub fn synthesize(spec: &SoundSpec) -> AudioResult<EncodedAudio> {
    Engine::default().synthesize(spec)
}

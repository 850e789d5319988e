//! Declarative sound descriptions.
//!
//! A [`SoundSpec`] is a sequence of [`Segment`]s. Each sound segment mixes
//! one or more [`Voice`]s for a fixed duration; silence segments insert
//! pauses. Specs are plain data and round-trip through JSON.

use serde::{Deserialize, Serialize};

use crate::envelope::EnvelopeSpec;
use crate::modulation::{SweepCurve, Tremolo, Vibrato};
use crate::waveform::Partial;

/// A complete sound: named, seeded, and made of consecutive segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundSpec {
    /// Name of the sound, used for file stems and logging.
    pub name: String,
    /// Seed for every random source in the sound.
    #[serde(default)]
    pub seed: u32,
    /// Segments rendered in order.
    pub segments: Vec<Segment>,
}

impl SoundSpec {
    /// Creates an empty spec with seed 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed: 0,
            segments: Vec::new(),
        }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Appends a segment.
    pub fn then(mut self, segment: impl Into<Segment>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends a pause.
    pub fn pause(self, duration: f64) -> Self {
        self.then(Segment::Silence { duration })
    }

    /// Total nominal length in seconds.
    pub fn duration(&self) -> f64 {
        self.segments.iter().map(|s| s.duration().max(0.0)).sum()
    }

    /// Parses a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the spec to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// One step of a sound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Voices mixed together for `duration` seconds.
    Sound(SoundSegment),
    /// A pause.
    Silence {
        /// Length in seconds.
        duration: f64,
    },
}

impl Segment {
    /// Nominal length in seconds.
    pub fn duration(&self) -> f64 {
        match self {
            Segment::Sound(sound) => sound.duration,
            Segment::Silence { duration } => *duration,
        }
    }
}

impl From<SoundSegment> for Segment {
    fn from(sound: SoundSegment) -> Self {
        Segment::Sound(sound)
    }
}

/// Voices rendered over a shared duration and mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundSegment {
    /// Length in seconds.
    pub duration: f64,
    /// Voices to mix.
    pub voices: Vec<Voice>,
    /// Envelope applied after mixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope: Option<EnvelopeSpec>,
    /// Amplitude modulation applied to the mix before the envelope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tremolo: Option<Tremolo>,
}

impl SoundSegment {
    /// Creates a segment with no envelope or tremolo.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            voices: Vec::new(),
            envelope: None,
            tremolo: None,
        }
    }

    /// Adds a voice.
    pub fn voice(mut self, voice: impl Into<Voice>) -> Self {
        self.voices.push(voice.into());
        self
    }

    /// Sets the post-mix envelope.
    pub fn with_envelope(mut self, envelope: EnvelopeSpec) -> Self {
        self.envelope = Some(envelope);
        self
    }

    /// Sets the tremolo.
    pub fn with_tremolo(mut self, tremolo: Tremolo) -> Self {
        self.tremolo = Some(tremolo);
        self
    }
}

fn default_weight() -> f64 {
    1.0
}

/// A source with its mix weight and optional own envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// What to render.
    pub source: Source,
    /// Mix weight (>= 0).
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Envelope applied to this voice before mixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope: Option<EnvelopeSpec>,
}

impl Voice {
    /// Creates a unit-weight voice.
    pub fn new(source: Source) -> Self {
        Self {
            source,
            weight: default_weight(),
            envelope: None,
        }
    }

    /// Sets the mix weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the per-voice envelope.
    pub fn with_envelope(mut self, envelope: EnvelopeSpec) -> Self {
        self.envelope = Some(envelope);
        self
    }
}

impl From<Source> for Voice {
    fn from(source: Source) -> Self {
        Voice::new(source)
    }
}

/// Signal generators available to a voice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Source {
    /// Unit-amplitude sine.
    Tone {
        /// Frequency in Hz.
        frequency: f64,
        /// Phase offset in radians.
        #[serde(default)]
        phase: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        vibrato: Option<Vibrato>,
    },
    /// Additive stack over a fundamental.
    Partials {
        /// Fundamental frequency in Hz.
        fundamental: f64,
        partials: Vec<Partial>,
    },
    /// Continuous-phase glide between two frequencies.
    Sweep {
        start_freq: f64,
        end_freq: f64,
        #[serde(default)]
        curve: SweepCurve,
        /// Partials riding the sweep; empty means a single unit sine.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        partials: Vec<Partial>,
    },
    /// Unit-amplitude white noise.
    Noise,
}

impl Source {
    /// A plain sine at `frequency`.
    pub fn tone(frequency: f64) -> Self {
        Source::Tone {
            frequency,
            phase: 0.0,
            vibrato: None,
        }
    }

    /// An additive stack.
    pub fn partials(fundamental: f64, partials: Vec<Partial>) -> Self {
        Source::Partials {
            fundamental,
            partials,
        }
    }

    /// A single-sine sweep.
    pub fn sweep(start_freq: f64, end_freq: f64, curve: SweepCurve) -> Self {
        Source::Sweep {
            start_freq,
            end_freq,
            curve,
            partials: Vec::new(),
        }
    }

    /// Wraps the source in a voice with the given weight.
    pub fn weighted(self, weight: f64) -> Voice {
        Voice::new(self).with_weight(weight)
    }
}

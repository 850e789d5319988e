//! Audio mixer for combining weighted buffers.

use tracing::trace;

use super::processing::normalize_peak;
use super::types::Layer;
use crate::buffer::SampleBuffer;
use crate::error::{
    check_frequency, check_non_negative, check_sample_rate, AudioError, AudioResult,
};
use crate::waveform::{Oscillator, Partial};

/// Adds `samples * weight` into `output` starting at `offset`, growing
/// `output` with zeros as needed.
fn accumulate(output: &mut Vec<f64>, samples: &[f64], weight: f64, offset: usize) {
    let end = offset + samples.len();
    if output.len() < end {
        output.resize(end, 0.0);
    }
    for (out, &sample) in output[offset..end].iter_mut().zip(samples) {
        *out += sample * weight;
    }
}

/// Applies the clipping rule and wraps the result.
///
/// A weighted sum that overflowed to infinity has no meaningful peak to
/// rescale against, so it is rejected.
fn finish(mut output: Vec<f64>, sample_rate: u32) -> AudioResult<SampleBuffer> {
    if output.iter().any(|s| !s.is_finite()) {
        return Err(AudioError::invalid_param(
            "weight",
            "weighted sum of the inputs is not finite",
        ));
    }
    if let Some(gain) = normalize_peak(&mut output, 1.0) {
        trace!(gain, len = output.len(), "mix exceeded full scale; rescaled");
    }
    Ok(SampleBuffer::from_validated(output, sample_rate))
}

/// Audio mixer for combining multiple layers.
#[derive(Debug)]
pub struct Mixer {
    /// Sample rate every layer must share.
    sample_rate: u32,
    /// Accumulated layers.
    layers: Vec<Layer>,
}

impl Mixer {
    /// Creates a new mixer.
    pub fn new(sample_rate: u32) -> AudioResult<Self> {
        check_sample_rate(sample_rate)?;
        Ok(Self {
            sample_rate,
            layers: Vec::new(),
        })
    }

    /// Adds a layer to the mix.
    ///
    /// Fails with `RateMismatch` if the layer's rate differs from the mixer's.
    pub fn add_layer(&mut self, layer: Layer) -> AudioResult<()> {
        layer.validate()?;
        if layer.buffer.sample_rate() != self.sample_rate {
            return Err(AudioError::RateMismatch {
                expected: self.sample_rate,
                found: layer.buffer.sample_rate(),
            });
        }
        self.layers.push(layer);
        Ok(())
    }

    /// Adds a buffer starting at sample 0.
    pub fn add(&mut self, buffer: SampleBuffer, weight: f64) -> AudioResult<()> {
        self.add_layer(Layer::new(buffer, weight))
    }

    /// Adds a buffer starting at `offset` samples.
    pub fn add_at(&mut self, buffer: SampleBuffer, weight: f64, offset: usize) -> AudioResult<()> {
        self.add_layer(Layer::new(buffer, weight).with_offset(offset))
    }

    /// Number of layers added so far.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Output length: the furthest sample any layer reaches.
    pub fn len(&self) -> usize {
        self.layers.iter().map(Layer::end).max().unwrap_or(0)
    }

    /// Returns true if the mix would be empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Sums all layers.
    ///
    /// # Errors
    /// * `InvalidParameter` - the weighted sum overflowed
    pub fn mix(&self) -> AudioResult<SampleBuffer> {
        let mut output = vec![0.0; self.len()];
        for layer in &self.layers {
            accumulate(&mut output, layer.buffer.samples(), layer.weight, layer.offset);
        }
        finish(output, self.sample_rate)
    }
}

/// Mixes weighted buffers into one.
///
/// # Errors
/// * `InvalidParameter` - no inputs, a negative / non-finite weight, or a
///   weighted sum that overflows
/// * `RateMismatch` - inputs at different sample rates
pub fn mix(inputs: &[(SampleBuffer, f64)]) -> AudioResult<SampleBuffer> {
    let (first, _) = inputs
        .first()
        .ok_or_else(|| AudioError::invalid_param("inputs", "at least one buffer is required"))?;
    let sample_rate = first.sample_rate();

    for (buffer, weight) in inputs {
        first.ensure_same_rate(buffer)?;
        check_non_negative("weight", *weight)?;
    }

    let len = inputs.iter().map(|(b, _)| b.len()).max().unwrap_or(0);
    let mut output = vec![0.0; len];
    for (buffer, weight) in inputs {
        accumulate(&mut output, buffer.samples(), *weight, 0);
    }

    finish(output, sample_rate)
}

/// Additive stack of sines at `fundamental * ratio`, weighted by each
/// partial's amplitude.
pub fn harmonic_stack(
    fundamental: f64,
    partials: &[Partial],
    duration: f64,
    sample_rate: u32,
) -> AudioResult<SampleBuffer> {
    check_frequency("fundamental", fundamental)?;
    if partials.is_empty() {
        return Err(AudioError::invalid_param(
            "partials",
            "at least one partial is required",
        ));
    }

    let mut mixer = Mixer::new(sample_rate)?;
    for partial in partials {
        partial.validate()?;
        let tone = Oscillator::new(fundamental)
            .with_ratio(partial.ratio)
            .render(duration, sample_rate)?;
        mixer.add(tone, partial.amplitude)?;
    }

    mixer.mix()
}

/// Joins buffers end to end.
pub fn concat(buffers: &[SampleBuffer]) -> AudioResult<SampleBuffer> {
    let first = buffers
        .first()
        .ok_or_else(|| AudioError::invalid_param("buffers", "at least one buffer is required"))?;

    let total = buffers.iter().map(SampleBuffer::len).sum();
    let mut out = SampleBuffer::from_validated(Vec::with_capacity(total), first.sample_rate());
    for buffer in buffers {
        out.append(buffer)?;
    }
    Ok(out)
}

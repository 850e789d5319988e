//! Core types for audio mixing.

use crate::buffer::SampleBuffer;
use crate::error::{check_non_negative, AudioResult};

/// A buffer placed in the mix with a weight and a start offset.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Audio samples.
    pub buffer: SampleBuffer,
    /// Amplitude weight (>= 0).
    pub weight: f64,
    /// Offset in samples before this layer starts.
    pub offset: usize,
}

impl Layer {
    /// Creates a layer starting at sample 0.
    pub fn new(buffer: SampleBuffer, weight: f64) -> Self {
        Self {
            buffer,
            weight,
            offset: 0,
        }
    }

    /// Sets the start offset in samples.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the start offset in seconds, rounded to the nearest sample.
    pub fn with_offset_seconds(mut self, seconds: f64) -> Self {
        let rate = self.buffer.sample_rate() as f64;
        self.offset = (seconds.max(0.0) * rate).round() as usize;
        self
    }

    /// Index one past the last sample this layer covers.
    pub fn end(&self) -> usize {
        self.offset + self.buffer.len()
    }

    pub(crate) fn validate(&self) -> AudioResult<()> {
        check_non_negative("weight", self.weight)
    }
}

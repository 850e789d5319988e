//! Encoded WAV output.

use std::fs;
use std::io::Write;
use std::path::Path;

use super::header::HEADER_SIZE;
use crate::error::AudioResult;

/// A complete WAV byte stream plus metadata about its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudio {
    /// Complete WAV file bytes (header and payload).
    pub bytes: Vec<u8>,
    /// BLAKE3 hex hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples in the payload.
    pub num_samples: usize,
}

impl EncodedAudio {
    /// The PCM payload without the header.
    pub fn pcm(&self) -> &[u8] {
        &self.bytes[HEADER_SIZE..]
    }

    /// Size of the whole file in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the payload holds no samples.
    pub fn is_empty(&self) -> bool {
        self.num_samples == 0
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the WAV bytes to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> AudioResult<()> {
        writer.write_all(&self.bytes)?;
        Ok(())
    }

    /// Writes the WAV bytes to a file, replacing any existing one.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> AudioResult<()> {
        fs::write(path, &self.bytes)?;
        Ok(())
    }

    /// Consumes the result, returning the WAV bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

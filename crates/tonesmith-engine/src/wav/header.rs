//! The fixed 44-byte header of a 16-bit mono PCM WAV file.

use crate::error::{AudioError, AudioResult};

/// Size of the canonical RIFF/WAVE header in bytes.
pub const HEADER_SIZE: usize = 44;

/// Bytes per sample frame (one 16-bit channel).
pub const BLOCK_ALIGN: u16 = 2;

/// Largest sample rate whose byte rate still fits the 32-bit header field.
pub const MAX_SAMPLE_RATE: u32 = u32::MAX / BLOCK_ALIGN as u32;

/// Largest payload whose RIFF size still fits in 32 bits.
pub(crate) const MAX_PAYLOAD: usize = (u32::MAX - 36) as usize;

const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const PCM_FORMAT: u16 = 1;
const FMT_CHUNK_SIZE: u32 = 16;

/// Header fields for one mono 16-bit file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub sample_rate: u32,
    /// Payload length in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Header for `data_size` bytes of PCM at `sample_rate`.
    ///
    /// # Errors
    /// * `InvalidSampleRate` - zero, or too high for the byte-rate field
    /// * `InvalidParameter` - payload longer than a RIFF file can declare
    pub fn new(sample_rate: u32, data_size: usize) -> AudioResult<Self> {
        if sample_rate == 0 || sample_rate > MAX_SAMPLE_RATE {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }
        let data_size = u32::try_from(data_size)
            .ok()
            .filter(|&size| size as usize <= MAX_PAYLOAD)
            .ok_or_else(|| {
                AudioError::invalid_param(
                    "pcm",
                    format!("{} bytes do not fit in a WAV file", data_size),
                )
            })?;
        Ok(Self {
            sample_rate,
            data_size,
        })
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> u32 {
        // Bounded by MAX_SAMPLE_RATE in `new`
        self.sample_rate.saturating_mul(BLOCK_ALIGN as u32)
    }

    /// RIFF chunk size: everything after the first eight bytes.
    pub fn riff_size(&self) -> u32 {
        self.data_size + 36
    }

    /// Serializes the header, little-endian throughout.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(b"RIFF");
        out[4..8].copy_from_slice(&self.riff_size().to_le_bytes());
        out[8..12].copy_from_slice(b"WAVE");
        out[12..16].copy_from_slice(b"fmt ");
        out[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        out[20..22].copy_from_slice(&PCM_FORMAT.to_le_bytes());
        out[22..24].copy_from_slice(&CHANNELS.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate().to_le_bytes());
        out[32..34].copy_from_slice(&BLOCK_ALIGN.to_le_bytes());
        out[34..36].copy_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
        out[36..40].copy_from_slice(b"data");
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        out
    }
}

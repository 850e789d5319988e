//! Core WAV writing and PCM conversion functions.

use std::io::Write;

use tracing::debug;

use super::header::{WavHeader, HEADER_SIZE};
use super::pcm::pcm_hash;
use super::result::EncodedAudio;
use crate::buffer::SampleBuffer;
use crate::error::{check_sample_rate, AudioError, AudioResult};

/// Writes a complete mono 16-bit WAV file to a writer.
///
/// # Errors
/// * `InvalidSampleRate` / `InvalidParameter` - see [`WavHeader::new`]
/// * `Io` - the writer failed
pub fn write_wav<W: Write>(writer: &mut W, sample_rate: u32, pcm_data: &[u8]) -> AudioResult<()> {
    let header = WavHeader::new(sample_rate, pcm_data.len())?;
    writer.write_all(&header.to_bytes())?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Quantizes one sample to 16 bits: `round(sample * 32767)` clamped to the
/// `i16` range. NaN maps to 0.
pub fn quantize(sample: f64) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    (sample * 32767.0)
        .round()
        .clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Converts f64 samples to little-endian 16-bit PCM bytes.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&quantize(sample).to_le_bytes());
    }
    pcm
}

fn read_u32(bytes: &[u8], offset: usize) -> u64 {
    bytes
        .get(offset..offset + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as u64)
        .unwrap_or(0)
}

/// Checks the declared RIFF and data sizes against the actual payload.
pub(crate) fn verify_lengths(wav_data: &[u8]) -> AudioResult<()> {
    let actual = wav_data.len().saturating_sub(HEADER_SIZE) as u64;

    let declared_data = read_u32(wav_data, 40);
    if declared_data != actual {
        return Err(AudioError::EncodingFailure {
            declared: declared_data,
            actual,
        });
    }

    let declared_riff = read_u32(wav_data, 4);
    if declared_riff != actual + 36 {
        return Err(AudioError::EncodingFailure {
            declared: declared_riff,
            actual: actual + 36,
        });
    }

    Ok(())
}

/// Encodes a buffer as a 16-bit mono WAV file.
///
/// # Errors
/// * `InvalidSampleRate` - `sample_rate` is 0 or above [`MAX_SAMPLE_RATE`](super::MAX_SAMPLE_RATE)
/// * `InvalidParameter` - too many samples for a 32-bit RIFF size
/// * `RateMismatch` - `sample_rate` differs from the buffer's rate
/// * `EncodingFailure` - the written header disagrees with the payload
pub fn encode(buffer: &SampleBuffer, sample_rate: u32) -> AudioResult<EncodedAudio> {
    check_sample_rate(sample_rate)?;
    if buffer.sample_rate() != sample_rate {
        return Err(AudioError::RateMismatch {
            expected: sample_rate,
            found: buffer.sample_rate(),
        });
    }

    let pcm = samples_to_pcm16(buffer.samples());
    let mut bytes = Vec::with_capacity(HEADER_SIZE + pcm.len());
    write_wav(&mut bytes, sample_rate, &pcm)?;
    verify_lengths(&bytes)?;

    let encoded = EncodedAudio {
        pcm_hash: pcm_hash(&pcm),
        bytes,
        sample_rate,
        num_samples: buffer.len(),
    };
    debug!(
        sample_rate,
        num_samples = encoded.num_samples,
        bytes = encoded.bytes.len(),
        "encoded wav"
    );
    Ok(encoded)
}

//! PCM data extraction and hashing utilities.

/// BLAKE3 hex digest of raw PCM bytes.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Locates the `data` chunk payload of a RIFF/WAVE file.
///
/// Walks the chunk list rather than assuming the 44-byte layout, so files
/// written by other tools (with `LIST` or `fact` chunks) compare by audio
/// content alone. Returns `None` for non-WAVE input or a truncated chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.get(0..4)? != b"RIFF" || wav_data.get(8..12)? != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while let Some(header) = wav_data.get(pos..pos + 8) {
        let (id, size) = header.split_at(4);
        let size = u32::from_le_bytes(size.try_into().ok()?) as usize;
        let body = pos + 8;

        if id == b"data" {
            return wav_data.get(body..body.checked_add(size)?);
        }

        // Odd-sized chunks carry a pad byte
        pos = body + size + (size & 1);
    }

    None
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(pcm_hash)
}

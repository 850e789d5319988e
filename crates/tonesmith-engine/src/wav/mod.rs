//! Deterministic WAV encoder.
//!
//! Writes 16-bit mono PCM WAV files with the canonical 44-byte header and no
//! timestamps or optional chunks, so identical buffers always produce
//! identical bytes. The BLAKE3 hash of the PCM payload is carried alongside
//! the file for cheap comparisons.

mod header;
mod pcm;
mod result;
mod writer;


pub use header::{WavHeader, BLOCK_ALIGN, HEADER_SIZE, MAX_SAMPLE_RATE};
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash};
pub use result::EncodedAudio;
pub use writer::{encode, quantize, samples_to_pcm16, write_wav};

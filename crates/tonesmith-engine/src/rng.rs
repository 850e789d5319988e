//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Every random draw in the engine (noise voices) flows through this module.
//! Seeds are derived per segment and voice so that adding a voice to one
//! segment does not change the noise heard in another.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

fn hash_to_seed(input: &[u8]) -> u32 {
    let hash = blake3::hash(input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Derives the seed for one voice of one segment.
///
/// Hashes `base_seed`, `segment_index` and `voice_index` (little-endian) with
/// BLAKE3 and truncates to the first four bytes.
pub fn derive_voice_seed(base_seed: u32, segment_index: u32, voice_index: u32) -> u32 {
    let mut input = Vec::with_capacity(12);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&segment_index.to_le_bytes());
    input.extend_from_slice(&voice_index.to_le_bytes());
    hash_to_seed(&input)
}

/// Derives a seed for a named component from a base seed.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());
    hash_to_seed(&input)
}

/// Creates the RNG for one voice of one segment.
pub fn create_voice_rng(base_seed: u32, segment_index: u32, voice_index: u32) -> Pcg32 {
    create_rng(derive_voice_seed(base_seed, segment_index, voice_index))
}

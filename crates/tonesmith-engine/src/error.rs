//! Error types for the synthesis engine.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis or encoding.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Buffers or encoder disagree on the sample rate.
    #[error("sample rate mismatch: expected {expected} Hz, found {found} Hz")]
    RateMismatch {
        /// Rate of the first buffer (or the requested rate).
        expected: u32,
        /// Offending rate.
        found: u32,
    },

    /// Header and payload lengths disagree.
    #[error("encoding failure: header declares {declared} data bytes, payload has {actual}")]
    EncodingFailure {
        /// Data length written into the header.
        declared: u64,
        /// Actual payload length.
        actual: u64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable error code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidParameter { .. } => "AUDIO_001",
            AudioError::InvalidSampleRate { .. } => "AUDIO_002",
            AudioError::RateMismatch { .. } => "AUDIO_003",
            AudioError::EncodingFailure { .. } => "AUDIO_004",
            AudioError::Io(_) => "AUDIO_005",
        }
    }

    /// Error category, shared by every variant.
    pub fn category(&self) -> &'static str {
        "audio"
    }
}

/// Rejects a zero sample rate, or one too high to describe in a WAV header.
pub(crate) fn check_sample_rate(rate: u32) -> AudioResult<()> {
    if rate == 0 || rate > crate::wav::MAX_SAMPLE_RATE {
        return Err(AudioError::InvalidSampleRate { rate });
    }
    Ok(())
}

/// Requires a finite, strictly positive frequency.
pub(crate) fn check_frequency(name: &str, freq: f64) -> AudioResult<()> {
    if !freq.is_finite() || freq <= 0.0 {
        return Err(AudioError::invalid_param(
            name,
            format!("frequency must be positive, got {} Hz", freq),
        ));
    }
    Ok(())
}

/// Requires a finite, non-negative value.
pub(crate) fn check_non_negative(name: &str, value: f64) -> AudioResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AudioError::invalid_param(
            name,
            format!("must be finite and >= 0, got {}", value),
        ));
    }
    Ok(())
}

/// Requires a duration that is not NaN or infinite. Non-positive durations are
/// allowed and produce empty buffers.
pub(crate) fn check_duration(duration: f64) -> AudioResult<()> {
    if !duration.is_finite() {
        return Err(AudioError::invalid_param(
            "duration",
            format!("must be finite, got {}", duration),
        ));
    }
    Ok(())
}

//! Error types for preset lookup.

use thiserror::Error;

/// Errors raised by the preset catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    /// No preset has this name.
    #[error("unknown preset '{0}'")]
    Unknown(String),
}

impl PresetError {
    /// Stable error code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            PresetError::Unknown(_) => "PRESET_001",
        }
    }
}

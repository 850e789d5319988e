//! Tonesmith CLI library.
//!
//! Command implementations for listing, generating and rendering sounds,
//! shared by the `tonesmith` binary and its integration tests.

pub mod commands;
pub mod logging;

/// Directory written to when `--out-dir` is not given.
pub const DEFAULT_OUT_DIR: &str = "generated_sounds";

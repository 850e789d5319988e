//! Generate command implementation
//!
//! Synthesizes a single catalog preset into `<out_dir>/<name>.wav`.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tonesmith_engine::Engine;
use tonesmith_presets::Preset;

/// A preset written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSound {
    pub name: String,
    pub path: PathBuf,
    /// Size of the WAV file including the header.
    pub bytes: usize,
    pub num_samples: usize,
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}

/// Synthesizes `preset` and writes it into `out_dir`, which must exist.
pub fn generate_preset(engine: &Engine, preset: &Preset, out_dir: &Path) -> Result<GeneratedSound> {
    let name = preset.name();
    let audio = engine
        .synthesize(&preset.spec())
        .with_context(|| format!("Failed to synthesize '{}'", name))?;

    let path = out_dir.join(format!("{}.wav", name));
    audio
        .write_to_file(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(preset = %name, path = %path.display(), bytes = audio.len(), "wrote preset");

    Ok(GeneratedSound {
        name,
        path,
        bytes: audio.len(),
        num_samples: audio.num_samples,
        duration_seconds: audio.duration_seconds(),
        pcm_hash: audio.pcm_hash,
    })
}

/// Run the generate command
///
/// # Arguments
/// * `name` - Catalog name of the preset
/// * `out_dir` - Output directory, created if missing
/// * `sample_rate` - Output sample rate in Hz
pub fn run(name: &str, out_dir: &str, sample_rate: u32) -> Result<ExitCode> {
    let preset: Preset = name.parse()?;
    let engine = Engine::new(sample_rate)?;

    let out_path = Path::new(out_dir);
    fs::create_dir_all(out_path)
        .with_context(|| format!("Failed to create output directory: {}", out_dir))?;

    let sound = generate_preset(&engine, &preset, out_path)?;

    println!(
        "{} {} ({} bytes, {:.2}s)",
        "Generated".green().bold(),
        sound.path.display(),
        sound.bytes,
        sound.duration_seconds
    );

    Ok(ExitCode::SUCCESS)
}

//! Render command implementation
//!
//! Renders a JSON sound description file into a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tonesmith_engine::{Engine, SoundSpec};

/// Reads and parses a sound description.
pub fn load_spec(path: &Path) -> Result<SoundSpec> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file: {}", path.display()))?;
    SoundSpec::from_json(&json)
        .with_context(|| format!("Failed to parse spec file: {}", path.display()))
}

/// Output path used when `--output` is omitted: `<spec name>.wav`.
pub fn default_output(spec: &SoundSpec) -> PathBuf {
    PathBuf::from(format!("{}.wav", spec.name))
}

/// Run the render command
///
/// # Arguments
/// * `spec_path` - Path to the JSON spec file
/// * `output` - Output WAV path; defaults to `<spec name>.wav`
/// * `sample_rate` - Output sample rate in Hz
pub fn run(spec_path: &str, output: Option<&str>, sample_rate: u32) -> Result<ExitCode> {
    let spec = load_spec(Path::new(spec_path))?;
    let engine = Engine::new(sample_rate)?;

    let audio = engine
        .synthesize(&spec)
        .with_context(|| format!("Failed to synthesize '{}'", spec.name))?;

    let out_path = output.map(PathBuf::from).unwrap_or_else(|| default_output(&spec));
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    audio
        .write_to_file(&out_path)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    println!(
        "{} {} ({} samples at {} Hz, {:.2}s)",
        "Rendered".green().bold(),
        out_path.display(),
        audio.num_samples,
        audio.sample_rate,
        audio.duration_seconds()
    );
    println!("{} {}", "PCM hash:".dimmed(), audio.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

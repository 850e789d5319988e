//! Generate-all command implementation
//!
//! Writes every catalog preset into one directory and reports a summary.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tonesmith_engine::Engine;
use tonesmith_presets::Preset;

use super::generate::generate_preset;

/// Result of generating a single preset
#[derive(Debug, Clone, Serialize)]
pub struct SoundResult {
    pub name: String,
    pub family: String,
    /// Whether generation succeeded
    pub success: bool,
    /// Error message if failed
    pub error: Option<String>,
    pub path: Option<PathBuf>,
    pub bytes: usize,
    pub pcm_hash: Option<String>,
}

/// Summary report for a whole catalog run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub out_dir: String,
    pub sample_rate: u32,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// Sum of all written file sizes
    pub total_bytes: usize,
    pub runtime_seconds: f64,
    pub sounds: Vec<SoundResult>,
}

impl GenerationSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Generates the full catalog without printing anything.
///
/// A preset that fails is recorded in the summary and the run continues.
pub fn generate_all(out_dir: &Path, sample_rate: u32) -> Result<GenerationSummary> {
    let start = Instant::now();
    let engine = Engine::new(sample_rate)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let sounds: Vec<SoundResult> = Preset::all()
        .iter()
        .map(|preset| match generate_preset(&engine, preset, out_dir) {
            Ok(sound) => SoundResult {
                name: sound.name,
                family: preset.family().to_string(),
                success: true,
                error: None,
                path: Some(sound.path),
                bytes: sound.bytes,
                pcm_hash: Some(sound.pcm_hash),
            },
            Err(e) => {
                tracing::warn!(preset = %preset, error = %e, "preset failed");
                SoundResult {
                    name: preset.name(),
                    family: preset.family().to_string(),
                    success: false,
                    error: Some(format!("{:#}", e)),
                    path: None,
                    bytes: 0,
                    pcm_hash: None,
                }
            }
        })
        .collect();

    let successful = sounds.iter().filter(|s| s.success).count();
    Ok(GenerationSummary {
        out_dir: out_dir.display().to_string(),
        sample_rate,
        total: sounds.len(),
        successful,
        failed: sounds.len() - successful,
        total_bytes: sounds.iter().map(|s| s.bytes).sum(),
        runtime_seconds: start.elapsed().as_secs_f64(),
        sounds,
    })
}

/// Run the generate-all command
///
/// # Arguments
/// * `out_dir` - Output directory, created if missing
/// * `sample_rate` - Output sample rate in Hz
/// * `json` - Print the summary as JSON instead of colored text
///
/// # Returns
/// Exit code: 0 success, 1 if any preset failed
pub fn run(out_dir: &str, sample_rate: u32, json: bool) -> Result<ExitCode> {
    let summary = generate_all(Path::new(out_dir), sample_rate)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_summary(summary: &GenerationSummary) {
    for sound in &summary.sounds {
        if sound.success {
            println!("  {} {}.wav", "OK".green(), sound.name);
        } else {
            println!(
                "  {} {} - {}",
                "FAILED".red(),
                sound.name,
                sound.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    println!();
    println!("{} {}", "Output directory:".blue().bold(), summary.out_dir);
    println!(
        "{} {}/{} presets ({} bytes) in {:.2}s",
        "Generated:".blue().bold(),
        summary.successful,
        summary.total,
        summary.total_bytes,
        summary.runtime_seconds
    );
    if summary.failed > 0 {
        println!("{} {}", "Failed:".red().bold(), summary.failed);
    }
}

//! Tonesmith CLI - Command-line interface for procedural sound effects
//!
//! This binary lists the preset catalog, writes presets to WAV files and
//! renders custom JSON sound descriptions.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use tonesmith_cli::{commands, logging, DEFAULT_OUT_DIR};
use tonesmith_engine::DEFAULT_SAMPLE_RATE;

/// Tonesmith - Procedural Sound Effect Generator
#[derive(Parser)]
#[command(name = "tonesmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog presets grouped by family
    List {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a single preset as a WAV file
    Generate {
        /// Preset name (see `tonesmith list`)
        name: String,

        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: String,

        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,
    },

    /// Generate every preset in the catalog
    GenerateAll {
        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: String,

        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Output the summary as JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a JSON sound description to a WAV file
    Render {
        /// Path to the spec file
        #[arg(short, long)]
        spec: String,

        /// Output WAV path (default: <spec name>.wav)
        #[arg(short, long)]
        output: Option<String>,

        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::List { json } => commands::list::run(json),
        Commands::Generate {
            name,
            out_dir,
            sample_rate,
        } => commands::generate::run(&name, &out_dir, sample_rate),
        Commands::GenerateAll {
            out_dir,
            sample_rate,
            json,
        } => commands::generate_all::run(&out_dir, sample_rate, json),
        Commands::Render {
            spec,
            output,
            sample_rate,
        } => commands::render::run(&spec, output.as_deref(), sample_rate),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

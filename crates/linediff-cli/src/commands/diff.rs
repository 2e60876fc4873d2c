//! Diff command
//!
//! Usage: linediff diff <OLD> <NEW> [--suppress-common] [--config <FILE>] [--format <FORMAT>] [--output <FILE>]

use clap::{Args, ValueEnum};
use linediff_core::diff::{edit_script_files, render_script, render_stat_summary};
use linediff_core::RenderConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Original file
    pub old: PathBuf,

    /// Changed file
    pub new: PathBuf,

    /// Print only changed lines, prefixed with their line number
    #[arg(short, long)]
    pub suppress_common: bool,

    /// TOML render configuration (`suppress_common = true`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ` `, `-` and `+` prefixed lines
    Text,
    /// Edit script as JSON
    Json,
    /// One-line change counts
    Stat,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args)?;
    let script = edit_script_files(&args.old, &args.new)?;

    let rendered = match args.format {
        OutputFormat::Text => render_script(&script, &config),
        OutputFormat::Json => {
            let mut json = script.to_json()?;
            json.push('\n');
            json
        }
        OutputFormat::Stat => render_stat_summary(&script.stats()),
    };

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, rendered)?;
        println!("✓ Wrote diff to {}", output_path.display());
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

/// Config file first, then flags on top
fn load_config(args: &DiffArgs) -> linediff_core::Result<RenderConfig> {
    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if args.suppress_common {
        Ok(config.with_suppress_common(true))
    } else {
        Ok(config)
    }
}

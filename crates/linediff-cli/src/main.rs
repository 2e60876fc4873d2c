//! linediff CLI
//!
//! Command-line interface for linediff

use clap::{Parser, Subcommand, ValueEnum};
use linediff_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "linediff")]
#[command(about = "linediff - Minimum line-level text diff", long_about = None)]
struct Cli {
    /// Emit structured logs to stderr
    #[arg(long, global = true, value_enum)]
    log: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    /// Human-readable, debug level
    Dev,
    /// JSON, info level
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the line-level differences between two files
    Diff(commands::diff::DiffArgs),
    /// Print the minimum number of changed lines between two files
    Distance(commands::distance::DistanceArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        logging_facility::init(profile.into());
    }

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Distance(args) => commands::distance::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Distance command
//!
//! Usage: linediff distance <OLD> <NEW>

use clap::Args;
use linediff_core::diff::edit_script_files;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DistanceArgs {
    /// Original file
    pub old: PathBuf,

    /// Changed file
    pub new: PathBuf,
}

/// Execute distance command
pub fn execute(args: DistanceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let script = edit_script_files(&args.old, &args.new)?;
    println!("{}", script.distance);
    Ok(())
}

//! File front-end for the diff engine.
//!
//! Reads two UTF-8 files and diffs their contents. Logging follows the
//! canonical pattern:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success, with line counts and distance
//! - `log_op_error!` on failure

use crate::config::RenderConfig;
use crate::diff::engine::compute_edit_script;
use crate::diff::render::render_script;
use crate::diff::script::EditScript;
use crate::errors::{LineDiffError, Result};
use crate::{log_op_end, log_op_error, log_op_start};
use std::path::Path;

/// Diff the files at `old_path` and `new_path`, rendering per `config`.
///
/// # Errors
///
/// - `FileNotFound` — either path does not exist
/// - `NotUtf8` — either file is not valid UTF-8
/// - `Io` — any other read failure
pub fn format_files(
    old_path: impl AsRef<Path>,
    new_path: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<String> {
    let script = edit_script_files(old_path, new_path)?;
    Ok(render_script(&script, config))
}

/// Compute the edit script between the files at `old_path` and `new_path`.
///
/// # Errors
///
/// Same as [`format_files`].
pub fn edit_script_files(
    old_path: impl AsRef<Path>,
    new_path: impl AsRef<Path>,
) -> Result<EditScript> {
    let (old_path, new_path) = (old_path.as_ref(), new_path.as_ref());

    log_op_start!(
        "diff_files",
        old_path = %old_path.display(),
        new_path = %new_path.display()
    );
    let start = std::time::Instant::now();

    let result = edit_script_files_impl(old_path, new_path).map_err(|e| {
        log_op_error!(
            "diff_files",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let stats = result.stats();
    log_op_end!(
        "diff_files",
        duration_ms = start.elapsed().as_millis() as u64,
        old_lines = (stats.kept + stats.deleted) as u64,
        new_lines = (stats.kept + stats.inserted) as u64,
        distance = result.distance as u64
    );

    Ok(result)
}

fn edit_script_files_impl(old_path: &Path, new_path: &Path) -> Result<EditScript> {
    let old_text = read_text(old_path)?;
    let new_text = read_text(new_path)?;
    Ok(compute_edit_script(&old_text, &new_text))
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| LineDiffError::from_io(path.display().to_string(), &e))
}

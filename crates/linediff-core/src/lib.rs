//! linediff core - minimum line-level text diff
//!
//! This crate provides:
//! - Line splitting with a visible missing-final-newline marker
//! - A suffix-indexed Wagner–Fischer edit table (insert/delete only)
//! - Deterministic traceback into an edit script
//! - Text, numbered and summary rendering
//! - File front-end, render configuration, error and logging facilities

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;

// Used by the exported `log_op_*` macros
#[doc(hidden)]
pub use linediff_core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use config::RenderConfig;
pub use diff::{compute_edit_script, edit_distance, format, format_with, EditOp, EditScript};
pub use errors::{ExError, ExErrorKind, LineDiffError, Result};

//! Line-level text diff.
//!
//! Computes the minimum number of whole-line deletions and insertions that
//! turn one text into another and renders the result like `diff(1)` without
//! hunks.
//!
//! ## Entry point
//!
//! ```
//! use linediff_core::diff::{format, format_with};
//! use linediff_core::RenderConfig;
//!
//! assert_eq!(format("a\nb\nc\n", "a\nc\n"), " a\n-b\n c\n");
//! assert_eq!(
//!     format_with("a\nb\nc\n", "a\nc\n", &RenderConfig::suppressing_common()),
//!     "2-b\n"
//! );
//! ```
//!
//! ## Guarantees
//!
//! - **Minimality**: the number of `-` and `+` lines equals the edit distance.
//! - **Determinism**: among equal-cost scripts, keep wins over delete, and
//!   delete wins over insert.
//! - **Totality**: every pair of strings yields a result; a missing final
//!   newline shows up as [`MISSING_NEWLINE_MARKER`] on the last line.

pub mod engine;
pub mod files;
pub mod lines;
pub mod render;
pub mod script;
pub mod summary;
pub mod table;

pub use engine::{compute_edit_script, edit_distance, format, format_with};
pub use files::{edit_script_files, format_files};
pub use lines::{split_lines, LineSequence, MISSING_NEWLINE_MARKER};
pub use render::render_script;
pub use script::{traceback, EditOp, EditScript};
pub use summary::{render_stat_summary, DiffStats};
pub use table::EditTable;

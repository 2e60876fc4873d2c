//! Change counts for an edit script.

use crate::diff::script::EditOp;
use serde::{Deserialize, Serialize};

/// Per-kind line counts of an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub kept: usize,
    pub deleted: usize,
    pub inserted: usize,
}

impl DiffStats {
    pub fn from_ops(ops: &[EditOp]) -> Self {
        let mut stats = Self::default();
        for op in ops {
            match op {
                EditOp::Keep { .. } => stats.kept += 1,
                EditOp::Delete { .. } => stats.deleted += 1,
                EditOp::Insert { .. } => stats.inserted += 1,
            }
        }
        stats
    }

    /// Deleted plus inserted lines. Equals the edit distance.
    pub fn changed(&self) -> usize {
        self.deleted + self.inserted
    }
}

/// Render a one-line summary, e.g. `4 unchanged, 1 deletion (-), 2 insertions (+)`.
pub fn render_stat_summary(stats: &DiffStats) -> String {
    format!(
        "{} unchanged, {} {} (-), {} {} (+)\n",
        stats.kept,
        stats.deleted,
        plural(stats.deleted, "deletion", "deletions"),
        stats.inserted,
        plural(stats.inserted, "insertion", "insertions"),
    )
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

//! Edit script reconstruction.
//!
//! [`traceback`] walks the [`EditTable`] from `(m, n)` to `(0, 0)` and emits
//! one [`EditOp`] per output line, in document order. When several minimum
//! cost scripts exist the choice is fixed: keep, then delete, then insert.

use crate::diff::lines::LineSequence;
use crate::diff::summary::DiffStats;
use crate::diff::table::EditTable;
use crate::errors::{LineDiffError, Result};
use serde::{Deserialize, Serialize};

/// One line of a line-level diff.
///
/// Indices are 0-based forward positions within the old (`old_index`) or
/// new (`new_index`) line sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// Line present in both inputs
    Keep {
        line: String,
        old_index: usize,
        new_index: usize,
    },
    /// Line present only in the old input
    Delete { line: String, old_index: usize },
    /// Line present only in the new input
    Insert { line: String, new_index: usize },
}

impl EditOp {
    /// Line content, without terminator.
    pub fn line(&self) -> &str {
        match self {
            EditOp::Keep { line, .. } | EditOp::Delete { line, .. } | EditOp::Insert { line, .. } => {
                line
            }
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, EditOp::Keep { .. })
    }
}

/// A minimum-cost edit script between two line sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    /// Minimum number of deleted plus inserted lines
    pub distance: usize,
    /// Operations in document order
    pub ops: Vec<EditOp>,
}

impl EditScript {
    /// True when the inputs have the same line sequence.
    pub fn is_identical(&self) -> bool {
        !self.ops.iter().any(EditOp::is_change)
    }

    pub fn stats(&self) -> DiffStats {
        DiffStats::from_ops(&self.ops)
    }

    /// Pretty-printed JSON of the script.
    ///
    /// # Errors
    ///
    /// - `Serialization` — serde_json rejected the value
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LineDiffError::Serialization {
            reason: e.to_string(),
        })
    }
}

/// Reconstruct the edit script encoded in `table`.
///
/// `table` must have been built from `old` and `new`.
pub fn traceback(old: &LineSequence, new: &LineSequence, table: &EditTable) -> EditScript {
    let old_lines = old.as_slice();
    let new_lines = new.as_slice();
    let (m, n) = (old_lines.len(), new_lines.len());
    debug_assert_eq!((table.rows(), table.cols()), (m + 1, n + 1));

    let mut ops = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        let cost = table.get(i, j);
        let k1 = m - i;
        let k2 = n - j;

        if i > 0 && j > 0 && cost == table.get(i - 1, j - 1) && old_lines[k1] == new_lines[k2] {
            ops.push(EditOp::Keep {
                line: old_lines[k1].clone(),
                old_index: k1,
                new_index: k2,
            });
            i -= 1;
            j -= 1;
        } else if i > 0 && cost == table.get(i - 1, j) + 1 {
            ops.push(EditOp::Delete {
                line: old_lines[k1].clone(),
                old_index: k1,
            });
            i -= 1;
        } else {
            ops.push(EditOp::Insert {
                line: new_lines[k2].clone(),
                new_index: k2,
            });
            j -= 1;
        }
    }

    EditScript {
        distance: table.distance(),
        ops,
    }
}

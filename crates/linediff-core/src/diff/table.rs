//! Suffix-indexed edit distance table.
//!
//! `get(i, j)` is the minimum number of line insertions and deletions turning
//! the last `i` lines of the old sequence into the last `j` lines of the new
//! one. Indexing by suffix length lets the traceback walk from `(m, n)` down
//! to `(0, 0)` while visiting lines in document order.
//!
//! Wagner–Fischer with unit insert/delete cost and no substitution:
//!
//! ```text
//! T[0][j] = j
//! T[i][0] = i
//! T[i][j] = min(T[i][j-1] + 1, T[i-1][j] + 1, T[i-1][j-1] if old[m-i] == new[n-j])
//! ```

use crate::diff::lines::LineSequence;

/// Full `(m + 1) x (n + 1)` table, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl EditTable {
    /// Build the table for `old` (m lines) against `new` (n lines).
    ///
    /// O(m·n) time and space. The whole table is kept because the traceback
    /// needs it.
    pub fn build(old: &LineSequence, new: &LineSequence) -> Self {
        let (m, n) = (old.len(), new.len());
        let old_lines = old.as_slice();
        let new_lines = new.as_slice();
        let rows = m + 1;
        let cols = n + 1;
        let mut cells = vec![0usize; rows * cols];

        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j;
        }

        for i in 1..rows {
            cells[i * cols] = i;
            for j in 1..cols {
                let mut cost = (cells[i * cols + j - 1] + 1).min(cells[(i - 1) * cols + j] + 1);
                if old_lines[m - i] == new_lines[n - j] {
                    cost = cost.min(cells[(i - 1) * cols + j - 1]);
                }
                cells[i * cols + j] = cost;
            }
        }

        Self { rows, cols, cells }
    }

    /// Cell for suffix lengths `i` (old) and `j` (new).
    ///
    /// # Panics
    ///
    /// Panics if `i > m` or `j > n`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "edit table index out of range");
        self.cells[i * self.cols + j]
    }

    /// `m + 1`
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `n + 1`
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Edit distance between the full sequences.
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

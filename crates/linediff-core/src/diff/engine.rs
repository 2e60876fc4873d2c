//! Line diff computation engine.
//!
//! [`format_with`] splits both texts, builds the [`EditTable`], walks it back
//! into an [`EditScript`] and renders the result. Every call starts from
//! scratch; nothing is cached between calls.

use crate::config::RenderConfig;
use crate::diff::lines::split_lines;
use crate::diff::render::render_script;
use crate::diff::script::{traceback, EditScript};
use crate::diff::table::EditTable;

/// Diff `text1` against `text2` with the default [`RenderConfig`].
///
/// Lines only in `text1` start with `-`, lines only in `text2` with `+`,
/// shared lines with a space.
pub fn format(text1: &str, text2: &str) -> String {
    format_with(text1, text2, &RenderConfig::default())
}

/// Diff `text1` against `text2`, rendering per `config`.
///
/// Total over all inputs, including empty strings.
pub fn format_with(text1: &str, text2: &str, config: &RenderConfig) -> String {
    let script = compute_edit_script(text1, text2);
    render_script(&script, config)
}

/// Compute the canonical minimum edit script from `text1` to `text2`.
pub fn compute_edit_script(text1: &str, text2: &str) -> EditScript {
    let old = split_lines(text1);
    let new = split_lines(text2);
    let table = EditTable::build(&old, &new);
    let script = traceback(&old, &new, &table);

    tracing::trace!(
        component = module_path!(),
        old_lines = old.len(),
        new_lines = new.len(),
        distance = script.distance,
        "computed edit script"
    );

    script
}

/// Minimum number of line deletions plus insertions turning `text1` into `text2`.
pub fn edit_distance(text1: &str, text2: &str) -> usize {
    let old = split_lines(text1);
    let new = split_lines(text2);
    EditTable::build(&old, &new).distance()
}

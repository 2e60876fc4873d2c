//! Text renderer for edit scripts.

use crate::config::RenderConfig;
use crate::diff::script::{EditOp, EditScript};

/// Render `script` one output line per operation.
///
/// Prefixes: `" "` unchanged, `"-"` old only, `"+"` new only. With
/// `suppress_common`, unchanged lines are dropped and each changed line is
/// preceded by its 1-based position in its own input (`3-c`, `4+d`).
pub fn render_script(script: &EditScript, config: &RenderConfig) -> String {
    let mut out = String::new();
    for op in &script.ops {
        match op {
            EditOp::Keep { line, .. } => {
                if !config.suppress_common {
                    out.push(' ');
                    out.push_str(line);
                    out.push('\n');
                }
            }
            EditOp::Delete { line, old_index } => {
                push_changed(&mut out, config, *old_index, '-', line);
            }
            EditOp::Insert { line, new_index } => {
                push_changed(&mut out, config, *new_index, '+', line);
            }
        }
    }
    out
}

fn push_changed(out: &mut String, config: &RenderConfig, index: usize, marker: char, line: &str) {
    if config.suppress_common {
        out.push_str(&(index + 1).to_string());
    }
    out.push(marker);
    out.push_str(line);
    out.push('\n');
}

//! Diff API Demonstration
//!
//! This example walks through the linediff public API.
//!
//! Key concepts illustrated:
//! 1. Full rendering vs. numbered, changes-only rendering
//! 2. The structured edit script behind the text
//! 3. The missing-final-newline marker

use linediff_core::diff::{compute_edit_script, format, format_with, render_stat_summary};
use linediff_core::{EditOp, RenderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== linediff API Demo ===\n");

    let old = "fn main() {\n    let x = 1;\n    println!(\"{}\", x);\n}\n";
    let new = "fn main() {\n    let x = 2;\n    let y = 3;\n    println!(\"{}\", x + y);\n}\n";

    // ===== Part 1: Rendering =====
    println!("## Part 1: Full diff\n");
    print!("{}", format(old, new));

    println!("\n## Part 1b: Changed lines only\n");
    print!(
        "{}",
        format_with(old, new, &RenderConfig::suppressing_common())
    );

    // ===== Part 2: Edit script =====
    println!("\n## Part 2: Edit script\n");
    let script = compute_edit_script(old, new);
    for op in &script.ops {
        match op {
            EditOp::Keep {
                old_index,
                new_index,
                ..
            } => println!("keep   old#{} new#{}", old_index + 1, new_index + 1),
            EditOp::Delete { old_index, line } => println!("delete old#{}  {:?}", old_index + 1, line),
            EditOp::Insert { new_index, line } => println!("insert new#{}  {:?}", new_index + 1, line),
        }
    }
    print!("{}", render_stat_summary(&script.stats()));
    println!("distance = {}", script.distance);

    // ===== Part 3: Missing final newline =====
    println!("\n## Part 3: Missing final newline\n");
    print!("{}", format("last line", "last line\n"));

    println!("\n## Part 4: JSON\n");
    println!("{}", compute_edit_script("a\nb\n", "b\nc\n").to_json()?);

    Ok(())
}

//! Diff of a pending change to the config file

use std::fmt::Write;

use similar::{ChangeTag, TextDiff};

/// Generate a plain unified-style diff between two renderings
#[must_use]
pub fn generate(before: &str, after: &str, label: &str) -> String {
    const DIFF_CONTEXT_LINES: usize = 3;

    let mut output = String::new();
    if before == after {
        return output;
    }

    let diff = TextDiff::from_lines(before, after);

    let _ = writeln!(output, "--- {label}");
    let _ = writeln!(output, "+++ {label} (pending)");

    for (idx, group) in diff.grouped_ops(DIFF_CONTEXT_LINES).iter().enumerate() {
        if idx > 0 {
            output.push_str("...\n");
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                let newline = if change.value().ends_with('\n') { "" } else { "\n" };
                let _ = write!(output, "{sign}{}{newline}", change.value());
            }
        }
    }

    output
}

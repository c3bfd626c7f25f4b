//! Strips formatting artifacts that text generators wrap around JSON.

/// Opening marker of a fenced code block.
pub const FENCE: &str = "```";

/// Prepare raw generator output for JSON parsing.
///
/// When the trimmed text opens with [`FENCE`], the first and the last line are
/// dropped. This is a line heuristic, not a fence parser: it does not look at
/// what the last line contains. Text that does not open with a fence is
/// returned as given.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with(FENCE) {
        return raw.to_string();
    }
    let lines: Vec<&str> = trimmed.split('\n').collect();
    if lines.len() < 2 {
        return String::new();
    }
    lines[1..lines.len() - 1].join("\n")
}

//! List-boundary normalization for raw entry text.
//!
//! Markdown renderers only recognize a list block when it is preceded by a
//! blank line. Journal exports routinely embed lists directly under a
//! paragraph line, so without this pass those lines render as ordinary
//! prose. The normalizer inserts the missing blank line ahead of any list
//! item that follows a non-blank, non-list line, and guarantees a single
//! trailing newline.
//!
//! The pass is total (any string in, including empty) and idempotent:
//! normalizing already-normalized text returns it unchanged.

use regex::Regex;
use std::sync::OnceLock;

/// Matches the start of a list item: optional indentation, then an
/// unordered marker (`-`, `+`, `*`) or an ordered marker (digits followed
/// by `.` or `)`), then at least one whitespace character.
fn list_item_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s*(?:[-+*]|[0-9]+[.)])\s+").unwrap())
}

/// Rewrite `text` so every list block is delimited by a blank line.
///
/// A blank line is inserted before a list item only when the previous line
/// is non-blank and not itself a list item — consecutive items stay tight.
/// The initial state counts as blank, so a document that starts with a
/// list needs no insertion. The result always ends with exactly one
/// trailing newline.
pub fn normalize_list_boundaries(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut prev_blank = true;
    let mut prev_list = false;

    for line in text.lines() {
        let is_list = list_item_regex().is_match(line);
        if is_list && !prev_blank && !prev_list {
            out.push("");
        }
        out.push(line);
        prev_blank = line.trim().is_empty();
        prev_list = is_list;
    }

    let mut result = out.join("\n");
    if !result.ends_with('\n') {
        result.push('\n');
    }
    result
}

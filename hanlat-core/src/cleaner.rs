//! Line filters applied after splitting

use crate::charset::CharSet;

/// Trim every line and drop the ones left empty
pub fn drop_blank_lines(buffer: &str) -> String {
    let lines: Vec<&str> = buffer
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    lines.join("\n")
}

/// Drop lines whose trimmed content consists solely of members of `set`
///
/// Blank lines are not punctuation-only and pass through untouched.
pub fn drop_punctuation_only_lines<S: CharSet + ?Sized>(buffer: &str, set: &S) -> String {
    let lines: Vec<&str> = buffer
        .split('\n')
        .filter(|line| !is_punctuation_only(line, set))
        .collect();
    lines.join("\n")
}

/// Whether `line` is one or more members of `set` once trimmed
pub fn is_punctuation_only<S: CharSet + ?Sized>(line: &str, set: &S) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && set.covers(trimmed)
}

/// Run the punctuation-only filter (when given) followed by the blank-line filter
pub fn clean<S: CharSet + ?Sized>(buffer: &str, filter: Option<&S>) -> String {
    match filter {
        Some(set) => drop_blank_lines(&drop_punctuation_only_lines(buffer, set)),
        None => drop_blank_lines(buffer),
    }
}

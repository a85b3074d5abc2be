//! Punctuation-driven line splitting

use crate::charset::CharSet;

/// Insert `"\n"` after every character of `buffer` that belongs to `set`
///
/// A terminator is inserted even when one already follows, so runs such as
/// `——` or `。\n` produce blank lines for the cleaner to drop.
pub fn split_after<S: CharSet + ?Sized>(buffer: &str, set: &S) -> String {
    let mut out = String::with_capacity(buffer.len() + buffer.len() / 8);
    for ch in buffer.chars() {
        out.push(ch);
        if set.contains(ch) {
            out.push('\n');
        }
    }
    out
}

/// Number of lines in `buffer`, counting a trailing terminator as opening an empty line
pub fn line_count(buffer: &str) -> usize {
    buffer.split('\n').count()
}

//! Extraction of maximal same-class runs from a line

use crate::charset::CharSet;

/// Lazy iterator over the maximal runs of a character set within a line
///
/// Runs are yielded left to right as borrowed slices and are never empty.
pub struct Segments<'a, S: ?Sized> {
    line: &'a str,
    pos: usize,
    set: &'a S,
}

impl<'a, S: CharSet + ?Sized> Iterator for Segments<'a, S> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let line: &'a str = self.line;
        let rest = &line[self.pos..];
        let start = rest.char_indices().find(|(_, ch)| self.set.contains(*ch))?.0;
        let run = &rest[start..];
        let len = run
            .char_indices()
            .find(|(_, ch)| !self.set.contains(*ch))
            .map_or(run.len(), |(i, _)| i);

        self.pos += start + len;
        Some(&run[..len])
    }
}

/// Extract the maximal runs of `set` from `line`
pub fn extract<'a, S: CharSet + ?Sized>(line: &'a str, set: &'a S) -> Segments<'a, S> {
    Segments { line, pos: 0, set }
}

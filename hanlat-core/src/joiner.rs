//! Rendering of segment sequences into a text buffer

/// Join segments with a single `"\n"` between consecutive items
pub fn join<I, T>(segments: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut buffer = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            buffer.push('\n');
        }
        buffer.push_str(segment.as_ref());
    }
    buffer
}

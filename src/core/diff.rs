//! Line classification for one file's unified-diff body.
//!
//! A line is Added iff its first character is `+`, Removed iff `-`, and
//! Context otherwise. Hunk headers are not interpreted, so the recorded
//! index is a position inside the supplied text, not a file line number.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOrigin {
    Added,
    Removed,
    Context,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffLine {
    pub origin: LineOrigin,
    /// 1-based index of the physical line within the diff body.
    pub index: usize,
    /// Line content with the marker character stripped.
    pub content: String,
}

/// Split a diff body into classified lines.
pub fn classify(content: &str) -> Vec<DiffLine> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let (origin, rest) = match line.as_bytes().first() {
                Some(b'+') => (LineOrigin::Added, &line[1..]),
                Some(b'-') => (LineOrigin::Removed, &line[1..]),
                // Context lines carry a space marker; a line with no marker
                // at all is kept verbatim.
                Some(b' ') => (LineOrigin::Context, &line[1..]),
                _ => (LineOrigin::Context, line),
            };
            DiffLine {
                origin,
                index: i + 1,
                content: rest.to_string(),
            }
        })
        .collect()
}

/// Added lines only, as (1-based index, content) pairs.
pub fn added_lines(lines: &[DiffLine]) -> Vec<(usize, &str)> {
    lines
        .iter()
        .filter(|l| l.origin == LineOrigin::Added)
        .map(|l| (l.index, l.content.as_str()))
        .collect()
}

/// Removed lines only, as (1-based index, content) pairs.
pub fn removed_lines(lines: &[DiffLine]) -> Vec<(usize, &str)> {
    lines
        .iter()
        .filter(|l| l.origin == LineOrigin::Removed)
        .map(|l| (l.index, l.content.as_str()))
        .collect()
}

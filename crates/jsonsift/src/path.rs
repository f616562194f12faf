//! The path tracker.
//!
//! Maintains the `.`-delimited path from the document root to the parser's
//! current position: one `.` segment per object nesting level, one key
//! segment per object member being parsed. Arrays never push a segment, so
//! array elements inherit the parent path exactly — which is what lets a
//! homogeneous array flatten naturally.

use std::fmt;

/// A dotted path kept as a string buffer plus an explicit stack of segment
/// lengths, so each ascent removes exactly what the matching descent added.
#[derive(Debug, Default, Clone)]
pub struct DottedPath {
    buf: String,
    segments: Vec<usize>,
}

impl DottedPath {
    /// An empty path: the document root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `segment` on descent into an object or a member value.
    pub fn descend(&mut self, segment: &str) {
        self.buf.push_str(segment);
        self.segments.push(segment.len());
    }

    /// Undoes the most recent descent (LIFO discipline).
    pub fn ascend(&mut self) {
        if let Some(len) = self.segments.pop() {
            self.buf.truncate(self.buf.len() - len);
        }
    }

    /// The current dotted path, e.g. `.dataset.publisher.name`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The number of segments pushed and not yet popped.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descent_and_ascent_are_balanced() {
        let mut path = DottedPath::new();
        path.descend(".");
        path.descend("dataset");
        path.descend(".");
        path.descend("publisher.name");
        assert_eq!(path.as_str(), ".dataset.publisher.name");
        assert_eq!(path.depth(), 4);

        path.ascend();
        assert_eq!(path.as_str(), ".dataset.");
        path.ascend();
        path.ascend();
        path.ascend();
        assert!(path.is_empty());
        assert_eq!(path.as_str(), "");
    }

    #[test]
    fn ascend_on_empty_path_is_a_no_op() {
        let mut path = DottedPath::new();
        path.ascend();
        assert!(path.is_empty());
    }

    #[test]
    fn empty_segments_pop_cleanly() {
        let mut path = DottedPath::new();
        path.descend(".");
        path.descend("");
        assert_eq!(path.as_str(), ".");
        assert_eq!(path.depth(), 2);
        path.ascend();
        assert_eq!(path.depth(), 1);
        assert_eq!(path.as_str(), ".");
    }
}

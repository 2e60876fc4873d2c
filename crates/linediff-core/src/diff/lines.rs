//! Line splitting.

/// Appended to a non-empty text that does not end in `\n`.
///
/// The marker becomes part of the final line, so an unterminated last line
/// never compares equal to its terminated counterpart.
pub const MISSING_NEWLINE_MARKER: &str = "(missing final newline)";

/// An ordered sequence of lines, without terminators.
///
/// Never holds a trailing empty element for the content after the final `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Split `text` into lines. See [`split_lines`].
    pub fn split(text: &str) -> Self {
        let mut owned = String::with_capacity(text.len() + MISSING_NEWLINE_MARKER.len());
        owned.push_str(text);
        if !text.is_empty() && !text.ends_with('\n') {
            owned.push_str(MISSING_NEWLINE_MARKER);
        }

        // owned is empty or ends in '\n' or the marker; split_terminator
        // yields nothing after a final '\n'
        let lines = owned.split_terminator('\n').map(str::to_owned).collect();

        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at 0-based forward index `k`.
    pub fn get(&self, k: usize) -> Option<&str> {
        self.lines.get(k).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }
}

/// Split `text` on `\n` into a [`LineSequence`].
///
/// An empty text yields an empty sequence. A non-empty text lacking a final
/// `\n` has [`MISSING_NEWLINE_MARKER`] appended to its last line.
pub fn split_lines(text: &str) -> LineSequence {
    LineSequence::split(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_terminated_text_has_no_trailing_empty_line() {
        let seq = split_lines("a\nb\n");
        assert_eq!(seq.as_slice(), ["a", "b"]);
    }

    #[test]
    fn test_unterminated_text_gets_marker() {
        let seq = split_lines("a\nb");
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(1), Some("b(missing final newline)"));
    }

    #[test]
    fn test_single_unterminated_line_is_kept() {
        let seq = split_lines("x");
        assert_eq!(seq.as_slice(), ["x(missing final newline)"]);
    }

    #[test]
    fn test_trailing_blank_line_is_kept() {
        let seq = split_lines("a\n\n");
        assert_eq!(seq.as_slice(), ["a", ""]);
    }

    #[test]
    fn test_blank_lines_are_preserved() {
        let seq = split_lines("\n\nx\n");
        assert_eq!(seq.as_slice(), ["", "", "x"]);
    }
}

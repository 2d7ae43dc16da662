//! The [`SourceTracker`]: owns a file's bytes and answers line/column queries.

use std::sync::Arc;

use super::Location;

/// Owns one source file's text and a precomputed line-start index, and
/// tracks the lexer's current position as it advances character by character.
///
/// The line-start index is built once, in a single pass over the source, at
/// construction time: a sorted list of byte offsets where each line begins.
/// That gives O(1) line lookup (used heavily when rendering diagnostic
/// source-line carets) and O(log n) offset-to-(line, col) conversion.
///
/// # Examples
///
/// ```
/// use zero_util::span::SourceTracker;
///
/// let tracker = SourceTracker::new("main.zr", "let x = 1;\nlet y = 2;\n");
/// assert_eq!(tracker.get_source_line(1), "let x = 1;");
/// assert_eq!(tracker.get_source_line(2), "let y = 2;");
/// assert_eq!(tracker.get_source_line(99), "");
/// ```
pub struct SourceTracker {
    file: Arc<str>,
    source: Arc<str>,
    line_starts: Arc<[usize]>,
    pos: usize,
    line: u32,
    col: u32,
}

impl SourceTracker {
    /// Build a tracker over `source`, computing the line-start index in one pass.
    pub fn new(file: impl Into<Arc<str>>, source: impl Into<Arc<str>>) -> Self {
        let source = source.into();
        let line_starts = Self::compute_line_starts(&source);
        Self {
            file: file.into(),
            source,
            line_starts,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn compute_line_starts(source: &str) -> Arc<[usize]> {
        let mut starts = vec![0usize];
        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                starts.push(i + ch.len_utf8());
            }
        }
        starts.into()
    }

    /// The full source text this tracker owns.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The character at the tracker's current position, or `'\0'` at end of input.
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// The character `n` Unicode characters ahead of the current position
    /// (`n == 0` is [`current_char`](Self::current_char)), or `'\0'` past the end.
    pub fn peek_char(&self, n: usize) -> char {
        self.source[self.pos..].chars().nth(n).unwrap_or('\0')
    }

    /// True once every byte of the source has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The source slice from byte offset `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &str {
        &self.source[start..self.pos]
    }

    /// The unconsumed remainder of the source.
    pub fn remaining(&self) -> &str {
        &self.source[self.pos..]
    }

    /// If the current character is `expected`, advance past it and return
    /// `true`; otherwise leave the position untouched and return `false`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance(expected);
            true
        } else {
            false
        }
    }

    /// The file name associated with every [`Location`] this tracker produces.
    pub fn file(&self) -> Arc<str> {
        Arc::clone(&self.file)
    }

    /// Advance past one already-consumed character, updating byte offset,
    /// line, and column. A `'\n'` increments the line and resets the column
    /// to 1; every other character advances the column by one Unicode unit
    /// (not one byte), per the column-counting rule in the data model.
    pub fn advance(&mut self, ch: char) {
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }

    /// The tracker's current `(byte_offset, line, col)`.
    pub fn position(&self) -> (usize, u32, u32) {
        (self.pos, self.line, self.col)
    }

    /// Build a [`Location`] starting at `(start_line, start_col)` and closing
    /// at the tracker's current position.
    pub fn make_location(&self, start_line: u32, start_col: u32) -> Location {
        Location {
            file: Arc::clone(&self.file),
            start_line,
            start_col,
            end_line: self.line,
            end_col: self.col,
        }
    }

    /// The 1-based source line `n`, without its trailing newline. Returns an
    /// empty string if `n` is out of range, rather than failing.
    pub fn get_source_line(&self, n: u32) -> String {
        if n == 0 {
            return String::new();
        }
        let idx = (n - 1) as usize;
        let Some(&start) = self.line_starts.get(idx) else {
            return String::new();
        };
        let end = self
            .line_starts
            .get(idx + 1)
            .copied()
            .unwrap_or(self.source.len());
        self.source[start..end]
            .trim_end_matches(['\n', '\r'])
            .to_string()
    }

    /// Total number of lines in the source (always ≥ 1, even for empty input).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into `(line, col)`, both 1-based. `col` counts
    /// Unicode characters from the start of the line.
    pub fn offset_to_line_col(&self, offset: usize) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line_idx).copied().unwrap_or(0);
        let col = self.source[line_start..offset.min(self.source.len())]
            .chars()
            .count() as u32
            + 1;
        (line_idx as u32 + 1, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_starts_at_line_one_col_one() {
        let t = SourceTracker::new("f.zr", "abc");
        assert_eq!(t.position(), (0, 1, 1));
    }

    #[test]
    fn advance_tracks_newlines() {
        let mut t = SourceTracker::new("f.zr", "ab\ncd");
        t.advance('a');
        t.advance('b');
        assert_eq!(t.position(), (2, 1, 3));
        t.advance('\n');
        assert_eq!(t.position(), (3, 2, 1));
    }

    #[test]
    fn advance_counts_unicode_chars_not_bytes() {
        let mut t = SourceTracker::new("f.zr", "é x");
        t.advance('é');
        assert_eq!(t.position(), (2, 1, 2));
    }

    #[test]
    fn get_source_line_trims_newline() {
        let t = SourceTracker::new("f.zr", "one\ntwo\nthree");
        assert_eq!(t.get_source_line(1), "one");
        assert_eq!(t.get_source_line(2), "two");
        assert_eq!(t.get_source_line(3), "three");
        assert_eq!(t.get_source_line(4), "");
        assert_eq!(t.get_source_line(0), "");
    }

    #[test]
    fn empty_source_has_one_line() {
        let t = SourceTracker::new("f.zr", "");
        assert_eq!(t.line_count(), 1);
        assert_eq!(t.get_source_line(1), "");
    }

    #[test]
    fn offset_to_line_col_matches_manual_advance() {
        let t = SourceTracker::new("f.zr", "let x = 1;\nlet y = 2;\n");
        assert_eq!(t.offset_to_line_col(0), (1, 1));
        assert_eq!(t.offset_to_line_col(11), (2, 1));
    }

    #[test]
    fn peek_char_looks_ahead_without_advancing() {
        let t = SourceTracker::new("f.zr", "let x");
        assert_eq!(t.current_char(), 'l');
        assert_eq!(t.peek_char(1), 'e');
        assert_eq!(t.position(), (0, 1, 1));
    }

    #[test]
    fn match_char_advances_only_on_match() {
        let mut t = SourceTracker::new("f.zr", "=>");
        assert!(t.match_char('='));
        assert!(!t.match_char('='));
        assert!(t.match_char('>'));
        assert!(t.is_at_end());
    }

    #[test]
    fn make_location_spans_from_start_to_current() {
        let mut t = SourceTracker::new("f.zr", "abcd");
        let (start_line, start_col) = (t.position().1, t.position().2);
        t.advance('a');
        t.advance('b');
        let loc = t.make_location(start_line, start_col);
        assert_eq!(loc.start_col, 1);
        assert_eq!(loc.end_col, 3);
    }
}

//! Source location tracking.
//!
//! A [`Location`] is a closed byte range in one source file, expressed in both
//! 1-based line/column coordinates (for diagnostics) and left for the tracker
//! to fill in from a byte offset. Columns count Unicode scalar values, not
//! bytes, since the lexer advances the tracker one character at a time.

mod tracker;

pub use tracker::SourceTracker;

use std::sync::Arc;

/// A source range: `(file, start_line, start_col, end_line, end_col)`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use zero_util::span::Location;
///
/// let loc = Location::point(Arc::from("main.zr"), 1, 1);
/// assert_eq!(loc.start_line, loc.end_line);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Source file name, shared cheaply across every token's location.
    pub file: Arc<str>,
    /// 1-based starting line.
    pub start_line: u32,
    /// 1-based starting column (Unicode characters).
    pub start_col: u32,
    /// 1-based ending line.
    pub end_line: u32,
    /// 1-based ending column (Unicode characters).
    pub end_col: u32,
}

impl Location {
    /// A placeholder location for synthetic nodes that never reference real text.
    pub fn dummy() -> Self {
        Self {
            file: Arc::from(""),
            start_line: 0,
            start_col: 0,
            end_line: 0,
            end_col: 0,
        }
    }

    /// A zero-width location at a single point, e.g. for the end-of-file token.
    pub fn point(file: Arc<str>, line: u32, col: u32) -> Self {
        Self {
            file,
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col,
        }
    }

    /// True if this location carries no real file (a [`Location::dummy`]).
    pub fn is_dummy(&self) -> bool {
        self.file.is_empty() && self.start_line == 0
    }
}

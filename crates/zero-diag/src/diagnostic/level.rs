//! Diagnostic severity levels.

use std::fmt;

/// How severe a diagnostic is, and what it implies for the pipeline.
///
/// `Warning` never blocks progression to the next stage. `Error` fails
/// compilation but lets the current stage keep collecting diagnostics for
/// the rest of the file. `Fatal` halts the current file's pipeline the
/// moment it's reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Warning,
    Error,
    Fatal,
}

impl Level {
    pub const fn is_warning(self) -> bool {
        matches!(self, Level::Warning)
    }

    pub const fn is_error(self) -> bool {
        matches!(self, Level::Error | Level::Fatal)
    }

    /// The word shown in a rendered header, e.g. `"error"` in `error[L0007]:`.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// ANSI color code used for the header word when color output is enabled.
    pub const fn color_code(self) -> &'static str {
        match self {
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
            Level::Fatal => "\x1b[1;31m",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_and_fatal_both_count_as_errors() {
        assert!(Level::Error.is_error());
        assert!(Level::Fatal.is_error());
        assert!(!Level::Warning.is_error());
    }

    #[test]
    fn names_match_rendered_header_words() {
        assert_eq!(Level::Warning.name(), "warning");
        assert_eq!(Level::Error.name(), "error");
        assert_eq!(Level::Fatal.name(), "fatal");
    }
}

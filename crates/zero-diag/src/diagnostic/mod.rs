//! Diagnostic records and the engine that collects and renders them.
//!
//! A [`Diagnostic`] is a record `{ level, code, location, args, source_line }`
//! produced by any of the four front-end subsystems. The [`DiagnosticEngine`]
//! is an ordered, append-only collector: each subsystem reports into it as it
//! goes, and the driver asks it whether the current stage may proceed.
//!
//! # Examples
//!
//! ```
//! use zero_diag::diagnostic::{DiagnosticBuilder, DiagnosticCode, DiagnosticEngine};
//! use zero_util::span::Location;
//!
//! let mut engine = DiagnosticEngine::new("en_US");
//! DiagnosticBuilder::error(DiagnosticCode::P0001_UnexpectedToken, Location::dummy())
//!     .arg("`}`")
//!     .emit(&mut engine);
//!
//! assert!(engine.has_errors());
//! ```

mod builder;
mod catalog;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use catalog::{LocaleCatalog, MessageTemplate};
pub use codes::{DiagnosticCode, Subsystem};
pub use level::Level;

use zero_util::span::Location;

/// One reported condition: a severity, a stable code, where it happened, the
/// positional arguments the locale catalog will substitute into the
/// message, and the offending source line for rendering a caret.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub code: DiagnosticCode,
    pub location: Location,
    pub args: Vec<String>,
    pub source_line: String,
}

impl Diagnostic {
    pub fn new(level: Level, code: DiagnosticCode, location: Location, source_line: impl Into<String>) -> Self {
        Self {
            level,
            code,
            location,
            args: Vec::new(),
            source_line: source_line.into(),
        }
    }
}

/// Ordered, append-only collection of diagnostics for one compilation job.
///
/// Owns a lazily-loaded [`LocaleCatalog`] for the active locale and renders
/// each diagnostic in the four-block form: a colored header, a `-->`
/// location line, the source line with a caret underline, and an optional
/// `= help:` hint.
pub struct DiagnosticEngine {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
    catalog: LocaleCatalog,
}

impl DiagnosticEngine {
    /// Create an engine that renders messages in `locale`, loading its
    /// catalog immediately (falling back to `en_US`, then to an empty
    /// catalog, on any load failure — see [`LocaleCatalog::load`]).
    pub fn new(locale: &str) -> Self {
        Self {
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
            catalog: LocaleCatalog::load(locale),
        }
    }

    pub fn set_locale(&mut self, locale: &str) {
        self.catalog = LocaleCatalog::load(locale);
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level {
            Level::Warning => self.warning_count += 1,
            Level::Error | Level::Fatal => self.error_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.error_count = 0;
        self.warning_count = 0;
    }

    /// Render every collected diagnostic, in report order, joined by blank
    /// lines.
    pub fn render_all(&self, use_color: bool) -> String {
        self.diagnostics
            .iter()
            .map(|d| self.render(d, use_color))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn print_all(&self, use_color: bool) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", self.render(diagnostic, use_color));
        }
    }

    /// Render one diagnostic as:
    /// ```text
    /// error[L0007]: unterminated string literal (from: lexer)
    ///   --> main.zr:3:9
    ///     |
    ///   3 | let s = "oops
    ///     |         ^^^^^
    ///     = help: close the string with a matching quote
    /// ```
    pub fn render(&self, diagnostic: &Diagnostic, use_color: bool) -> String {
        let code = diagnostic.code.as_str();
        let message = self.catalog.format_message(&code, &diagnostic.args);
        let help = self.catalog.help_for(&code, &diagnostic.args);

        let (reset, color) = if use_color {
            ("\x1b[0m", diagnostic.level.color_code())
        } else {
            ("", "")
        };

        let loc = &diagnostic.location;
        let mut out = String::new();
        out.push_str(&format!(
            "{color}{}[{code}]{reset}: {message} (from: {})\n",
            diagnostic.level.name(),
            diagnostic.code.subsystem.label(),
        ));
        out.push_str(&format!(
            "  --> {}:{}:{}\n",
            loc.file, loc.start_line, loc.start_col
        ));

        let line_num = loc.start_line.to_string();
        let gutter = " ".repeat(line_num.len());
        out.push_str(&format!("{gutter} |\n"));
        out.push_str(&format!("{line_num} | {}\n", diagnostic.source_line));

        let underline_start = loc.start_col.saturating_sub(1) as usize;
        let underline_len = (loc.end_col.saturating_sub(loc.start_col)).max(1) as usize;
        out.push_str(&format!(
            "{gutter} | {}{}\n",
            " ".repeat(underline_start),
            "^".repeat(underline_len)
        ));

        if let Some(help) = help {
            out.push_str(&format!("{gutter} = help: {help}"));
        } else {
            out.pop();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> Location {
        Location::point(std::sync::Arc::from("main.zr"), 3, 9)
    }

    #[test]
    fn reporting_increments_counters() {
        let mut engine = DiagnosticEngine::new("en_US");
        engine.report(Diagnostic::new(Level::Error, DiagnosticCode::P0001_UnexpectedToken, loc(), "let s = 1"));
        engine.report(Diagnostic::new(Level::Warning, DiagnosticCode::L0005_InvalidTrailingChar, loc(), "1abc"));
        assert_eq!(engine.error_count(), 1);
        assert_eq!(engine.warning_count(), 1);
        assert!(engine.has_errors());
    }

    #[test]
    fn fatal_counts_as_error() {
        let mut engine = DiagnosticEngine::new("en_US");
        engine.report(Diagnostic::new(Level::Fatal, DiagnosticCode::L0007_UnterminatedString, loc(), "x"));
        assert!(engine.has_errors());
        assert_eq!(engine.error_count(), 1);
    }

    #[test]
    fn render_contains_code_and_location() {
        let mut engine = DiagnosticEngine::new("en_US");
        let diag = Diagnostic::new(Level::Error, DiagnosticCode::L0007_UnterminatedString, loc(), "let s = \"oops");
        engine.report(diag);
        let rendered = engine.render_all(false);
        assert!(rendered.contains("L0007"));
        assert!(rendered.contains("main.zr:3:9"));
        assert!(rendered.contains("oops"));
    }

    #[test]
    fn clear_resets_counters_and_records() {
        let mut engine = DiagnosticEngine::new("en_US");
        engine.report(Diagnostic::new(Level::Error, DiagnosticCode::P0001_UnexpectedToken, loc(), "x"));
        engine.clear();
        assert_eq!(engine.error_count(), 0);
        assert!(engine.diagnostics().is_empty());
    }
}

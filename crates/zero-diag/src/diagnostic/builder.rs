//! Fluent construction of [`Diagnostic`]s.

use super::{Diagnostic, DiagnosticCode, DiagnosticEngine, Level};
use zero_util::span::Location;

/// Builds a [`Diagnostic`] one positional argument at a time, then either
/// hands it back or reports it straight into a [`DiagnosticEngine`].
///
/// # Examples
///
/// ```
/// use zero_diag::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use zero_util::span::Location;
///
/// let diag = DiagnosticBuilder::error(DiagnosticCode::P0001_UnexpectedToken, Location::dummy())
///     .arg("`}`")
///     .arg("`;`")
///     .source_line("let y  let z = 30;")
///     .build();
///
/// assert_eq!(diag.args, vec!["`}`".to_string(), "`;`".to_string()]);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    code: DiagnosticCode,
    location: Location,
    args: Vec<String>,
    source_line: String,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, code: DiagnosticCode, location: Location) -> Self {
        Self {
            level,
            code,
            location,
            args: Vec::new(),
            source_line: String::new(),
        }
    }

    pub fn warning(code: DiagnosticCode, location: Location) -> Self {
        Self::new(Level::Warning, code, location)
    }

    pub fn error(code: DiagnosticCode, location: Location) -> Self {
        Self::new(Level::Error, code, location)
    }

    pub fn fatal(code: DiagnosticCode, location: Location) -> Self {
        Self::new(Level::Fatal, code, location)
    }

    /// Append one positional substitution argument (`{0}`, `{1}`, … in the
    /// locale catalog's message template).
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The offending source line, rendered below the diagnostic header with
    /// a caret underline.
    pub fn source_line(mut self, line: impl Into<String>) -> Self {
        self.source_line = line.into();
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            code: self.code,
            location: self.location,
            args: self.args,
            source_line: self.source_line,
        }
    }

    /// Build and report the diagnostic into `engine`.
    pub fn emit(self, engine: &mut DiagnosticEngine) {
        engine.report(self.build());
    }
}

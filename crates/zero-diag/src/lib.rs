//! Diagnostic records, codes, and the locale-aware engine that collects and
//! renders them. Every front-end subsystem (lexer, token preprocessor,
//! parser, struct/type checking) reports into a [`diagnostic::DiagnosticEngine`]
//! rather than failing outright.

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, DiagnosticEngine, Level, LocaleCatalog};

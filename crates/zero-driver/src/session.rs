//! The per-file pipeline: lex, preprocess, parse, optionally format.
//!
//! Each stage gates the next on its own `Error`-level diagnostics (§7) — a
//! lex error never reaches the parser, a parse error never reaches the
//! formatter — but whatever already ran is always returned to the caller.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use zero_diag::{DiagnosticBuilder, DiagnosticCode, DiagnosticEngine};
use zero_lex::{Lexer, Token};
use zero_par::CstNode;
use zero_util::span::Location;

use crate::config::Config;
use crate::error::{DriverError, DriverResult};

/// Everything a pipeline run produced, win or lose. `cst`/`formatted` are
/// `None` when an earlier stage blocked progression.
pub struct PipelineOutcome {
    pub tokens: Vec<Token>,
    pub cst: Option<CstNode>,
    pub formatted: Option<String>,
    pub diagnostics: DiagnosticEngine,
}

impl PipelineOutcome {
    pub fn succeeded(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads `path` from disk and decodes it as UTF-8. A malformed byte
    /// sequence reports `L0011` but does not abort: the rest of the pipeline
    /// runs on the lossy-decoded text so the caller still gets diagnostics
    /// for whatever else is wrong with the file.
    fn read_source(path: &Path, diagnostics: &mut DiagnosticEngine) -> DriverResult<String> {
        let bytes = fs::read(path).map_err(|source| DriverError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                let lossy = String::from_utf8_lossy(err.as_bytes()).into_owned();
                let location = Location::point(path.display().to_string().into(), 1, 1);
                DiagnosticBuilder::error(DiagnosticCode::L0011_InvalidUtf8Sequence, location)
                    .source_line("")
                    .emit(diagnostics);
                Ok(lossy)
            }
        }
    }

    /// Runs lex → preprocess → parse → (optional) format on source text
    /// already in memory. `file_name` only affects diagnostic locations.
    pub fn run_pipeline_on_source(&self, file_name: &str, source: &str, want_format: bool) -> PipelineOutcome {
        let diagnostics = DiagnosticEngine::new(&self.config.locale);
        self.run_pipeline_with_engine(file_name, source, want_format, diagnostics)
    }

    fn run_pipeline_with_engine(
        &self,
        file_name: &str,
        source: &str,
        want_format: bool,
        mut diagnostics: DiagnosticEngine,
    ) -> PipelineOutcome {
        debug!(file = file_name, "lexing");
        let tokens = Lexer::new(file_name, source, &mut diagnostics).tokenize();
        trace!(file = file_name, token_count = tokens.len(), "lex complete");

        if diagnostics.has_errors() {
            debug!(file = file_name, "lex errors present, stopping before preprocess");
            return PipelineOutcome {
                tokens,
                cst: None,
                formatted: None,
                diagnostics,
            };
        }

        debug!(file = file_name, "preprocessing scientific literals");
        let tokens = zero_pre::preprocess(tokens, &mut diagnostics);

        if diagnostics.has_errors() {
            debug!(file = file_name, "preprocess errors present, stopping before parse");
            return PipelineOutcome {
                tokens,
                cst: None,
                formatted: None,
                diagnostics,
            };
        }

        debug!(file = file_name, "parsing");
        let cst = zero_par::parse(tokens.clone(), &mut diagnostics);
        trace!(file = file_name, "parse complete");

        if diagnostics.has_errors() {
            debug!(file = file_name, "parse errors present, stopping before format");
            return PipelineOutcome {
                tokens,
                cst: Some(cst),
                formatted: None,
                diagnostics,
            };
        }

        let formatted = if want_format {
            debug!(file = file_name, "formatting");
            Some(zero_fmt::format(&cst, &self.config.format_options()))
        } else {
            None
        };

        PipelineOutcome {
            tokens,
            cst: Some(cst),
            formatted,
            diagnostics,
        }
    }

    /// Reads `path` from disk and runs the full pipeline on its contents.
    pub fn run_pipeline_on_file(&self, path: &Path, want_format: bool) -> DriverResult<PipelineOutcome> {
        let mut diagnostics = DiagnosticEngine::new(&self.config.locale);
        let source = Self::read_source(path, &mut diagnostics)?;
        let file_name = path.display().to_string();
        Ok(self.run_pipeline_with_engine(&file_name, &source, want_format, diagnostics))
    }

    /// Writes formatted output for `path`, either in place or to a sibling
    /// `<path>.formatted` file, per the configured mode.
    pub fn write_formatted(&self, path: &Path, formatted: &str) -> DriverResult<()> {
        let target = if self.config.in_place {
            path.to_path_buf()
        } else {
            let mut target = path.as_os_str().to_owned();
            target.push(".formatted");
            target.into()
        };
        fs::write(&target, formatted).map_err(|source| DriverError::WriteFile {
            path: target.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zero_fmt::IndentStyle;

    fn session() -> Session {
        Session::new(Config::new("en_US", IndentStyle::Spaces, 4, false).unwrap())
    }

    #[test]
    fn clean_source_runs_every_stage() {
        let outcome = session().run_pipeline_on_source("test", "let x = 1;\n", true);
        assert!(outcome.succeeded());
        assert!(outcome.cst.is_some());
        assert_eq!(outcome.formatted.as_deref(), Some("let x = 1;\n"));
    }

    #[test]
    fn preprocess_error_blocks_parse_and_format() {
        let outcome = session().run_pipeline_on_source("test", "1e400", true);
        assert!(!outcome.succeeded());
        assert!(outcome.cst.is_none());
        assert!(outcome.formatted.is_none());
    }

    #[test]
    fn parse_error_still_returns_partial_cst_but_no_format() {
        let outcome = session().run_pipeline_on_source("test", "let y  let z = 30;", true);
        assert!(!outcome.succeeded());
        assert!(outcome.cst.is_some());
        assert!(outcome.formatted.is_none());
    }

    #[test]
    fn want_format_false_skips_formatting_even_on_success() {
        let outcome = session().run_pipeline_on_source("test", "let x = 1;\n", false);
        assert!(outcome.succeeded());
        assert!(outcome.cst.is_some());
        assert!(outcome.formatted.is_none());
    }
}

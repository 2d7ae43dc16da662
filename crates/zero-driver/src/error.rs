//! Truly exceptional conditions the driver can hit: bad CLI-level
//! configuration and I/O failure. Per-file compilation problems are never
//! modeled here — those are [`zero_diag::Diagnostic`]s collected in a
//! `DiagnosticEngine`, not `Err` values.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("indent width {0} out of range [1, 16]")]
    InvalidIndentWidth(usize),
}

pub type DriverResult<T> = std::result::Result<T, DriverError>;

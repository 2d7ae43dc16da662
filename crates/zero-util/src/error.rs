//! Shared error types for foundational utilities.

use thiserror::Error;

/// Errors arising from locale catalog or other file-backed resource loading.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource could not be found at any searched location.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The resource existed but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for resource-loading operations.
pub type ResourceResult<T> = std::result::Result<T, ResourceError>;

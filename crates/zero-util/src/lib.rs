//! Foundational types shared by every stage of the Zero compiler front end:
//! source location tracking (`span`) and the error types resource loaders
//! (the locale catalog, the driver's file I/O) report through.
//!
//! Diagnostic records themselves live in `zero-diag`, not here — this crate
//! only provides the `Location`/`SourceTracker` building blocks every other
//! crate, including `zero-diag`, depends on.

pub mod error;
pub mod span;

pub use error::{ResourceError, ResourceResult};
pub use span::{Location, SourceTracker};

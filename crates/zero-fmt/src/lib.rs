//! Reproduces a parsed program as text from its Concrete Syntax Tree,
//! re-laying out whitespace according to [`FormatOptions`] rather than the
//! author's original formatting.
//!
//! Every token the parser preserved is emitted somewhere — synthetic tokens
//! inserted during error recovery are skipped, since they carry no real
//! source text.

mod options;
mod visitor;

pub use options::{FormatOptions, IndentStyle};
pub use visitor::format;

//! A hand-written recursive-descent parser that turns a token stream into a
//! lossless Concrete Syntax Tree (CST): every token, including punctuation,
//! keywords, and comments, is attached somewhere in the tree, so a visitor
//! can walk the result and reproduce the original source text exactly.
//!
//! Errors never stop parsing. A malformed declaration or expression reports
//! a diagnostic, a synthetic placeholder token fills the gap, and one of
//! three synchronization strategies finds the next safe place to resume.

pub mod cst;
mod parser;

pub use cst::{CstNode, NodeKind};
pub use parser::Parser;

use zero_diag::DiagnosticEngine;
use zero_lex::Token;

/// Parses a complete token stream (already run through the token
/// preprocessor) into a [`CstNode::Program`] root.
pub fn parse(tokens: Vec<Token>, diagnostics: &mut DiagnosticEngine) -> CstNode {
    Parser::new(tokens, diagnostics).parse()
}

//! The `Parser` struct: token-vector cursor, diagnostic reporting, and the
//! three synchronization strategies used for error recovery.

use zero_diag::{DiagnosticBuilder, DiagnosticCode, DiagnosticEngine};
use zero_lex::{Token, TokenKind};
use zero_util::span::Location;

use crate::cst::{CstNode, NodeKind};

/// Token kinds that may start a statement — used by every synchronization
/// strategy as a place to stop skipping tokens.
const STATEMENT_START_KINDS: &[TokenKind] = &[
    TokenKind::Let,
    TokenKind::Var,
    TokenKind::Fn,
    TokenKind::Return,
    TokenKind::If,
    TokenKind::While,
];

pub struct Parser<'a> {
    pub(crate) tokens: Vec<Token>,
    pub(crate) pos: usize,
    pub(crate) diagnostics: &'a mut DiagnosticEngine,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, diagnostics: &'a mut DiagnosticEngine) -> Self {
        Self { tokens, pos: 0, diagnostics }
    }

    /// `program := (declaration | comment)*`
    pub fn parse(&mut self) -> CstNode {
        let mut children = Vec::new();
        while !self.is_at_end() {
            if self.current().kind == TokenKind::Comment {
                children.push(self.consume_comment());
                continue;
            }
            let before = self.pos;
            children.push(self.parse_declaration());
            if self.pos == before {
                // No progress — avoid looping forever on an unrecoverable token.
                self.synchronize_to_statement_start();
                if self.pos == before {
                    self.advance();
                }
            }
        }
        let location = children.first().map(|c| c.location.clone()).unwrap_or(Location::dummy());
        CstNode::new(NodeKind::Program, location, children)
    }

    pub(crate) fn current(&self) -> Token {
        self.tokens.get(self.pos).cloned().unwrap_or_else(|| {
            Token::new(TokenKind::EndOfFile, "", 0, 0)
        })
    }

    pub(crate) fn peek(&self, n: usize) -> Token {
        self.tokens.get(self.pos + n).cloned().unwrap_or_else(|| {
            Token::new(TokenKind::EndOfFile, "", 0, 0)
        })
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::EndOfFile
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Advances past the current token and returns it, unless already at EOF.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::EndOfFile {
            self.pos += 1;
        }
        token
    }

    /// If the current token is `kind`, consume and return it.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes a token of `kind`, or reports `P0001_UnexpectedToken` and
    /// returns a synthetic token of that kind without advancing — leaving
    /// the unexpected token for the caller's recovery strategy.
    pub(crate) fn consume(&mut self, kind: TokenKind, expected_desc: &str) -> Token {
        if self.check(kind) {
            return self.advance();
        }
        let found = self.current();
        self.report_unexpected(expected_desc, &found);
        Token::synthetic(kind, found.line, found.column)
    }

    pub(crate) fn report_unexpected(&mut self, expected_desc: &str, found: &Token) {
        let location = self.location_of(found);
        DiagnosticBuilder::error(DiagnosticCode::P0001_UnexpectedToken, location)
            .arg(expected_desc)
            .arg(describe(found))
            .emit(self.diagnostics);
    }

    pub(crate) fn location_of(&self, token: &Token) -> Location {
        let width = token.text.chars().count().max(1) as u32;
        Location {
            file: std::sync::Arc::from(""),
            start_line: token.line,
            start_col: token.column,
            end_line: token.line,
            end_col: token.column + width,
        }
    }

    pub(crate) fn consume_comment(&mut self) -> CstNode {
        let token = self.advance();
        CstNode::leaf(NodeKind::Comment, token)
    }

    /// Attaches a trailing inline comment (same-line, immediately after a
    /// statement's terminator) to `children`, if one is present.
    pub(crate) fn attach_inline_comment(&mut self, children: &mut Vec<CstNode>) {
        if self.check(TokenKind::Comment) {
            let comment = self.consume_comment();
            children.push(comment);
        }
    }

    /// Skip tokens until `;`, `}`, or a statement-starting keyword; consume
    /// the `;` if that's what stopped us. Used after a failed
    /// declaration/statement.
    pub(crate) fn synchronize_to_semicolon(&mut self) {
        while !self.is_at_end() {
            let kind = self.current().kind;
            if kind == TokenKind::Semicolon {
                self.advance();
                return;
            }
            if kind == TokenKind::RBrace || STATEMENT_START_KINDS.contains(&kind) {
                return;
            }
            self.advance();
        }
    }

    /// Same stop set as [`synchronize_to_semicolon`](Self), but never
    /// consumes the terminator. Used inside blocks and at the top level when
    /// a declaration fails before producing any node.
    pub(crate) fn synchronize_to_statement_start(&mut self) {
        while !self.is_at_end() {
            let kind = self.current().kind;
            if kind == TokenKind::Semicolon || kind == TokenKind::RBrace || STATEMENT_START_KINDS.contains(&kind) {
                return;
            }
            self.advance();
        }
    }

    /// Tracks brace depth and skips until the matching `}`, without
    /// consuming it.
    pub(crate) fn synchronize_to_block_end(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            match self.current().kind {
                TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RBrace if depth == 0 => return,
                TokenKind::RBrace => {
                    depth -= 1;
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }
    }
}

/// Classifies a punctuation/keyword token as a `Delimiter` (brackets,
/// separators, keywords — structural) or an `Operator` (arithmetic,
/// comparison, assignment, member access — carries meaning of its own).
pub(crate) fn punctuation_leaf(token: Token) -> CstNode {
    use TokenKind::*;
    let kind = match token.kind {
        Let | Var | Fn | Return | If | Else | While | For | In | Struct | Enum | Type | Trait => NodeKind::Delimiter,
        LParen | RParen | LBrace | RBrace | LBracket | RBracket | Comma | Semicolon | Colon => NodeKind::Delimiter,
        _ => NodeKind::Operator,
    };
    CstNode::leaf(kind, token)
}

fn describe(token: &Token) -> String {
    if token.kind == TokenKind::EndOfFile {
        "end of input".to_string()
    } else if token.text.is_empty() {
        format!("{:?}", token.kind)
    } else {
        format!("`{}`", token.text)
    }
}

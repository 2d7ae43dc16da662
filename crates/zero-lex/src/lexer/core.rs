//! The main `Lexer` struct and its dispatch table.

use zero_diag::{DiagnosticBuilder, DiagnosticCode, DiagnosticEngine};
use zero_util::span::{Location, SourceTracker};

use crate::token::{Token, TokenKind};
use crate::unicode::is_ascii_ident_start;

/// Single-pass, single-lookahead tokenizer over one source file.
///
/// Never panics and never aborts on malformed input: every recoverable
/// condition is reported to the [`DiagnosticEngine`] and lexing produces a
/// best-effort token so the caller keeps getting a token stream.
pub struct Lexer<'a> {
    pub(crate) tracker: SourceTracker,
    pub(crate) diagnostics: &'a mut DiagnosticEngine,
    pub(crate) token_start_pos: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_col: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(file: impl Into<std::sync::Arc<str>>, source: impl Into<std::sync::Arc<str>>, diagnostics: &'a mut DiagnosticEngine) -> Self {
        let source = source.into();
        let mut tracker = SourceTracker::new(file, source.clone());
        if source.starts_with('\u{feff}') {
            tracker.advance('\u{feff}');
        }
        Self {
            tracker,
            diagnostics,
            token_start_pos: 0,
            token_start_line: 1,
            token_start_col: 1,
        }
    }

    /// Tokenize the entire source, always ending with one `EndOfFile` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::EndOfFile;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Returns the next token, or `TokenKind::EndOfFile` forever once the
    /// input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments_boundary();

        self.token_start_pos = self.tracker.position().0;
        self.token_start_line = self.tracker.position().1;
        self.token_start_col = self.tracker.position().2;

        if self.tracker.is_at_end() {
            return Token::new(TokenKind::EndOfFile, "", self.token_start_line, self.token_start_col);
        }

        if let Some(comment) = self.try_lex_comment() {
            return comment;
        }

        match self.tracker.current_char() {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '~' => self.single(TokenKind::Tilde),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '*' => self.lex_star(),
            '/' => self.lex_slash(),
            '%' => self.lex_percent(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_amp(),
            '|' => self.lex_pipe(),
            ':' => self.single(TokenKind::Colon),
            '.' => self.lex_dot(),
            '"' => self.lex_string(),
            'r' if self.tracker.peek_char(1) == '"' => self.lex_raw_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ascii_ident_start(c) || (c as u32) >= 0x80 => self.lex_identifier(),
            c => {
                self.tracker.advance(c);
                self.report(DiagnosticCode::L0010_InvalidCharacter, vec![c.to_string()]);
                self.make_token(TokenKind::Unknown)
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let c = self.tracker.current_char();
        self.tracker.advance(c);
        self.make_token(kind)
    }

    /// Build a token from `token_start_pos` to the tracker's current
    /// position, with the exact source slice as its text.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        let text = self.tracker.slice_from(self.token_start_pos).to_string();
        Token::new(kind, text, self.token_start_line, self.token_start_col)
    }

    pub(crate) fn current_location(&self) -> Location {
        self.tracker.make_location(self.token_start_line, self.token_start_col)
    }

    pub(crate) fn current_source_line(&self) -> String {
        self.tracker.get_source_line(self.token_start_line)
    }

    /// Report `code` at the current token's location, with positional args.
    pub(crate) fn report(&mut self, code: DiagnosticCode, args: Vec<String>) {
        let mut builder = DiagnosticBuilder::error(code, self.current_location())
            .source_line(self.current_source_line());
        for arg in args {
            builder = builder.arg(arg);
        }
        builder.emit(self.diagnostics);
    }

    fn skip_whitespace_and_comments_boundary(&mut self) {
        self.skip_whitespace();
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EndOfFile {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> (Vec<Token>, DiagnosticEngine) {
        let mut diagnostics = DiagnosticEngine::new("en_US");
        let kinds;
        {
            let lexer = Lexer::new("t.zr", source, &mut diagnostics);
            kinds = lexer.tokenize();
        }
        (kinds, diagnostics)
    }

    #[test]
    fn empty_source_yields_only_eof() {
        let (tokens, _) = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn punctuation_single_chars() {
        let (tokens, _) = tokenize("(){}[],;:~.");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::Tilde,
                TokenKind::Dot,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn bom_is_skipped_silently() {
        let (tokens, diagnostics) = tokenize("\u{feff}let");
        assert_eq!(tokens[0].kind, TokenKind::Let);
        assert!(!diagnostics.has_errors());
    }

    #[test]
    fn unrecognized_character_reports_and_continues() {
        let (tokens, diagnostics) = tokenize("let @ x");
        assert!(diagnostics.has_errors());
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Let, TokenKind::Unknown, TokenKind::Identifier, TokenKind::EndOfFile]);
    }

    #[test]
    fn non_ascii_byte_starts_an_identifier() {
        let (tokens, diagnostics) = tokenize("café");
        assert!(!diagnostics.has_errors());
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "café");
    }
}

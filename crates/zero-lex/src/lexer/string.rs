//! Regular and raw string literals.

use super::Lexer;
use crate::token::{Token, TokenKind};
use crate::unicode::{parse_hex_byte, parse_hex_codepoint};
use zero_diag::DiagnosticCode;

impl<'a> Lexer<'a> {
    /// `"` … `"`, with backslash escapes. Multi-line: a literal newline
    /// inside the quotes is kept verbatim rather than ending the string.
    ///
    /// The token's `text`/`raw_literal` preserve the source byte-for-byte,
    /// quotes and escapes included; escapes are validated here (for
    /// diagnostics) but never resolved into a separate decoded value —
    /// that's a later phase's job.
    pub(crate) fn lex_string(&mut self) -> Token {
        let opening_quote = self.tracker.current_char();
        self.tracker.advance(opening_quote);

        loop {
            if self.tracker.is_at_end() {
                self.report(DiagnosticCode::L0007_UnterminatedString, vec![]);
                break;
            }
            let c = self.tracker.current_char();
            if c == '"' {
                self.tracker.advance(c);
                break;
            }
            if c == '\\' {
                self.tracker.advance(c);
                self.lex_escape();
                continue;
            }
            self.tracker.advance(c);
        }

        let raw = self.tracker.slice_from(self.token_start_pos).to_string();
        self.make_token(TokenKind::String).with_raw_literal(raw)
    }

    fn lex_escape(&mut self) {
        if self.tracker.is_at_end() {
            self.report(DiagnosticCode::L0007_UnterminatedString, vec![]);
            return;
        }
        let c = self.tracker.current_char();
        self.tracker.advance(c);
        match c {
            'n' | 't' | 'r' | '\\' | '"' | '\'' | '0' => {}
            'x' => {
                let hex = self.take_hex_digits(2);
                if parse_hex_byte(&hex).is_none() {
                    self.report(DiagnosticCode::L0008_InvalidHexEscape, vec![hex]);
                }
            }
            'u' => {
                if self.tracker.current_char() == '{' {
                    let open = self.tracker.current_char();
                    self.tracker.advance(open);
                    let hex = self.take_hex_digits(6);
                    if self.tracker.current_char() == '}' {
                        let close = self.tracker.current_char();
                        self.tracker.advance(close);
                    }
                    if parse_hex_codepoint(&hex).is_none() {
                        self.report(DiagnosticCode::L0009_InvalidUnicodeEscape, vec![hex]);
                    }
                } else {
                    let hex = self.take_hex_digits(4);
                    if hex.len() != 4 || parse_hex_codepoint(&hex).is_none() {
                        self.report(DiagnosticCode::L0009_InvalidUnicodeEscape, vec![hex]);
                    }
                }
            }
            other => {
                self.report(DiagnosticCode::L0006_InvalidEscapeSequence, vec![other.to_string()]);
            }
        }
    }

    fn take_hex_digits(&mut self, max: usize) -> String {
        let mut hex = String::new();
        while hex.len() < max && self.tracker.current_char().is_ascii_hexdigit() {
            let c = self.tracker.current_char();
            self.tracker.advance(c);
            hex.push(c);
        }
        hex
    }

    /// `r"` … `"`, no escape interpretation, taken verbatim.
    pub(crate) fn lex_raw_string(&mut self) -> Token {
        let r = self.tracker.current_char();
        self.tracker.advance(r);
        let quote = self.tracker.current_char();
        self.tracker.advance(quote);

        loop {
            if self.tracker.is_at_end() {
                self.report(DiagnosticCode::L0007_UnterminatedString, vec![]);
                break;
            }
            if self.tracker.current_char() == '"' {
                break;
            }
            let c = self.tracker.current_char();
            self.tracker.advance(c);
        }
        if self.tracker.current_char() == '"' {
            let q = self.tracker.current_char();
            self.tracker.advance(q);
        }

        let raw = self.tracker.slice_from(self.token_start_pos).to_string();
        self.make_token(TokenKind::String)
            .with_raw_literal(raw)
            .raw_string()
    }
}

#[cfg(test)]
mod tests {
    use super::super::Lexer;
    use crate::token::TokenKind;
    use zero_diag::DiagnosticEngine;

    fn lex_one(source: &str) -> (crate::token::Token, bool) {
        let mut diagnostics = DiagnosticEngine::new("en_US");
        let mut lexer = Lexer::new("t.zr", source, &mut diagnostics);
        let token = lexer.next_token();
        (token, diagnostics.has_errors())
    }

    #[test]
    fn plain_string() {
        let (t, errs) = lex_one(r#""hello""#);
        assert_eq!(t.kind, TokenKind::String);
        assert_eq!(t.text, r#""hello""#);
        assert_eq!(t.raw_literal, r#""hello""#);
        assert!(!errs);
    }

    #[test]
    fn known_escapes_are_accepted_without_diagnostics() {
        let (_, errs) = lex_one(r#""a\nb\tc""#);
        assert!(!errs);
    }

    #[test]
    fn unknown_escape_reports_l0006_but_keeps_lexing() {
        let (t, errs) = lex_one(r#""a\qb""#);
        assert_eq!(t.kind, TokenKind::String);
        assert!(errs);
    }

    #[test]
    fn unterminated_string_reports_l0007() {
        let (t, errs) = lex_one("\"abc");
        assert_eq!(t.kind, TokenKind::String);
        assert!(errs);
    }

    #[test]
    fn hex_escape_is_accepted() {
        let (_, errs) = lex_one(r#""\x41""#);
        assert!(!errs);
    }

    #[test]
    fn invalid_hex_escape_reports_l0008() {
        let (_, errs) = lex_one(r#""\xZZ""#);
        assert!(errs);
    }

    #[test]
    fn unicode_escape_braced_form_is_accepted() {
        let (_, errs) = lex_one(r#""\u{1F600}""#);
        assert!(!errs);
    }

    #[test]
    fn unicode_escape_fixed_four_digit_form_is_accepted() {
        let (_, errs) = lex_one(r#""\u0041""#);
        assert!(!errs);
    }

    #[test]
    fn unicode_escape_short_digit_run_reports_l0009() {
        let (_, errs) = lex_one(r#""\u41""#);
        assert!(errs);
    }

    #[test]
    fn multiline_string_keeps_literal_newline() {
        let (t, errs) = lex_one("\"a\nb\"");
        assert_eq!(t.text, "\"a\nb\"");
        assert!(!errs);
    }

    #[test]
    fn raw_string_ignores_escapes() {
        let (t, errs) = lex_one(r##"r"a\nb""##);
        assert!(t.is_raw_string);
        assert_eq!(t.text, r##"r"a\nb""##);
        assert!(!errs);
    }

    #[test]
    fn unterminated_raw_string_reports_l0007() {
        let (t, errs) = lex_one(r#"r"abc"#);
        assert!(t.is_raw_string);
        assert!(errs);
    }
}

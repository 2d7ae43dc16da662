//! Whitespace skipping and line-comment recognition.

use crate::token::{Token, TokenKind};
use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips ASCII whitespace. Comments are not skipped here — they're
    /// surfaced as `Comment` tokens by [`try_lex_comment`](Self::try_lex_comment)
    /// so the parser can attach them to the CST.
    pub(crate) fn skip_whitespace(&mut self) {
        while !self.tracker.is_at_end() && self.tracker.current_char().is_whitespace() {
            let c = self.tracker.current_char();
            self.tracker.advance(c);
        }
    }

    /// If the cursor sits on `//`, consumes the line comment (including the
    /// leading `//` but not the terminating newline) and returns it as a
    /// `Comment` token. Multiline (`/* */`) comments are not supported.
    pub(crate) fn try_lex_comment(&mut self) -> Option<Token> {
        if self.tracker.current_char() != '/' || self.tracker.peek_char(1) != '/' {
            return None;
        }
        let c = self.tracker.current_char();
        self.tracker.advance(c);
        let c = self.tracker.current_char();
        self.tracker.advance(c);
        while !self.tracker.is_at_end() && self.tracker.current_char() != '\n' {
            let c = self.tracker.current_char();
            self.tracker.advance(c);
        }
        Some(self.make_token(TokenKind::Comment))
    }
}

#[cfg(test)]
mod tests {
    use super::super::Lexer;
    use crate::token::TokenKind;
    use zero_diag::DiagnosticEngine;

    #[test]
    fn line_comment_excludes_newline() {
        let mut diagnostics = DiagnosticEngine::new("en_US");
        let mut lexer = Lexer::new("t.zr", "// hi\nlet", &mut diagnostics);
        let comment = lexer.next_token();
        assert_eq!(comment.kind, TokenKind::Comment);
        assert_eq!(comment.text, "// hi");
        let next = lexer.next_token();
        assert_eq!(next.kind, TokenKind::Let);
    }

    #[test]
    fn whitespace_between_tokens_is_skipped() {
        let mut diagnostics = DiagnosticEngine::new("en_US");
        let mut lexer = Lexer::new("t.zr", "  \t\n  let", &mut diagnostics);
        assert_eq!(lexer.next_token().kind, TokenKind::Let);
    }
}
